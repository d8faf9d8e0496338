use crate::dataset::Reading;
use crate::logdate::LogFile;
use crate::output;
use itertools::Itertools;
use log::info;
use std::collections::HashSet;

pub fn file_statistics(files: &[LogFile]) {
    let dates = files
        .iter()
        .filter_map(|f| f.date().ok())
        .sorted()
        .dedup()
        .collect_vec();
    info!(target: "sensorstat", "files: {}", files.len());
    info!(target: "sensorstat", "dates: {}", output::pretty_dates(&dates));
}

pub fn statistics(readings: &[Reading]) {
    let sensors: HashSet<&str> = readings.iter().map(|r| r.name.as_str()).collect();
    let alarms = readings.iter().filter(|r| r.alarm == "Yes").count();
    info!(target: "sensorstat", "readings: {}", readings.len());
    info!(target: "sensorstat", "distinct sensors: {}", sensors.len());
    info!(target: "sensorstat", "readings with alarm: {}", alarms);
    let times = readings.iter().map(|r| r.time).minmax_by(f64::total_cmp);
    if let Some((lo, hi)) = times.into_option() {
        info!(target: "sensorstat", "measurement times: {lo}–{hi}");
    }
}
