//! Classifying readings by their measurement time and alarm flag.

use crate::dataset::Reading;
use crate::errors::{self, Result};
use crate::logdate;
use chrono::NaiveDate;
use itertools::Itertools;
use log::{info, trace};
use std::fmt;

/// Outcome of one measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// Measurement too short (or no measurement at all).
    Short,
    /// Measurement long enough, no alarm.
    Ok,
    /// Measurement long enough, alarm raised.
    Alarm,
}

impl Status {
    pub fn symbol(self) -> char {
        match self {
            Status::Short => '-',
            Status::Ok => '+',
            Status::Alarm => '!',
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A reading reduced to what the status matrix needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedReading {
    pub name: String,
    pub date: NaiveDate,
    pub status: Status,
}

/// Half of the arithmetic mean of all measurement times.
///
/// Returns `None` if there are no readings.
pub fn time_threshold(readings: &[Reading]) -> Option<f64> {
    if readings.is_empty() {
        return None;
    }
    let total: f64 = readings.iter().map(|r| r.time).sum();
    Some(0.5 * total / readings.len() as f64)
}

fn parse_alarm(reading: &Reading) -> Result<bool> {
    match reading.alarm.as_str() {
        "Yes" => Ok(true),
        "No" => Ok(false),
        other => Err(errors::classification_error(format!(
            "{}, line {}: sensor '{}' has alarm flag '{}', expected 'Yes' or 'No'",
            reading.source, reading.line, reading.name, other
        ))),
    }
}

/// Status of one reading, given the threshold.
///
/// A time exactly at the threshold is long enough.
pub fn classify(reading: &Reading, threshold: f64) -> Result<Status> {
    let alarm = parse_alarm(reading)?;
    let status = if reading.time < threshold {
        Status::Short
    } else if alarm {
        Status::Alarm
    } else {
        Status::Ok
    };
    trace!(
        target: "sensorstat",
        "{} {}: time {}, alarm {} -> {}",
        reading.name,
        logdate::log_date(&reading.date),
        reading.time,
        reading.alarm,
        status
    );
    Ok(status)
}

/// Classify all readings, keeping their order.
pub fn classify_readings(readings: Vec<Reading>) -> Result<Vec<ClassifiedReading>> {
    let threshold = match time_threshold(&readings) {
        Some(threshold) => threshold,
        None => return Ok(vec![]),
    };
    info!(target: "sensorstat", "time threshold: {threshold:.3}");
    readings
        .into_iter()
        .map(|r| {
            let status = classify(&r, threshold)?;
            Ok(ClassifiedReading {
                name: r.name,
                date: r.date,
                status,
            })
        })
        .collect::<Result<Vec<_>>>()
        .inspect(|classified| {
            let counts = classified.iter().counts_by(|c| c.status);
            info!(
                target: "sensorstat",
                "statuses: {} ok, {} short, {} alarm",
                counts.get(&Status::Ok).unwrap_or(&0),
                counts.get(&Status::Short).unwrap_or(&0),
                counts.get(&Status::Alarm).unwrap_or(&0),
            );
        })
}
