//! Finding log files and restricting them to a date range.

use crate::errors::{self, Result};
use crate::logdate::{self, LogFile};
use chrono::NaiveDate;
use itertools::Itertools;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Inclusive range of measurement dates; either end may be open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<DateRange> {
        if let (Some(a), Some(b)) = (from, to) {
            if a > b {
                return Err(errors::invalid_argument(format!(
                    "start date {} is after end date {}",
                    logdate::log_date(&a),
                    logdate::log_date(&b)
                )));
            }
        }
        Ok(DateRange { from, to })
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.from.is_none_or(|from| from <= *date) && self.to.is_none_or(|to| *date <= to)
    }
}

/// Keep the log files whose dates fall within the range.
///
/// The order of the remaining files is preserved.
/// Every identifier is parsed, even when the range is unbounded,
/// so a malformed identifier is always an error.
pub fn select_files(files: Vec<LogFile>, range: &DateRange) -> Result<Vec<LogFile>> {
    let dates = files.iter().map(|f| f.date()).collect::<Result<Vec<_>>>()?;
    let selected = files
        .into_iter()
        .zip(dates)
        .filter_map(|(f, date)| {
            if range.contains(&date) {
                Some(f)
            } else {
                debug!(target: "sensorstat", "outside date range: {}", f.id);
                None
            }
        })
        .collect_vec();
    info!(target: "sensorstat", "selected files: {}", selected.len());
    Ok(selected)
}

/// All log files in a directory, in the order of their names.
///
/// Only names of the form `DD.MM.YYYY.csv` are considered.
pub fn discover(dir: &Path) -> Result<Vec<LogFile>> {
    let entries = fs::read_dir(dir)
        .map_err(|e| errors::read_error(format!("cannot list {}: {e}", dir.display())))?;
    let mut files = vec![];
    for entry in entries {
        let entry =
            entry.map_err(|e| errors::read_error(format!("cannot list {}: {e}", dir.display())))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) if logdate::is_log_name(name) => files.push(LogFile::from_path(&path)?),
            _ => debug!(target: "sensorstat", "skipping: {}", path.display()),
        }
    }
    files.sort_by(|a, b| a.id.cmp(&b.id));
    info!(target: "sensorstat", "log files in {}: {}", dir.display(), files.len());
    Ok(files)
}
