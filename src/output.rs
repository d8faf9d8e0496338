//! Pretty-printing helpers and the error record.

use crate::logdate;
use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Error report, written as JSON if requested.
#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct OError {
    pub error: String,
}

pub fn pretty_date(d: &NaiveDate) -> String {
    logdate::log_date(d)
}

/// A short list of dates for log messages; long lists are abbreviated.
pub fn pretty_dates(dates: &[NaiveDate]) -> String {
    if dates.len() >= 5 {
        pretty_dates(&dates[0..2]) + ", ..., " + &pretty_date(&dates[dates.len() - 1])
    } else {
        dates.iter().map(pretty_date).collect_vec().join(", ")
    }
}
