//! Log identifiers and the date formats used with them.
//!
//! Every log file is named after the day it covers, e.g. `01.01.2023.csv`.
//! The file name doubles as the identifier of the log and as the key for its date.

use crate::errors::{self, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Date format of log identifiers.
const LOG_DATE: &str = "%d.%m.%Y";

/// Date format of matrix column labels.
const DISPLAY_DATE: &str = "%d/%m/%Y";

/// Date format of command line arguments.
const ARG_DATE: &str = "%d-%m-%Y";

static LOG_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}\.csv$").expect("valid regex"));

/// A log file together with its identifier (the final path component).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogFile {
    pub path: PathBuf,
    pub id: String,
}

impl LogFile {
    pub fn from_path(path: &Path) -> Result<LogFile> {
        let id = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| errors::parse_error(format!("no file name in '{}'", path.display())))?;
        Ok(LogFile {
            path: path.to_owned(),
            id: id.to_owned(),
        })
    }

    /// The measurement date encoded in the identifier.
    pub fn date(&self) -> Result<NaiveDate> {
        parse_log_id(&self.id)
    }
}

/// Does this file name look like a log file?
pub fn is_log_name(name: &str) -> bool {
    LOG_NAME.is_match(name)
}

/// Parse the date out of a log identifier of the form `DD.MM.YYYY.<ext>`.
pub fn parse_log_id(id: &str) -> Result<NaiveDate> {
    let stem = match id.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => {
            return Err(errors::parse_error(format!(
                "log identifier '{id}' has no extension"
            )));
        }
    };
    NaiveDate::parse_from_str(stem, LOG_DATE)
        .map_err(|e| errors::parse_error(format!("log identifier '{id}': {e}")))
}

/// Parse a date given on the command line as `DD-MM-YYYY`.
pub fn parse_arg_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, ARG_DATE)
        .map_err(|e| errors::parse_error(format!("date '{s}', expected DD-MM-YYYY: {e}")))
}

/// `DD.MM.YYYY`, as used in log identifiers and output file names.
pub fn log_date(date: &NaiveDate) -> String {
    date.format(LOG_DATE).to_string()
}

/// `DD/MM/YYYY`, as used in matrix column labels.
pub fn display_date(date: &NaiveDate) -> String {
    date.format(DISPLAY_DATE).to_string()
}
