//! Reading log files into one long-format table of readings.

use crate::errors::{self, Result};
use crate::logdate::LogFile;
use chrono::NaiveDate;
use log::debug;
use serde::Deserialize;
use std::fs::File;
use std::io;

/// Number of columns in a log file.
const COLUMNS: usize = 4;

/// One row of a log file, as it appears on disk.
#[derive(Debug, Deserialize)]
struct RawReading {
    name: String,
    description: String,
    time: f64,
    alarm: String,
}

/// One measurement event, stamped with the date of its log file.
#[derive(Clone, Debug, PartialEq)]
pub struct Reading {
    /// Sensor name.
    pub name: String,
    /// Free-text description; carried along but not used.
    pub description: String,
    /// Elapsed measurement time.
    pub time: f64,
    /// Alarm flag as written in the file (`Yes` or `No`).
    pub alarm: String,
    /// Measurement date, taken from the log identifier.
    pub date: NaiveDate,
    /// Log identifier of the source file.
    pub source: String,
    /// Line number within the source file.
    pub line: usize,
}

/// Read one log file. Every row is stamped with `date`.
pub fn read_log<R: io::Read>(reader: R, source: &str, date: NaiveDate) -> Result<Vec<Reading>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|e| csv_error(source, e))?
        .clone();
    if headers.len() != COLUMNS {
        return Err(errors::schema_error(format!(
            "{source}: expected {COLUMNS} columns, found {} in header",
            headers.len()
        )));
    }
    let mut readings = vec![];
    for result in reader.records() {
        let record = result.map_err(|e| csv_error(source, e))?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        let raw: RawReading = record.deserialize(None).map_err(|e| {
            errors::schema_error(format!("{source}, line {line}: {e}"))
        })?;
        if !raw.time.is_finite() {
            return Err(errors::schema_error(format!(
                "{source}, line {line}: elapsed time is not a finite number"
            )));
        }
        readings.push(Reading {
            name: raw.name,
            description: raw.description,
            time: raw.time,
            alarm: raw.alarm,
            date,
            source: source.to_owned(),
            line,
        });
    }
    Ok(readings)
}

fn csv_error(source: &str, e: csv::Error) -> Box<dyn std::error::Error> {
    if e.is_io_error() {
        errors::read_error(format!("{source}: {e}"))
    } else {
        errors::schema_error(format!("{source}: {e}"))
    }
}

/// Read all log files into one table.
///
/// Files are concatenated in the given order,
/// and rows keep their order within each file.
pub fn create_dataset(files: &[LogFile]) -> Result<Vec<Reading>> {
    let mut readings = vec![];
    for f in files {
        let date = f.date()?;
        let file = File::open(&f.path)
            .map_err(|e| errors::read_error(format!("cannot open {}: {e}", f.path.display())))?;
        let mut rows = read_log(file, &f.id, date)?;
        debug!(target: "sensorstat", "read {}: {} readings", f.path.display(), rows.len());
        readings.append(&mut rows);
    }
    Ok(readings)
}

#[cfg(test)]
mod test {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn read(data: &str) -> Result<Vec<Reading>> {
        read_log(data.as_bytes(), "01.01.2023.csv", ymd(2023, 1, 1))
    }

    #[test]
    fn read_log_basic() {
        let data = "\
Name,Description,Time,Alarm
Sensor1,,10,No
Sensor 12, north shaft ,2.5,Yes
";
        let readings = read(data).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].name, "Sensor1");
        assert_eq!(readings[0].description, "");
        assert_eq!(readings[0].time, 10.0);
        assert_eq!(readings[0].alarm, "No");
        assert_eq!(readings[0].date, ymd(2023, 1, 1));
        assert_eq!(readings[0].source, "01.01.2023.csv");
        assert_eq!(readings[0].line, 2);
        assert_eq!(readings[1].name, "Sensor 12");
        assert_eq!(readings[1].description, "north shaft");
        assert_eq!(readings[1].time, 2.5);
        assert_eq!(readings[1].alarm, "Yes");
        assert_eq!(readings[1].line, 3);
    }

    #[test]
    fn read_log_header_only() {
        let readings = read("a,b,c,d\n").unwrap();
        assert!(readings.is_empty());
    }

    #[test]
    fn read_log_header_names_ignored() {
        let readings = read("x,y,z,w\nS1,d,1,No\n").unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].name, "S1");
    }

    #[test]
    fn read_log_wrong_header() {
        let e = read("Name,Time,Alarm\nS1,1,No\n").unwrap_err();
        assert!(e.downcast_ref::<errors::SchemaError>().is_some());
    }

    #[test]
    fn read_log_short_row() {
        let e = read("Name,Description,Time,Alarm\nS1,1,No\n").unwrap_err();
        assert!(e.downcast_ref::<errors::SchemaError>().is_some());
    }

    #[test]
    fn read_log_bad_time() {
        let e = read("Name,Description,Time,Alarm\nS1,,soon,No\n").unwrap_err();
        assert!(e.downcast_ref::<errors::SchemaError>().is_some());
        assert!(e.to_string().contains("line 2"));
        let e = read("Name,Description,Time,Alarm\nS1,,NaN,No\n").unwrap_err();
        assert!(e.downcast_ref::<errors::SchemaError>().is_some());
    }

    #[test]
    fn create_dataset_missing_file() {
        let files = vec![LogFile {
            path: "/nonexistent/01.01.2023.csv".into(),
            id: "01.01.2023.csv".to_owned(),
        }];
        let e = create_dataset(&files).unwrap_err();
        assert!(e.downcast_ref::<errors::ReadError>().is_some());
    }
}
