//! Pivoting classified readings into a sensor × date status matrix.

use crate::errors::{self, Result};
use crate::logdate;
use crate::status::{ClassifiedReading, Status};
use chrono::NaiveDate;
use itertools::Itertools;
use log::info;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static SENSOR_INDEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// Status of every sensor on every date.
///
/// Rows are sensors, ordered by the number embedded in the sensor name.
/// Columns are dates in chronological order.
/// The matrix is dense: a pair without any reading is [Status::Short].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMatrix {
    pub sensors: Vec<String>,
    pub dates: Vec<NaiveDate>,
    cells: Vec<Vec<Status>>,
}

impl StatusMatrix {
    pub fn row(&self, row: usize) -> &[Status] {
        &self.cells[row]
    }

    /// Column labels, `DD/MM/YYYY`.
    pub fn column_labels(&self) -> Vec<String> {
        self.dates.iter().map(logdate::display_date).collect_vec()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty() || self.dates.is_empty()
    }
}

/// The first run of digits in a sensor name.
pub fn sensor_index(name: &str) -> Result<u64> {
    let digits = SENSOR_INDEX
        .find(name)
        .ok_or_else(|| errors::parse_error(format!("sensor name '{name}' has no number")))?;
    digits
        .as_str()
        .parse()
        .map_err(|e| errors::parse_error(format!("sensor name '{name}': {e}")))
}

/// Distinct values in order of first occurrence, with their positions.
fn first_seen<T, I>(values: I) -> (Vec<T>, HashMap<T, usize>)
where
    T: Clone + Eq + std::hash::Hash,
    I: Iterator<Item = T>,
{
    let mut order = vec![];
    let mut pos = HashMap::new();
    for v in values {
        pos.entry(v.clone()).or_insert_with(|| {
            order.push(v);
            order.len() - 1
        });
    }
    (order, pos)
}

/// Build the status matrix.
///
/// If the same sensor has several readings on the same date, the last one wins.
pub fn build_matrix(classified: &[ClassifiedReading]) -> Result<StatusMatrix> {
    let (sensors, sensor_pos) = first_seen(classified.iter().map(|c| c.name.as_str()));
    let (dates, date_pos) = first_seen(classified.iter().map(|c| c.date));

    let mut cells = vec![vec![Status::Short; dates.len()]; sensors.len()];
    for c in classified {
        cells[sensor_pos[c.name.as_str()]][date_pos[&c.date]] = c.status;
    }

    let keys = sensors
        .iter()
        .map(|name| sensor_index(name))
        .collect::<Result<Vec<_>>>()?;
    let row_order = (0..sensors.len())
        .sorted_by_key(|&i| keys[i])
        .collect_vec();
    let col_order = (0..dates.len())
        .sorted_by_key(|&j| dates[j])
        .collect_vec();

    let matrix = StatusMatrix {
        sensors: row_order.iter().map(|&i| sensors[i].to_owned()).collect_vec(),
        dates: col_order.iter().map(|&j| dates[j]).collect_vec(),
        cells: row_order
            .iter()
            .map(|&i| col_order.iter().map(|&j| cells[i][j]).collect_vec())
            .collect_vec(),
    };
    info!(
        target: "sensorstat",
        "status matrix: {} sensors × {} dates",
        matrix.sensors.len(),
        matrix.dates.len()
    );
    Ok(matrix)
}
