//! Main entry point: from log files to a rendered status matrix.

use crate::dataset;
use crate::errors::{self, Result};
use crate::information;
use crate::logdate::LogFile;
use crate::matrix::{self, StatusMatrix};
use crate::report;
use crate::select::{self, DateRange};
use crate::status;
use itertools::Itertools;
use log::{info, warn};
use std::path::PathBuf;

/// Where the log files come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// All files named `DD.MM.YYYY.csv` in this directory.
    Directory(PathBuf),
    /// Exactly these files; each file name must start with a `DD.MM.YYYY` date.
    Files(Vec<PathBuf>),
}

impl Source {
    /// Exactly one of `dir` and `files` must be given.
    ///
    /// If neither is given, there is nothing to do and the result is a [errors::UsageError].
    pub fn new(dir: Option<PathBuf>, files: Option<Vec<PathBuf>>) -> Result<Source> {
        match (dir, files) {
            (Some(_), Some(_)) => Err(errors::invalid_argument(
                "give either a directory or a list of files, not both".to_owned(),
            )),
            (Some(dir), None) => Ok(Source::Directory(dir)),
            (None, Some(files)) if !files.is_empty() => Ok(Source::Files(files)),
            (None, _) => Err(errors::usage_error_ref("No data to process.")),
        }
    }

    fn log_files(&self) -> Result<Vec<LogFile>> {
        match self {
            Source::Directory(dir) => select::discover(dir),
            Source::Files(paths) => paths.iter().map(|p| LogFile::from_path(p)).collect(),
        }
    }
}

/// What to do?
#[derive(Clone, Debug)]
pub struct DriverArgs {
    /// Log files to consider.
    pub source: Source,

    /// Only log files dated within this range are used.
    pub range: DateRange,

    /// Print the matrix to standard output.
    pub print: bool,

    /// Save the matrix as a spreadsheet.
    pub save: bool,

    /// Where the spreadsheet goes.
    /// Its name is derived from the dates of the log files, see [report::output_filename].
    pub output_dir: PathBuf,
}

/// Everything produced by [calc].
#[derive(Debug)]
pub struct Output {
    /// The log files that were used, in reading order.
    pub files: Vec<LogFile>,
    pub matrix: StatusMatrix,
}

impl Output {
    pub fn spreadsheet_name(&self) -> Result<String> {
        let dates = self.files.iter().map(|f| f.date()).collect::<Result<Vec<_>>>()?;
        Ok(report::output_filename(&dates))
    }
}

/// Select, read, classify and pivot.
///
/// If no readings are found, the matrix is empty.
pub fn calc(args: &DriverArgs) -> Result<Output> {
    let files = select::select_files(args.source.log_files()?, &args.range)?;
    information::file_statistics(&files);
    let readings = dataset::create_dataset(&files)?;
    information::statistics(&readings);
    if readings.is_empty() {
        warn!(target: "sensorstat", "no readings found");
    }
    let classified = status::classify_readings(readings)?;
    let matrix = matrix::build_matrix(&classified)?;
    info!(
        target: "sensorstat",
        "sensors: {}",
        matrix.sensors.iter().join(", ")
    );
    Ok(Output { files, matrix })
}

/// Calculate and render everything.
///
/// Returns the path of the spreadsheet, if one was written.
/// An empty matrix is printed but never saved.
pub fn run(args: &DriverArgs) -> Result<Option<PathBuf>> {
    let output = calc(args)?;
    if args.print {
        print!("{}", report::console_table(&output.matrix));
    }
    if !args.save {
        return Ok(None);
    }
    if output.matrix.is_empty() {
        warn!(target: "sensorstat", "empty status matrix, no spreadsheet written");
        return Ok(None);
    }
    let path = args.output_dir.join(output.spreadsheet_name()?);
    report::write_spreadsheet(&output.matrix, &path)?;
    info!(target: "sensorstat", "wrote: {}", path.display());
    Ok(Some(path))
}
