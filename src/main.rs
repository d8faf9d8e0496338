use clap::{ArgAction, Parser};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{error, info, warn};
use sensorstat::driver::{self, DriverArgs, Source};
use sensorstat::errors::{Result, UsageError};
use sensorstat::logdate;
use sensorstat::output::OError;
use sensorstat::select::DateRange;
use std::path::PathBuf;
use std::{error, fs, io, process};

/// Check the status of methane sensors
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Folder with log files named DD.MM.YYYY.csv
    #[arg(long, conflicts_with = "file_paths")]
    folder_path: Option<PathBuf>,
    /// Log files to read
    #[arg(long, num_args = 1..)]
    file_paths: Option<Vec<PathBuf>>,
    /// Starting date (DD-MM-YYYY)
    #[arg(long)]
    date_from: Option<String>,
    /// Ending date (DD-MM-YYYY)
    #[arg(long)]
    date_to: Option<String>,
    /// Print the status matrix
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    print_results: bool,
    /// Save the status matrix as a spreadsheet
    #[arg(long, default_value_t = false, action = ArgAction::Set)]
    save_results: bool,
    /// Directory for the spreadsheet
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
    /// Report errors as a JSON file
    #[arg(long)]
    error_file: Option<String>,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn driver_args(args: &Args) -> Result<DriverArgs> {
    let source = Source::new(args.folder_path.clone(), args.file_paths.clone())?;
    let from = match &args.date_from {
        None => None,
        Some(s) => Some(logdate::parse_arg_date(s)?),
    };
    let to = match &args.date_to {
        None => None,
        Some(s) => Some(logdate::parse_arg_date(s)?),
    };
    Ok(DriverArgs {
        source,
        range: DateRange::new(from, to)?,
        print: args.print_results,
        save: args.save_results,
        output_dir: args.output_dir.clone(),
    })
}

fn process(args: &Args) -> Result<()> {
    let driver_args = driver_args(args)?;
    driver::run(&driver_args)?;
    Ok(())
}

fn store_error(error_file: &str, e: &dyn error::Error) -> Result<()> {
    let error = OError {
        error: format!("{e}"),
    };
    let file = fs::File::create(error_file)?;
    let writer = io::BufWriter::new(file);
    serde_json::to_writer(writer, &error)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    match process(&args) {
        Ok(()) => (),
        Err(e) if e.is::<UsageError>() => {
            warn!(target: "sensorstat", "{e} The application is closed.");
        }
        Err(e) => {
            match args.error_file {
                Some(filename) => match store_error(&filename, &*e) {
                    Ok(()) => {
                        info!(target: "sensorstat", "error reported: {e}");
                    }
                    Err(e2) => {
                        error!(target: "sensorstat", "{e}");
                        error!(target: "sensorstat", "{e2}");
                    }
                },
                None => error!(target: "sensorstat", "{e}"),
            }
            process::exit(1);
        }
    }
}
