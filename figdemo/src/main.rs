use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser as ClapParser;
use figdemo::config::DemoConfig;
use figdemo::demo;
use figdemo::io;
use figdemo::io::cli::{Cli, Exercise};
use log::info;

/// Exit status for a malformed command line (unknown mode, missing arguments)
const USAGE_FAILURE: u8 = 1;
/// Exit status for a matrix that could not be read, parsed or stored
const MATRIX_FAILURE: u8 = 2;
/// Exit status for every other runner failure
const FAILURE: u8 = 1;

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures
            return match err.use_stderr() {
                true => ExitCode::from(USAGE_FAILURE),
                false => ExitCode::SUCCESS,
            };
        }
    };
    if let Err(err) = io::init_logger(args.log_level) {
        eprintln!("Error: {err:?}");
        return ExitCode::from(FAILURE);
    }

    let (result, failure) = match args.exercise {
        Exercise::Shapes {
            config_file,
            report_file,
        } => (main_shapes(config_file, report_file), FAILURE),
        Exercise::Matrix {
            mode,
            input_file,
            output_file,
        } => (
            demo::run_matrix(mode.into(), &input_file, &output_file),
            MATRIX_FAILURE,
        ),
        Exercise::Vowels => (
            demo::run_vowels(std::io::stdin().lock(), &mut std::io::stdout()),
            FAILURE,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(failure)
        }
    }
}

fn main_shapes(config_file: Option<PathBuf>, report_file: Option<PathBuf>) -> Result<()> {
    let config = match config_file {
        None => {
            info!("[MAIN] No config file provided, using the built-in scene");
            DemoConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("Successfully parsed DemoConfig: {config:?}");

    let output = demo::run_shapes(&config, std::io::stdin().lock(), &mut std::io::stdout())?;

    if let Some(report_file) = report_file {
        io::write_json(&output, &report_file)?;
    }
    Ok(())
}
