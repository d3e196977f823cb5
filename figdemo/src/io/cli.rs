use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use drills::matrix::Storage;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(
        short,
        long,
        global = true,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "warn"
    )]
    pub log_level: LevelFilter,
    #[command(subcommand)]
    pub exercise: Exercise,
}

#[derive(Subcommand, Debug)]
pub enum Exercise {
    /// Reports on a scene of shapes, scales it about a point read from stdin and reports again
    Shapes {
        /// JSON scene configuration, the built-in scene is used if absent
        #[arg(short, long, value_name = "FILE")]
        config_file: Option<PathBuf>,
        /// Also write both reports to this file as JSON
        #[arg(short, long, value_name = "FILE")]
        report_file: Option<PathBuf>,
    },
    /// Finds the column with the longest run of equal values and counts saddle points
    Matrix {
        #[arg(value_enum)]
        mode: MatrixMode,
        #[arg(value_name = "INPUT")]
        input_file: PathBuf,
        #[arg(value_name = "OUTPUT")]
        output_file: PathBuf,
    },
    /// Reads a line from stdin, prints it without vowels and whether it repeats a character
    Vowels,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatrixMode {
    /// Matrix limited to 10 000 elements
    #[value(name = "1", alias = "bounded")]
    Bounded,
    /// Matrix of any size
    #[value(name = "2", alias = "unbounded")]
    Unbounded,
}

impl From<MatrixMode> for Storage {
    fn from(mode: MatrixMode) -> Self {
        match mode {
            MatrixMode::Bounded => Storage::Bounded,
            MatrixMode::Unbounded => Storage::Unbounded,
        }
    }
}
