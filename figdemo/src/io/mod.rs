use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, bail, ensure};
use log::{LevelFilter, info};
use serde::Serialize;

use crate::EPOCH;
use crate::config::DemoConfig;

pub mod cli;
pub mod output;

pub fn read_config(path: &Path) -> Result<DemoConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect config file format")
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open report file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write report file: {}", path.display()))?;

    info!("report written to {}", path.display());
    Ok(())
}

/// Reads whitespace separated tokens, pulling in lines only when needed
/// so that prompts and answers can be interleaved.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, `None` at the end of the input
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Next token as a finite real number
    pub fn next_f64(&mut self) -> Result<f64> {
        let Some(token) = self.next_token()? else {
            bail!("unexpected end of input");
        };
        let value: f64 = token
            .parse()
            .with_context(|| format!("not a number: {token:?}"))?;
        ensure!(value.is_finite(), "not a finite number: {token:?}");
        Ok(value)
    }
}

/// Reads a single line, without its line terminator.
/// Fails if there is no input at all or if the line is empty.
pub fn read_line(mut reader: impl BufRead) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line).context("could not read input")? == 0 {
        bail!("no input provided");
    }
    let line = line.trim_end_matches(['\n', '\r']);
    ensure!(!line.is_empty(), "empty line");
    Ok(line.to_owned())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    LazyLock::force(&EPOCH);
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        // stdout carries the reports
        .chain(std::io::stderr())
        .apply()
        .context("could not initialize logger")?;
    info!("time: {}", jiff::Timestamp::now());
    Ok(())
}
