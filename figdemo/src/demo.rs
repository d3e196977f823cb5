use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use drills::matrix::{Matrix, Storage};
use drills::text::{has_adjacent_repeat, remove_vowels};
use figures_rs::collection::scale_about;
use figures_rs::geometry::primitives::Point;
use figures_rs::io::import_figures;
use itertools::Itertools;
use log::info;

use crate::config::DemoConfig;
use crate::io::output::{SceneReport, ShapesOutput, write_analysis};
use crate::io::{TokenReader, read_line};

/// Builds the scene described by `config`, reports on it, scales it about the pivot and factor read
/// from `input` and reports again.
///
/// Malformed input aborts before anything is scaled or reported a second time.
pub fn run_shapes(
    config: &DemoConfig,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<ShapesOutput> {
    let mut figures = import_figures(&config.figures)?;
    info!(
        "[DEMO] scene of {} figures: {}",
        figures.len(),
        figures.iter().map(|f| f.kind()).join(", ")
    );

    let before = SceneReport::new(&figures);
    writeln!(out, "=== Before scaling ===")?;
    writeln!(out)?;
    before.write(out, config.decimals)?;

    writeln!(out)?;
    writeln!(out, "=== Scaling ===")?;
    writeln!(out)?;

    let mut tokens = TokenReader::new(input);

    write!(out, "Enter scaling point (x y): ")?;
    out.flush()?;
    let pivot = {
        let x = tokens.next_f64().context("invalid point input")?;
        let y = tokens.next_f64().context("invalid point input")?;
        Point(x, y)
    };

    write!(out, "Enter scale factor: ")?;
    out.flush()?;
    let factor = tokens.next_f64().context("invalid scale factor input")?;
    writeln!(out)?;

    // a rejected factor has already been reported, the scene stays as it is
    if scale_about(&mut figures, pivot, factor).is_ok() {
        info!("[DEMO] scene scaled by {factor} about {pivot:?}");
    }

    let after = SceneReport::new(&figures);
    writeln!(out)?;
    writeln!(out, "=== After scaling ===")?;
    writeln!(out)?;
    after.write(out, config.decimals)?;

    Ok(ShapesOutput {
        config: config.clone(),
        before,
        pivot: pivot.into(),
        factor,
        after,
    })
}

/// Analyzes the matrix in `input_file` and writes the result to `output_file`.
pub fn run_matrix(storage: Storage, input_file: &Path, output_file: &Path) -> Result<()> {
    let input = fs::read_to_string(input_file)
        .with_context(|| format!("could not open input file: {}", input_file.display()))?;
    let matrix = Matrix::parse(&input, storage)?;
    let analysis = matrix.analyze();
    info!(
        "[MATRIX] {} x {} matrix analyzed: {analysis:?}",
        matrix.rows(),
        matrix.columns()
    );

    let mut file = fs::File::create(output_file)
        .with_context(|| format!("could not open output file: {}", output_file.display()))?;
    write_analysis(&mut file, &analysis)
        .with_context(|| format!("could not write output file: {}", output_file.display()))
}

/// Prints the first line of `input` without vowels, followed by 1 if it repeats a character, 0 otherwise.
pub fn run_vowels(input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let line = read_line(input)?;
    writeln!(out, "{}", remove_vowels(&line))?;
    writeln!(out, "{}", u8::from(has_adjacent_repeat(&line)))?;
    Ok(())
}
