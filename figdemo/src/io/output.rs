use std::io::Write;

use drills::matrix::Analysis;
use figures_rs::collection::{overall_frame, total_area};
use figures_rs::geometry::Figure;
use figures_rs::geometry::geo_traits::Shape;
use figures_rs::io::export_frame;
use figures_rs::io::ext_repr::ExtFrame;
use serde::{Deserialize, Serialize};

use crate::config::DemoConfig;

/// Area and frame of a single figure
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FigureReport {
    /// 1-based position of the figure in the scene
    pub index: usize,
    pub kind: String,
    pub area: f64,
    pub frame: ExtFrame,
}

/// Snapshot of a scene: every figure, the total area and the overall frame
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SceneReport {
    pub figures: Vec<FigureReport>,
    pub total_area: f64,
    pub overall_frame: ExtFrame,
}

impl SceneReport {
    pub fn new(figures: &[Figure]) -> Self {
        SceneReport {
            figures: figures
                .iter()
                .enumerate()
                .map(|(i, f)| FigureReport {
                    index: i + 1,
                    kind: f.kind().to_string(),
                    area: f.area(),
                    frame: export_frame(&f.frame()),
                })
                .collect(),
            total_area: total_area(figures),
            overall_frame: export_frame(&overall_frame(figures)),
        }
    }

    pub fn write(&self, out: &mut impl Write, decimals: usize) -> std::io::Result<()> {
        for figure in &self.figures {
            writeln!(out, "Shape {} ({}):", figure.index, figure.kind)?;
            writeln!(out, "Area: {:.*}", decimals, figure.area)?;
            writeln!(
                out,
                "Frame rectangle: {}",
                fmt_frame(&figure.frame, decimals)
            )?;
        }
        writeln!(out)?;
        writeln!(out, "Total area: {:.*}", decimals, self.total_area)?;
        writeln!(
            out,
            "Overall frame rectangle: {}",
            fmt_frame(&self.overall_frame, decimals)
        )
    }
}

fn fmt_frame(frame: &ExtFrame, decimals: usize) -> String {
    let (x, y) = frame.center;
    format!(
        "center ({x:.decimals$}, {y:.decimals$}), width: {:.decimals$}, height: {:.decimals$}",
        frame.width, frame.height
    )
}

/// Everything the shape scene demo produced, written to the report file
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShapesOutput {
    pub config: DemoConfig,
    pub before: SceneReport,
    pub pivot: (f64, f64),
    pub factor: f64,
    pub after: SceneReport,
}

/// Writes the column with the longest run and the number of saddle points, one per line
pub fn write_analysis(out: &mut impl Write, analysis: &Analysis) -> std::io::Result<()> {
    writeln!(out, "{}", analysis.longest_run_column)?;
    writeln!(out, "{}", analysis.saddle_points)
}
