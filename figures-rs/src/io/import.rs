use anyhow::{Result, ensure};
use log::debug;

use crate::geometry::Figure;
use crate::geometry::primitives::{Circle, OffsetCircle, Point, Rectangle};
use crate::io::ext_repr::ExtFigure;

/// Converts the external representation of a figure into an internal one.
///
/// Non-finite coordinates or sizes are rejected, since no geometry can be derived from them.
/// Non-positive sizes and an offset circle anchored outside of its circle are only
/// reported as warnings: the figure is still constructed with the given values.
pub fn import_figure(ext_figure: &ExtFigure) -> Result<Figure> {
    let figure: Figure = match ext_figure {
        ExtFigure::Circle { center, radius } => {
            let center = import_point(*center)?;
            ensure!(radius.is_finite(), "invalid circle radius: {radius}");
            Circle::new(center, *radius).into()
        }
        ExtFigure::OffsetCircle {
            circle_center,
            radius,
            shape_center,
        } => {
            let circle_center = import_point(*circle_center)?;
            let shape_center = import_point(*shape_center)?;
            ensure!(radius.is_finite(), "invalid offset circle radius: {radius}");
            OffsetCircle::new(circle_center, *radius, shape_center).into()
        }
        ExtFigure::Rectangle {
            center,
            width,
            height,
        } => {
            let center = import_point(*center)?;
            ensure!(
                width.is_finite() && height.is_finite(),
                "invalid rectangle dimensions, width: {width}, height: {height}"
            );
            Rectangle::new(center, *width, *height).into()
        }
    };
    debug!("[IMPORT] imported {}: {figure:?}", figure.kind());
    Ok(figure)
}

/// Imports all figures, preserving their order.
pub fn import_figures(ext_figures: &[ExtFigure]) -> Result<Vec<Figure>> {
    ext_figures.iter().map(import_figure).collect()
}

fn import_point((x, y): (f64, f64)) -> Result<Point> {
    let point = Point(x, y);
    ensure!(point.is_finite(), "invalid point: ({x}, {y})");
    Ok(point)
}
