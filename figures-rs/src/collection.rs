use log::debug;

use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{FrameRect, Point};
use crate::util::{Diagnostic, assertions, diagnostics};

/// Scales a whole collection of shapes about `pivot`.
///
/// Every shape is handled independently: it is moved onto the pivot, scaled by `factor`
/// and moved back to its original displacement from the pivot, multiplied by `factor`.
/// The displacement is measured from the center of the shape's frame.
///
/// A non-positive `factor` leaves the collection untouched and is reported as a [`Diagnostic`].
/// If a shape fails to scale, it is put back in place and the error is returned.
pub fn scale_about<S: Shape>(
    shapes: &mut [S],
    pivot: Point,
    factor: f64,
) -> Result<(), Diagnostic> {
    diagnostics::check_scale_factor(factor)?;

    for (i, shape) in shapes.iter_mut().enumerate() {
        let origin = shape.frame().center;
        let displacement = origin - pivot;

        shape.reposition(pivot);
        if let Err(diag) = shape.scale(factor) {
            // a shape that refuses to scale goes back to where it was
            let back = origin - shape.frame().center;
            shape.translate(back.0, back.1);
            return Err(diag);
        }
        shape.reposition(pivot + displacement * factor);

        debug!(
            "[SCALE] shape {i} scaled by {factor} about {pivot:?}, frame: {:?}",
            shape.frame()
        );
    }
    Ok(())
}

/// Sum of the areas of all shapes, 0 for an empty collection.
pub fn total_area<S: Shape>(shapes: &[S]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

/// Smallest axis-aligned rectangle containing the frames of all shapes.
/// An empty collection yields [`FrameRect::zero`].
pub fn overall_frame<S: Shape>(shapes: &[S]) -> FrameRect {
    let bounds = shapes
        .iter()
        .map(|s| s.frame())
        .map(|f| (f.x_min(), f.y_min(), f.x_max(), f.y_max()))
        .reduce(|(ax_min, ay_min, ax_max, ay_max), (bx_min, by_min, bx_max, by_max)| {
            (
                f64::min(ax_min, bx_min),
                f64::min(ay_min, by_min),
                f64::max(ax_max, bx_max),
                f64::max(ay_max, by_max),
            )
        });

    let frame = match bounds {
        None => FrameRect::zero(),
        Some((x_min, y_min, x_max, y_max)) => FrameRect::from_bounds(x_min, y_min, x_max, y_max),
    };

    debug_assert!(assertions::frame_encloses_all(&frame, shapes));
    frame
}
