use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{FrameRect, Point};
use crate::util::{Diagnostic, diagnostics};

/// Axis-aligned rectangle, defined by its center and dimensions
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// Creates a rectangle, logging a warning if either dimension is not positive.
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        let (rect, diags) = Self::new_checked(center, width, height);
        diagnostics::report(&diags);
        rect
    }

    pub fn new_checked(center: Point, width: f64, height: f64) -> (Self, Vec<Diagnostic>) {
        let rect = Rectangle {
            center,
            width,
            height,
        };
        let diags = rect.diagnostics();
        (rect, diags)
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn frame(&self) -> FrameRect {
        FrameRect::new(self.center, self.width, self.height)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.center = self.center + Point(dx, dy);
    }

    fn reposition(&mut self, center: Point) {
        self.center = center;
    }

    fn scale(&mut self, factor: f64) -> Result<(), Diagnostic> {
        diagnostics::check_scale_factor(factor)?;
        self.width *= factor;
        self.height *= factor;
        Ok(())
    }

    fn diagnostics(&self) -> Vec<Diagnostic> {
        diagnostics::check_dimensions(self.width, self.height)
            .into_iter()
            .collect()
    }
}
