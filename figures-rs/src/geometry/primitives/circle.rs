use crate::PI;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{FrameRect, Point};
use crate::util::{Diagnostic, diagnostics};

/// Geometric primitive representing a circle
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    /// Creates a circle, logging a warning if `radius` is not positive.
    pub fn new(center: Point, radius: f64) -> Self {
        let (circle, diags) = Self::new_checked(center, radius);
        diagnostics::report(&diags);
        circle
    }

    /// Creates a circle and returns it together with everything wrong with it, without logging.
    pub fn new_checked(center: Point, radius: f64) -> (Self, Vec<Diagnostic>) {
        let circle = Circle { center, radius };
        let diags = circle.diagnostics();
        (circle, diags)
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }

    fn frame(&self) -> FrameRect {
        FrameRect::new(self.center, 2.0 * self.radius, 2.0 * self.radius)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.center = self.center + Point(dx, dy);
    }

    fn reposition(&mut self, center: Point) {
        self.center = center;
    }

    fn scale(&mut self, factor: f64) -> Result<(), Diagnostic> {
        diagnostics::check_scale_factor(factor)?;
        self.radius *= factor;
        Ok(())
    }

    fn diagnostics(&self) -> Vec<Diagnostic> {
        diagnostics::check_radius(self.radius).into_iter().collect()
    }
}
