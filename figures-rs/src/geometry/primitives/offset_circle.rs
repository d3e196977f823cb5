use crate::PI;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{FrameRect, Point};
use crate::util::{Diagnostic, diagnostics};

/// A circle whose position is anchored at an interior point (`shape_center`) instead of its own center.
///
/// Area and frame follow the circle. Moving the shape moves the anchor, and scaling dilates
/// the circle around the anchor, so the offset between both centers grows and shrinks with the shape.
#[derive(Clone, Debug, PartialEq)]
pub struct OffsetCircle {
    pub circle_center: Point,
    pub radius: f64,
    /// Logical center, expected to lie strictly inside the circle
    pub shape_center: Point,
}

impl OffsetCircle {
    /// Creates an offset circle, logging a warning for a non-positive `radius` or
    /// a `shape_center` outside of the circle.
    pub fn new(circle_center: Point, radius: f64, shape_center: Point) -> Self {
        let (oc, diags) = Self::new_checked(circle_center, radius, shape_center);
        diagnostics::report(&diags);
        oc
    }

    /// Creates an offset circle and returns it together with everything wrong with it, without logging.
    pub fn new_checked(
        circle_center: Point,
        radius: f64,
        shape_center: Point,
    ) -> (Self, Vec<Diagnostic>) {
        let oc = OffsetCircle {
            circle_center,
            radius,
            shape_center,
        };
        let diags = oc.diagnostics();
        (oc, diags)
    }

    /// Vector from the logical center to the circle center
    pub fn offset(&self) -> Point {
        self.circle_center - self.shape_center
    }
}

impl Shape for OffsetCircle {
    fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }

    fn frame(&self) -> FrameRect {
        FrameRect::new(self.circle_center, 2.0 * self.radius, 2.0 * self.radius)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        let d = Point(dx, dy);
        self.circle_center = self.circle_center + d;
        self.shape_center = self.shape_center + d;
    }

    /// Moves the logical center onto `center`, the circle follows rigidly.
    fn reposition(&mut self, center: Point) {
        let Point(dx, dy) = center - self.shape_center;
        self.translate(dx, dy);
    }

    /// Scales the radius, and the offset of the circle center from the (fixed) logical center.
    fn scale(&mut self, factor: f64) -> Result<(), Diagnostic> {
        diagnostics::check_scale_factor(factor)?;
        self.radius *= factor;
        self.circle_center = self.shape_center + self.offset() * factor;
        Ok(())
    }

    fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diags = vec![];
        diags.extend(diagnostics::check_radius(self.radius));

        let distance = self.shape_center.distance(&self.circle_center);
        let inside = distance < self.radius;
        if !inside {
            diags.push(Diagnostic::CenterOutsideCircle {
                distance,
                radius: self.radius,
            });
        }
        diags
    }
}
