use crate::geometry::primitives::FrameRect;
use crate::geometry::primitives::Point;
use crate::util::Diagnostic;

/// Trait for shared properties and mutations of shapes.
pub trait Shape {
    /// Area of the interior of the shape
    fn area(&self) -> f64;

    /// Axis-aligned bounding rectangle of the shape
    fn frame(&self) -> FrameRect;

    /// Shifts the shape by `dx` horizontally and `dy` vertically.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Moves the shape so that its position anchor lands on `center`.
    /// The anchor is shape specific, see the implementors.
    fn reposition(&mut self, center: Point);

    /// Scales the size of the shape by `factor`.
    ///
    /// A non-positive `factor` is rejected: the shape is left untouched and the
    /// reason is returned (and logged) as a [`Diagnostic`].
    fn scale(&mut self, factor: f64) -> Result<(), Diagnostic>;

    /// Everything wrong with the current state of the shape.
    /// Shapes are constructed permissively, so this can be non-empty.
    fn diagnostics(&self) -> Vec<Diagnostic>;
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn area(&self) -> f64 {
        (**self).area()
    }

    fn frame(&self) -> FrameRect {
        (**self).frame()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        (**self).translate(dx, dy)
    }

    fn reposition(&mut self, center: Point) {
        (**self).reposition(center)
    }

    fn scale(&mut self, factor: f64) -> Result<(), Diagnostic> {
        (**self).scale(factor)
    }

    fn diagnostics(&self) -> Vec<Diagnostic> {
        (**self).diagnostics()
    }
}
