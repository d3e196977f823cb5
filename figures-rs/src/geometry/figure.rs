use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Circle, FrameRect, OffsetCircle, Point, Rectangle};
use crate::util::Diagnostic;

/// Closed set of all supported shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum Figure {
    Circle(Circle),
    OffsetCircle(OffsetCircle),
    Rectangle(Rectangle),
}

impl Figure {
    /// Human readable name of the variant
    pub fn kind(&self) -> &'static str {
        match self {
            Figure::Circle(_) => "circle",
            Figure::OffsetCircle(_) => "offset circle",
            Figure::Rectangle(_) => "rectangle",
        }
    }

    fn as_shape(&self) -> &dyn Shape {
        match self {
            Figure::Circle(c) => c,
            Figure::OffsetCircle(oc) => oc,
            Figure::Rectangle(r) => r,
        }
    }

    fn as_shape_mut(&mut self) -> &mut dyn Shape {
        match self {
            Figure::Circle(c) => c,
            Figure::OffsetCircle(oc) => oc,
            Figure::Rectangle(r) => r,
        }
    }
}

impl Shape for Figure {
    fn area(&self) -> f64 {
        self.as_shape().area()
    }

    fn frame(&self) -> FrameRect {
        self.as_shape().frame()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.as_shape_mut().translate(dx, dy)
    }

    fn reposition(&mut self, center: Point) {
        self.as_shape_mut().reposition(center)
    }

    fn scale(&mut self, factor: f64) -> Result<(), Diagnostic> {
        self.as_shape_mut().scale(factor)
    }

    fn diagnostics(&self) -> Vec<Diagnostic> {
        self.as_shape().diagnostics()
    }
}

impl From<Circle> for Figure {
    fn from(c: Circle) -> Self {
        Figure::Circle(c)
    }
}

impl From<OffsetCircle> for Figure {
    fn from(oc: OffsetCircle) -> Self {
        Figure::OffsetCircle(oc)
    }
}

impl From<Rectangle> for Figure {
    fn from(r: Rectangle) -> Self {
        Figure::Rectangle(r)
    }
}
