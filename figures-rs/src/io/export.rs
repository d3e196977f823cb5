use crate::geometry::Figure;
use crate::geometry::primitives::FrameRect;
use crate::io::ext_repr::{ExtFigure, ExtFrame};

/// Converts a figure into its external representation.
pub fn export_figure(figure: &Figure) -> ExtFigure {
    match figure {
        Figure::Circle(c) => ExtFigure::Circle {
            center: c.center.into(),
            radius: c.radius,
        },
        Figure::OffsetCircle(oc) => ExtFigure::OffsetCircle {
            circle_center: oc.circle_center.into(),
            radius: oc.radius,
            shape_center: oc.shape_center.into(),
        },
        Figure::Rectangle(r) => ExtFigure::Rectangle {
            center: r.center.into(),
            width: r.width,
            height: r.height,
        },
    }
}

pub fn export_frame(frame: &FrameRect) -> ExtFrame {
    ExtFrame {
        center: frame.center.into(),
        width: frame.width,
        height: frame.height,
    }
}
