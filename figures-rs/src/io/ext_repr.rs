use serde::{Deserialize, Serialize};

/// External representation of a [`Figure`](crate::geometry::Figure).
/// Points are represented as `[x, y]` pairs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtFigure {
    /// Circle around `center`
    Circle { center: (f64, f64), radius: f64 },
    /// Circle around `circle_center`, anchored at the interior point `shape_center`
    OffsetCircle {
        circle_center: (f64, f64),
        radius: f64,
        shape_center: (f64, f64),
    },
    /// Axis-aligned rectangle around `center`
    Rectangle {
        center: (f64, f64),
        width: f64,
        height: f64,
    },
}

/// External representation of a [`FrameRect`](crate::geometry::primitives::FrameRect).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtFrame {
    pub center: (f64, f64),
    pub width: f64,
    pub height: f64,
}
