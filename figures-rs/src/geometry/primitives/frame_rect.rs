use crate::geometry::primitives::Point;
use crate::util::FPA;

/// Relative tolerance used by [`FrameRect::almost_encloses`]
const ENCLOSE_TOLERANCE: f64 = 1e-9;

/// Axis-aligned rectangle described by its dimensions and center.
/// Used as the bounding box ("frame") of every [`Shape`](crate::geometry::geo_traits::Shape).
#[derive(Clone, Debug, PartialEq, Copy, Default)]
pub struct FrameRect {
    pub width: f64,
    pub height: f64,
    pub center: Point,
}

impl FrameRect {
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        FrameRect {
            width,
            height,
            center,
        }
    }

    /// The empty frame: no extent, centered at the origin.
    pub fn zero() -> Self {
        FrameRect::default()
    }

    /// Frame spanning `[x_min, x_max] x [y_min, y_max]`
    pub fn from_bounds(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        let width = x_max - x_min;
        let height = y_max - y_min;
        FrameRect {
            width,
            height,
            center: Point(x_min + width / 2.0, y_min + height / 2.0),
        }
    }

    pub fn x_min(&self) -> f64 {
        self.center.0 - self.width / 2.0
    }

    pub fn x_max(&self) -> f64 {
        self.center.0 + self.width / 2.0
    }

    pub fn y_min(&self) -> f64 {
        self.center.1 - self.height / 2.0
    }

    pub fn y_max(&self) -> f64 {
        self.center.1 + self.height / 2.0
    }

    /// Returns the smallest frame that contains both `a` and `b`.
    pub fn bounding_frame(a: FrameRect, b: FrameRect) -> FrameRect {
        let x_min = f64::min(a.x_min(), b.x_min());
        let y_min = f64::min(a.y_min(), b.y_min());
        let x_max = f64::max(a.x_max(), b.x_max());
        let y_max = f64::max(a.y_max(), b.y_max());
        FrameRect::from_bounds(x_min, y_min, x_max, y_max)
    }

    /// Whether `other` lies within `self`, with a tolerance for floating point precision.
    /// The tolerance grows with the magnitude of the coordinates involved.
    pub fn almost_encloses(&self, other: &FrameRect) -> bool {
        let magnitude = [self.x_min(), self.y_min(), self.x_max(), self.y_max()]
            .into_iter()
            .map(f64::abs)
            .fold(1.0, f64::max);
        let tol = ENCLOSE_TOLERANCE * magnitude;

        self.x_min() - tol <= other.x_min()
            && self.y_min() - tol <= other.y_min()
            && self.x_max() + tol >= other.x_max()
            && self.y_max() + tol >= other.y_max()
    }

    /// Equality with a tolerance for floating point precision.
    pub fn almost_eq(&self, other: &FrameRect) -> bool {
        FPA(self.width) == FPA(other.width)
            && FPA(self.height) == FPA(other.height)
            && self.center.almost_eq(&other.center)
    }
}
