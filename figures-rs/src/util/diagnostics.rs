use std::fmt::{Display, Formatter};

use log::warn;

/// Problems detected in shape parameters.
///
/// Shapes are built permissively: an invalid radius, dimension or center is reported,
/// never rejected. Operations with an invalid argument (a non-positive scale factor)
/// are reported and skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diagnostic {
    NonPositiveRadius { radius: f64 },
    NonPositiveDimensions { width: f64, height: f64 },
    /// The logical center of an offset circle is not strictly inside its circle
    CenterOutsideCircle { distance: f64, radius: f64 },
    NonPositiveScaleFactor { factor: f64 },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::NonPositiveRadius { radius } => {
                write!(f, "radius must be positive, got {radius}")
            }
            Diagnostic::NonPositiveDimensions { width, height } => {
                write!(
                    f,
                    "rectangle dimensions must be positive, got {width} x {height}"
                )
            }
            Diagnostic::CenterOutsideCircle { distance, radius } => {
                write!(
                    f,
                    "shape center must be inside the circle, it lies {distance} from the circle center (radius {radius})"
                )
            }
            Diagnostic::NonPositiveScaleFactor { factor } => {
                write!(f, "scale factor must be positive, got {factor}")
            }
        }
    }
}

impl std::error::Error for Diagnostic {}

/// Logs every diagnostic as a warning.
pub fn report<'a>(diagnostics: impl IntoIterator<Item = &'a Diagnostic>) {
    for d in diagnostics {
        warn!("{d}");
    }
}

pub fn check_radius(radius: f64) -> Option<Diagnostic> {
    (radius <= 0.0).then_some(Diagnostic::NonPositiveRadius { radius })
}

pub fn check_dimensions(width: f64, height: f64) -> Option<Diagnostic> {
    (width <= 0.0 || height <= 0.0).then_some(Diagnostic::NonPositiveDimensions { width, height })
}

/// Validates a scale factor. A rejected factor is logged before being returned.
pub fn check_scale_factor(factor: f64) -> Result<(), Diagnostic> {
    match factor > 0.0 {
        true => Ok(()),
        false => {
            let d = Diagnostic::NonPositiveScaleFactor { factor };
            warn!("{d}");
            Err(d)
        }
    }
}
