use serde::{Deserialize, Serialize};

use figures_rs::io::ext_repr::ExtFigure;

/// Configuration of the shape scene demo
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DemoConfig {
    /// Figures making up the scene, in the order they are reported
    pub figures: Vec<ExtFigure>,
    /// Number of decimals printed for every number in the text report
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

fn default_decimals() -> usize {
    4
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            figures: vec![
                ExtFigure::Rectangle {
                    center: (10.0, 10.0),
                    width: 5.0,
                    height: 3.0,
                },
                ExtFigure::Circle {
                    center: (5.0, 5.0),
                    radius: 2.0,
                },
                ExtFigure::OffsetCircle {
                    circle_center: (15.0, 15.0),
                    radius: 4.0,
                    shape_center: (14.5, 14.5),
                },
            ],
            decimals: default_decimals(),
        }
    }
}
