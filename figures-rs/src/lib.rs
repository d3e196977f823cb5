//! Shape model with a polymorphic [`Shape`](geometry::geo_traits::Shape) capability,
//! three concrete shapes and a handful of operations over collections of them.

/// Geometric primitives, the [`Shape`](geometry::geo_traits::Shape) trait and the [`Figure`](geometry::Figure) sum type
pub mod geometry;

/// Operations over ordered collections of shapes
pub mod collection;

/// Importing and exporting figures from and to an external (serializable) representation
pub mod io;

/// Helper types and functions used throughout the library
pub mod util;

pub const PI: f64 = std::f64::consts::PI;
