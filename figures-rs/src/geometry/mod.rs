mod figure;

pub mod geo_traits;
pub mod primitives;

#[doc(inline)]
pub use figure::Figure;
