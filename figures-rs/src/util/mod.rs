/// Set of functions used throughout assure the correctness of the library.
pub mod assertions;

/// Validation of shape parameters and the warnings they produce
pub mod diagnostics;

mod fpa;

#[doc(inline)]
pub use diagnostics::Diagnostic;
#[doc(inline)]
pub use fpa::FPA;
