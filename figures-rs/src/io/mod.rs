/// Serializable representations of figures and frames
pub mod ext_repr;

pub mod export;
pub mod import;

#[doc(inline)]
pub use export::{export_figure, export_frame};
#[doc(inline)]
pub use import::{import_figure, import_figures};
