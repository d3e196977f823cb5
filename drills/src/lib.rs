/// Integer matrices: longest runs of equal values per column and saddle points
pub mod matrix;

/// Character level string utilities
pub mod text;
