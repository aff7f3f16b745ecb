//! Company-wide solvency view.

pub mod types;

pub use types::SolvencySnapshot;
