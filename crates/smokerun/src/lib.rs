//! Runner and selection logic for the smokerun binary

pub mod runner;
pub mod selection;

pub use runner::Runner;
pub use selection::Selection;
