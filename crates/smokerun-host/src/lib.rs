//! Process control for smokerun
//!
//! The [`Host`] trait is the seam between the runner and the operating
//! system: foreground runs, detached daemon spawns, the startup wait, and
//! pattern-based cleanup. [`UnixHost`] is the real implementation;
//! [`MockHost`] records calls for tests.

mod matching;
mod mock;
mod process;
mod traits;

pub use mock::*;
pub use process::*;
pub use traits::*;
