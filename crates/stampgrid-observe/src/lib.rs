//! Logging setup for stampgrid binaries.

mod logger;
pub use logger::*;
