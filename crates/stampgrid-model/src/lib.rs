//! Data types shared by the grid assembly core and its presentation adapters.
//!
//! Everything here is a plain value: builders, builds and source stamps are snapshots
//! copied out of a status backend and never hold references back into it.

mod domain;
pub use domain::*;

mod error;
pub use error::ModelError;
