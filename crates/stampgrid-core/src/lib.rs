//! Grid assembly over a CI status backend.
//!
//! [`assemble_grid`] picks the most recent distinct source stamps seen across all builders
//! and aligns each builder's history against them. Everything reads through the
//! [`StatusBackend`] trait; [`StatusStore`] is the in-memory implementation.

pub mod error;
pub use error::{CoreError, LookupError};

mod backend;
pub use backend::StatusBackend;

mod history;
pub use history::BuildHistory;

pub mod state;
pub use state::StatusStore;

pub mod grid;
pub use grid::{Grid, GridRow, StampRow, assemble_grid};

mod summary;
pub use summary::builder_summary;

mod lookup;
pub use lookup::{BuildStatusView, build_status};
