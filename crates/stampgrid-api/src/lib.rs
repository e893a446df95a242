//! Transport-neutral request and response layer for grid pages.
//!
//! A web frontend parses its query string into a [`GridRequest`], calls an [`ApiHandler`]
//! and renders the returned response however it likes.

mod error;
pub use error::ApiError;

mod request;
pub use request::{GridLayout, GridRequest};

mod response;
pub use response::{
    BuildStatusResponse, BuilderRow, GridResponse, StampCells, TransposedGridResponse,
};

mod handler;
pub use handler::ApiHandler;

mod adapter;
pub use adapter::StatusApiAdapter;
