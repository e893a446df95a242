use stampgrid_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid grid query: {0}")]
    InvalidQuery(#[from] ModelError),
}

/// Outcome of a single-build lookup that found nothing to show.
///
/// The `Display` text is the message shown to the user as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("builder and number parameter missing")]
    MissingParameters,
    #[error("unknown builder")]
    UnknownBuilder,
    #[error("unknown build {0}")]
    UnknownBuild(String),
}
