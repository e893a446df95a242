use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Single-build lookup found nothing; the message is shown to the user verbatim.
    #[error(transparent)]
    BuildNotFound(#[from] stampgrid_core::LookupError),

    #[error("core error: {0}")]
    Core(#[from] stampgrid_core::CoreError),
}
