use async_trait::async_trait;

use crate::{
    error::ApiError,
    request::GridRequest,
    response::{BuildStatusResponse, GridResponse, TransposedGridResponse},
};

/// Grid page API handler.
///
/// This trait abstracts the backend, allowing users to:
/// - Use the provided `StatusApiAdapter` over any `StatusBackend`
/// - Implement custom handlers (caching, access control, remote status sources)
#[async_trait]
pub trait ApiHandler: Send + Sync + 'static {
    /// Builders as rows, stamps as columns.
    async fn grid(&self, req: GridRequest) -> Result<GridResponse, ApiError>;

    /// Stamps as rows, builders as columns.
    async fn transposed_grid(&self, req: GridRequest) -> Result<TransposedGridResponse, ApiError>;

    /// One build by builder name and number, both as received from the caller.
    async fn build_status(
        &self,
        builder: Option<String>,
        number: Option<String>,
    ) -> Result<BuildStatusResponse, ApiError>;
}
