use std::sync::Arc;

use async_trait::async_trait;
use stampgrid_core::{StatusBackend, assemble_grid, build_status};
use tracing::{debug, instrument};

use crate::{
    error::ApiError,
    handler::ApiHandler,
    request::GridRequest,
    response::{BuildStatusResponse, GridResponse, TransposedGridResponse},
};

/// Adapter that serves grid pages straight from a [`StatusBackend`].
pub struct StatusApiAdapter<B: ?Sized> {
    backend: Arc<B>,
}

impl<B> StatusApiAdapter<B>
where
    B: StatusBackend + ?Sized,
{
    /// Create a new adapter reading from `backend`.
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl<B> ApiHandler for StatusApiAdapter<B>
where
    B: StatusBackend + ?Sized + 'static,
{
    #[instrument(level = "debug", skip(self, req), fields(width = req.query.width))]
    async fn grid(&self, req: GridRequest) -> Result<GridResponse, ApiError> {
        let grid = assemble_grid(self.backend.as_ref(), &req.query)?;
        Ok(GridResponse::new(&req, grid))
    }

    #[instrument(level = "debug", skip(self, req), fields(length = req.query.width))]
    async fn transposed_grid(&self, req: GridRequest) -> Result<TransposedGridResponse, ApiError> {
        let grid = assemble_grid(self.backend.as_ref(), &req.query)?;
        Ok(TransposedGridResponse::new(&req, grid))
    }

    async fn build_status(
        &self,
        builder: Option<String>,
        number: Option<String>,
    ) -> Result<BuildStatusResponse, ApiError> {
        let view = build_status(self.backend.as_ref(), builder.as_deref(), number.as_deref())
            .inspect_err(|e| debug!(error = %e, "build lookup failed"))?;
        Ok(view.into())
    }
}
