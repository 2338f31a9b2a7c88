//! Shared application state for axum handlers.

use std::sync::Arc;

use muebles_app::ports::{CodeGenerator, MuebleRepository};
use muebles_app::services::mueble_service::MuebleService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and code generator types to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R, G> {
    /// Furniture CRUD service.
    pub mueble_service: Arc<MuebleService<R, G>>,
}

impl<R, G> Clone for AppState<R, G> {
    fn clone(&self) -> Self {
        Self {
            mueble_service: Arc::clone(&self.mueble_service),
        }
    }
}

impl<R, G> AppState<R, G>
where
    R: MuebleRepository + Send + Sync + 'static,
    G: CodeGenerator + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(mueble_service: MuebleService<R, G>) -> Self {
        Self::from_arc(Arc::new(mueble_service))
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    pub fn from_arc(mueble_service: Arc<MuebleService<R, G>>) -> Self {
        Self { mueble_service }
    }
}
