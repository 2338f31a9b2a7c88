//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod muebles;

use axum::Router;
use axum::routing::get;

use muebles_app::ports::{CodeGenerator, MuebleRepository};

use crate::router::not_found;
use crate::state::AppState;

/// Build the furniture sub-router.
///
/// Mounted both at the root and under `/api/v1`. Verbs a path does not
/// support fall through to the HTML 404 page.
pub fn routes<R, G>() -> Router<AppState<R, G>>
where
    R: MuebleRepository + Send + Sync + 'static,
    G: CodeGenerator + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/muebles",
            get(muebles::list::<R, G>)
                .post(muebles::create::<R, G>)
                .fallback(not_found),
        )
        .route(
            "/muebles/{codigo}",
            get(muebles::get::<R, G>)
                .put(muebles::update::<R, G>)
                .delete(muebles::delete::<R, G>)
                .fallback(not_found),
        )
}
