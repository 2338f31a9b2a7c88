//! Axum router assembly.

use axum::Router;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use muebles_app::ports::{CodeGenerator, MuebleRepository};

use crate::state::AppState;

const NOT_FOUND_PAGE: &str = "<h1>Error 404</h1><h3>La URL indicada no existe en este servidor</h3>";

/// Build the top-level axum [`Router`].
///
/// Serves the furniture routes both at `/` and under `/api/v1`, plus a
/// `/health` probe. Anything else gets the HTML 404 page.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R, G>(state: AppState<R, G>) -> Router
where
    R: MuebleRepository + Send + Sync + 'static,
    G: CodeGenerator + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", crate::api::routes())
        .merge(crate::api::routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

/// Static HTML page for unmatched paths and verbs.
pub(crate) async fn not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}
