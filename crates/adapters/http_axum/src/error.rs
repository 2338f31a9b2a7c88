//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use muebles_domain::error::MueblesError;

const MISSING_DATA: &str = "Faltan datos relevantes";
const NOT_FOUND: &str = "El código no corresponde a un mueble registrado";
const SERVER_ERROR: &str = "Se ha generado un error en el servidor";

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
}

/// Maps [`MueblesError`] to an HTTP response with appropriate status code.
///
/// Unknown codes are reported as `400`, like missing fields. Storage failures
/// are logged and hidden behind a generic `500`.
#[derive(Debug)]
pub struct ApiError(MueblesError);

impl From<MueblesError> for ApiError {
    fn from(err: MueblesError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            MueblesError::Validation(err) => {
                tracing::debug!(error = %err, "rejected request");
                (StatusCode::BAD_REQUEST, MISSING_DATA)
            }
            MueblesError::NotFound(err) => {
                tracing::debug!(error = %err, "unknown code");
                (StatusCode::BAD_REQUEST, NOT_FOUND)
            }
            MueblesError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR)
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
