//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`MueblesError`]
//! via `#[from]` (or an explicit `From` impl for storage failures).

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum MueblesError {
    /// Input failed a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// `nombre` was missing or blank.
    #[error("name is required")]
    MissingName,

    /// `precio` was missing or zero.
    #[error("price is required")]
    MissingPrice,

    /// `precio` was not a finite number.
    #[error("price must be a finite number, got {0}")]
    InvalidPrice(String),

    /// `categoria` was missing or blank.
    #[error("category is required")]
    MissingCategory,

    /// The request body could not be read as a record.
    #[error("malformed body: {0}")]
    MalformedBody(String),
}

/// A lookup by identifier matched nothing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_muebles_error() {
        let err: MueblesError = ValidationError::MissingName.into();
        assert!(matches!(
            err,
            MueblesError::Validation(ValidationError::MissingName)
        ));
    }

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Mueble",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Mueble 42 not found");
    }
}
