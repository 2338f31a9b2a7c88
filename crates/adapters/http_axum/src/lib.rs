//! # muebles-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON furniture API** under both `/muebles` and
//!   `/api/v1/muebles` with identical behaviour
//! - Map HTTP requests (path code, query filters, JSON body) into
//!   application service calls (driving adapter)
//! - Map application results into `{payload}` / `{message, payload}` bodies
//!   and errors into `{message}` bodies with the matching status
//! - Answer every unmatched path or verb with a static HTML 404 page
//!
//! ## Dependency rule
//! Depends on `muebles-app` (for port traits and services) and `muebles-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
