//! # muebles-domain
//!
//! Pure domain model for the muebles furniture catalogue.
//!
//! ## Responsibilities
//! - Foundational types: the numeric record [`Code`](id::Code), error conventions
//! - Define **Muebles** (furniture records: code, name, price, category)
//! - Define **List filters** (category / minimum price / maximum price) and the
//!   ordering each one implies
//! - Contain all invariant enforcement (required fields, immutable code)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod filter;
pub mod id;
pub mod mueble;
