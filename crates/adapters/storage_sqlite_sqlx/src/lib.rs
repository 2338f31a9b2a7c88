//! # muebles-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the port traits defined in `muebles-app::ports`
//!   (`MuebleRepository`, `CodeGenerator`)
//! - Own the `SQLite` connection pool lifecycle: handlers never open or close
//!   connections, every query borrows one from the pool and hands it back
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `muebles-app` (for port traits) and `muebles-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod code_generator;
mod error;
mod mueble_repo;
mod pool;

pub use code_generator::SqliteCodeGenerator;
pub use error::StorageError;
pub use mueble_repo::SqliteMuebleRepository;
pub use pool::{Config, Database};
