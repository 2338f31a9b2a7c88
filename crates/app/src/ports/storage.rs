//! Storage port — repository trait for the furniture collection.

use std::future::Future;

use muebles_domain::error::MueblesError;
use muebles_domain::filter::ListFilter;
use muebles_domain::id::Code;
use muebles_domain::mueble::{Mueble, MuebleFields};

/// Repository for persisting and querying [`Mueble`]s.
///
/// Every call acquires whatever connection it needs and releases it before the
/// returned future completes, on success and on failure.
pub trait MuebleRepository {
    /// List the records matching `filter`, ordered as [`ListFilter::order`] says.
    fn find(
        &self,
        filter: ListFilter,
    ) -> impl Future<Output = Result<Vec<Mueble>, MueblesError>> + Send;

    /// Get a record by its code.
    fn get_by_code(
        &self,
        code: Code,
    ) -> impl Future<Output = Result<Option<Mueble>, MueblesError>> + Send;

    /// Insert a new record.
    fn create(&self, mueble: Mueble) -> impl Future<Output = Result<Mueble, MueblesError>> + Send;

    /// Replace name, price and category of an existing record.
    ///
    /// Returns `None` when no record has `code`.
    fn update(
        &self,
        code: Code,
        fields: MuebleFields,
    ) -> impl Future<Output = Result<Option<Mueble>, MueblesError>> + Send;

    /// Delete a record by its code.
    ///
    /// Returns `false` when no record has `code`.
    fn delete(&self, code: Code) -> impl Future<Output = Result<bool, MueblesError>> + Send;
}
