//! Mueble service — use-cases for managing the furniture catalogue.

use muebles_domain::error::{MueblesError, NotFoundError};
use muebles_domain::filter::ListFilter;
use muebles_domain::id::Code;
use muebles_domain::mueble::{Mueble, MuebleFields};

use crate::ports::{CodeGenerator, MuebleRepository};

const ENTITY: &str = "Mueble";

/// Application service for furniture CRUD operations.
pub struct MuebleService<R, G> {
    repo: R,
    codes: G,
}

impl<R: MuebleRepository, G: CodeGenerator> MuebleService<R, G> {
    /// Create a new service backed by the given repository and code generator.
    pub fn new(repo: R, codes: G) -> Self {
        Self { repo, codes }
    }

    /// List records matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_muebles(&self, filter: ListFilter) -> Result<Vec<Mueble>, MueblesError> {
        if filter.is_unsatisfiable() {
            tracing::debug!("filter cannot match any record");
            return Ok(Vec::new());
        }
        self.repo.find(filter).await
    }

    /// Look up a record by code, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`MueblesError::NotFound`] when no record with `code` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_mueble(&self, code: Code) -> Result<Mueble, MueblesError> {
        self.repo
            .get_by_code(code)
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Create a new record under a freshly allocated code.
    ///
    /// # Errors
    ///
    /// Returns [`MueblesError::Validation`] if invariants fail (nothing is
    /// allocated or stored in that case), or a storage error.
    #[tracing::instrument(skip(self, fields), fields(name = %fields.name))]
    pub async fn create_mueble(&self, fields: MuebleFields) -> Result<Mueble, MueblesError> {
        fields.validate()?;
        let code = self.codes.next_code().await?;
        let created = self.repo.create(Mueble::new(code, fields)).await?;
        tracing::info!(%code, "mueble created");
        Ok(created)
    }

    /// Replace the name, price and category of an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`MueblesError::Validation`] if invariants fail,
    /// [`MueblesError::NotFound`] when no record with `code` exists, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, fields))]
    pub async fn update_mueble(
        &self,
        code: Code,
        fields: MuebleFields,
    ) -> Result<Mueble, MueblesError> {
        fields.validate()?;
        self.repo
            .update(code, fields)
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Delete a record by code.
    ///
    /// # Errors
    ///
    /// Returns [`MueblesError::NotFound`] when no record with `code` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_mueble(&self, code: Code) -> Result<(), MueblesError> {
        if self.repo.delete(code).await? {
            tracing::info!(%code, "mueble deleted");
            Ok(())
        } else {
            Err(not_found(code))
        }
    }
}

fn not_found(code: Code) -> MueblesError {
    NotFoundError {
        entity: ENTITY,
        id: code.to_string(),
    }
    .into()
}
