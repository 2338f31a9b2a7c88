//! `SQLite` implementation of [`MuebleRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, Sqlite, SqlitePool};

use muebles_app::ports::MuebleRepository;
use muebles_domain::error::MueblesError;
use muebles_domain::filter::ListFilter;
use muebles_domain::id::Code;
use muebles_domain::mueble::{Mueble, MuebleFields};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Mueble`].
struct Wrapper(Mueble);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Mueble> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Mueble {
            code: Code::new(row.try_get("code")?),
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            category: row.try_get("category")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO muebles (code, name, price, category) VALUES (?, ?, ?, ?)";
const SELECT_BY_CODE: &str = "SELECT code, name, price, category FROM muebles WHERE code = ?";
const SELECT_ALL: &str = "SELECT code, name, price, category FROM muebles ORDER BY code";
const SELECT_BY_CATEGORY: &str = "SELECT code, name, price, category FROM muebles WHERE category = ? ORDER BY name ASC, code ASC";
const SELECT_MIN_PRICE: &str = "SELECT code, name, price, category FROM muebles WHERE price >= ? ORDER BY price ASC, code ASC";
const SELECT_MAX_PRICE: &str = "SELECT code, name, price, category FROM muebles WHERE price <= ? ORDER BY price DESC, code ASC";
const UPDATE: &str = "UPDATE muebles SET name = ?, price = ?, category = ? WHERE code = ? RETURNING code, name, price, category";
const DELETE_BY_CODE: &str = "DELETE FROM muebles WHERE code = ?";

/// `SQLite`-backed furniture repository.
pub struct SqliteMuebleRepository {
    pool: SqlitePool,
}

impl SqliteMuebleRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl MuebleRepository for SqliteMuebleRepository {
    fn find(
        &self,
        filter: ListFilter,
    ) -> impl Future<Output = Result<Vec<Mueble>, MueblesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let query = match &filter {
                ListFilter::All => sqlx::query_as::<Sqlite, Wrapper>(SELECT_ALL),
                ListFilter::Category(category) => {
                    sqlx::query_as::<Sqlite, Wrapper>(SELECT_BY_CATEGORY).bind(category.as_str())
                }
                ListFilter::MinPrice(threshold) => {
                    sqlx::query_as::<Sqlite, Wrapper>(SELECT_MIN_PRICE).bind(*threshold)
                }
                ListFilter::MaxPrice(threshold) => {
                    sqlx::query_as::<Sqlite, Wrapper>(SELECT_MAX_PRICE).bind(*threshold)
                }
            };
            let rows = query.fetch_all(&pool).await.map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_code(
        &self,
        code: Code,
    ) -> impl Future<Output = Result<Option<Mueble>, MueblesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_CODE)
                .bind(code.value())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn create(&self, mueble: Mueble) -> impl Future<Output = Result<Mueble, MueblesError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(mueble.code.value())
                .bind(&mueble.name)
                .bind(mueble.price)
                .bind(&mueble.category)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(mueble)
        }
    }

    fn update(
        &self,
        code: Code,
        fields: MuebleFields,
    ) -> impl Future<Output = Result<Option<Mueble>, MueblesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(UPDATE)
                .bind(&fields.name)
                .bind(fields.price)
                .bind(&fields.category)
                .bind(code.value())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn delete(&self, code: Code) -> impl Future<Output = Result<bool, MueblesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_CODE)
                .bind(code.value())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
