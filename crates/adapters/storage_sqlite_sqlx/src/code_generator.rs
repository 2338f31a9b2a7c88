//! `SQLite` implementation of [`CodeGenerator`].

use std::future::Future;

use sqlx::SqlitePool;

use muebles_app::ports::CodeGenerator;
use muebles_domain::error::MueblesError;
use muebles_domain::id::Code;

use crate::error::StorageError;

// A single statement, so concurrent callers are serialised by SQLite's write
// lock. Never hands out a code at or below the current maximum, even if rows
// were inserted without going through the sequence.
const NEXT_CODE: &str = "UPDATE code_sequence \
     SET value = MAX(value, (SELECT COALESCE(MAX(code), 0) FROM muebles)) + 1 \
     WHERE id = 1 \
     RETURNING value";

/// Code generator backed by a one-row sequence table.
pub struct SqliteCodeGenerator {
    pool: SqlitePool,
}

impl SqliteCodeGenerator {
    /// Create a new generator using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CodeGenerator for SqliteCodeGenerator {
    fn next_code(&self) -> impl Future<Output = Result<Code, MueblesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let (value,): (i64,) = sqlx::query_as(NEXT_CODE)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Code::new(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SqliteMuebleRepository;
    use crate::pool::Config;
    use muebles_app::ports::MuebleRepository;
    use muebles_domain::mueble::{Mueble, MuebleFields};
    use std::collections::HashSet;
    use std::sync::Arc;

    async fn setup() -> SqlitePool {
        Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap()
        .pool()
        .clone()
    }

    #[tokio::test]
    async fn should_start_at_one_on_empty_collection() {
        let generator = SqliteCodeGenerator::new(setup().await);
        assert_eq!(generator.next_code().await.unwrap(), Code::new(1));
        assert_eq!(generator.next_code().await.unwrap(), Code::new(2));
    }

    #[tokio::test]
    async fn should_skip_past_existing_codes() {
        let pool = setup().await;
        let repo = SqliteMuebleRepository::new(pool.clone());
        let fields = MuebleFields::builder()
            .name("Mesa")
            .price(10.0)
            .category("Mesas")
            .build()
            .unwrap();
        repo.create(Mueble::new(Code::new(41), fields))
            .await
            .unwrap();

        let generator = SqliteCodeGenerator::new(pool);
        assert_eq!(generator.next_code().await.unwrap(), Code::new(42));
    }

    #[tokio::test]
    async fn should_not_reuse_code_after_delete() {
        let pool = setup().await;
        let generator = SqliteCodeGenerator::new(pool.clone());
        let repo = SqliteMuebleRepository::new(pool);
        let fields = MuebleFields::builder()
            .name("Mesa")
            .price(10.0)
            .category("Mesas")
            .build()
            .unwrap();

        let code = generator.next_code().await.unwrap();
        repo.create(Mueble::new(code, fields)).await.unwrap();
        repo.delete(code).await.unwrap();

        assert!(generator.next_code().await.unwrap() > code);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_hand_out_unique_codes_to_concurrent_callers() {
        let generator = Arc::new(SqliteCodeGenerator::new(setup().await));

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let generator = Arc::clone(&generator);
                tokio::spawn(async move { generator.next_code().await.unwrap() })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            assert!(seen.insert(handle.await.unwrap()));
        }
        assert_eq!(seen.len(), 32);
    }
}
