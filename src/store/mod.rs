//! Translation storage.
//!
//! [`TranslationStore`] is implemented by an in-memory map for tests and
//! single-process deployments, and by PostgreSQL for persistent ones.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::models::{Translation, TranslationUrlParams};
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by translation stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record lacks one of lang, namespace or key.
    #[error("translation is missing lang, namespace or key")]
    Incomplete,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage for translation records keyed by `(lang, namespace, key)`.
#[async_trait]
pub trait TranslationStore: Send + Sync {
    /// Insert the record, or replace the value of an existing one.
    async fn upsert(&self, translation: &Translation) -> Result<(), StoreError>;

    async fn get(
        &self,
        lang: &str,
        namespace: &str,
        key: &str,
    ) -> Result<Option<Translation>, StoreError>;

    /// All records in `lang` matching `params`, sorted by namespace then key.
    async fn find(
        &self,
        lang: &str,
        params: &TranslationUrlParams,
    ) -> Result<Vec<Translation>, StoreError>;

    /// Remove a record. Returns whether it existed.
    async fn delete(&self, lang: &str, namespace: &str, key: &str) -> Result<bool, StoreError>;

    /// Distinct namespaces that have records in `lang`, sorted.
    async fn namespaces(&self, lang: &str) -> Result<Vec<String>, StoreError>;

    /// Total number of stored records across all languages.
    async fn count(&self) -> Result<usize, StoreError>;
}
