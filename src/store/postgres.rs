use crate::models::{Translation, TranslationUrlParams};
use crate::store::{StoreError, TranslationStore};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info};

type Row = (String, String, String, Option<String>);

/// PostgreSQL-backed translation store.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to the database and create the schema if needed.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("Failed to connect to PostgreSQL")?;

        let store = Self::from_pool(pool);
        store.migrate().await?;
        Ok(store)
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the translations table (safe to run always)
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS translations (
                lang TEXT NOT NULL,
                namespace TEXT NOT NULL,
                key TEXT NOT NULL,
                value TEXT,
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                PRIMARY KEY (lang, namespace, key)
            )",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create translations table")?;

        info!("✓ Translations table ready");
        Ok(())
    }
}

fn to_translation((lang, namespace, key, value): Row) -> Translation {
    Translation {
        lang: Some(lang),
        namespace: Some(namespace),
        key: Some(key),
        value,
    }
}

#[async_trait]
impl TranslationStore for PgStore {
    async fn upsert(&self, translation: &Translation) -> Result<(), StoreError> {
        let (lang, namespace, key) = translation.identity().ok_or(StoreError::Incomplete)?;

        sqlx::query(
            "INSERT INTO translations (lang, namespace, key, value, updated_at)
             VALUES ($1, $2, $3, $4, NOW())
             ON CONFLICT (lang, namespace, key)
             DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()",
        )
        .bind(lang)
        .bind(namespace)
        .bind(key)
        .bind(translation.value.as_deref())
        .execute(&self.pool)
        .await?;

        debug!(lang, namespace, key, "Stored translation");
        Ok(())
    }

    async fn get(
        &self,
        lang: &str,
        namespace: &str,
        key: &str,
    ) -> Result<Option<Translation>, StoreError> {
        let row: Option<Row> = sqlx::query_as(
            "SELECT lang, namespace, key, value FROM translations
             WHERE lang = $1 AND namespace = $2 AND key = $3",
        )
        .bind(lang)
        .bind(namespace)
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(to_translation))
    }

    async fn find(
        &self,
        lang: &str,
        params: &TranslationUrlParams,
    ) -> Result<Vec<Translation>, StoreError> {
        let rows: Vec<Row> = sqlx::query_as(
            "SELECT lang, namespace, key, value FROM translations
             WHERE lang = $1
               AND ($2::TEXT IS NULL OR namespace = $2)
               AND ($3::TEXT IS NULL OR key = $3)
             ORDER BY namespace COLLATE \"C\", key COLLATE \"C\"",
        )
        .bind(lang)
        .bind(params.namespace_filter())
        .bind(params.key_filter())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(to_translation).collect())
    }

    async fn delete(&self, lang: &str, namespace: &str, key: &str) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "DELETE FROM translations WHERE lang = $1 AND namespace = $2 AND key = $3",
        )
        .bind(lang)
        .bind(namespace)
        .bind(key)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn namespaces(&self, lang: &str) -> Result<Vec<String>, StoreError> {
        let namespaces: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT namespace FROM translations WHERE lang = $1
             ORDER BY namespace COLLATE \"C\"",
        )
        .bind(lang)
        .fetch_all(&self.pool)
        .await?;

        Ok(namespaces)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM translations")
            .fetch_one(&self.pool)
            .await?;

        Ok(usize::try_from(count).unwrap_or_default())
    }
}
