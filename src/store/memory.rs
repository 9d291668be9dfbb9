use crate::models::{Translation, TranslationUrlParams};
use crate::store::{StoreError, TranslationStore};
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::RwLock;
use tracing::debug;

type Identity = (String, String, String);

/// In-memory translation store.
///
/// Records are kept in a `BTreeMap` keyed by `(lang, namespace, key)`, so
/// range scans per language come back already sorted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<Identity, Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-filled with `translations`.
    ///
    /// Records without a full identity are skipped.
    pub fn with_translations(translations: impl IntoIterator<Item = Translation>) -> Self {
        let entries = translations
            .into_iter()
            .filter_map(|t| {
                let (lang, namespace, key) = t.identity()?;
                let identity = (lang.to_string(), namespace.to_string(), key.to_string());
                Some((identity, t.value))
            })
            .collect();

        Self {
            entries: RwLock::new(entries),
        }
    }
}

fn to_translation((lang, namespace, key): &Identity, value: &Option<String>) -> Translation {
    Translation {
        lang: Some(lang.clone()),
        namespace: Some(namespace.clone()),
        key: Some(key.clone()),
        value: value.clone(),
    }
}

#[async_trait]
impl TranslationStore for MemoryStore {
    async fn upsert(&self, translation: &Translation) -> Result<(), StoreError> {
        let (lang, namespace, key) = translation.identity().ok_or(StoreError::Incomplete)?;
        let identity = (lang.to_string(), namespace.to_string(), key.to_string());

        let mut entries = self.entries.write().await;
        entries.insert(identity, translation.value.clone());
        debug!(lang, namespace, key, "Stored translation in memory");
        Ok(())
    }

    async fn get(
        &self,
        lang: &str,
        namespace: &str,
        key: &str,
    ) -> Result<Option<Translation>, StoreError> {
        let identity = (lang.to_string(), namespace.to_string(), key.to_string());
        let entries = self.entries.read().await;
        Ok(entries
            .get_key_value(&identity)
            .map(|(id, value)| to_translation(id, value)))
    }

    async fn find(
        &self,
        lang: &str,
        params: &TranslationUrlParams,
    ) -> Result<Vec<Translation>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|((l, _, _), _)| l == lang)
            .map(|(id, value)| to_translation(id, value))
            .filter(|t| params.matches(t))
            .collect())
    }

    async fn delete(&self, lang: &str, namespace: &str, key: &str) -> Result<bool, StoreError> {
        let identity = (lang.to_string(), namespace.to_string(), key.to_string());
        let removed = self.entries.write().await.remove(&identity).is_some();
        if removed {
            debug!(lang, namespace, key, "Deleted translation from memory");
        }
        Ok(removed)
    }

    async fn namespaces(&self, lang: &str) -> Result<Vec<String>, StoreError> {
        let entries = self.entries.read().await;
        let namespaces: BTreeSet<&String> = entries
            .keys()
            .filter(|(l, _, _)| l == lang)
            .map(|(_, namespace, _)| namespace)
            .collect();
        Ok(namespaces.into_iter().cloned().collect())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.entries.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> MemoryStore {
        MemoryStore::with_translations([
            Translation::new("en", "common", "greeting", "Hello"),
            Translation::new("en", "common", "farewell", "Goodbye"),
            Translation::new("en", "errors", "not_found", "Not found"),
            Translation::new("es", "common", "greeting", "Hola"),
        ])
    }

    #[tokio::test]
    async fn test_with_translations_skips_incomplete() {
        let store = MemoryStore::with_translations([
            Translation::new("en", "common", "greeting", "Hello"),
            Translation::default(),
        ]);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_upsert_then_get() {
        let store = MemoryStore::new();
        store
            .upsert(&Translation::new("en", "common", "greeting", "Hello"))
            .await
            .unwrap();

        let found = store.get("en", "common", "greeting").await.unwrap();
        assert_eq!(found, Some(Translation::new("en", "common", "greeting", "Hello")));
    }

    #[tokio::test]
    async fn test_upsert_replaces_value() {
        let store = seeded();
        store
            .upsert(&Translation::new("en", "common", "greeting", "Hi"))
            .await
            .unwrap();

        let found = store.get("en", "common", "greeting").await.unwrap().unwrap();
        assert_eq!(found.value.as_deref(), Some("Hi"));
        assert_eq!(store.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_upsert_rejects_incomplete() {
        let store = MemoryStore::new();
        let mut record = Translation::new("en", "common", "greeting", "Hello");
        record.lang = None;

        let err = store.upsert(&record).await.unwrap_err();
        assert!(matches!(err, StoreError::Incomplete));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_upsert_keeps_missing_value() {
        let store = MemoryStore::new();
        let mut record = Translation::new("en", "common", "todo", "");
        record.value = None;
        store.upsert(&record).await.unwrap();

        let found = store.get("en", "common", "todo").await.unwrap().unwrap();
        assert_eq!(found.value, None);
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = seeded();
        assert_eq!(store.get("fr", "common", "greeting").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_whole_language_sorted() {
        let store = seeded();
        let found = store
            .find("en", &TranslationUrlParams::default())
            .await
            .unwrap();

        let keys: Vec<_> = found
            .iter()
            .map(|t| (t.namespace.as_deref().unwrap(), t.key.as_deref().unwrap()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("common", "farewell"),
                ("common", "greeting"),
                ("errors", "not_found")
            ]
        );
    }

    #[tokio::test]
    async fn test_find_by_namespace() {
        let store = seeded();
        let found = store
            .find("en", &TranslationUrlParams::namespace("errors"))
            .await
            .unwrap();
        assert_eq!(found, vec![Translation::new("en", "errors", "not_found", "Not found")]);
    }

    #[tokio::test]
    async fn test_find_by_key_across_namespaces() {
        let store = seeded();
        let params = TranslationUrlParams {
            namespace: None,
            key: Some("greeting".to_string()),
        };
        let found = store.find("es", &params).await.unwrap();
        assert_eq!(found, vec![Translation::new("es", "common", "greeting", "Hola")]);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = seeded();
        assert!(store.delete("en", "common", "greeting").await.unwrap());
        assert!(!store.delete("en", "common", "greeting").await.unwrap());
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_namespaces_distinct_and_sorted() {
        let store = seeded();
        assert_eq!(
            store.namespaces("en").await.unwrap(),
            vec!["common".to_string(), "errors".to_string()]
        );
        assert!(store.namespaces("fr").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ordering_is_bytewise() {
        let store = MemoryStore::with_translations([
            Translation::new("en", "alpha", "b", "1"),
            Translation::new("en", "Zeta", "a", "2"),
            Translation::new("en", "alpha", "B", "3"),
        ]);

        let all = store.find("en", &TranslationUrlParams::default()).await.unwrap();
        let ids: Vec<_> = all
            .iter()
            .map(|t| format!("{}/{}", t.namespace.as_deref().unwrap(), t.key.as_deref().unwrap()))
            .collect();
        assert_eq!(ids, vec!["Zeta/a", "alpha/B", "alpha/b"]);
        assert_eq!(
            store.namespaces("en").await.unwrap(),
            vec!["Zeta".to_string(), "alpha".to_string()]
        );
    }
}
