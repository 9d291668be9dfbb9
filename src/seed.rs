//! Loading translations from a directory of JSON files.
//!
//! Layout: `<dir>/<lang>/<namespace>.json`, each file a flat object of
//! `"key": "value"` strings.

use crate::models::{Translation, TranslationValidator};
use crate::store::TranslationStore;
use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Read every translation under `dir`.
///
/// Language directories whose name is not a valid language tag and files
/// that are not `.json` are skipped with a warning. The result is sorted by
/// language, namespace and key.
pub fn load_dir(dir: &Path) -> Result<Vec<Translation>> {
    if !dir.is_dir() {
        bail!("Seed directory {} does not exist", dir.display());
    }

    let mut lang_dirs: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read seed directory {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    lang_dirs.sort();

    let mut translations = Vec::new();

    for lang_dir in lang_dirs {
        let Some(lang) = lang_dir.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if !TranslationValidator::is_valid_lang(lang) {
            warn!("Skipping {}: not a language tag", lang_dir.display());
            continue;
        }

        let mut files: Vec<_> = fs::read_dir(&lang_dir)?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|entry| entry.path())
            .collect();
        files.sort();

        for path in files {
            if !is_json_file(&path) {
                warn!("Skipping {}: not a JSON file", path.display());
                continue;
            }

            let namespace = path
                .file_stem()
                .and_then(|s| s.to_str())
                .with_context(|| format!("Invalid file name {}", path.display()))?;

            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let entries: BTreeMap<String, String> = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;

            translations.extend(
                entries
                    .into_iter()
                    .map(|(key, value)| Translation::new(lang, namespace, key, value)),
            );
        }
    }

    Ok(translations)
}

/// Load `dir` and write every valid translation to `store`.
///
/// Records failing validation are skipped with a warning. Returns the
/// number of records written.
pub async fn seed_store(store: &dyn TranslationStore, dir: &Path) -> Result<usize> {
    let translations = load_dir(dir)?;
    let mut written = 0;

    for translation in &translations {
        let report = TranslationValidator::validate(translation);
        if report.has_errors() {
            warn!(
                "Skipping seed entry {:?}: {}",
                translation.identity(),
                report.errors.join("; ")
            );
            continue;
        }

        store
            .upsert(translation)
            .await
            .context("Failed to store seed translation")?;
        written += 1;
    }

    info!("Seeded {} translations from {}", written, dir.display());
    Ok(written)
}

fn is_json_file(path: &Path) -> bool {
    path.is_file() && path.extension().map_or(false, |ext| ext == "json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use tempfile::TempDir;

    fn write(dir: &TempDir, relative: &str, content: &str) {
        let path = dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(&dir, "en/common.json", r#"{"greeting": "Hello", "farewell": "Goodbye"}"#);
        write(&dir, "en/errors.json", r#"{"not_found": "Not found"}"#);
        write(&dir, "es/common.json", r#"{"greeting": "Hola"}"#);
        write(&dir, "es/README.md", "not a translation file");
        dir
    }

    #[test]
    fn test_load_dir_reads_all_files_sorted() {
        let dir = fixture();
        let translations = load_dir(dir.path()).unwrap();

        assert_eq!(
            translations,
            vec![
                Translation::new("en", "common", "farewell", "Goodbye"),
                Translation::new("en", "common", "greeting", "Hello"),
                Translation::new("en", "errors", "not_found", "Not found"),
                Translation::new("es", "common", "greeting", "Hola"),
            ]
        );
    }

    #[test]
    fn test_load_dir_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = load_dir(&dir.path().join("nope")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_load_dir_malformed_file_names_path() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en/broken.json", "{ not json");

        let err = load_dir(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("broken.json"));
    }

    #[test]
    fn test_load_dir_rejects_nested_objects() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en/nested.json", r#"{"menu": {"open": "Open"}}"#);
        assert!(load_dir(dir.path()).is_err());
    }

    #[test]
    fn test_load_dir_skips_non_language_directories() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Templates/common.json", r#"{"a": "b"}"#);
        write(&dir, "fr/common.json", r#"{"greeting": "Bonjour"}"#);

        let translations = load_dir(dir.path()).unwrap();
        assert_eq!(translations.len(), 1);
        assert_eq!(translations[0].lang.as_deref(), Some("fr"));
    }

    #[test]
    fn test_load_dir_skips_non_json_entries() {
        let dir = TempDir::new().unwrap();
        write(&dir, "de/common.json", r#"{"greeting": "Hallo"}"#);
        write(&dir, "de/notes.txt", r#"{"ignored": "x"}"#);
        write(&dir, "de/archive.json/old.json", r#"{"ignored": "y"}"#);

        let translations = load_dir(dir.path()).unwrap();
        assert_eq!(
            translations,
            vec![Translation::new("de", "common", "greeting", "Hallo")]
        );
    }

    #[tokio::test]
    async fn test_seed_store_writes_valid_records() {
        let dir = fixture();
        write(&dir, "en/bad.json", r#"{"has space": "skipped"}"#);
        let store = MemoryStore::new();

        let written = seed_store(&store, dir.path()).await.unwrap();

        assert_eq!(written, 4);
        assert_eq!(store.count().await.unwrap(), 4);
        let hola = store.get("es", "common", "greeting").await.unwrap().unwrap();
        assert_eq!(hola.value.as_deref(), Some("Hola"));
    }
}
