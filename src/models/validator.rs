//! Translation record validation.
//!
//! Descriptor-level checks come from [`BusinessObject::validate`]; this
//! module adds the rules a record must meet before it can be stored.

use crate::bo::{BusinessObject, ValidationReport};
use crate::models::Translation;
use regex::Regex;
use std::sync::OnceLock;

/// Validator for translation records.
pub struct TranslationValidator;

static LANG_REGEX: OnceLock<Regex> = OnceLock::new();

fn lang_regex() -> &'static Regex {
    // Primary subtag plus optional region/script subtags: en, pt-BR, zh-Hant-TW
    LANG_REGEX.get_or_init(|| {
        Regex::new(r"^[a-z]{2,3}(-[A-Za-z0-9]{2,8})*$").expect("language tag pattern is valid")
    })
}

impl TranslationValidator {
    /// Validate a translation before it is written to a store.
    ///
    /// Errors:
    /// - `lang`, `namespace` or `key` missing or empty
    /// - `lang` not shaped like a language tag
    /// - `namespace` or `key` containing whitespace or `/`
    ///
    /// Warnings:
    /// - `value` missing or empty
    pub fn validate(translation: &Translation) -> ValidationReport {
        let mut report = translation.validate();

        match translation.lang.as_deref() {
            None | Some("") => report.error("lang is required"),
            Some(lang) if !Self::is_valid_lang(lang) => {
                report.error(format!("lang '{}' is not a valid language tag", lang))
            }
            Some(_) => {}
        }

        for (name, value) in [
            ("namespace", translation.namespace.as_deref()),
            ("key", translation.key.as_deref()),
        ] {
            match value {
                None | Some("") => report.error(format!("{} is required", name)),
                Some(v) if !Self::is_valid_segment(v) => report.error(format!(
                    "{} '{}' must not contain whitespace or '/'",
                    name, v
                )),
                Some(_) => {}
            }
        }

        if translation.value.as_deref().map_or(true, str::is_empty) {
            report.warning("value is empty");
        }

        report
    }

    /// Check whether `lang` looks like a BCP 47 language tag.
    pub fn is_valid_lang(lang: &str) -> bool {
        lang_regex().is_match(lang)
    }

    fn is_valid_segment(segment: &str) -> bool {
        !segment.chars().any(|c| c.is_whitespace() || c == '/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Language Tag Tests ====================

    #[test]
    fn test_valid_lang_tags() {
        for tag in ["en", "es", "fil", "pt-BR", "zh-Hant", "zh-Hant-TW", "es-419"] {
            assert!(TranslationValidator::is_valid_lang(tag), "{} should be valid", tag);
        }
    }

    #[test]
    fn test_invalid_lang_tags() {
        for tag in ["", "e", "EN", "english", "en_US", "en-", "en-a", "-en"] {
            assert!(!TranslationValidator::is_valid_lang(tag), "{} should be invalid", tag);
        }
    }

    // ==================== Record Validation Tests ====================

    #[test]
    fn test_complete_record_is_clean() {
        let record = Translation::new("en", "common", "greeting", "Hello");
        assert!(TranslationValidator::validate(&record).is_clean());
    }

    #[test]
    fn test_empty_record_reports_each_missing_part() {
        let report = TranslationValidator::validate(&Translation::default());
        assert_eq!(
            report.errors,
            vec!["lang is required", "namespace is required", "key is required"]
        );
        assert_eq!(report.warnings, vec!["value is empty"]);
    }

    #[test]
    fn test_bad_lang_is_an_error() {
        let record = Translation::new("English", "common", "greeting", "Hello");
        let report = TranslationValidator::validate(&record);
        assert_eq!(
            report.errors,
            vec!["lang 'English' is not a valid language tag"]
        );
    }

    #[test]
    fn test_key_with_slash_is_an_error() {
        let record = Translation::new("en", "common", "a/b", "Hello");
        let report = TranslationValidator::validate(&record);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("key 'a/b'"));
    }

    #[test]
    fn test_namespace_with_space_is_an_error() {
        let record = Translation::new("en", "my ns", "greeting", "Hello");
        assert!(TranslationValidator::validate(&record).has_errors());
    }

    #[test]
    fn test_dotted_key_is_allowed() {
        let record = Translation::new("en", "common", "menu.file.open", "Open");
        assert!(TranslationValidator::validate(&record).is_clean());
    }

    #[test]
    fn test_empty_value_is_only_a_warning() {
        let record = Translation::new("en", "common", "greeting", "");
        let report = TranslationValidator::validate(&record);
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }
}
