//! String field descriptors.

/// Metadata for one string-typed property declared on a class.
///
/// Fields are created through [`ClassBuilder::string_field`] and handed out
/// as shared `Arc<StringField>` references; two accessors returning the same
/// field return the same allocation.
///
/// [`ClassBuilder::string_field`]: crate::bo::ClassBuilder::string_field
#[derive(Debug, PartialEq, Eq)]
pub struct StringField {
    /// snake_case identifier derived from the display name (e.g. "namespace")
    name: String,

    /// Human-facing name as declared (e.g. "Namespace")
    display_name: String,

    /// Name of the class that declared this field
    owner: &'static str,

    /// Whether a record must carry a non-empty value for this field
    required: bool,
}

impl StringField {
    pub(crate) fn new(owner: &'static str, display_name: &str, required: bool) -> Self {
        Self {
            name: field_name(display_name),
            display_name: display_name.to_string(),
            owner,
            required,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Name of the class this field was declared on.
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// Derive a field identifier from its display name.
///
/// Word boundaries are upper-case letters following a lower-case letter or
/// digit, and any run of spaces, dashes or underscores:
/// `"Namespace"` -> `"namespace"`, `"UrlParams"` -> `"url_params"`,
/// `"Display Name"` -> `"display_name"`.
pub(crate) fn field_name(display_name: &str) -> String {
    let mut name = String::with_capacity(display_name.len() + 4);
    let mut prev_lower = false;

    for ch in display_name.trim().chars() {
        if ch == ' ' || ch == '-' || ch == '_' {
            if !name.is_empty() && !name.ends_with('_') {
                name.push('_');
            }
            prev_lower = false;
        } else if ch.is_uppercase() {
            if prev_lower && !name.ends_with('_') {
                name.push('_');
            }
            name.extend(ch.to_lowercase());
            prev_lower = false;
        } else {
            name.push(ch);
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        }
    }

    name.trim_end_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_field_name_single_word() {
        assert_eq!(field_name("Lang"), "lang");
        assert_eq!(field_name("Namespace"), "namespace");
        assert_eq!(field_name("Key"), "key");
        assert_eq!(field_name("Value"), "value");
    }

    #[test]
    fn test_field_name_camel_case() {
        assert_eq!(field_name("UrlParams"), "url_params");
        assert_eq!(field_name("createdAt"), "created_at");
    }

    #[test]
    fn test_field_name_separators() {
        assert_eq!(field_name("Display Name"), "display_name");
        assert_eq!(field_name("display-name"), "display_name");
        assert_eq!(field_name("  Trimmed  "), "trimmed");
        assert_eq!(field_name("a__b"), "a_b");
    }

    #[test]
    fn test_field_name_acronym_stays_together() {
        assert_eq!(field_name("URL"), "url");
    }

    #[test]
    fn test_new_field_keeps_metadata() {
        let field = StringField::new("Translation", "Namespace", false);
        assert_eq!(field.name(), "namespace");
        assert_eq!(field.display_name(), "Namespace");
        assert_eq!(field.owner(), "Translation");
        assert!(!field.is_required());
    }

    proptest! {
        #[test]
        fn prop_field_name_is_snake_case(display in "[A-Za-z][A-Za-z0-9 _-]{0,24}") {
            let name = field_name(&display);
            prop_assert!(!name.starts_with('_'));
            prop_assert!(!name.ends_with('_'));
            prop_assert!(!name.contains("__"));
            prop_assert!(!name.chars().any(|c| c.is_uppercase() || c == ' ' || c == '-'));
        }

        #[test]
        fn prop_field_name_is_idempotent(display in "[A-Za-z][A-Za-z0-9 _-]{0,24}") {
            let once = field_name(&display);
            prop_assert_eq!(field_name(&once), once);
        }
    }
}
