//! The `Translation` class: one translated string for a language.

use crate::bo::{
    unknown_field, BusinessObject, ClassBuilder, ClassCell, ClassDescriptor, FrameworkError,
    StringField,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Descriptor for translation records.
///
/// Declares four optional string fields: `lang`, `namespace`, `key` and
/// `value`. Obtain the process-wide instance with [`translation_class`].
#[derive(Debug)]
pub struct TranslationClass {
    descriptor: ClassDescriptor,
    lang: Arc<StringField>,
    namespace: Arc<StringField>,
    key: Arc<StringField>,
    value: Arc<StringField>,
}

static TRANSLATION: ClassCell<TranslationClass> = ClassCell::new(TranslationClass::build);

/// Get the `Translation` class descriptor, building it on first use.
pub fn translation_class() -> &'static TranslationClass {
    TRANSLATION.get()
}

impl TranslationClass {
    /// Registered class name.
    pub const NAME: &'static str = "Translation";

    /// Build the descriptor and declare its fields.
    ///
    /// Called once through [`translation_class`]; other code should not need
    /// to call it directly.
    pub fn build() -> Self {
        let mut class = ClassBuilder::new(Self::NAME);
        let lang = class.string_field("Lang", false);
        let namespace = class.string_field("Namespace", false);
        let key = class.string_field("Key", false);
        let value = class.string_field("Value", false);

        Self {
            descriptor: class.finish(),
            lang,
            namespace,
            key,
            value,
        }
    }

    pub fn descriptor(&self) -> &ClassDescriptor {
        &self.descriptor
    }

    /// Language code of the translation entry.
    pub fn lang(&self) -> &Arc<StringField> {
        &self.lang
    }

    /// Grouping for the translation key.
    pub fn namespace(&self) -> &Arc<StringField> {
        &self.namespace
    }

    /// Identifier within the namespace.
    pub fn key(&self) -> &Arc<StringField> {
        &self.key
    }

    /// The translated text.
    pub fn value(&self) -> &Arc<StringField> {
        &self.value
    }
}

/// A translation record.
///
/// Every field is optional, as declared on the class. A record can only be
/// stored once `lang`, `namespace` and `key` are set (see
/// [`Translation::identity`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Translation {
    /// Create a fully populated record.
    pub fn new(
        lang: impl Into<String>,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            lang: Some(lang.into()),
            namespace: Some(namespace.into()),
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }

    /// The `(lang, namespace, key)` triple identifying this record, if all
    /// three are set and non-empty.
    pub fn identity(&self) -> Option<(&str, &str, &str)> {
        let lang = non_empty(&self.lang)?;
        let namespace = non_empty(&self.namespace)?;
        let key = non_empty(&self.key)?;
        Some((lang, namespace, key))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl BusinessObject for Translation {
    fn class() -> &'static ClassDescriptor {
        translation_class().descriptor()
    }

    fn descriptor(&self) -> &'static ClassDescriptor {
        Self::class()
    }

    fn get(&self, field: &StringField) -> Option<&str> {
        let class = translation_class();
        let slot = if std::ptr::eq(field, &**class.lang()) {
            &self.lang
        } else if std::ptr::eq(field, &**class.namespace()) {
            &self.namespace
        } else if std::ptr::eq(field, &**class.key()) {
            &self.key
        } else if std::ptr::eq(field, &**class.value()) {
            &self.value
        } else {
            return None;
        };
        slot.as_deref()
    }

    fn set(&mut self, field: &StringField, value: Option<String>) -> Result<(), FrameworkError> {
        let class = translation_class();
        let slot = if std::ptr::eq(field, &**class.lang()) {
            &mut self.lang
        } else if std::ptr::eq(field, &**class.namespace()) {
            &mut self.namespace
        } else if std::ptr::eq(field, &**class.key()) {
            &mut self.key
        } else if std::ptr::eq(field, &**class.value()) {
            &mut self.value
        } else {
            return Err(unknown_field(class.descriptor(), field));
        };
        *slot = value;
        Ok(())
    }
}
