//! The `TranslationUrlParams` class: query parameters for finding translations.

use crate::bo::{
    unknown_field, BusinessObject, ClassBuilder, ClassCell, ClassDescriptor, FrameworkError,
    StringField,
};
use crate::models::Translation;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Descriptor for the parameters that locate translations by namespace and key.
#[derive(Debug)]
pub struct TranslationUrlParamsClass {
    descriptor: ClassDescriptor,
    namespace: Arc<StringField>,
    key: Arc<StringField>,
}

static TRANSLATION_URL_PARAMS: ClassCell<TranslationUrlParamsClass> =
    ClassCell::new(TranslationUrlParamsClass::build);

/// Get the `TranslationUrlParams` class descriptor, building it on first use.
pub fn translation_url_params_class() -> &'static TranslationUrlParamsClass {
    TRANSLATION_URL_PARAMS.get()
}

impl TranslationUrlParamsClass {
    pub const NAME: &'static str = "TranslationUrlParams";

    pub fn build() -> Self {
        let mut class = ClassBuilder::new(Self::NAME);
        let namespace = class.string_field("Namespace", false);
        let key = class.string_field("Key", false);

        Self {
            descriptor: class.finish(),
            namespace,
            key,
        }
    }

    pub fn descriptor(&self) -> &ClassDescriptor {
        &self.descriptor
    }

    pub fn namespace(&self) -> &Arc<StringField> {
        &self.namespace
    }

    pub fn key(&self) -> &Arc<StringField> {
        &self.key
    }
}

/// Filter for translation lookups, usually bound from a query string
/// (`?namespace=common&key=greeting`).
///
/// An unset parameter does not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationUrlParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl TranslationUrlParams {
    pub fn namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            key: None,
        }
    }

    pub fn exact(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            key: Some(key.into()),
        }
    }

    /// Check whether `translation` satisfies every set parameter.
    ///
    /// Empty strings count as unset, so `?namespace=&key=x` filters on the
    /// key only.
    pub fn matches(&self, translation: &Translation) -> bool {
        fn accepts(filter: &Option<String>, value: &Option<String>) -> bool {
            match filter.as_deref() {
                None | Some("") => true,
                Some(wanted) => value.as_deref() == Some(wanted),
            }
        }

        accepts(&self.namespace, &translation.namespace) && accepts(&self.key, &translation.key)
    }

    /// The namespace filter, if set and non-empty.
    pub fn namespace_filter(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|s| !s.is_empty())
    }

    /// The key filter, if set and non-empty.
    pub fn key_filter(&self) -> Option<&str> {
        self.key.as_deref().filter(|s| !s.is_empty())
    }
}

impl BusinessObject for TranslationUrlParams {
    fn class() -> &'static ClassDescriptor {
        translation_url_params_class().descriptor()
    }

    fn descriptor(&self) -> &'static ClassDescriptor {
        Self::class()
    }

    fn get(&self, field: &StringField) -> Option<&str> {
        let class = translation_url_params_class();
        if std::ptr::eq(field, &**class.namespace()) {
            self.namespace.as_deref()
        } else if std::ptr::eq(field, &**class.key()) {
            self.key.as_deref()
        } else {
            None
        }
    }

    fn set(&mut self, field: &StringField, value: Option<String>) -> Result<(), FrameworkError> {
        let class = translation_url_params_class();
        if std::ptr::eq(field, &**class.namespace()) {
            self.namespace = value;
        } else if std::ptr::eq(field, &**class.key()) {
            self.key = value;
        } else {
            return Err(unknown_field(class.descriptor(), field));
        }
        Ok(())
    }
}
