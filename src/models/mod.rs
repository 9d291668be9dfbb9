//! Model classes and the records that conform to them.

mod translation;
mod translation_url_params;
mod validator;

pub use translation::{translation_class, Translation, TranslationClass};
pub use translation_url_params::{
    translation_url_params_class, TranslationUrlParams, TranslationUrlParamsClass,
};
pub use validator::TranslationValidator;

use crate::bo::{ClassRegistry, FrameworkError};

/// Register every model class with `registry`.
///
/// Safe to call again on the same registry: already registered descriptors
/// are left as they are.
pub fn register_all(registry: &mut ClassRegistry) -> Result<(), FrameworkError> {
    registry.register(translation_class().descriptor())?;
    registry.register(translation_url_params_class().descriptor())?;
    Ok(())
}
