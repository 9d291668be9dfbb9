//! Typed records bound to a class descriptor.

use crate::bo::{ClassDescriptor, FrameworkError, StringField, ValidationReport};

/// A record whose shape is described by a static class descriptor.
///
/// `get` and `set` take the descriptor's own field references, so access is
/// resolved without reflection: each implementation matches the field
/// against its class accessors.
pub trait BusinessObject {
    /// The descriptor this record conforms to.
    fn class() -> &'static ClassDescriptor
    where
        Self: Sized;

    fn descriptor(&self) -> &'static ClassDescriptor;

    /// Current value of `field`, or `None` if unset or not declared here.
    fn get(&self, field: &StringField) -> Option<&str>;

    /// Replace the value of `field`.
    fn set(&mut self, field: &StringField, value: Option<String>) -> Result<(), FrameworkError>;

    /// Report every required field that is unset or empty.
    fn validate(&self) -> ValidationReport {
        let descriptor = self.descriptor();
        let mut report = ValidationReport::new();

        for field in descriptor.required_fields() {
            if self.get(field).map_or(true, str::is_empty) {
                report.error(format!(
                    "{}.{} is required",
                    descriptor.name(),
                    field.name()
                ));
            }
        }

        report
    }
}

/// Build the error returned when a field is not declared on `class`.
pub(crate) fn unknown_field(class: &ClassDescriptor, field: &StringField) -> FrameworkError {
    FrameworkError::UnknownField {
        class: class.name().to_string(),
        field: format!("{}.{}", field.owner(), field.name()),
    }
}
