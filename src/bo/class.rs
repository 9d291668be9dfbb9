//! Class descriptors and the builder that declares their fields.

use crate::bo::field::StringField;
use std::sync::Arc;

/// Static description of a business entity or parameter set.
///
/// A descriptor is immutable once built. The field list keeps declaration
/// order.
#[derive(Debug)]
pub struct ClassDescriptor {
    name: &'static str,
    fields: Vec<Arc<StringField>>,
}

impl ClassDescriptor {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All declared fields, in declaration order.
    pub fn fields(&self) -> &[Arc<StringField>] {
        &self.fields
    }

    /// Look a field up by its snake_case name.
    pub fn field(&self, name: &str) -> Option<&Arc<StringField>> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Check whether `field` is one of this class's own field references.
    ///
    /// Identity, not name equality: a field with the same name declared on a
    /// different class does not belong here.
    pub fn declares(&self, field: &StringField) -> bool {
        self.fields
            .iter()
            .any(|own| std::ptr::eq(Arc::as_ptr(own), field))
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &Arc<StringField>> {
        self.fields.iter().filter(|field| field.is_required())
    }
}

/// Builder used by class factories to declare fields against a new class.
#[derive(Debug)]
pub struct ClassBuilder {
    descriptor: ClassDescriptor,
}

impl ClassBuilder {
    pub fn new(name: &'static str) -> Self {
        Self {
            descriptor: ClassDescriptor {
                name,
                fields: Vec::new(),
            },
        }
    }

    /// Declare a string field on the class and return a shared reference to it.
    ///
    /// # Panics
    /// Panics if a field with the same derived name is already declared.
    /// Field declarations are static, so this indicates a programming error
    /// in the class factory.
    pub fn string_field(&mut self, display_name: &str, required: bool) -> Arc<StringField> {
        let field = Arc::new(StringField::new(
            self.descriptor.name,
            display_name,
            required,
        ));

        assert!(
            self.descriptor.field(field.name()).is_none(),
            "field '{}' declared twice on class '{}'",
            field.name(),
            self.descriptor.name
        );

        self.descriptor.fields.push(Arc::clone(&field));
        field
    }

    pub fn finish(self) -> ClassDescriptor {
        self.descriptor
    }
}
