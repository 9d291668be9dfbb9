//! Class registry: name to descriptor lookup.
//!
//! This module provides the mapping that lets code find a class descriptor
//! by its string name instead of by type. The process-wide instance is a
//! singleton built with `OnceLock` and populated with every model class on
//! first access.

use crate::bo::{ClassDescriptor, FrameworkError};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::debug;

/// Outcome of a successful [`ClassRegistry::register`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The name was new and the descriptor was added.
    Inserted,
    /// This exact descriptor was already registered under the name.
    AlreadyPresent,
}

/// Mapping from class name to its static descriptor.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: BTreeMap<&'static str, &'static ClassDescriptor>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<ClassRegistry> = OnceLock::new();

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global class registry.
    ///
    /// The first call builds the registry and registers every model class;
    /// later calls return the same instance.
    ///
    /// # Panics
    /// Panics if the model classes conflict with each other. Class names are
    /// static, so this is a programming error.
    pub fn global() -> &'static ClassRegistry {
        REGISTRY.get_or_init(|| Self::populated_with(crate::models::register_all))
    }

    fn populated_with(
        register: impl FnOnce(&mut ClassRegistry) -> Result<(), FrameworkError>,
    ) -> ClassRegistry {
        let mut registry = ClassRegistry::new();
        if let Err(e) = register(&mut registry) {
            panic!("failed to register model classes: {}", e);
        }
        registry
    }

    /// Register a descriptor under its own name.
    ///
    /// Registering the same descriptor twice is a no-op that reports
    /// [`Registration::AlreadyPresent`]. A different descriptor under an
    /// already taken name is rejected.
    pub fn register(
        &mut self,
        descriptor: &'static ClassDescriptor,
    ) -> Result<Registration, FrameworkError> {
        let name = descriptor.name();

        match self.classes.get(name) {
            Some(existing) if std::ptr::eq(*existing, descriptor) => {
                debug!(class = name, "class already registered");
                Ok(Registration::AlreadyPresent)
            }
            Some(_) => Err(FrameworkError::DuplicateClass(name.to_string())),
            None => {
                self.classes.insert(name, descriptor);
                debug!(
                    class = name,
                    fields = descriptor.fields().len(),
                    "registered class"
                );
                Ok(Registration::Inserted)
            }
        }
    }

    /// Get a descriptor by class name.
    pub fn get(&self, name: &str) -> Option<&'static ClassDescriptor> {
        self.classes.get(name).copied()
    }

    /// Like [`get`](Self::get), but reports an unknown name as an error.
    pub fn require(&self, name: &str) -> Result<&'static ClassDescriptor, FrameworkError> {
        self.get(name)
            .ok_or_else(|| FrameworkError::UnknownClass(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Registered class names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.classes.keys().copied().collect()
    }

    /// Registered descriptors, sorted by class name.
    pub fn classes(&self) -> impl Iterator<Item = &'static ClassDescriptor> + '_ {
        self.classes.values().copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
