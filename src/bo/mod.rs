//! Business-object layer: static, reflection-free class descriptors.
//!
//! A class descriptor names an entity (or a parameter set) and declares its
//! fields. Descriptors are built once, shared as `&'static` references and
//! registered by name so other code can find them without a static type.
//!
//! # Architecture
//!
//! - `field`: `StringField`, the metadata of one declared string property
//! - `class`: `ClassDescriptor` and the `ClassBuilder` that declares fields
//! - `cell`: `ClassCell`, the one-time initializer holding a descriptor
//! - `registry`: `ClassRegistry`, the name to descriptor mapping
//! - `object`: `BusinessObject`, typed access to records through descriptors
//! - `validation`: `ValidationReport`, errors and warnings about a record
//!
//! # Example
//!
//! ```rust,ignore
//! use translation_catalog::bo::ClassRegistry;
//!
//! let translation = ClassRegistry::global().get("Translation").unwrap();
//! for field in translation.fields() {
//!     println!("{} ({})", field.name(), field.display_name());
//! }
//! ```

mod cell;
mod class;
mod error;
mod field;
mod object;
mod registry;
mod validation;

pub use cell::ClassCell;
pub use class::{ClassBuilder, ClassDescriptor};
pub use error::FrameworkError;
pub use field::StringField;
pub use object::BusinessObject;
pub(crate) use object::unknown_field;
pub use registry::{ClassRegistry, Registration};
pub use validation::ValidationReport;
