use thiserror::Error;

/// Errors raised by the business-object layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameworkError {
    /// A different descriptor is already registered under this name.
    #[error("class '{0}' is already registered with a different descriptor")]
    DuplicateClass(String),

    /// No descriptor is registered under this name.
    #[error("unknown class '{0}'")]
    UnknownClass(String),

    /// The field does not belong to the object's class.
    #[error("field '{field}' is not declared on class '{class}'")]
    UnknownField { class: String, field: String },
}
