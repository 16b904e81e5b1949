use std::any::type_name;
use thiserror::Error as ThisError;

///
/// ModelError
///
/// Structural failure raised by a synthesized operation.
/// Nothing is retried or suppressed; the caller sees the first failure.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ModelError {
    #[error("'{model}' object has no attribute '{attribute}'")]
    MissingAttribute {
        model: &'static str,
        attribute: &'static str,
    },

    #[error("unhashable attribute value of type '{type_name}'")]
    Unhashable { type_name: &'static str },
}

impl ModelError {
    /// Construct a missing-attribute error for `model`.
    #[must_use]
    pub const fn missing_attribute(model: &'static str, attribute: &'static str) -> Self {
        Self::MissingAttribute { model, attribute }
    }

    /// Construct an unhashable-value error naming `T`.
    #[must_use]
    pub fn unhashable<T: ?Sized>() -> Self {
        Self::Unhashable {
            type_name: type_name::<T>(),
        }
    }
}
