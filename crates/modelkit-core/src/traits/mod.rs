mod attribute;

pub use attribute::*;

use crate::{
    error::ModelError,
    ops, repr,
    schema::{Declaration, ModelSchema, registry},
};
use std::{
    any::Any,
    collections::hash_map::DefaultHasher,
    hash::Hasher,
};

// ============================================================================
// INSTANCE SURFACE
// ============================================================================
//
// `Node` is the object-safe view of one model instance. Everything the
// synthesized operations need is reachable through it, which is what lets
// equality compare instances of different (sub)types.
//

///
/// Node
///
/// A schema-bearing instance. Attribute reads go through `attribute`, so an
/// accessor may compute its value on every read.
///

pub trait Node {
    /// Schema of this instance's runtime type.
    fn model_schema(&self) -> &'static ModelSchema;

    /// Concrete instance, used for identity checks.
    fn as_any(&self) -> &dyn Any;

    /// Read an annotated attribute by name.
    /// Returns `None` only when no annotated attribute has that name.
    fn attribute(&self, name: &str) -> Option<AttrRef<'_>>;

    /// Walkable attribute names, in canonical order.
    fn child_attributes(&self) -> &'static [&'static str] {
        self.model_schema().child_attributes()
    }
}

impl dyn Node + '_ {
    pub fn try_eq(&self, other: &dyn Node) -> Result<bool, ModelError> {
        ops::try_eq(self, other)
    }

    pub fn try_hash(&self, state: &mut dyn Hasher) -> Result<(), ModelError> {
        ops::try_hash(self, state)
    }

    #[must_use]
    pub fn repr(&self) -> String {
        repr::to_repr(self)
    }
}

impl PartialEq for dyn Node + '_ {
    fn eq(&self, other: &Self) -> bool {
        ops::structural_eq(self, other)
    }
}

///
/// Model
///
/// Statically known model type; implemented by `#[derive(Model)]`.
///

pub trait Model: Node + Sized + 'static {
    const DECLARATION: Declaration;

    /// Discovered schema, built once per type.
    fn schema() -> &'static ModelSchema {
        registry::schema_of::<Self>()
    }
}

///
/// ModelExt
///
/// Fallible forms of the synthesized operations. The derived std impls
/// (`PartialEq`, `Hash`) panic where these return an error.
///

pub trait ModelExt: Node + Sized {
    /// Directed structural equality: `other` must be this type or a subtype.
    fn try_eq(&self, other: &dyn Node) -> Result<bool, ModelError> {
        ops::try_eq(self, other)
    }

    fn try_hash<H: Hasher>(&self, state: &mut H) -> Result<(), ModelError> {
        ops::try_hash(self, state)
    }

    /// Structural hash through the std `DefaultHasher`.
    fn hash_value(&self) -> Result<u64, ModelError> {
        let mut hasher = DefaultHasher::new();
        self.try_hash(&mut hasher)?;

        Ok(hasher.finish())
    }

    fn repr(&self) -> String {
        repr::to_repr(self)
    }
}

impl<T: Node> ModelExt for T {}

///
/// TESTS
///
