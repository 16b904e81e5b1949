//! Per-type schemas.
//!
//! A derived model emits a [`Declaration`]: its own annotated attributes in
//! declaration order plus handles to its base schemas. Discovery merges the
//! own and inherited attributes into one lexicographically ordered table and
//! partitions it into the three participation lists. The result is built once
//! per type through [`registry`] and never mutated afterwards.

mod flags;
pub mod registry;

pub use flags::NodeFlags;

use std::{any::TypeId, collections::BTreeMap, fmt};

///
/// AttributeDecl
///
/// One annotated attribute as written on the type, before discovery.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AttributeDecl {
    pub name: &'static str,
    pub flags: NodeFlags,
}

impl AttributeDecl {
    #[must_use]
    pub const fn new(name: &'static str, flags: NodeFlags) -> Self {
        Self { name, flags }
    }
}

///
/// Declaration
///
/// Macro-generated, compile-time description of one model type.
/// `bases` are resolved lazily so a declaration stays a plain constant.
///

#[derive(Clone, Copy)]
pub struct Declaration {
    /// Name used by the representation.
    pub name: &'static str,
    /// Fully-qualified Rust path (diagnostics only).
    pub path: &'static str,
    /// Own annotated attributes, declaration order.
    pub attributes: &'static [AttributeDecl],
    /// Direct ancestors, in declaration order.
    pub bases: &'static [fn() -> &'static ModelSchema],
}

impl fmt::Debug for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Declaration")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("attributes", &self.attributes)
            .field("bases", &self.bases.len())
            .finish()
    }
}

///
/// SchemaAttribute
///
/// One discovered attribute: its flags plus the type that declared it.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SchemaAttribute {
    pub name: &'static str,
    pub flags: NodeFlags,
    pub owner: &'static str,
}

///
/// ModelSchema
///
/// Immutable, discovered schema of one model type.
/// Every list is sorted by attribute name.
///

#[derive(Debug)]
pub struct ModelSchema {
    name: &'static str,
    path: &'static str,
    type_id: TypeId,
    bases: Vec<&'static ModelSchema>,
    attributes: Vec<SchemaAttribute>,
    eq_attributes: Vec<&'static str>,
    repr_attributes: Vec<&'static str>,
    child_attributes: Vec<&'static str>,
}

impl ModelSchema {
    /// Discover and partition the schema described by `declaration`.
    ///
    /// Base schemas are resolved (and registered) on the way, so this must
    /// not be called while holding the registry lock.
    #[must_use]
    pub fn discover(declaration: &Declaration, type_id: TypeId) -> Self {
        let bases: Vec<&'static ModelSchema> =
            declaration.bases.iter().map(|base| base()).collect();
        let attributes = discover_attributes(declaration, &bases);

        Self {
            name: declaration.name,
            path: declaration.path,
            type_id,
            eq_attributes: partition(&attributes, NodeFlags::EQ),
            repr_attributes: partition(&attributes, NodeFlags::REPR),
            child_attributes: partition(&attributes, NodeFlags::WALK),
            bases,
            attributes,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Direct ancestors.
    #[must_use]
    pub fn bases(&self) -> &[&'static Self] {
        &self.bases
    }

    /// Every annotated attribute (own and inherited), sorted by name.
    #[must_use]
    pub fn attributes(&self) -> &[SchemaAttribute] {
        &self.attributes
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&SchemaAttribute> {
        self.attributes
            .binary_search_by(|attr| attr.name.cmp(name))
            .ok()
            .map(|index| &self.attributes[index])
    }

    #[must_use]
    pub fn eq_attributes(&self) -> &[&'static str] {
        &self.eq_attributes
    }

    #[must_use]
    pub fn repr_attributes(&self) -> &[&'static str] {
        &self.repr_attributes
    }

    #[must_use]
    pub fn child_attributes(&self) -> &[&'static str] {
        &self.child_attributes
    }

    /// Directed subtype check: is `self` the same type as `ancestor`, or
    /// does it descend from it through any chain of bases?
    #[must_use]
    pub fn is_subtype_of(&self, ancestor: &Self) -> bool {
        self.type_id == ancestor.type_id
            || self.bases.iter().any(|base| base.is_subtype_of(ancestor))
    }
}

// discover_attributes
// own attributes shadow inherited ones; earlier bases shadow later ones
fn discover_attributes(
    declaration: &Declaration,
    bases: &[&'static ModelSchema],
) -> Vec<SchemaAttribute> {
    let mut found = BTreeMap::new();

    for decl in declaration.attributes {
        found.entry(decl.name).or_insert(SchemaAttribute {
            name: decl.name,
            flags: decl.flags,
            owner: declaration.name,
        });
    }

    for base in bases {
        for attr in base.attributes() {
            found.entry(attr.name).or_insert(*attr);
        }
    }

    found.into_values().collect()
}

/// Names of every attribute carrying `flag`, preserving input order.
#[must_use]
pub fn partition(attributes: &[SchemaAttribute], flag: NodeFlags) -> Vec<&'static str> {
    attributes
        .iter()
        .filter(|attr| attr.flags.contains(flag))
        .map(|attr| attr.name)
        .collect()
}

///
/// TESTS
///
