//! Synthesized equality and hash.
//!
//! Both operations walk the same `eq_attributes` list in the same order, so
//! two instances that compare equal always hash equal.

use crate::{
    error::ModelError,
    traits::{AttrRef, Attribute, Node},
};
use std::{
    any::TypeId,
    hash::Hasher,
    ptr,
};

///
/// Identity
///
/// Address plus concrete type. The type is part of the key because a model
/// embedded as the first field of another shares its address.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Identity {
    addr: usize,
    type_id: TypeId,
}

impl Identity {
    pub(crate) fn of(node: &dyn Node) -> Self {
        Self {
            addr: ptr::from_ref(node).cast::<()>().addr(),
            type_id: node.as_any().type_id(),
        }
    }
}

/// True when `a` and `b` are the very same instance.
#[must_use]
pub fn is_same_instance(a: &dyn Node, b: &dyn Node) -> bool {
    Identity::of(a) == Identity::of(b)
}

/// Directed structural equality.
///
/// 1. the same instance is equal without reading any attribute;
/// 2. `other` must be `this`'s type or a subtype of it;
/// 3. every attribute in `this`'s `eq_attributes` must compare equal.
///
/// An attribute that `other` cannot produce is an error, not inequality.
pub fn try_eq(this: &dyn Node, other: &dyn Node) -> Result<bool, ModelError> {
    if is_same_instance(this, other) {
        return Ok(true);
    }

    let schema = this.model_schema();
    if !other.model_schema().is_subtype_of(schema) {
        return Ok(false);
    }

    for &name in schema.eq_attributes() {
        let ours = read(this, name)?;
        let theirs = read(other, name)?;

        if !ours.attr_eq(&*theirs)? {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Feed every `eq_attributes` value to `state`, in schema order.
pub fn try_hash(this: &dyn Node, state: &mut dyn Hasher) -> Result<(), ModelError> {
    for &name in this.model_schema().eq_attributes() {
        read(this, name)?.attr_hash(state)?;
    }

    Ok(())
}

/// Equality of a model against an arbitrary attribute value.
/// Non-model values are simply unequal.
pub fn attr_eq_node(this: &dyn Node, other: &dyn Attribute) -> Result<bool, ModelError> {
    match other.as_node() {
        Some(other) => try_eq(this, other),
        None => Ok(false),
    }
}

/// `PartialEq::eq` body for derived models.
///
/// # Panics
/// When the structural comparison fails, since `PartialEq` cannot return it.
#[must_use]
pub fn structural_eq(this: &dyn Node, other: &dyn Node) -> bool {
    match try_eq(this, other) {
        Ok(equal) => equal,
        Err(err) => panic!("{} equality failed: {err}", this.model_schema().name()),
    }
}

/// `Hash::hash` body for derived models.
///
/// # Panics
/// When an eq attribute cannot be hashed, since `Hash` cannot return it.
pub fn structural_hash<H: Hasher>(this: &dyn Node, state: &mut H) {
    if let Err(err) = try_hash(this, state) {
        panic!("{} hash failed: {err}", this.model_schema().name());
    }
}

// read
fn read<'a>(node: &'a dyn Node, name: &'static str) -> Result<AttrRef<'a>, ModelError> {
    node.attribute(name)
        .ok_or_else(|| ModelError::missing_attribute(node.model_schema().name(), name))
}

///
/// TESTS
///
