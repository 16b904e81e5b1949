//! Process-wide schema registry.
//!
//! Schemas are discovered on first use and leaked, so every later lookup
//! hands out the same `&'static ModelSchema`. Discovery runs outside the lock
//! because building a schema resolves (and may register) its bases.

use crate::{schema::ModelSchema, traits::Model};
use std::{
    any::TypeId,
    collections::HashMap,
    sync::{LazyLock, RwLock},
};

///
/// REGISTRY
///

static REGISTRY: LazyLock<RwLock<HashMap<TypeId, &'static ModelSchema>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Schema of `T`, discovered on first call.
#[must_use]
pub fn schema_of<T: Model>() -> &'static ModelSchema {
    let type_id = TypeId::of::<T>();

    get_or_build(type_id, || ModelSchema::discover(&T::DECLARATION, type_id))
}

/// Look up `type_id`, building and registering the schema if absent.
///
/// When two threads race on the same type the first registration wins and
/// the other build is discarded.
pub fn get_or_build(
    type_id: TypeId,
    build: impl FnOnce() -> ModelSchema,
) -> &'static ModelSchema {
    if let Some(schema) = lookup(type_id) {
        tracing::trace!(model = schema.name(), "schema registry hit");
        return schema;
    }

    let built = build();

    let mut registry = REGISTRY
        .write()
        .expect("schema registry RwLock poisoned while acquiring write lock");

    *registry.entry(type_id).or_insert_with(|| {
        let schema: &'static ModelSchema = Box::leak(Box::new(built));

        tracing::debug!(
            model = schema.name(),
            path = schema.path(),
            attributes = schema.attributes().len(),
            eq = schema.eq_attributes().len(),
            repr = schema.repr_attributes().len(),
            children = schema.child_attributes().len(),
            "registered model schema"
        );

        schema
    })
}

/// Registered schema for `type_id`, if any.
#[must_use]
pub fn lookup(type_id: TypeId) -> Option<&'static ModelSchema> {
    REGISTRY
        .read()
        .expect("schema registry RwLock poisoned while acquiring read lock")
        .get(&type_id)
        .copied()
}

///
/// TESTS
///
