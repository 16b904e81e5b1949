//! ## Crate layout
//! - `schema`: attribute flags, declarations, discovery and the per-type registry.
//! - `traits`: `Node`, `Model` and the `Attribute` value contract.
//! - `ops`: synthesized equality and hash.
//! - `repr`: cycle-safe representation.
//! - `visit`: depth-first traversal over child attributes.
//!
//! Annotate a struct with `#[derive(Model)]` and its fields with `#[node]`;
//! the `prelude` brings in the derive together with the runtime traits.

pub use modelkit_core::{ModelError, error, ops, repr, schema, traits, visit};

#[cfg(feature = "derive")]
pub use modelkit_derive::Model;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        error::ModelError,
        schema::{ModelSchema, NodeFlags},
        traits::{AttrRef, Attribute, Model, ModelExt as _, Node},
        visit::{PathSegment, Visitor, walk},
    };

    #[cfg(feature = "derive")]
    pub use modelkit_derive::Model;
}
