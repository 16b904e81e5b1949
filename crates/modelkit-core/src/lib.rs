//! Core runtime for modelkit: attribute flags, schema discovery and
//! partition, and the synthesized equality, hash, representation and
//! traversal operations that `#[derive(Model)]` wires into each type.

pub mod error;
pub mod ops;
pub mod repr;
pub mod schema;
pub mod traits;
pub mod visit;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::ModelError;

