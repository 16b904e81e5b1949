use proc_macro::TokenStream;

mod args;
mod model;
mod node;
mod util;

/// Derive the model surface for a struct with named fields (or a unit struct).
///
/// Field attributes:
/// - `#[node]` walks, compares and renders the field.
/// - `#[node(derived)]` only renders it.
/// - `#[node(value)]` compares and renders it but never walks it.
/// - `#[node(walk = .., eq = .., repr = ..)]` overrides any of the above.
/// - `#[model(base)]` inherits the field's model type.
///
/// Struct attributes:
/// - `#[model(name = "..")]` sets the name used by the representation.
/// - `#[model(accessor(ident = "method", ..))]` annotates a `&self` method
///   with the same options as `#[node]`.
/// - `#[model(crate = "..")]` overrides the path to the `modelkit` crate.
///
/// Unannotated fields take no part in equality, hashing, representation or
/// traversal.
#[proc_macro_derive(Model, attributes(model, node))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    model::derive_model(input.into()).into()
}
