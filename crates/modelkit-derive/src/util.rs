use syn::{GenericParam, Generics, Path, parse_quote};

/// Copy of `generics` where every type parameter must itself be an
/// attribute value, so fields of that type can be read through `Node`.
pub fn with_attribute_bounds(generics: &Generics, krate: &Path) -> Generics {
    let mut generics = generics.clone();
    let params: Vec<_> = generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(ty) => Some(ty.ident.clone()),
            _ => None,
        })
        .collect();

    let where_clause = generics.make_where_clause();
    for param in params {
        where_clause
            .predicates
            .push(parse_quote!(#param: #krate::traits::Attribute + 'static));
    }

    generics
}

///
/// TESTS
///
