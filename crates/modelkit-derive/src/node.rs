use crate::args::{FieldArgs, Flags, ModelArgs, NodeArgs};
use darling::{Error as DarlingError, FromMeta, ast::NestedMeta};
use syn::{
    Attribute, Data, DeriveInput, Fields, Generics, Ident, Meta, Path, Type, ext::IdentExt,
    parse_quote,
};

///
/// ModelDef
///
/// Everything the expansion needs, validated.
///

pub struct ModelDef {
    pub ident: Ident,
    pub generics: Generics,
    pub name: String,
    pub krate: Path,
    pub attributes: Vec<AttrDef>,
    pub bases: Vec<BaseDef>,
}

///
/// AttrDef
///

pub struct AttrDef {
    pub name: String,
    pub source: Source,
    pub flags: Flags,
}

///
/// Source
///
/// Where an attribute value is read from.
///

pub enum Source {
    Field(Ident),
    Accessor(Ident),
}

impl Source {
    const fn ident(&self) -> &Ident {
        match self {
            Self::Field(ident) | Self::Accessor(ident) => ident,
        }
    }
}

///
/// BaseDef
///
/// A `#[model(base)]` field.
///

pub struct BaseDef {
    pub member: Ident,
    pub ty: Type,
}

impl ModelDef {
    pub fn from_input(input: &DeriveInput) -> Result<Self, DarlingError> {
        let fields: Vec<_> = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named.named.iter().collect(),
                Fields::Unit => Vec::new(),
                Fields::Unnamed(_) => {
                    return Err(DarlingError::custom(
                        "Model can only be derived for structs with named fields",
                    )
                    .with_span(&data.fields));
                }
            },
            _ => {
                return Err(
                    DarlingError::custom("Model can only be derived for structs")
                        .with_span(&input.ident),
                );
            }
        };

        let args = ModelArgs::from_list(&nested_args(&input.attrs, "model")?)?;
        let mut attributes = Vec::new();
        let mut bases = Vec::new();

        for field in fields {
            let Some(ident) = field.ident.clone() else {
                continue;
            };
            let node = node_args(&field.attrs)?;
            let field_args = FieldArgs::from_list(&nested_args(&field.attrs, "model")?)?;

            match (node, field_args.base.is_present()) {
                (Some(_), true) => {
                    return Err(DarlingError::custom(
                        "a base field cannot also be a #[node] attribute",
                    )
                    .with_span(&ident));
                }
                (Some(node), false) => attributes.push(AttrDef {
                    name: ident.unraw().to_string(),
                    flags: node.resolve(&ident)?,
                    source: Source::Field(ident),
                }),
                (None, true) => bases.push(BaseDef {
                    member: ident,
                    ty: field.ty.clone(),
                }),
                (None, false) => {}
            }
        }

        for accessor in &args.accessors {
            attributes.push(AttrDef {
                name: accessor.ident.unraw().to_string(),
                flags: accessor.node_args().resolve(&accessor.ident)?,
                source: Source::Accessor(accessor.ident.clone()),
            });
        }

        check_unique(&attributes)?;

        Ok(Self {
            ident: input.ident.clone(),
            generics: input.generics.clone(),
            name: args
                .name
                .unwrap_or_else(|| input.ident.unraw().to_string()),
            krate: args.krate.unwrap_or_else(|| parse_quote!(::modelkit)),
            attributes,
            bases,
        })
    }
}

// node_args
// None when the field carries no #[node]
fn node_args(attrs: &[Attribute]) -> Result<Option<NodeArgs>, DarlingError> {
    let mut found = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("node")) {
        if found.is_some() {
            return Err(DarlingError::custom("duplicate #[node] attribute").with_span(attr));
        }

        let args = match &attr.meta {
            Meta::Path(_) => NodeArgs::default(),
            Meta::List(list) => {
                NodeArgs::from_list(&NestedMeta::parse_meta_list(list.tokens.clone())?)?
            }
            Meta::NameValue(_) => {
                return Err(
                    DarlingError::custom("expected #[node] or #[node(...)]").with_span(attr)
                );
            }
        };
        found = Some(args);
    }

    Ok(found)
}

// nested_args
// merges every #[name(...)] into one list
fn nested_args(attrs: &[Attribute], name: &str) -> Result<Vec<NestedMeta>, DarlingError> {
    let mut nested = Vec::new();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(name)) {
        let Meta::List(list) = &attr.meta else {
            return Err(
                DarlingError::custom(format!("expected #[{name}(...)]")).with_span(attr)
            );
        };
        nested.extend(NestedMeta::parse_meta_list(list.tokens.clone())?);
    }

    Ok(nested)
}

fn check_unique(attributes: &[AttrDef]) -> Result<(), DarlingError> {
    for (index, attr) in attributes.iter().enumerate() {
        if attributes[..index].iter().any(|prev| prev.name == attr.name) {
            return Err(DarlingError::custom(format!(
                "duplicate attribute '{}'",
                attr.name
            ))
            .with_span(attr.source.ident()));
        }
    }

    Ok(())
}

///
/// TESTS
///
