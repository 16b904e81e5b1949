use darling::{Error as DarlingError, FromMeta, util::Flag};
use syn::{Ident, Path, spanned::Spanned};

///
/// Flags
///
/// Resolved participation of one attribute.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Flags {
    pub walk: bool,
    pub eq: bool,
    pub repr: bool,
}

impl Flags {
    pub const NODE: Self = Self::new(true, true, true);
    pub const DERIVED: Self = Self::new(false, false, true);
    pub const VALUE: Self = Self::new(false, true, true);

    const fn new(walk: bool, eq: bool, repr: bool) -> Self {
        Self { walk, eq, repr }
    }
}

///
/// NodeArgs
///
/// `#[node(...)]`. A preset picks the starting flags; explicit flags win.
///

#[derive(Clone, Debug, Default, FromMeta)]
pub struct NodeArgs {
    pub walk: Option<bool>,
    pub eq: Option<bool>,
    pub repr: Option<bool>,

    #[darling(default)]
    pub derived: Flag,

    #[darling(default)]
    pub value: Flag,
}

impl NodeArgs {
    pub fn resolve<S: Spanned>(&self, span: &S) -> Result<Flags, DarlingError> {
        let preset = match (self.derived.is_present(), self.value.is_present()) {
            (true, true) => {
                return Err(
                    DarlingError::custom("`derived` and `value` are mutually exclusive")
                        .with_span(span),
                );
            }
            (true, false) => Flags::DERIVED,
            (false, true) => Flags::VALUE,
            (false, false) => Flags::NODE,
        };

        Ok(Flags {
            walk: self.walk.unwrap_or(preset.walk),
            eq: self.eq.unwrap_or(preset.eq),
            repr: self.repr.unwrap_or(preset.repr),
        })
    }
}

///
/// AccessorArgs
///
/// `accessor(ident = "method", ...)` inside a struct-level `#[model(...)]`.
///

#[derive(Clone, Debug, FromMeta)]
pub struct AccessorArgs {
    pub ident: Ident,
    pub walk: Option<bool>,
    pub eq: Option<bool>,
    pub repr: Option<bool>,

    #[darling(default)]
    pub derived: Flag,

    #[darling(default)]
    pub value: Flag,
}

impl AccessorArgs {
    pub fn node_args(&self) -> NodeArgs {
        NodeArgs {
            walk: self.walk,
            eq: self.eq,
            repr: self.repr,
            derived: self.derived,
            value: self.value,
        }
    }
}

///
/// ModelArgs
///

#[derive(Debug, Default, FromMeta)]
pub struct ModelArgs {
    pub name: Option<String>,

    #[darling(rename = "crate")]
    pub krate: Option<Path>,

    #[darling(multiple, rename = "accessor")]
    pub accessors: Vec<AccessorArgs>,
}

///
/// FieldArgs
///
/// Field-level `#[model(...)]`.
///

#[derive(Debug, Default, FromMeta)]
pub struct FieldArgs {
    #[darling(default)]
    pub base: Flag,
}

///
/// TESTS
///
