//! Cycle-safe representation.
//!
//! `Type(a=..., b=...)` over `repr_attributes`. The set of instances being
//! rendered lives in a [`ReprContext`] created per top-level call and passed
//! down explicitly, so concurrent or nested renders never share it.

use crate::{ops::Identity, traits::Node};
use std::fmt::{self, Write};

/// Written in place of an instance that is already being rendered.
pub const PLACEHOLDER: &str = "...";

///
/// ReprContext
///

pub struct ReprContext<'a> {
    out: &'a mut dyn Write,
    active: Vec<Identity>,
}

impl<'a> ReprContext<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self {
            out,
            active: Vec::new(),
        }
    }

    /// Number of instances currently being rendered.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.active.len()
    }

    fn is_active(&self, identity: Identity) -> bool {
        self.active.contains(&identity)
    }
}

impl Write for ReprContext<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(s)
    }
}

/// `Debug`/`Display` body for derived models.
pub fn fmt_node(node: &dyn Node, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    render_node(node, &mut ReprContext::new(f))
}

/// Render `node` into a fresh `String`.
///
/// A `String` never refuses a write, so the only failure left is an
/// [`Attribute::render`](crate::traits::Attribute::render) that returns
/// `fmt::Error` itself. Rendering stops there and the text written so far
/// is returned.
#[must_use]
pub fn to_repr(node: &dyn Node) -> String {
    let mut out = String::new();

    // a failing attribute truncates the output
    let _ = render_node(node, &mut ReprContext::new(&mut out));

    out
}

/// Render `node` inside an ongoing representation.
pub fn render_node(node: &dyn Node, ctx: &mut ReprContext<'_>) -> fmt::Result {
    let identity = Identity::of(node);
    if ctx.is_active(identity) {
        return ctx.write_str(PLACEHOLDER);
    }

    ctx.active.push(identity);
    let result = render_attributes(node, ctx);
    ctx.active.pop();

    result
}

// render_attributes
// an attribute the instance cannot produce renders as None
fn render_attributes(node: &dyn Node, ctx: &mut ReprContext<'_>) -> fmt::Result {
    let schema = node.model_schema();

    ctx.write_str(schema.name())?;
    ctx.write_char('(')?;

    for (index, &name) in schema.repr_attributes().iter().enumerate() {
        if index > 0 {
            ctx.write_str(", ")?;
        }
        write!(ctx, "{name}=")?;

        match node.attribute(name) {
            Some(value) => value.render(ctx)?,
            None => ctx.write_str("None")?,
        }
    }

    ctx.write_char(')')
}

///
/// TESTS
///
