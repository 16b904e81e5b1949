//! Hand-written models shaped like `#[derive(Model)]` output, so the runtime
//! can be tested without the proc-macro.

use crate::{
    error::ModelError,
    ops, repr,
    repr::ReprContext,
    schema::{AttributeDecl, Declaration, ModelSchema, NodeFlags},
    traits::{AttrRef, Attribute, Model, Node},
};
use std::{any::Any, cell::Cell, fmt, hash::Hasher};

macro_rules! impl_fixture {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Attribute for $ty {
                fn value_any(&self) -> &dyn Any {
                    self
                }

                fn attr_eq(&self, other: &dyn Attribute) -> Result<bool, ModelError> {
                    ops::attr_eq_node(self, other)
                }

                fn attr_hash(&self, state: &mut dyn Hasher) -> Result<(), ModelError> {
                    ops::try_hash(self, state)
                }

                fn render(&self, ctx: &mut ReprContext<'_>) -> fmt::Result {
                    repr::render_node(self, ctx)
                }

                fn as_node(&self) -> Option<&dyn Node> {
                    Some(self)
                }

                fn visit_nodes(&self, f: &mut dyn FnMut(&[usize], &dyn Node)) {
                    f(&[], self);
                }
            }
        )*
    };
}

impl_fixture!(Point, Tagged, Hollow, Counting, Looping, Tree);

///
/// Point
///

pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Model for Point {
    const DECLARATION: Declaration = Declaration {
        name: "Point",
        path: "test_fixtures::Point",
        attributes: &[
            AttributeDecl::new("y", NodeFlags::NODE),
            AttributeDecl::new("x", NodeFlags::NODE),
        ],
        bases: &[],
    };
}

impl Node for Point {
    fn model_schema(&self) -> &'static ModelSchema {
        Self::schema()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn attribute(&self, name: &str) -> Option<AttrRef<'_>> {
        match name {
            "x" => Some(AttrRef::new(&self.x)),
            "y" => Some(AttrRef::new(&self.y)),
            _ => None,
        }
    }
}

///
/// Tagged
///
/// `inner` is laid out first so it shares the outer address.
///

#[repr(C)]
pub struct Tagged {
    inner: Point,
    tag: u8,
}

impl Tagged {
    pub const fn new(value: i32, tag: u8) -> Self {
        Self {
            inner: Point::new(value, value),
            tag,
        }
    }

    pub const fn inner(&self) -> &Point {
        &self.inner
    }
}

impl Model for Tagged {
    const DECLARATION: Declaration = Declaration {
        name: "Tagged",
        path: "test_fixtures::Tagged",
        attributes: &[
            AttributeDecl::new("inner", NodeFlags::NODE),
            AttributeDecl::new("tag", NodeFlags::VALUE),
        ],
        bases: &[],
    };
}

impl Node for Tagged {
    fn model_schema(&self) -> &'static ModelSchema {
        Self::schema()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn attribute(&self, name: &str) -> Option<AttrRef<'_>> {
        match name {
            "inner" => Some(AttrRef::new(&self.inner)),
            "tag" => Some(AttrRef::new(&self.tag)),
            _ => None,
        }
    }
}

///
/// Hollow
///
/// Claims to extend `Point` but cannot produce any attribute.
///

pub struct Hollow;

impl Model for Hollow {
    const DECLARATION: Declaration = Declaration {
        name: "Hollow",
        path: "test_fixtures::Hollow",
        attributes: &[],
        bases: &[<Point as Model>::schema],
    };
}

impl Node for Hollow {
    fn model_schema(&self) -> &'static ModelSchema {
        Self::schema()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn attribute(&self, _: &str) -> Option<AttrRef<'_>> {
        None
    }
}

///
/// Counting
///
/// Counts attribute reads.
///

#[derive(Default)]
pub struct Counting {
    reads: Cell<usize>,
}

impl Counting {
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl Model for Counting {
    const DECLARATION: Declaration = Declaration {
        name: "Counting",
        path: "test_fixtures::Counting",
        attributes: &[AttributeDecl::new("n", NodeFlags::NODE)],
        bases: &[],
    };
}

impl Node for Counting {
    fn model_schema(&self) -> &'static ModelSchema {
        Self::schema()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn attribute(&self, name: &str) -> Option<AttrRef<'_>> {
        self.reads.set(self.reads.get() + 1);

        match name {
            "n" => Some(AttrRef::new(self.reads.get())),
            _ => None,
        }
    }
}

///
/// Looping
///
/// `me` hands back the instance itself.
///

pub struct Looping {
    label: String,
}

impl Looping {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
        }
    }
}

impl Model for Looping {
    const DECLARATION: Declaration = Declaration {
        name: "Looping",
        path: "test_fixtures::Looping",
        attributes: &[
            AttributeDecl::new("me", NodeFlags::new(true, false, true)),
            AttributeDecl::new("label", NodeFlags::VALUE),
        ],
        bases: &[],
    };
}

impl Node for Looping {
    fn model_schema(&self) -> &'static ModelSchema {
        Self::schema()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn attribute(&self, name: &str) -> Option<AttrRef<'_>> {
        match name {
            "label" => Some(AttrRef::new(&self.label)),
            "me" => Some(AttrRef::new(self)),
            _ => None,
        }
    }
}

///
/// Tree
///

pub struct Tree {
    label: String,
    children: Vec<Self>,
}

impl Tree {
    pub fn new(label: &str, children: Vec<Self>) -> Self {
        Self {
            label: label.to_string(),
            children,
        }
    }

    pub fn leaf(label: &str) -> Self {
        Self::new(label, Vec::new())
    }
}

impl Model for Tree {
    const DECLARATION: Declaration = Declaration {
        name: "Tree",
        path: "test_fixtures::Tree",
        attributes: &[
            AttributeDecl::new("label", NodeFlags::VALUE),
            AttributeDecl::new("children", NodeFlags::NODE),
        ],
        bases: &[],
    };
}

impl Node for Tree {
    fn model_schema(&self) -> &'static ModelSchema {
        Self::schema()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn attribute(&self, name: &str) -> Option<AttrRef<'_>> {
        match name {
            "children" => Some(AttrRef::new(&self.children)),
            "label" => Some(AttrRef::new(&self.label)),
            _ => None,
        }
    }
}
