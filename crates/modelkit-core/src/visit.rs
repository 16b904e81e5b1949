use crate::{error::ModelError, ops::Identity, traits::Node};
use std::fmt;

// ============================================================================
// Path
// ============================================================================

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PathSegment {
    Field(&'static str),
    Index(usize),
}

impl From<&'static str> for PathSegment {
    fn from(s: &'static str) -> Self {
        Self::Field(s)
    }
}

impl From<usize> for PathSegment {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

/// Render a path as `a.b[2].c`.
#[must_use]
pub fn render_path(path: &[PathSegment]) -> String {
    use std::fmt::Write;

    let mut out = String::new();

    for (index, seg) in path.iter().enumerate() {
        match seg {
            PathSegment::Field(s) => {
                if index > 0 {
                    out.push('.');
                }
                out.push_str(s);
            }
            PathSegment::Index(i) => {
                let _ = write!(out, "[{i}]");
            }
        }
    }

    out
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(s) => f.write_str(s),
            Self::Index(i) => write!(f, "[{i}]"),
        }
    }
}

// ============================================================================
// Visitor
// ============================================================================

///
/// Visitor
///
/// Callbacks for a depth-first walk over child attributes.
/// `path` is the route from the root to `node`.
///

pub trait Visitor {
    fn enter(&mut self, path: &[PathSegment], node: &dyn Node);

    fn exit(&mut self, _path: &[PathSegment], _node: &dyn Node) {}
}

// ============================================================================
// Traversal
// ============================================================================

/// Visit `root` and every model reachable through `child_attributes`.
///
/// Children are visited in canonical attribute order; sequence elements in
/// index order. An instance already on the current path is skipped.
pub fn walk(root: &dyn Node, visitor: &mut dyn Visitor) -> Result<(), ModelError> {
    Walker {
        visitor,
        path: Vec::new(),
        active: Vec::new(),
    }
    .visit(root)
}

struct Walker<'v> {
    visitor: &'v mut dyn Visitor,
    path: Vec<PathSegment>,
    active: Vec<Identity>,
}

impl Walker<'_> {
    fn visit(&mut self, node: &dyn Node) -> Result<(), ModelError> {
        let identity = Identity::of(node);
        if self.active.contains(&identity) {
            return Ok(());
        }

        self.active.push(identity);
        self.visitor.enter(&self.path, node);
        let result = self.visit_children(node);
        self.visitor.exit(&self.path, node);
        self.active.pop();

        result
    }

    fn visit_children(&mut self, node: &dyn Node) -> Result<(), ModelError> {
        for &name in node.child_attributes() {
            let value = node.attribute(name).ok_or_else(|| {
                ModelError::missing_attribute(node.model_schema().name(), name)
            })?;

            self.path.push(PathSegment::Field(name));

            let mut outcome = Ok(());
            value.visit_nodes(&mut |route, child| {
                if outcome.is_err() {
                    return;
                }

                let depth = self.path.len();
                self.path
                    .extend(route.iter().copied().map(PathSegment::Index));
                outcome = self.visit(child);
                self.path.truncate(depth);
            });

            self.path.pop();
            outcome?;
        }

        Ok(())
    }
}

///
/// TESTS
///
