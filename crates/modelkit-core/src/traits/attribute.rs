use crate::{error::ModelError, ops, repr, repr::ReprContext, traits::Node};
use derive_more::Deref;
use std::{
    any::Any,
    fmt::{self, Write},
    hash::{Hash, Hasher},
    rc::Rc,
    sync::Arc,
};

///
/// Attribute
///
/// Object-safe contract for any value that can sit behind an annotated
/// attribute. Equality only holds between values of the same concrete type,
/// so `1_u32` and `"1".to_string()` never compare equal.
///

pub trait Attribute {
    /// The concrete value, looking through references and smart pointers.
    fn value_any(&self) -> &dyn Any;

    fn attr_eq(&self, other: &dyn Attribute) -> Result<bool, ModelError>;

    /// Feed this value to `state`; errors if the value cannot be hashed.
    fn attr_hash(&self, state: &mut dyn Hasher) -> Result<(), ModelError>;

    /// Write the textual form, threading the cycle guard through `ctx`.
    fn render(&self, ctx: &mut ReprContext<'_>) -> fmt::Result;

    /// The model behind this value, if it is one.
    fn as_node(&self) -> Option<&dyn Node> {
        None
    }

    /// Call `f` for every model directly held by this value.
    /// `route` holds one index per sequence level, outermost first.
    fn visit_nodes(&self, _f: &mut dyn FnMut(&[usize], &dyn Node)) {}
}

///
/// AttrRef
///
/// One attribute read. Borrowed fields and computed accessor results share
/// this shape.
///

#[derive(Deref)]
#[deref(forward)]
pub struct AttrRef<'a>(Box<dyn Attribute + 'a>);

impl<'a> AttrRef<'a> {
    pub fn new<V: Attribute + 'a>(value: V) -> Self {
        Self(Box::new(value))
    }
}

impl fmt::Debug for AttrRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(&mut ReprContext::new(f))
    }
}

// same_value
// downcast comparison for leaf values
fn same_value<T: PartialEq + 'static>(value: &T, other: &dyn Attribute) -> bool {
    other
        .value_any()
        .downcast_ref::<T>()
        .is_some_and(|other| value == other)
}

// ============================================================================
// Scalars
// ============================================================================

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Attribute for $ty {
                fn value_any(&self) -> &dyn Any {
                    self
                }

                fn attr_eq(&self, other: &dyn Attribute) -> Result<bool, ModelError> {
                    Ok(same_value(self, other))
                }

                fn attr_hash(&self, mut state: &mut dyn Hasher) -> Result<(), ModelError> {
                    self.hash(&mut state);
                    Ok(())
                }

                fn render(&self, ctx: &mut ReprContext<'_>) -> fmt::Result {
                    write!(ctx, "{self}")
                }
            }
        )*
    };
}

impl_scalar!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

// floats hash their bit pattern; -0.0 is folded into 0.0 to match `==`
macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Attribute for $ty {
                fn value_any(&self) -> &dyn Any {
                    self
                }

                fn attr_eq(&self, other: &dyn Attribute) -> Result<bool, ModelError> {
                    Ok(same_value(self, other))
                }

                fn attr_hash(&self, mut state: &mut dyn Hasher) -> Result<(), ModelError> {
                    let value = if *self == 0.0 { 0.0 } else { *self };
                    value.to_bits().hash(&mut state);

                    Ok(())
                }

                fn render(&self, ctx: &mut ReprContext<'_>) -> fmt::Result {
                    write!(ctx, "{self:?}")
                }
            }
        )*
    };
}

impl_float!(f32, f64);

// text is quoted
macro_rules! impl_text {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Attribute for $ty {
                fn value_any(&self) -> &dyn Any {
                    self
                }

                fn attr_eq(&self, other: &dyn Attribute) -> Result<bool, ModelError> {
                    Ok(same_value(self, other))
                }

                fn attr_hash(&self, mut state: &mut dyn Hasher) -> Result<(), ModelError> {
                    self.hash(&mut state);
                    Ok(())
                }

                fn render(&self, ctx: &mut ReprContext<'_>) -> fmt::Result {
                    write!(ctx, "'{self}'")
                }
            }
        )*
    };
}

impl_text!(String, char);

impl Attribute for () {
    fn value_any(&self) -> &dyn Any {
        self
    }

    fn attr_eq(&self, other: &dyn Attribute) -> Result<bool, ModelError> {
        Ok(same_value(self, other))
    }

    fn attr_hash(&self, mut state: &mut dyn Hasher) -> Result<(), ModelError> {
        self.hash(&mut state);
        Ok(())
    }

    fn render(&self, ctx: &mut ReprContext<'_>) -> fmt::Result {
        ctx.write_str("()")
    }
}

// ============================================================================
// Containers
// ============================================================================

impl<T: Attribute + 'static> Attribute for Option<T> {
    fn value_any(&self) -> &dyn Any {
        self
    }

    fn attr_eq(&self, other: &dyn Attribute) -> Result<bool, ModelError> {
        match (self, other.value_any().downcast_ref::<Self>()) {
            (None, Some(None)) => Ok(true),
            (Some(ours), Some(Some(theirs))) => ours.attr_eq(theirs),
            _ => Ok(false),
        }
    }

    fn attr_hash(&self, mut state: &mut dyn Hasher) -> Result<(), ModelError> {
        self.is_some().hash(&mut state);

        match self {
            Some(value) => value.attr_hash(state),
            None => Ok(()),
        }
    }

    fn render(&self, ctx: &mut ReprContext<'_>) -> fmt::Result {
        match self {
            Some(value) => value.render(ctx),
            None => ctx.write_str("None"),
        }
    }

    fn as_node(&self) -> Option<&dyn Node> {
        self.as_ref().and_then(Attribute::as_node)
    }

    fn visit_nodes(&self, f: &mut dyn FnMut(&[usize], &dyn Node)) {
        if let Some(value) = self {
            value.visit_nodes(f);
        }
    }
}

impl<T: Attribute + 'static> Attribute for Vec<T> {
    fn value_any(&self) -> &dyn Any {
        self
    }

    fn attr_eq(&self, other: &dyn Attribute) -> Result<bool, ModelError> {
        let Some(other) = other.value_any().downcast_ref::<Self>() else {
            return Ok(false);
        };

        if self.len() != other.len() {
            return Ok(false);
        }

        for (ours, theirs) in self.iter().zip(other) {
            if !ours.attr_eq(theirs)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn attr_hash(&self, state: &mut dyn Hasher) -> Result<(), ModelError> {
        state.write_usize(self.len());

        for item in self {
            item.attr_hash(state)?;
        }

        Ok(())
    }

    fn render(&self, ctx: &mut ReprContext<'_>) -> fmt::Result {
        ctx.write_char('[')?;

        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                ctx.write_str(", ")?;
            }
            item.render(ctx)?;
        }

        ctx.write_char(']')
    }

    fn visit_nodes(&self, f: &mut dyn FnMut(&[usize], &dyn Node)) {
        for (index, item) in self.iter().enumerate() {
            item.visit_nodes(&mut |inner, node| {
                let mut route = Vec::with_capacity(inner.len() + 1);
                route.push(index);
                route.extend_from_slice(inner);

                f(&route, node);
            });
        }
    }
}

// ============================================================================
// Pointers
// ============================================================================
//
// References and smart pointers are transparent: they compare, hash and
// render exactly like the value they point at.
//

macro_rules! impl_pointer {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Attribute + ?Sized> Attribute for $ptr<T> {
                fn value_any(&self) -> &dyn Any {
                    (**self).value_any()
                }

                fn attr_eq(&self, other: &dyn Attribute) -> Result<bool, ModelError> {
                    (**self).attr_eq(other)
                }

                fn attr_hash(&self, state: &mut dyn Hasher) -> Result<(), ModelError> {
                    (**self).attr_hash(state)
                }

                fn render(&self, ctx: &mut ReprContext<'_>) -> fmt::Result {
                    (**self).render(ctx)
                }

                fn as_node(&self) -> Option<&dyn Node> {
                    (**self).as_node()
                }

                fn visit_nodes(&self, f: &mut dyn FnMut(&[usize], &dyn Node)) {
                    (**self).visit_nodes(f);
                }
            }
        )*
    };
}

impl_pointer!(Box, Rc, Arc);

impl<T: Attribute + ?Sized> Attribute for &T {
    fn value_any(&self) -> &dyn Any {
        (**self).value_any()
    }

    fn attr_eq(&self, other: &dyn Attribute) -> Result<bool, ModelError> {
        (**self).attr_eq(other)
    }

    fn attr_hash(&self, state: &mut dyn Hasher) -> Result<(), ModelError> {
        (**self).attr_hash(state)
    }

    fn render(&self, ctx: &mut ReprContext<'_>) -> fmt::Result {
        (**self).render(ctx)
    }

    fn as_node(&self) -> Option<&dyn Node> {
        (**self).as_node()
    }

    fn visit_nodes(&self, f: &mut dyn FnMut(&[usize], &dyn Node)) {
        (**self).visit_nodes(f);
    }
}

// ============================================================================
// Type-erased models
// ============================================================================

impl Attribute for dyn Node + '_ {
    fn value_any(&self) -> &dyn Any {
        self.as_any()
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

///
/// TESTS
///
