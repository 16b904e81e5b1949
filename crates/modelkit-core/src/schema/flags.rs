use bitflags::bitflags;

bitflags! {
    ///
    /// NodeFlags
    ///
    /// Participation flags for one annotated attribute.
    /// Each flag routes the attribute into exactly one schema list.
    ///

    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct NodeFlags: u8 {
        /// Listed in `child_attributes` for tree walkers.
        const WALK = 0b001;
        /// Compared by equality and fed to the hash.
        const EQ = 0b010;
        /// Rendered by the representation.
        const REPR = 0b100;
    }
}

impl NodeFlags {
    /// Plain `#[node]`: walkable, eq-able and representable.
    pub const NODE: Self = Self::all();

    /// `#[node(derived)]`: computed from other attributes, rendered only.
    pub const DERIVED: Self = Self::REPR;

    /// `#[node(value)]`: part of identity but never walked as a child.
    pub const VALUE: Self = Self::EQ.union(Self::REPR);

    #[must_use]
    pub const fn new(walk: bool, eq: bool, repr: bool) -> Self {
        let mut bits = 0;

        if walk {
            bits |= Self::WALK.bits();
        }
        if eq {
            bits |= Self::EQ.bits();
        }
        if repr {
            bits |= Self::REPR.bits();
        }

        Self::from_bits_retain(bits)
    }

    #[must_use]
    pub const fn is_walkable(self) -> bool {
        self.contains(Self::WALK)
    }

    #[must_use]
    pub const fn is_eq_able(self) -> bool {
        self.contains(Self::EQ)
    }

    #[must_use]
    pub const fn is_representable(self) -> bool {
        self.contains(Self::REPR)
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::NODE
    }
}

///
/// TESTS
///
