//! Core data structures for the scale hierarchy.

use std::collections::{BTreeMap, HashMap};

/// A fixed weight placed on a pan, in arbitrary units.
pub type Mass = u64;

/// Identifier of a scale; resolved by name lookup, never by address.
pub type ScaleName = String;

/// Content of one pan: a fixed mass or a reference to a nested scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pan {
    Mass(Mass),
    Scale(ScaleName),
}

/// A two-pan balance scale. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    pub left: Pan,
    pub right: Pan,
}

/// Validated scale hierarchy: name-keyed scales plus the unique root.
///
/// Only the parser constructs this type, so every instance satisfies the
/// structural invariants: unique names, no dangling references, every
/// non-root scale referenced by exactly one parent, non-empty.
#[derive(Debug, Clone)]
pub struct ScaleTree {
    scales: HashMap<ScaleName, Scale>,
    root: ScaleName,
}

impl ScaleTree {
    pub(crate) fn new(scales: HashMap<ScaleName, Scale>, root: ScaleName) -> Self {
        Self { scales, root }
    }

    /// Name of the unique scale no other scale references.
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn get(&self, name: &str) -> Option<&Scale> {
        self.scales.get(name)
    }

    /// Number of declared scales.
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

/// Masses to add to the left and right pan to balance one scale.
/// At most one side is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BalanceMasses {
    pub left: Mass,
    pub right: Mass,
}

/// One entry per scale in the tree; BTreeMap so iteration is ascending
/// by scale name, which is the output order.
pub type BalanceReport = BTreeMap<ScaleName, BalanceMasses>;
