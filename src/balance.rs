//! Balancer: recursive post-order evaluation over a validated [`ScaleTree`].

use tracing::trace;

use crate::errors::{ScaleError, ScaleResult};
use crate::model::{BalanceMasses, BalanceReport, Mass, Pan, ScaleTree};

/// Compute the balancing masses for every scale in the tree.
///
/// Walks the tree depth-first from the root. Each scale is visited
/// exactly once (validation guarantees a single parent per scale), so the
/// report ends up with one entry per declared scale. Recursion depth
/// equals the tree height. On any failure the partial report is dropped.
pub fn balance(tree: &ScaleTree) -> ScaleResult<BalanceReport> {
    let mut report = BalanceReport::new();
    balance_scale(tree, tree.root(), &mut report)?;
    Ok(report)
}

/// Balance one scale and its sub-scales, returning the weight both pans
/// hold once the lighter side has been filled: `max(left, right)`.
fn balance_scale(tree: &ScaleTree, name: &str, report: &mut BalanceReport) -> ScaleResult<Mass> {
    let scale = tree
        .get(name)
        .ok_or_else(|| ScaleError::UnknownScale(name.to_string()))?;

    let left = resolve_pan(tree, &scale.left, report)?;
    let right = resolve_pan(tree, &scale.right, report)?;

    // saturating_sub is max(0, a - b) on unsigned values.
    let masses = BalanceMasses {
        left: right.saturating_sub(left),
        right: left.saturating_sub(right),
    };
    trace!(scale = name, left, right, "balanced");

    if report.insert(name.to_string(), masses).is_some() {
        return Err(ScaleError::DuplicateEntry(name.to_string()));
    }

    Ok(left.max(right))
}

/// Weight a pan contributes to its scale's comparison.
///
/// A referenced sub-scale contributes its effective weight
/// `2 * balanced + 1`: strictly heavier than either of its original sides
/// and odd, so parent-level comparisons never tie against a plain mass of
/// the same magnitude. It is a propagation convention, not a physical
/// mass, and is only computed here, at the point of reference; the root
/// never needs one. Masses near the top of the u64 range can push the
/// convention out of range, which is an error rather than a silent wrap.
fn resolve_pan(tree: &ScaleTree, pan: &Pan, report: &mut BalanceReport) -> ScaleResult<Mass> {
    match pan {
        Pan::Mass(mass) => Ok(*mass),
        Pan::Scale(name) => {
            let balanced = balance_scale(tree, name, report)?;
            balanced
                .checked_mul(2)
                .and_then(|weight| weight.checked_add(1))
                .ok_or_else(|| ScaleError::WeightOverflow(name.clone()))
        }
    }
}
