//! Structural audit of the tree invariants
//!
//! A violation reported here means corrupted internal state, not a
//! recoverable condition: ordinary operations cannot produce one. The
//! audit is read-only and exercised heavily by the test suite.

use thiserror::Error;

use super::node::Node;
use super::AvlTree;

/// First invariant violation found by [`AvlTree::check_invariants`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantError {
    /// A key falls outside the open interval its ancestors allow.
    #[error("key {key} violates search order (allowed bounds {lower:?}..{upper:?})")]
    OrderViolation {
        /// Offending key.
        key: i64,
        /// Exclusive lower bound inherited from ancestors, if any.
        lower: Option<i64>,
        /// Exclusive upper bound inherited from ancestors, if any.
        upper: Option<i64>,
    },

    /// A stored height disagrees with the height recomputed from below.
    #[error("node {key} stores height {stored}, recomputed {computed}")]
    HeightMismatch {
        /// Node carrying the stale height.
        key: i64,
        /// Height recorded on the node.
        stored: u32,
        /// Height recomputed from the children.
        computed: u32,
    },

    /// A node's subtree heights differ by more than one.
    #[error("node {key} is out of balance (factor {balance})")]
    OutOfBalance {
        /// Node whose subtrees differ by more than one level.
        key: i64,
        /// Observed height difference, left minus right.
        balance: i32,
    },
}

impl AvlTree {
    /// Audit the whole tree against its three structural invariants:
    /// search order, stored heights, and the AVL balance bound.
    ///
    /// Returns the first violation found in a depth-first walk, or
    /// `Ok(())` for a sound tree (the empty tree is sound).
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        audit(self.root(), None, None).map(|_| ())
    }
}

/// Check the subtree at `node` within the exclusive `(lower, upper)`
/// key bounds, returning its recomputed height.
fn audit(
    node: Option<&Node>,
    lower: Option<i64>,
    upper: Option<i64>,
) -> Result<u32, InvariantError> {
    let Some(node) = node else {
        return Ok(0);
    };
    let key = node.key();

    if lower.is_some_and(|bound| key <= bound) || upper.is_some_and(|bound| key >= bound) {
        return Err(InvariantError::OrderViolation { key, lower, upper });
    }

    let left = audit(node.left(), lower, Some(key))?;
    let right = audit(node.right(), Some(key), upper)?;

    let computed = 1 + left.max(right);
    if node.height() != computed {
        return Err(InvariantError::HeightMismatch {
            key,
            stored: node.height(),
            computed,
        });
    }

    let balance = left as i32 - right as i32;
    if balance.abs() > 1 {
        return Err(InvariantError::OutOfBalance { key, balance });
    }

    Ok(computed)
}
