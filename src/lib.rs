//! # Height-Balanced Search Tree
//!
//! An AVL tree over integer keys: every insert and remove rebalances on
//! the way back up the search path, so the heights of any node's two
//! subtrees never differ by more than one and lookups stay logarithmic.
//!
//! ## Operations
//!
//! 1. **Insert / remove**: recursive descend-then-rebalance, four
//!    rotation cases each (case selection differs between the two)
//! 2. **Traversals**: inorder (sorted), preorder (shape), postorder
//! 3. **Search-path tracing**: the exact node sequence a lookup
//!    visits, for callers that replay or display the descent
//! 4. **Invariant audit**: on-demand structural check with a typed
//!    error naming the first violation
//!
//! ## Usage Example
//!
//! ```
//! use arbor::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key);
//! }
//! // The ascending chain forced one rotation: 20 is now the root.
//! assert_eq!(tree.preorder(), vec![20, 10, 30]);
//! assert_eq!(tree.inorder(), vec![10, 20, 30]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod tree; // Balanced search tree, rotations, traversals

// Re-exports for convenience
pub use tree::{AvlTree, InvariantError, Node, Position, SearchStep};
