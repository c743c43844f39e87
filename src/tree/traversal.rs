//! Read-only walks: ordered traversals and search-path tracing
//!
//! Nothing here mutates the tree or touches heights; all walks borrow
//! the tree shared and run in one pass.

use std::cmp::Ordering;

use super::node::Node;
use super::AvlTree;

/// How a visited node hangs off its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// The tree root.
    Root,

    /// Left child of the previous node in the path.
    Left,

    /// Right child of the previous node in the path.
    Right,
}

/// One node visited while tracing a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStep {
    /// Key at the visited node.
    pub key: i64,

    /// Structural position of the visited node.
    pub position: Position,
}

impl AvlTree {
    /// Keys in ascending order (left, node, right).
    pub fn inorder(&self) -> Vec<i64> {
        let mut keys = Vec::new();
        inorder_into(self.root(), &mut keys);
        keys
    }

    /// Keys in structural order (node, left, right).
    ///
    /// Two trees with equal preorders have identical shape, which makes
    /// this the traversal of choice for asserting rotation outcomes.
    pub fn preorder(&self) -> Vec<i64> {
        let mut keys = Vec::new();
        preorder_into(self.root(), &mut keys);
        keys
    }

    /// Keys children-first (left, right, node).
    pub fn postorder(&self) -> Vec<i64> {
        let mut keys = Vec::new();
        postorder_into(self.root(), &mut keys);
        keys
    }

    /// Trace the binary-search descent toward `key`.
    ///
    /// The path lists every node examined, in visit order. It ends at
    /// the node holding `key` when the key is present, and otherwise at
    /// the last node before the descent would step into an empty
    /// subtree. An empty tree yields an empty path.
    pub fn search_path(&self, key: i64) -> Vec<SearchStep> {
        let mut path = Vec::new();
        let mut position = Position::Root;
        let mut current = self.root();

        while let Some(node) = current {
            path.push(SearchStep {
                key: node.key(),
                position,
            });
            current = match key.cmp(&node.key()) {
                Ordering::Less => {
                    position = Position::Left;
                    node.left()
                }
                Ordering::Greater => {
                    position = Position::Right;
                    node.right()
                }
                Ordering::Equal => break,
            };
        }

        path
    }
}

fn inorder_into(node: Option<&Node>, keys: &mut Vec<i64>) {
    if let Some(node) = node {
        inorder_into(node.left(), keys);
        keys.push(node.key());
        inorder_into(node.right(), keys);
    }
}

fn preorder_into(node: Option<&Node>, keys: &mut Vec<i64>) {
    if let Some(node) = node {
        keys.push(node.key());
        preorder_into(node.left(), keys);
        preorder_into(node.right(), keys);
    }
}

fn postorder_into(node: Option<&Node>, keys: &mut Vec<i64>) {
    if let Some(node) = node {
        postorder_into(node.left(), keys);
        postorder_into(node.right(), keys);
        keys.push(node.key());
    }
}
