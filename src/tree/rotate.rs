//! Single left/right rotations
//!
//! A rotation reassigns exactly three links and recomputes exactly two
//! heights, demoted node before promoted node. BST order is preserved:
//! the subtree handed across (the pivot's inner child) satisfies the
//! same bounds under its new parent.

use tracing::trace;

use super::node::Node;

/// Rotate `root` right around its left child, returning the new root.
///
/// Precondition: the left child is present. Rebalancing only requests
/// this rotation on a node that is left-heavy by two, which guarantees
/// the child; a bare node here means corrupted state, so debug builds
/// assert and release builds leave the subtree untouched.
pub(super) fn rotate_right(mut root: Box<Node>) -> Box<Node> {
    debug_assert!(root.left.is_some(), "right rotation requires a left child");
    let Some(mut pivot) = root.left.take() else {
        return root;
    };
    trace!(demoted = root.key, promoted = pivot.key, "right rotation");

    root.left = pivot.right.take();
    root.update_height();
    pivot.right = Some(root);
    pivot.update_height();
    pivot
}

/// Rotate `root` left around its right child, returning the new root.
///
/// Mirror image of [`rotate_right`], same precondition on the right
/// child.
pub(super) fn rotate_left(mut root: Box<Node>) -> Box<Node> {
    debug_assert!(root.right.is_some(), "left rotation requires a right child");
    let Some(mut pivot) = root.right.take() else {
        return root;
    };
    trace!(demoted = root.key, promoted = pivot.key, "left rotation");

    root.right = pivot.left.take();
    root.update_height();
    pivot.left = Some(root);
    pivot.update_height();
    pivot
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Left-leaning chain 30 <- 20 <- 10 with correct heights.
    fn left_chain() -> Box<Node> {
        let mut mid = Node::leaf(20);
        mid.left = Some(Node::leaf(10));
        mid.update_height();
        let mut top = Node::leaf(30);
        top.left = Some(mid);
        top.update_height();
        top
    }

    #[test]
    fn right_rotation_promotes_left_child() {
        let rotated = rotate_right(left_chain());

        assert_eq!(rotated.key(), 20);
        assert_eq!(rotated.left().map(Node::key), Some(10));
        assert_eq!(rotated.right().map(Node::key), Some(30));
        assert_eq!(rotated.height(), 2);
        assert_eq!(rotated.right().map(Node::height), Some(1));
    }

    #[test]
    fn left_rotation_promotes_right_child() {
        let mut mid = Node::leaf(20);
        mid.right = Some(Node::leaf(30));
        mid.update_height();
        let mut top = Node::leaf(10);
        top.right = Some(mid);
        top.update_height();

        let rotated = rotate_left(top);

        assert_eq!(rotated.key(), 20);
        assert_eq!(rotated.left().map(Node::key), Some(10));
        assert_eq!(rotated.right().map(Node::key), Some(30));
        assert_eq!(rotated.height(), 2);
    }

    #[test]
    fn right_rotation_moves_inner_subtree_across() {
        // 40 with left child 20, whose right child 30 must re-hang
        // under 40 after the rotation.
        let mut left = Node::leaf(20);
        left.left = Some(Node::leaf(10));
        left.right = Some(Node::leaf(30));
        left.update_height();
        let mut root = Node::leaf(40);
        root.left = Some(left);
        root.update_height();

        let rotated = rotate_right(root);

        assert_eq!(rotated.key(), 20);
        let demoted = rotated.right().expect("40 keeps hanging right of 20");
        assert_eq!(demoted.key(), 40);
        assert_eq!(demoted.left().map(Node::key), Some(30));
        assert_eq!(rotated.left().map(Node::key), Some(10));
    }
}
