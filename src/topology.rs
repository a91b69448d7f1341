//! Rank arithmetic for the implicit complete binary tree.
//!
//! Every rank derives its position from its own index and the pool size;
//! nothing about the tree is ever stored or exchanged.

use mpi::topology::Rank;

/// The rank this one received its segment from. Rank 0 has no parent and
/// must never ask for one.
pub fn parent(rank: Rank) -> Rank {
    debug_assert!(rank > 0, "rank 0 has no parent");
    (rank - 1) / 2
}

pub fn left_child(rank: Rank) -> Rank {
    2 * rank + 1
}

pub fn right_child(rank: Rank) -> Rank {
    2 * rank + 2
}

/// Both child indices must fall inside the pool for a rank to delegate.
/// A rank whose right child index is the first one out of range still
/// counts as childless; the protocol never sends to a single child.
pub fn has_both_children(rank: Rank, size: Rank) -> bool {
    left_child(rank) < size && right_child(rank) < size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_child_arithmetic() {
        assert_eq!(left_child(0), 1);
        assert_eq!(right_child(0), 2);
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(5), 2);
        assert_eq!(parent(6), 2);
        for rank in 0..64 {
            assert_eq!(parent(left_child(rank)), rank);
            assert_eq!(parent(right_child(rank)), rank);
        }
    }

    #[test]
    fn children_must_both_be_in_range() {
        // 7 ranks fill three levels exactly
        assert!(has_both_children(0, 7));
        assert!(has_both_children(2, 7));
        assert!(!has_both_children(3, 7));

        // a pool of 2 gives rank 0 a left child only
        assert!(!has_both_children(0, 2));
        assert!(has_both_children(0, 3));
        assert!(!has_both_children(0, 1));
    }
}
