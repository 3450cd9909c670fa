//! This crate exposes a plain, owned Binary Search Tree (BST) that is built
//! balanced from sorted input and can be rebalanced on demand.
//!
//! ## What the tree holds
//!
//! A [`Tree`] stores bare values of one totally ordered type, each at most
//! once. Smaller values live to the left of a node and larger ones to its
//! right, so [`Tree::find`] walks a single root-to-leaf path and
//! [`Tree::iter`] yields the values sorted. Inserting a value that is already
//! there is a no-op reported as [`Insertion::AlreadyPresent`].
//!
//! ## Shape
//!
//! Trees start out balanced: [`Tree::from_sorted`] puts the middle value at
//! the root and recurses into each half, giving a height of `floor(lg N)`.
//! After that nothing rotates. [`Tree::insert`] always adds a leaf and
//! [`Tree::delete`] only splices locally, so ascending inserts for example
//! grow a long right-leaning chain. [`Tree::is_balanced`] reports whether
//! every node's subtrees differ in height by at most one, and
//! [`Tree::rebalance`] rebuilds the tree from its sorted values when they
//! don't.
//!
//! Walks over the whole tree (traversals, height, the balance check,
//! cloning, comparing, printing and dropping) use explicit stacks, so even a
//! fully skewed tree can be handled without running out of call stack.
//!
//! ## Example
//!
//! ```
//! use ordered_tree::{dedup_sort, Tree};
//!
//! let values = dedup_sort(vec![1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
//! let mut tree = Tree::from_sorted(values.clone());
//! assert_eq!(tree.in_order(), Some(values));
//!
//! for x in [28, 29, 30].iter() {
//!     tree.insert(*x);
//! }
//! tree.delete(&8);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(
//!     tree.in_order(),
//!     Some(vec![1, 3, 4, 5, 7, 9, 23, 28, 29, 30, 67, 324, 6345]),
//! );
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod print;
pub mod sort;
pub mod traversal;
pub mod tree;

pub use error::BuildError;
pub use print::pretty_print;
pub use sort::dedup_sort;
pub use tree::{subtree_height, Insertion, Node, Tree};
