//! Sideways tree diagrams for eyeballing a tree's shape.
//!
//! The root sits at the left margin, right subtrees are drawn above their
//! parent and left subtrees below:
//!
//! ```text
//! │   ┌── 3
//! └── 2
//!     └── 1
//! ```
//!
//! Only [`Node::value`], [`Node::left`] and [`Node::right`] are used, so any
//! subtree can be printed, not just a whole tree.

use std::fmt;

use crate::tree::{Node, Tree};

/// Renders the subtree under `root` as a diagram with one value per line.
/// An absent root renders as an empty string.
///
/// # Examples
///
/// ```
/// use ordered_tree::{pretty_print, Tree};
///
/// let tree = Tree::from_sorted(vec![1, 2, 3]);
///
/// assert_eq!(pretty_print(tree.root()), "│   ┌── 3\n└── 2\n    └── 1\n");
/// assert_eq!(pretty_print::<i32>(None), "");
/// ```
pub fn pretty_print<T>(root: Option<&Node<T>>) -> String
where
    T: fmt::Display,
{
    Diagram(root).to_string()
}

/// `Display` adapter over an optional subtree.
struct Diagram<'a, T>(Option<&'a Node<T>>);

impl<'a, T> fmt::Display for Diagram<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Right subtree, then the node's own line, then left subtree. Pending
        // work lives on an explicit stack so deep trees print without
        // recursing; each entry carries the prefix its line(s) start with
        // and whether the node hangs to the left of its parent (the root
        // counts as left).
        let mut stack: Vec<Pending<'a, T>> = self
            .0
            .map(|root| Pending::Subtree(root, String::new(), true))
            .into_iter()
            .collect();

        while let Some(pending) = stack.pop() {
            match pending {
                Pending::Line(node, prefix, is_left) => {
                    let branch = if is_left { "└── " } else { "┌── " };
                    writeln!(f, "{}{}{}", prefix, branch, node.value())?;
                }
                Pending::Subtree(node, prefix, is_left) => {
                    if let Some(left) = node.left() {
                        let extension = if is_left { "    " } else { "│   " };
                        let prefix = format!("{}{}", prefix, extension);
                        stack.push(Pending::Subtree(left, prefix, true));
                    }
                    let right = node.right().map(|right| {
                        let extension = if is_left { "│   " } else { "    " };
                        Pending::Subtree(right, format!("{}{}", prefix, extension), false)
                    });
                    stack.push(Pending::Line(node, prefix, is_left));
                    stack.extend(right);
                }
            }
        }
        Ok(())
    }
}

enum Pending<'a, T> {
    /// A whole subtree still to be drawn.
    Subtree(&'a Node<T>, String, bool),
    /// Just the line for this node.
    Line(&'a Node<T>, String, bool),
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Diagram(self.root()).fmt(f)
    }
}
