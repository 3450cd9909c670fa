//! An owned, unbalanced Binary Search Tree over a single ordered value type.
//!
//! The tree is built balanced from sorted input, but `insert` and `delete`
//! never rotate anything, so a run of unlucky inserts can skew it. Use
//! [`Tree::is_balanced`] to notice and [`Tree::rebalance`] to fix that.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Insertion, Tree};
//!
//! let mut tree: Tree<i32> = vec![5, 1, 4, 1, 2, 3].into_iter().collect();
//! assert_eq!(tree.in_order(), Some(vec![1, 2, 3, 4, 5]));
//!
//! // Duplicates are rejected rather than stored twice.
//! assert_eq!(tree.insert(4), Insertion::AlreadyPresent);
//! assert_eq!(tree.insert(6), Insertion::Inserted);
//!
//! // Deleting hands back the value, or `None` if it was never there.
//! assert_eq!(tree.delete(&1), Some(1));
//! assert_eq!(tree.delete(&1), None);
//! assert!(tree.find(&1).is_none());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use crate::error::BuildError;
use crate::sort::dedup_sort;
use crate::traversal::{self, InOrder, LevelOrder, PostOrder, PreOrder};

/// An owning, optional pointer to a child.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// What [`Tree::insert`] did with its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The value is now in the tree.
    Inserted,
    /// An equal value was already in the tree, so nothing changed.
    AlreadyPresent,
}

impl Insertion {
    /// Whether the tree gained a node.
    pub fn is_inserted(self) -> bool {
        self == Self::Inserted
    }
}

/// One element of a [`Tree`]. Every value in the left subtree is smaller than
/// this node's value and every value in the right subtree is larger.
///
/// Nodes can only be reached by borrowing the tree, so a `&Node` can never
/// be held across a mutation. Note that [`Tree::delete`] may keep a node in
/// place and give it a new value (see there), so a node found before a
/// delete is not necessarily holding the same value after it.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of edges on the longest path from this node down to a leaf. A
    /// leaf has height 0.
    ///
    /// Counted level by level, so it doesn't recurse.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.height(), 1);
    /// assert_eq!(root.left().unwrap().height(), 0);
    /// ```
    pub fn height(&self) -> usize {
        let mut level = vec![self];
        let mut height = 0;
        loop {
            let next: Vec<&Self> = level
                .iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
            if next.is_empty() {
                return height;
            }
            height += 1;
            level = next;
        }
    }

    /// Whether, at this node and every node below it, the heights of the left
    /// and right subtrees differ by at most one.
    pub fn is_balanced(&self) -> bool {
        balanced_height(Some(self)).is_some()
    }

    /// Removes the in-order successor (the leftmost node of the right subtree)
    /// and returns its value. The successor's right subtree takes its place.
    fn take_successor(&mut self) -> Option<T> {
        if self.right.as_ref()?.left.is_none() {
            // The successor is our immediate right child.
            let successor = self.right.take()?;
            let Node { value, right, .. } = *successor;
            self.right = right;
            return Some(value);
        }

        let mut parent = self.right.as_mut()?;
        while parent.left.as_ref().map_or(false, |left| left.left.is_some()) {
            parent = parent.left.as_mut()?;
        }
        let successor = parent.left.take()?;
        let Node { value, right, .. } = *successor;
        parent.left = right;
        Some(value)
    }
}

/// Height of a possibly absent subtree: `-1` when there is no node, otherwise
/// [`Node::height`].
///
/// # Examples
///
/// ```
/// use ordered_tree::{subtree_height, Tree};
///
/// let tree = Tree::from_sorted(vec![1]);
/// let root = tree.root();
///
/// assert_eq!(subtree_height(root), 0);
/// assert_eq!(subtree_height(root.and_then(|n| n.left())), -1);
/// ```
pub fn subtree_height<T>(node: Option<&Node<T>>) -> isize {
    node.map_or(-1, |n| n.height() as isize)
}

/// Height of the subtree if every node in it is balanced, `None` otherwise.
/// An absent subtree has height `-1`.
///
/// One bottom-up pass driven by [`PostOrder`]: a node is checked once both
/// of its subtrees are, and the walk stops at the first unbalanced node.
fn balanced_height<T>(node: Option<&Node<T>>) -> Option<isize> {
    let mut nodes = PostOrder::new(node);
    // Heights of finished subtrees still waiting for their parent. A left
    // subtree always finishes before its right sibling.
    let mut heights: Vec<isize> = Vec::new();
    while let Some(node) = nodes.next_node() {
        let right = match node.right {
            Some(_) => heights.pop()?,
            None => -1,
        };
        let left = match node.left {
            Some(_) => heights.pop()?,
            None => -1,
        };
        if (left - right).abs() > 1 {
            return None;
        }
        heights.push(left.max(right) + 1);
    }
    Some(heights.pop().unwrap_or(-1))
}

/// A Binary Search Tree holding unique values. This can be used for
/// inserting, finding, and deleting values, walking them in any of the usual
/// orders, and rebuilding the tree balanced.
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Free nodes from an explicit stack so a long, skewed chain can't
        // overflow the call stack through recursive `Box` drops.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root()).finish()
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    /// Copies the tree node for node, keeping its shape. Subtrees are
    /// assembled bottom-up from a post-order walk.
    fn clone(&self) -> Self {
        let mut nodes = PostOrder::new(self.root());
        let mut subtrees: Vec<Box<Node<T>>> = Vec::new();
        while let Some(node) = nodes.next_node() {
            let right = node.right.as_ref().and_then(|_| subtrees.pop());
            let left = node.left.as_ref().and_then(|_| subtrees.pop());
            subtrees.push(Box::new(Node {
                value: node.value.clone(),
                left,
                right,
            }));
        }
        Self {
            root: subtrees.pop(),
        }
    }
}

impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    /// Two trees are equal when they hold the same values in the same shape.
    /// A pre-order walk that also records which children each node has pins
    /// the shape down.
    fn eq(&self, other: &Self) -> bool {
        let mut ours = PreOrder::new(self.root());
        let mut theirs = PreOrder::new(other.root());
        loop {
            match (ours.next_node(), theirs.next_node()) {
                (None, None) => return true,
                (Some(a), Some(b))
                    if a.value == b.value
                        && a.left.is_some() == b.left.is_some()
                        && a.right.is_some() == b.right.is_some() => {}
                _ => return false,
            }
        }
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree of minimal height from a strictly ascending sequence.
    ///
    /// The middle element (rounding down) becomes the root, the elements
    /// before it build the left subtree and those after it the right one,
    /// recursively. Empty input gives an empty tree.
    ///
    /// The input is trusted: handing over values that are unsorted or
    /// contain duplicates produces a tree that breaks the search ordering.
    /// Use [`Tree::try_from_sorted`] to have it checked, or
    /// [`Tree::from_values`] to have it sorted first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3, 4]);
    ///
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(2));
    /// assert_eq!(tree.level_order(), Some(vec![2, 1, 3, 4]));
    /// ```
    pub fn from_sorted(values: Vec<T>) -> Self {
        let len = values.len();
        let root = build(&mut values.into_iter(), len);

        if cfg!(test) {
            assert!(balanced_height(root.as_deref()).is_some());
        }
        Self { root }
    }

    /// Like [`Tree::from_sorted`] but rejects input that isn't strictly
    /// ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{BuildError, Tree};
    ///
    /// assert!(Tree::try_from_sorted(vec![1, 2, 3]).is_ok());
    /// assert_eq!(
    ///     Tree::try_from_sorted(vec![1, 3, 3]).unwrap_err(),
    ///     BuildError::NotStrictlyAscending { index: 2 },
    /// );
    /// ```
    pub fn try_from_sorted(values: Vec<T>) -> Result<Self, BuildError>
    where
        T: Ord,
    {
        if let Some(pos) = values.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(BuildError::NotStrictlyAscending { index: pos + 1 });
        }
        Ok(Self::from_sorted(values))
    }

    /// Sorts and deduplicates `values` with [`dedup_sort`] and builds a tree
    /// of minimal height from the result. This is also how a tree is
    /// rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::from_values(vec![3, 1, 2, 3, 1]);
    /// assert_eq!(tree.in_order(), Some(vec![1, 2, 3]));
    /// ```
    pub fn from_values(values: Vec<T>) -> Self
    where
        T: Ord,
    {
        Self::from_sorted(dedup_sort(values))
    }

    /// The root node, or `None` for an empty tree. Following
    /// [`Node::left`] and [`Node::right`] from here reaches every node.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of values in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Inserts `value` as a new leaf. If an equal value is already present the
    /// tree is left untouched and [`Insertion::AlreadyPresent`] is returned.
    ///
    /// No rebalancing happens here.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Insertion, Tree};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1), Insertion::Inserted);
    /// assert_eq!(tree.insert(1), Insertion::AlreadyPresent);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> Insertion
    where
        T: Ord,
    {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return Insertion::AlreadyPresent,
                Ordering::Greater => &mut node.right,
            };
        }
        *cursor = Some(Node::new_boxed(value));
        Insertion::Inserted
    }

    /// Deletes `value` from the tree and returns it. If the tree does not
    /// contain it, nothing happens and `None` is returned.
    ///
    /// A node with at most one child is replaced by that child. A node with
    /// two children stays where it is: its in-order successor is unlinked
    /// and the successor's value is moved into it. The node object survives
    /// with a new value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::from_sorted(vec![1, 2, 3]);
    ///
    /// // The root has two children, so it takes its successor's value.
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(3));
    /// assert_eq!(tree.in_order(), Some(vec![1, 3]));
    ///
    /// assert_eq!(tree.delete(&42), None);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let mut cursor = &mut self.root;
        loop {
            match cursor.as_ref().map(|node| value.cmp(&node.value)) {
                None => return None,
                Some(Ordering::Less) => cursor = &mut cursor.as_mut()?.left,
                Some(Ordering::Equal) => break,
                Some(Ordering::Greater) => cursor = &mut cursor.as_mut()?.right,
            }
        }

        let node = cursor.as_mut()?;
        if node.left.is_some() && node.right.is_some() {
            let successor = node.take_successor()?;
            return Some(mem::replace(&mut node.value, successor));
        }

        // Zero or one child: whichever child exists (if any) moves up.
        let node = cursor.take()?;
        let Node {
            value: removed,
            left,
            right,
        } = *node;
        *cursor = left.or(right);
        Some(removed)
    }

    /// Finds the node holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| *n.value()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// The smallest value, or `None` for an empty tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.value())
    }

    /// The largest value, or `None` for an empty tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.value())
    }

    /// Height of the whole tree, or `None` for an empty tree. A tree with a
    /// single node has height 0.
    pub fn height(&self) -> Option<usize> {
        self.root().map(Node::height)
    }

    /// Height of the subtree rooted at `value`, or `None` if `value` isn't in
    /// the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3, 4]);
    ///
    /// assert_eq!(tree.height_of(&2), Some(2));
    /// assert_eq!(tree.height_of(&3), Some(1));
    /// assert_eq!(tree.height_of(&4), Some(0));
    /// assert_eq!(tree.height_of(&5), None);
    /// ```
    pub fn height_of(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.find(value).map(Node::height)
    }

    /// Number of edges between the root and the node holding `value`, or
    /// `None` if `value` isn't in the tree.
    ///
    /// The node is located by comparing values on the way down, which is
    /// unambiguous because values are unique.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3, 4]);
    ///
    /// assert_eq!(tree.depth(&2), Some(0));
    /// assert_eq!(tree.depth(&4), Some(2));
    /// assert_eq!(tree.depth(&5), None);
    /// ```
    pub fn depth(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        let mut current = self.root();
        let mut depth = 0;
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(depth),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }
        None
    }

    /// Whether, at every node, the heights of the left and right subtrees
    /// differ by at most one. An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::from_sorted(vec![1, 2, 3]);
    /// assert!(tree.is_balanced());
    ///
    /// tree.insert(4);
    /// tree.insert(5);
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        balanced_height(self.root()).is_some()
    }

    /// Returns a new tree of minimal height holding the same values. The
    /// caller decides whether to replace this tree with it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 1..=7 {
    ///     tree.insert(x);
    /// }
    /// assert!(!tree.is_balanced());
    ///
    /// let balanced = tree.rebalanced();
    /// assert!(balanced.is_balanced());
    /// assert_eq!(balanced.in_order(), tree.in_order());
    /// ```
    pub fn rebalanced(&self) -> Self
    where
        T: Clone + Ord,
    {
        Self::from_values(self.iter().cloned().collect())
    }

    /// Rebuilds this tree in place so it has minimal height. Values are moved
    /// into the new nodes, not cloned.
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        let values = traversal::drain_in_order(self.root.take());
        *self = Self::from_values(values);
    }

    /// Consumes the tree, returning its values in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        traversal::drain_in_order(self.root.take())
    }

    /// Lazily walks the values in ascending order.
    pub fn iter(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// Lazily walks the values node first, then left, then right.
    pub fn pre_order_iter(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }

    /// Lazily walks the values left, then right, then node.
    pub fn post_order_iter(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root())
    }

    /// Lazily walks the values level by level, left to right.
    pub fn level_order_iter(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root())
    }

    /// All values in ascending order, or `None` if the tree has no root.
    pub fn in_order(&self) -> Option<Vec<T>>
    where
        T: Clone,
    {
        self.root.as_ref()?;
        Some(self.iter().cloned().collect())
    }

    /// All values in pre-order, or `None` if the tree has no root.
    pub fn pre_order(&self) -> Option<Vec<T>>
    where
        T: Clone,
    {
        self.root.as_ref()?;
        Some(self.pre_order_iter().cloned().collect())
    }

    /// All values in post-order, or `None` if the tree has no root.
    pub fn post_order(&self) -> Option<Vec<T>>
    where
        T: Clone,
    {
        self.root.as_ref()?;
        Some(self.post_order_iter().cloned().collect())
    }

    /// All values in level order, or `None` if the tree has no root.
    pub fn level_order(&self) -> Option<Vec<T>>
    where
        T: Clone,
    {
        self.root.as_ref()?;
        Some(self.level_order_iter().cloned().collect())
    }
}

/// Builds a minimal-height subtree from the next `len` values of an ascending
/// iterator. The left subtree is built first so values are consumed in order.
fn build<T, I>(values: &mut I, len: usize) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }
    let mid = (len - 1) / 2;
    let left = build(values, mid);
    let value = values.next()?;
    let right = build(values, len - mid - 1);
    Some(Box::new(Node { value, left, right }))
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    /// Collects into a balanced tree, sorting and dropping duplicates first.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
