//! Lazy traversals over a [`Tree`][crate::Tree].
//!
//! Every iterator here keeps its own explicit stack (or queue for
//! [`LevelOrder`]) instead of recursing, so walking a badly skewed tree costs
//! heap memory rather than call stack. They borrow the tree, and are cheap to
//! recreate, so a traversal can be restarted by asking the tree for a new one.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::tree::{Link, Node};

/// Visits the left subtree, then the node, then the right subtree. Yields
/// values in ascending order.
#[derive(Debug, Clone)]
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}

impl<'a, T> FusedIterator for InOrder<'a, T> {}

/// Visits the node, then the left subtree, then the right subtree.
#[derive(Debug, Clone)]
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }

    pub(crate) fn next_node(&mut self) -> Option<&'a Node<T>> {
        let node = self.stack.pop()?;
        // Right goes in first so left comes out first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(Node::value)
    }
}

impl<'a, T> FusedIterator for PreOrder<'a, T> {}

/// Visits the left subtree, then the right subtree, then the node.
#[derive(Debug, Clone)]
pub struct PostOrder<'a, T> {
    /// Each node is pushed twice: once to expand its children and once,
    /// flagged `true`, to be yielded after them.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
        }
    }

    pub(crate) fn next_node(&mut self) -> Option<&'a Node<T>> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(Node::value)
    }
}

impl<'a, T> FusedIterator for PostOrder<'a, T> {}

/// Breadth first: level by level, left to right within a level.
#[derive(Debug, Clone)]
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.value())
    }
}

impl<'a, T> FusedIterator for LevelOrder<'a, T> {}

/// Tears a subtree down in order, moving every value out. Nodes are freed as
/// they are visited.
pub(crate) fn drain_in_order<T>(root: Link<T>) -> Vec<T> {
    let mut values = Vec::new();
    let mut stack = Vec::new();
    let mut current = root;

    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }
        match stack.pop() {
            Some(node) => {
                let Node { value, right, .. } = *node;
                values.push(value);
                current = right;
            }
            None => return values,
        }
    }
}
