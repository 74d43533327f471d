//! An unbalanced Binary Search Tree that can only grow. Values are kept in the
//! order their [`Ord`] implementation gives them and are reached again by
//! handing the tree a [`Visitor`].
//!
//! # Examples
//!
//! ```
//! use visitor_bst::{BinaryTree, Order, Traversal};
//!
//! let mut tree = BinaryTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&5));
//!
//! for x in [5, 3, 8, 1, 4] {
//!     tree.insert(x);
//! }
//! assert!(tree.search(&5));
//!
//! // Walking in-order gives the values back sorted.
//! let mut sorted = Vec::new();
//! tree.traverse(Traversal::DepthFirst(Order::In), |x| sorted.push(*x));
//! assert_eq!(sorted, [1, 3, 4, 5, 8]);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FromIterator;

use crate::visitor::{Order, Traversal, Visitor, Walk};

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree supporting insertion, membership checks and
/// traversal. It is never rebalanced, so its shape (and the cost of every
/// operation) depends entirely on the order values were inserted in.
///
/// Equal values are allowed. A value equal to one already in the tree is
/// placed in that node's right subtree.
pub struct BinaryTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinaryTree<T> {
    // Unlinks nodes onto a stack so a tree shaped like a list doesn't drop
    // recursively.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for BinaryTree<T>
where
    T: fmt::Debug,
{
    /// Lists the values in sorted (in-order) order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        self.traverse(Traversal::DepthFirst(Order::In), |value| {
            set.entry(value);
        });
        set.finish()
    }
}

impl<T> BinaryTree<T> {
    /// Generates a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many values have been inserted, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given value into the tree. Starting at the root, a value
    /// less than a node's value goes left and anything else goes right,
    /// until an empty spot is found for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use visitor_bst::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert!(tree.search(&1));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        let mut depth = 0;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }

        *slot = Some(Node::new_boxed(value));
        self.len += 1;
        log::trace!("inserted value at depth {} ({} values)", depth, self.len);
    }

    /// Returns whether a value equal to the given one is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use visitor_bst::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }

        false
    }

    /// Walks the tree in the order chosen by the visitor's
    /// [`traversal`][Visitor::traversal], calling its
    /// [`action`][Visitor::action] on every value. An empty tree never calls
    /// the visitor.
    ///
    /// # Examples
    ///
    /// ```
    /// use visitor_bst::{BinaryTree, Order, Traversal, Visitor};
    ///
    /// struct Collect(Vec<i32>);
    ///
    /// impl Visitor<i32> for Collect {
    ///     fn traversal(&self) -> Traversal {
    ///         Traversal::DepthFirst(Order::Pre)
    ///     }
    ///
    ///     fn action(&mut self, value: &i32) {
    ///         self.0.push(*value);
    ///     }
    /// }
    ///
    /// let tree: BinaryTree<i32> = vec![5, 3, 8, 1, 4].into_iter().collect();
    /// let mut collect = Collect(Vec::new());
    /// tree.traverse_tree(&mut collect);
    ///
    /// assert_eq!(collect.0, [5, 3, 1, 4, 8]);
    /// ```
    pub fn traverse_tree<V>(&self, visitor: &mut V)
    where
        V: Visitor<T> + ?Sized,
    {
        let root = match self.root.as_deref() {
            Some(root) => root,
            None => return,
        };

        let traversal = visitor.traversal();
        log::debug!("{} traversal over {} values", traversal, self.len);
        match traversal {
            Traversal::DepthFirst(order) => root.depth_first(order, visitor),
            Traversal::BreadthFirst => root.breadth_first(visitor),
        }
    }

    /// Shorthand for [`traverse_tree`][Self::traverse_tree] with a [`Walk`]
    /// built from `traversal` and `action`.
    ///
    /// # Examples
    ///
    /// ```
    /// use visitor_bst::{BinaryTree, Order, Traversal};
    ///
    /// let tree: BinaryTree<i32> = vec![5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// let mut post = Vec::new();
    /// tree.traverse(Traversal::DepthFirst(Order::Post), |x| post.push(*x));
    ///
    /// assert_eq!(post, [1, 4, 3, 8, 5]);
    /// ```
    pub fn traverse<F>(&self, traversal: Traversal, action: F)
    where
        F: FnMut(&T),
    {
        self.traverse_tree(&mut Walk::new(traversal, action));
    }
}

impl<T> Extend<T> for BinaryTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for BinaryTree<T>
where
    T: Ord,
{
    /// Builds a tree by inserting the values in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// A single value and the (possibly empty) subtrees on either side of it.
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// Recursive descent, so this goes as deep on the stack as the tree is tall.
    fn depth_first<V>(&self, order: Order, visitor: &mut V)
    where
        V: Visitor<T> + ?Sized,
    {
        if order == Order::Pre {
            visitor.action(&self.value);
        }
        if let Some(left) = &self.left {
            left.depth_first(order, visitor);
        }
        if order == Order::In {
            visitor.action(&self.value);
        }
        if let Some(right) = &self.right {
            right.depth_first(order, visitor);
        }
        if order == Order::Post {
            visitor.action(&self.value);
        }
    }

    fn breadth_first<V>(&self, visitor: &mut V)
    where
        V: Visitor<T> + ?Sized,
    {
        let mut queue = VecDeque::new();
        queue.push_back(self);
        while let Some(node) = queue.pop_front() {
            visitor.action(&node.value);
            // Only real children go on the queue.
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
    }
}
