//! Visitors decide two things about a walk over a [`BinaryTree`][crate::BinaryTree]:
//! the order in which nodes are reached (their [`Traversal`]) and what happens to
//! each value once it is reached (their [`action`][Visitor::action]).
//!
//! The strategy is a plain enum so the tree can pick the right walk with a `match`.
//! Anything that wants to observe values implements [`Visitor`], or wraps a closure
//! in a [`Walk`].
//!
//! # Examples
//!
//! ```
//! use visitor_bst::{BinaryTree, Order, Traversal, Visitor};
//!
//! /// Adds up every value it sees.
//! struct Sum(i32);
//!
//! impl Visitor<i32> for Sum {
//!     fn traversal(&self) -> Traversal {
//!         Traversal::DepthFirst(Order::Post)
//!     }
//!
//!     fn action(&mut self, value: &i32) {
//!         self.0 += value;
//!     }
//! }
//!
//! let tree: BinaryTree<i32> = vec![5, 3, 8].into_iter().collect();
//! let mut sum = Sum(0);
//! tree.traverse_tree(&mut sum);
//!
//! assert_eq!(sum.0, 16);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ParseTraversalError;

/// When a depth-first walk visits a node relative to its two subtrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. On a binary
    /// search tree this yields values in sorted order.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
}

/// The strategy used to reach every node of a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Recursive descent visiting nodes in the given [`Order`].
    DepthFirst(Order),
    /// Level by level, left to right, using a FIFO queue.
    BreadthFirst,
}

impl Default for Traversal {
    fn default() -> Self {
        Self::DepthFirst(Order::In)
    }
}

impl From<Order> for Traversal {
    fn from(order: Order) -> Self {
        Self::DepthFirst(order)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pre => "pre",
            Self::In => "in",
            Self::Post => "post",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthFirst(order) => order.fmt(f),
            Self::BreadthFirst => f.write_str("breadth"),
        }
    }
}

impl FromStr for Order {
    type Err = ParseTraversalError;

    /// Parses `pre`, `in` or `post`, ignoring case. The longer spellings
    /// `preorder`, `pre-order` and `pre_order` (and likewise for the others)
    /// are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_ascii_lowercase().replace(|c: char| c == '-' || c == '_', "");
        match name.strip_suffix("order").unwrap_or(name.as_str()) {
            "pre" => Ok(Self::Pre),
            "in" => Ok(Self::In),
            "post" => Ok(Self::Post),
            _ => Err(ParseTraversalError::UnknownOrder(s.to_owned())),
        }
    }
}

impl FromStr for Traversal {
    type Err = ParseTraversalError;

    /// Parses any name [`Order`] accepts as a depth-first traversal, and
    /// `breadth`, `breadth-first`, `level` or `bfs` as a breadth-first one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_ascii_lowercase().replace(|c: char| c == '-' || c == '_', "");
        match name.as_str() {
            "breadth" | "breadthfirst" | "level" | "levelorder" | "bfs" => Ok(Self::BreadthFirst),
            _ => s
                .parse()
                .map(Self::DepthFirst)
                .map_err(|_| ParseTraversalError::UnknownTraversal(s.to_owned())),
        }
    }
}

/// Something that walks a tree and acts on each value it reaches.
pub trait Visitor<T> {
    /// The order in which this visitor wants to reach values.
    fn traversal(&self) -> Traversal;

    /// Called once for every value in the tree, in [`traversal`][Self::traversal] order.
    fn action(&mut self, value: &T);
}

/// A [`Visitor`] made from a [`Traversal`] and a closure.
///
/// # Examples
///
/// ```
/// use visitor_bst::{BinaryTree, Traversal, Walk};
///
/// let tree: BinaryTree<i32> = vec![2, 1, 3].into_iter().collect();
///
/// let mut seen = Vec::new();
/// tree.traverse_tree(&mut Walk::new(Traversal::BreadthFirst, |v: &i32| seen.push(*v)));
///
/// assert_eq!(seen, [2, 1, 3]);
/// ```
pub struct Walk<F> {
    traversal: Traversal,
    action: F,
}

impl<F> Walk<F> {
    /// Wraps `action` so it is called on every value reached by `traversal`.
    pub fn new(traversal: Traversal, action: F) -> Self {
        Self { traversal, action }
    }

    /// Gives back the closure, along with anything it captured by value.
    pub fn into_inner(self) -> F {
        self.action
    }
}

impl<T, F> Visitor<T> for Walk<F>
where
    F: FnMut(&T),
{
    fn traversal(&self) -> Traversal {
        self.traversal
    }

    fn action(&mut self, value: &T) {
        (self.action)(value)
    }
}

impl<F> fmt::Debug for Walk<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walk")
            .field("traversal", &self.traversal)
            .finish()
    }
}
