//! This crate exposes a Binary Search Tree (BST) that is walked with
//! visitors, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores
//! the value that was inserted and will sometimes have child `Node`s.
//! The most important invariants of this BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is
//! the longest path from the root `Node` to a leaf `Node`). The tree here is
//! never rebalanced, so inserting sorted values builds something that looks
//! a lot more like a linked list than a tree.
//!
//! ## Visitors
//!
//! Getting values back out of a BST means walking it. There are several
//! classic ways to do that:
//!
//! - depth-first, visiting a `Node` before its subtrees (pre-order),
//!   between them (in-order) or after them (post-order),
//! - breadth-first, visiting the tree one level at a time.
//!
//! In-order walks visit the values of a BST in sorted order. A [`Visitor`]
//! picks one of these [`Traversal`]s and decides what to do with each value.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod tree;
pub mod visitor;

pub use error::ParseTraversalError;
pub use tree::BinaryTree;
pub use visitor::{Order, Traversal, Visitor, Walk};

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
