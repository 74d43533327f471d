//! Errors produced when naming a traversal strategy as text.

/// Returned when a string does not name a known [`Traversal`][crate::Traversal]
/// or depth-first [`Order`][crate::Order].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseTraversalError {
    /// The string is not one of `pre`, `in`, `post` or `breadth` (or an alias).
    #[error("unknown traversal `{0}`, expected one of `pre`, `in`, `post` or `breadth`")]
    UnknownTraversal(String),
    /// The string is not one of `pre`, `in` or `post` (or an alias).
    #[error("unknown depth-first order `{0}`, expected one of `pre`, `in` or `post`")]
    UnknownOrder(String),
}
