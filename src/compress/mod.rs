//! Compression of hostname lists into hostlist expressions.
//!
//! Hostnames are tokenized into alternating alphabetic and numeric runs,
//! merged into a prefix tree, and the tree is rendered bottom-up with range
//! detection over sibling numeric tokens.

mod node;
mod token;
mod tree;

pub use node::TokenNode;
pub use token::{tokenize, Token};
pub use tree::ExpressionTree;

use thiserror::Error;

/// Errors surfaced while compressing hostnames.
///
/// Compression of well-formed hostnames cannot fail; the variants here cover
/// input validation only.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompressError {
    /// A hostname in the input list was the empty string.
    #[error("hostname cannot be empty")]
    EmptyHostname,
}
