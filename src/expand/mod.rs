//! Expansion of hostlist expressions into explicit hostname lists.
//!
//! Expansion is a two-phase, character-level scan: [`split_expressions`]
//! validates the whole input and splits it on top-level commas, then
//! [`expand_single_expression`] expands each piece, combining its bracket
//! groups cartesian-style. No lexer is needed; the alphabet is small and
//! fixed.

mod range;
mod scanner;

pub use range::expand_range_expression;
pub use scanner::{expand_single_expression, is_valid_char, split_expressions};

use thiserror::Error;

/// Upper bound on the number of hostnames a single expansion may produce.
///
/// Nested bracket groups multiply, so a short expression can describe a
/// combinatorially large host set; expansion fails with
/// [`ExpandError::ExpansionTooLarge`] instead of materialising one.
pub const MAX_EXPANDED_HOSTS: usize = 1 << 20;

/// Errors surfaced while expanding a hostlist expression.
///
/// All variants are detected during the single left-to-right scan and abort
/// the call immediately; there are no partial results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    /// The expression, or one comma-separated piece of it, was empty.
    #[error("expression cannot be empty")]
    EmptyExpression,

    /// A character outside the allowed set, or a stray `]`.
    #[error("invalid character '{ch}' at position {position}")]
    InvalidToken {
        /// The offending character.
        ch: char,
        /// 1-based position of the character in the scanned string.
        position: usize,
    },

    /// A `[` opened inside an already open bracket group.
    #[error("range expression cannot be nested")]
    NestedRangeExpression,

    /// The input ended with an unmatched `[`.
    #[error("cannot find matching ']'")]
    ExpectedCloseBracket,

    /// A top-level comma appeared where a single expression was required.
    #[error("more than a single expression detected")]
    NotSingleExpression,

    /// A numeric range ran backwards: its end is less than its start.
    #[error("end value must not be less than start")]
    InvalidRange,

    /// Expanding would produce more than [`MAX_EXPANDED_HOSTS`] hostnames.
    #[error("expansion exceeds the maximum of {MAX_EXPANDED_HOSTS} hostnames")]
    ExpansionTooLarge,
}
