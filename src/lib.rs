//! Expand and compress hostlist expressions.
//!
//! A hostlist expression describes a set of hostnames without enumerating
//! them: literal text interleaved with bracketed, comma-separated
//! alternatives, where an alternative may itself be a numeric range.
//! `host-[001-004,010]` stands for `host-001` through `host-004` plus
//! `host-010`.
//!
//! The crate exposes the two directions as a pair of facade functions:
//!
//! ```
//! let hosts = hostlist::expand("host-[001-003]").unwrap();
//! assert_eq!(hosts, vec!["host-001", "host-002", "host-003"]);
//!
//! let expression = hostlist::compress(&hosts).unwrap();
//! assert_eq!(expression, "host-[001-003]");
//! ```
//!
//! Expansion is a two-phase character-level scan (the [`mod@expand`] module),
//! compression builds a prefix tree over tokenized hostnames and renders it
//! back as the smallest equivalent expression (the [`mod@compress`] module).
//! Both directions are synchronous, share no state across calls, and are safe
//! to invoke concurrently from independent call sites.

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod compress;
pub mod expand;
pub mod util;

pub use compress::{CompressError, ExpressionTree, Token, TokenNode};
pub use expand::{ExpandError, MAX_EXPANDED_HOSTS};

use tracing::debug;

/// Expand a hostlist expression into the explicit list of hostnames.
///
/// The expression may contain several comma-separated sub-expressions; the
/// results are concatenated in order. Multiple bracket groups within one
/// sub-expression combine cartesian-style, with the leftmost group varying
/// slowest:
///
/// ```
/// let hosts = hostlist::expand("p[1-2][3-4]s").unwrap();
/// assert_eq!(hosts, vec!["p13s", "p14s", "p23s", "p24s"]);
/// ```
pub fn expand(expression: &str) -> Result<Vec<String>, ExpandError> {
    if expression.is_empty() {
        return Err(ExpandError::EmptyExpression);
    }

    let mut hosts = Vec::new();
    for piece in expand::split_expressions(expression)? {
        hosts.extend(expand::expand_single_expression(&piece)?);
    }

    debug!(expression, count = hosts.len(), "expanded hostlist expression");
    Ok(hosts)
}

/// Compress a list of hostnames into a hostlist expression.
///
/// The input is sorted lexically before insertion, so the output does not
/// depend on argument order. Duplicate hostnames collapse. An empty list
/// compresses to the empty string.
///
/// ```
/// let expression = hostlist::compress(&["node3", "node1", "node2"]).unwrap();
/// assert_eq!(expression, "node[1-3]");
/// ```
pub fn compress<S: AsRef<str>>(hosts: &[S]) -> Result<String, CompressError> {
    let mut sorted: Vec<&str> = Vec::with_capacity(hosts.len());
    for host in hosts {
        let host = host.as_ref();
        if host.is_empty() {
            return Err(CompressError::EmptyHostname);
        }
        sorted.push(host);
    }
    sorted.sort();

    let mut tree = ExpressionTree::new();
    for host in &sorted {
        tree.add_host(host);
    }

    let expression = tree.expression();
    debug!(hosts = sorted.len(), %expression, "compressed hostnames");
    Ok(expression)
}
