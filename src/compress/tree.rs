//! The compression tree.

use std::fmt;

use tracing::trace;

use super::{tokenize, Token, TokenNode};

/// A prefix tree over tokenized hostnames.
///
/// The tree lives for a single compression run: insert every hostname in
/// sorted lexical order, then render once with [`ExpressionTree::expression`].
/// Insertion order of siblings is preserved and decides tie-breaks in the
/// rendered output, which is why the caller sorts first.
#[derive(Debug)]
pub struct ExpressionTree {
    root: TokenNode,
}

impl ExpressionTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            root: TokenNode::new(Token::Root),
        }
    }

    /// Insert one hostname, merging its token path into the tree.
    pub fn add_host(&mut self, host: &str) {
        trace!(host, "adding host to expression tree");
        let mut head = &mut self.root;
        for token in tokenize(host) {
            head = head.child_entry(token);
        }
    }

    /// Render the hostlist expression covering every inserted hostname.
    ///
    /// An empty tree renders as the empty string.
    pub fn expression(&mut self) -> String {
        self.root.expression()
    }

    /// Borrow the root node.
    pub fn root(&self) -> &TokenNode {
        &self.root
    }
}

impl fmt::Display for ExpressionTree {
    /// Renders the tree structure, one root-to-leaf token path per line:
    ///
    /// ```text
    /// {R:a}->{R:a}
    ///        {R:b}
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.root.children().is_empty() {
            return write!(f, "{}", Token::Root);
        }

        let mut lines = Vec::new();
        for child in self.root.children() {
            child.collect_paths("", &mut lines);
        }
        write!(f, "{}", lines.join("\n"))
    }
}
