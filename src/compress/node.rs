//! Nodes of the compression tree.

use super::Token;

/// A node in the compression tree.
///
/// Children are uniquely owned and kept in insertion order. Token-equal
/// siblings merge on insert, so the children of one node form a trie level.
#[derive(Debug, Clone)]
pub struct TokenNode {
    token: Token,
    children: Vec<TokenNode>,
    /// Rendered expression of everything below this node, populated by
    /// [`TokenNode::expression`]. Ancestors group number siblings by this
    /// string: two numbers may share a range only if their subtrees render
    /// identically.
    child_expr: String,
}

impl TokenNode {
    /// Create a node holding `token` with no children.
    pub fn new(token: Token) -> Self {
        Self {
            token,
            children: Vec::new(),
            child_expr: String::new(),
        }
    }

    /// The token held by this node.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The node's children, in insertion order.
    pub fn children(&self) -> &[TokenNode] {
        &self.children
    }

    /// Descend into the child holding `token`, appending a new child if no
    /// sibling matches.
    pub(crate) fn child_entry(&mut self, token: Token) -> &mut TokenNode {
        let idx = match self.children.iter().position(|c| c.token == token) {
            Some(idx) => idx,
            None => {
                self.children.push(TokenNode::new(token));
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }

    /// Render the hostlist expression for this node and everything below it.
    ///
    /// Children render first (post-order) so their cached suffixes are
    /// available for grouping. Rune children recurse directly; number
    /// children group by suffix, sort by value, and merge adjacent values
    /// into `lo-hi` ranges.
    pub fn expression(&mut self) -> String {
        let rendered: Vec<String> = self.children.iter_mut().map(TokenNode::expression).collect();

        let mut child_exprs: Vec<String> = Vec::new();
        // Suffix groups keep first-appearance order so the output is
        // deterministic for any insertion order.
        let mut groups: Vec<(&str, Vec<&TokenNode>)> = Vec::new();
        for (child, expr) in self.children.iter().zip(&rendered) {
            if !matches!(child.token, Token::Number { .. }) {
                child_exprs.push(expr.clone());
                continue;
            }
            match groups.iter().position(|(suffix, _)| *suffix == child.child_expr) {
                Some(idx) => groups[idx].1.push(child),
                None => groups.push((child.child_expr.as_str(), vec![child])),
            }
        }

        for (suffix, mut members) in groups {
            if let [only] = members.as_slice() {
                let text = only.token.number_text().unwrap_or_default();
                child_exprs.push(format!("{text}{suffix}"));
                continue;
            }

            members.sort_by_key(|member| member.token.number_value().unwrap_or(0));

            let mut items: Vec<String> = Vec::new();
            let mut start = &members[0].token;
            let mut end = start;
            for member in &members[1..] {
                if end.is_next(&member.token) {
                    end = &member.token;
                    continue;
                }
                items.push(range_item(start, end));
                start = &member.token;
                end = start;
            }
            items.push(range_item(start, end));

            child_exprs.push(format!("[{}]{suffix}", items.join(",")));
        }

        self.child_expr = match child_exprs.len() {
            0 => String::new(),
            1 => child_exprs.swap_remove(0),
            _ => {
                let joined = child_exprs.join(",");
                if matches!(self.token, Token::Root) {
                    joined
                } else {
                    format!("[{joined}]")
                }
            }
        };

        let mut out = String::new();
        self.token.write_literal(&mut out);
        out.push_str(&self.child_expr);
        out
    }

    /// Append one line per root-to-leaf path below this node, branches
    /// aligned under their divergence column.
    pub(crate) fn collect_paths(&self, prefix: &str, lines: &mut Vec<String>) {
        let head = format!("{prefix}{}", self.token);
        if self.children.is_empty() {
            lines.push(head);
            return;
        }

        let pad = " ".repeat(head.chars().count() + 2);
        let arrow = format!("{head}->");
        for (i, child) in self.children.iter().enumerate() {
            let child_prefix = if i == 0 { &arrow } else { &pad };
            child.collect_paths(child_prefix, lines);
        }
    }
}

/// Render a run of merged number tokens as a single item.
fn range_item(start: &Token, end: &Token) -> String {
    let lo = start.number_text().unwrap_or_default();
    if std::ptr::eq(start, end) {
        return lo.to_string();
    }
    let hi = end.number_text().unwrap_or_default();
    format!("{lo}-{hi}")
}
