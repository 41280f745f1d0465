//! Hostname tokenizer.

use std::fmt;

/// An indivisible lexical unit of a hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Sentinel carried only by the tree root; never produced by [`tokenize`].
    Root,
    /// A single non-digit character.
    Rune(char),
    /// A maximal run of digit characters.
    Number {
        /// The digit run exactly as written, leading zeroes included.
        text: String,
        /// Numeric value of the run.
        value: u64,
        /// Whether the run starts with `'0'`.
        zero_padded: bool,
    },
}

impl Token {
    fn number(text: &str) -> Self {
        Token::Number {
            text: text.to_string(),
            // A run too long for u64 cannot participate in a range anyway;
            // the value only drives range detection.
            value: text.parse().unwrap_or(0),
            zero_padded: text.starts_with('0'),
        }
    }

    /// Append the token's literal spelling to `out`.
    pub fn write_literal(&self, out: &mut String) {
        match self {
            Token::Root => {}
            Token::Rune(ch) => out.push(*ch),
            Token::Number { text, .. } => out.push_str(text),
        }
    }

    /// The digit spelling, if this is a `Number` token.
    pub fn number_text(&self) -> Option<&str> {
        match self {
            Token::Number { text, .. } => Some(text),
            _ => None,
        }
    }

    /// The numeric value, if this is a `Number` token.
    pub fn number_value(&self) -> Option<u64> {
        match self {
            Token::Number { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Whether `next` continues `self` numerically, so the two may share a
    /// continuous range.
    ///
    /// A range may widen across a digit boundary (`99` -> `100`) but must not
    /// widen into a zero-padded spelling (`99` -> `0100`, which would not
    /// re-expand to the same text) and can never shrink in width.
    pub fn is_next(&self, next: &Token) -> bool {
        let Token::Number { text: a, value: va, .. } = self else {
            return false;
        };
        let Token::Number { text: b, value: vb, zero_padded } = next else {
            return false;
        };

        if vb.checked_sub(*va) != Some(1) {
            return false;
        }
        if b.len() < a.len() {
            return false;
        }
        if b.len() > a.len() && *zero_padded {
            return false;
        }
        true
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Root => write!(f, "{{*:*}}"),
            Token::Rune(ch) => write!(f, "{{R:{ch}}}"),
            Token::Number { text, .. } => write!(f, "{{D:{text}}}"),
        }
    }
}

/// Split a hostname into tokens.
///
/// Digit runs merge into a single [`Token::Number`]; every other character
/// becomes its own [`Token::Rune`]. Concatenating the tokens' literal
/// spellings in order reproduces the input exactly.
pub fn tokenize(host: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut digits = String::new();

    for ch in host.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        if !digits.is_empty() {
            tokens.push(Token::number(&digits));
            digits.clear();
        }
        tokens.push(Token::Rune(ch));
    }
    if !digits.is_empty() {
        tokens.push(Token::number(&digits));
    }

    tokens
}
