//! Character-level scanners over hostlist expressions.

use tracing::debug;

use crate::util::cartesian_product;

use super::{expand_range_expression, ExpandError, MAX_EXPANDED_HOSTS};

/// Whether `ch` may appear in a hostlist expression.
pub fn is_valid_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, ',' | '[' | ']' | '-' | '_' | '.')
}

/// Split a string of hostlist expressions on top-level commas.
///
/// Commas inside a bracket group are not split points:
/// `host-[001-003],node-[3,4]` splits into `host-[001-003]` and `node-[3,4]`.
/// Every character is validated; bracket nesting and balance are checked for
/// the whole input.
pub fn split_expressions(hostlist: &str) -> Result<Vec<String>, ExpandError> {
    let mut expressions = Vec::new();
    let mut current = String::new();
    let mut bracket = 0u32;

    for (i, ch) in hostlist.chars().enumerate() {
        if !is_valid_char(ch) {
            return Err(ExpandError::InvalidToken { ch, position: i + 1 });
        }

        if ch == ',' && bracket == 0 {
            expressions.push(std::mem::take(&mut current));
            continue;
        }

        if ch == '[' {
            if bracket > 0 {
                return Err(ExpandError::NestedRangeExpression);
            }
            bracket += 1;
        } else if ch == ']' {
            if bracket == 0 {
                return Err(ExpandError::InvalidToken { ch, position: i + 1 });
            }
            bracket -= 1;
        }
        current.push(ch);
    }

    if bracket > 0 {
        return Err(ExpandError::ExpectedCloseBracket);
    }
    expressions.push(current);

    Ok(expressions)
}

/// Expand one already-split hostlist expression.
///
/// `host-[001-003]` expands to `host-001`, `host-002`, `host-003`. Several
/// bracket groups combine cartesian-style with the leftmost group varying
/// slowest. A top-level comma is rejected with
/// [`ExpandError::NotSingleExpression`]; callers split first with
/// [`split_expressions`].
pub fn expand_single_expression(expression: &str) -> Result<Vec<String>, ExpandError> {
    if expression.is_empty() {
        return Err(ExpandError::EmptyExpression);
    }

    // Literal text around the bracket groups. There is always one more
    // literal than there are groups; combination values are spliced between
    // consecutive literals.
    let mut literals: Vec<String> = Vec::new();
    let mut range_exprs: Vec<String> = Vec::new();
    let mut literal_buf = String::new();
    let mut range_buf = String::new();
    let mut bracket = 0u32;

    for (i, ch) in expression.chars().enumerate() {
        if !is_valid_char(ch) {
            return Err(ExpandError::InvalidToken { ch, position: i + 1 });
        }
        if ch == ',' && bracket == 0 {
            return Err(ExpandError::NotSingleExpression);
        }

        if ch == '[' {
            if bracket > 0 {
                return Err(ExpandError::NestedRangeExpression);
            }
            bracket += 1;
            continue;
        }
        if ch == ']' {
            if bracket == 0 {
                return Err(ExpandError::InvalidToken { ch, position: i + 1 });
            }
            bracket -= 1;
            if bracket == 0 {
                range_exprs.push(std::mem::take(&mut range_buf));
                literals.push(std::mem::take(&mut literal_buf));
                continue;
            }
        }

        if bracket == 0 {
            literal_buf.push(ch);
        } else {
            range_buf.push(ch);
        }
    }

    if bracket > 0 {
        return Err(ExpandError::ExpectedCloseBracket);
    }
    literals.push(literal_buf);

    if range_exprs.is_empty() {
        return Ok(vec![literals.concat()]);
    }

    let alternatives: Vec<Vec<String>> = range_exprs
        .iter()
        .map(|expr| expand_range_expression(expr))
        .collect::<Result<_, _>>()?;

    let mut total: usize = 1;
    for list in &alternatives {
        total = total
            .checked_mul(list.len())
            .filter(|&n| n <= MAX_EXPANDED_HOSTS)
            .ok_or(ExpandError::ExpansionTooLarge)?;
    }

    let mut hosts = Vec::with_capacity(total);
    for combination in cartesian_product(&alternatives) {
        let mut host = String::with_capacity(expression.len());
        for (i, literal) in literals.iter().enumerate() {
            host.push_str(literal);
            if let Some(value) = combination.get(i) {
                host.push_str(value);
            }
        }
        hosts.push(host);
    }

    debug!(expression, count = hosts.len(), "expanded single expression");
    Ok(hosts)
}
