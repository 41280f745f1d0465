//! Numeric range expansion inside bracket groups.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ExpandError, MAX_EXPANDED_HOSTS};

static RANGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<start>\d+)-(?P<end>\d+)$").expect("hard-coded pattern is valid"));

/// Expand one bracket group's contents into its list of alternatives.
///
/// `001-003` expands to `001`, `002`, `003`. Items that are not `lo-hi`
/// digit ranges pass through verbatim, so literal alternatives mix freely
/// with ranges: `02-03,a` expands to `02`, `03`, `a`. An empty item is kept
/// as the empty string.
///
/// When either bound of a range carries a leading zero, every emitted value
/// is zero-padded to the wider bound's width.
pub fn expand_range_expression(expression: &str) -> Result<Vec<String>, ExpandError> {
    if expression.is_empty() {
        return Err(ExpandError::EmptyExpression);
    }

    let mut alternatives = Vec::new();
    for item in expression.split(',') {
        let Some(captures) = RANGE_PATTERN.captures(item) else {
            alternatives.push(item.to_string());
            continue;
        };
        let start_text = &captures["start"];
        let end_text = &captures["end"];

        let width = if start_text.starts_with('0') || end_text.starts_with('0') {
            start_text.len().max(end_text.len())
        } else {
            0
        };

        let (Ok(start), Ok(end)) = (start_text.parse::<u64>(), end_text.parse::<u64>()) else {
            // Bounds past u64 describe a range far past any sane output size.
            return Err(ExpandError::ExpansionTooLarge);
        };
        if end < start {
            return Err(ExpandError::InvalidRange);
        }
        if end - start >= MAX_EXPANDED_HOSTS as u64 {
            return Err(ExpandError::ExpansionTooLarge);
        }

        for value in start..=end {
            alternatives.push(format!("{value:0width$}"));
        }
        if alternatives.len() > MAX_EXPANDED_HOSTS {
            return Err(ExpandError::ExpansionTooLarge);
        }
    }

    Ok(alternatives)
}
