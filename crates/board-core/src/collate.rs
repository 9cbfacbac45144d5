//! Title collation.
//!
//! Approximates the default browser `localeCompare` ordering for plain text:
//! letters compare case-insensitively first, and only strings that are equal
//! ignoring case are ordered by case, lowercase before uppercase.
//!
//! Accents are not stripped: folded titles compare by code point, so
//! `"éclair"` sorts after `"zebra"`, where a locale collator would put it
//! among the `e`s.

use std::cmp::Ordering;

/// Compare two titles in board order.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| case_order(a, b))
}

/// Tertiary key: at the first position where the case differs, lowercase wins.
fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => return x.cmp(&y),
        }
    }
    a.chars().count().cmp(&b.chars().count())
}
