//! Natural version ordering and per-kind docset grouping.
//!
//! The remote catalog is a flat list in which one product can appear many
//! times, once per published version (`Python 3.12`, `Python 2.7`, ...).
//! Rows sharing a case-insensitive kind are folded into one group whose
//! versions are ordered newest-first by natural comparison: digit runs
//! compare numerically, everything else lexically.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::catalog::DocsetDescriptor;

/// Split a version string into maximal runs of digits and non-digits.
pub fn version_parts(version: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev_is_digit = None;

    for (idx, ch) in version.char_indices() {
        let is_digit = ch.is_ascii_digit();
        if let Some(prev) = prev_is_digit
            && prev != is_digit
        {
            parts.push(&version[start..idx]);
            start = idx;
        }
        prev_is_digit = Some(is_digit);
    }

    if start < version.len() {
        parts.push(&version[start..]);
    }

    parts
}

fn compare_part(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        // A numeric token sorts before a non-numeric one.
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Compare two version strings naturally, token by token.
///
/// The first non-equal token decides; if one token sequence is a strict
/// prefix of the other, the shorter one is less (`1.0` < `1.0.1`).
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let a_parts = version_parts(a);
    let b_parts = version_parts(b);

    for (a_part, b_part) in a_parts.iter().zip(b_parts.iter()) {
        match compare_part(a_part, b_part) {
            Ordering::Equal => {}
            other => return other,
        }
    }

    a_parts.len().cmp(&b_parts.len())
}

/// The case-insensitive grouping key derived from a display name.
pub fn kind_of(name: &str) -> String {
    name.to_lowercase()
}

/// One logical catalog entry folding every version row of a product.
///
/// Rows are referenced by index into the descriptor table they were
/// resolved from, newest version first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsetGroup {
    pub kind: String,
    pub versions: Vec<usize>,
}

impl DocsetGroup {
    /// Index of the row representing the group (its newest version).
    pub fn primary(&self) -> usize {
        self.versions[0]
    }
}

/// Fold catalog rows into per-kind groups.
///
/// Groups come back ordered ascending by case-insensitive display name;
/// within a group, versions are strictly descending per
/// [`compare_versions`]. Every row of a group appears in its `versions`
/// list, including the one acting as the group's face.
pub fn resolve_groups(docsets: &[DocsetDescriptor]) -> Vec<DocsetGroup> {
    let mut by_kind: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (idx, docset) in docsets.iter().enumerate() {
        by_kind.entry(kind_of(&docset.name)).or_default().push(idx);
    }

    by_kind
        .into_iter()
        .map(|(kind, mut versions)| {
            versions.sort_by(|&a, &b| {
                compare_versions(&docsets[b].version, &docsets[a].version)
            });
            DocsetGroup { kind, versions }
        })
        .collect()
}
