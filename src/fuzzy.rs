//! Approximate subsequence matching over entry names.
//!
//! A query matches a candidate when every query character appears in the
//! candidate in order (case-insensitive). Matches are scored so that
//! runs of adjacent hits, hits following separators and camel-case
//! boundaries rank above scattered hits, and candidates with long
//! unmatched tails rank below tight ones. The matched character
//! positions are kept for highlighting.

/// Bonus for a hit immediately following the previous hit.
const ADJACENCY_BONUS: i32 = 15;
/// Bonus for a hit right after a separator character.
const SEPARATOR_BONUS: i32 = 10;
/// Bonus for a hit on a camel-case boundary.
const CAMEL_BONUS: i32 = 10;
/// Bonus for matching the very first candidate character.
const FIRST_CHAR_BONUS: i32 = 10;
/// Penalty per character skipped before the first hit.
const LEADING_GAP_PENALTY: i32 = -3;
/// Floor for the accumulated leading-gap penalty.
const MAX_LEADING_GAP_PENALTY: i32 = -9;
/// Penalty per unmatched candidate character.
const UNMATCHED_PENALTY: i32 = -1;

const SEPARATORS: &[char] = &[' ', '/', '_', '-', '.', ':'];

/// A single candidate that matched the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Index of the candidate in the input list.
    pub index: usize,
    /// Higher ranks first.
    pub score: i32,
    /// Character positions of the hits, for highlighting.
    pub positions: Vec<usize>,
}

/// Match `query` against every candidate, returning hits ranked
/// best-first. Ties keep the candidates' input order. An empty query or
/// a query with no matches yields an empty list.
pub fn find<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<Match> {
    let mut matches: Vec<Match> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| {
            match_one(query, candidate.as_ref()).map(|(score, positions)| {
                Match {
                    index,
                    score,
                    positions,
                }
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Greedy forward scan of one candidate. Returns `None` unless every
/// query character is consumed.
fn match_one(query: &str, candidate: &str) -> Option<(i32, Vec<usize>)> {
    if query.is_empty() {
        return None;
    }

    let query: Vec<char> = query.chars().collect();
    let chars: Vec<char> = candidate.chars().collect();

    let mut positions = Vec::with_capacity(query.len());
    let mut score = 0;
    let mut next = 0;
    let mut prev_hit: Option<usize> = None;

    for (idx, &ch) in chars.iter().enumerate() {
        if next < query.len() && chars_eq_ignore_case(ch, query[next]) {
            let mut bonus = 0;

            match prev_hit {
                Some(prev) if prev + 1 == idx => bonus += ADJACENCY_BONUS,
                Some(_) => {}
                None => {
                    let gap = idx as i32 * LEADING_GAP_PENALTY;
                    score += gap.max(MAX_LEADING_GAP_PENALTY);
                    if idx == 0 {
                        bonus += FIRST_CHAR_BONUS;
                    }
                }
            }

            if idx > 0 {
                let prev_ch = chars[idx - 1];
                if SEPARATORS.contains(&prev_ch) {
                    bonus += SEPARATOR_BONUS;
                }
                if prev_ch.is_lowercase() && ch.is_uppercase() {
                    bonus += CAMEL_BONUS;
                }
            }

            score += bonus;
            positions.push(idx);
            prev_hit = Some(idx);
            next += 1;
        } else {
            score += UNMATCHED_PENALTY;
        }
    }

    if next < query.len() {
        return None;
    }

    Some((score, positions))
}
