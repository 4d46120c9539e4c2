//! Fuzzy entry search across installed docsets.

use serde::Serialize;

use crate::cache::CacheStore;
use crate::catalog::DocumentEntry;
use crate::error::Result;
use crate::fuzzy;

/// One search hit. Built fresh per query, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub slug: String,
    pub entry: DocumentEntry,
    /// Character positions of the query hits within `entry.name`.
    pub positions: Vec<usize>,
}

fn match_entries(
    slug: &str,
    entries: Vec<DocumentEntry>,
    query: &str,
) -> Vec<SearchHit> {
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    fuzzy::find(query, &names)
        .into_iter()
        .map(|m| SearchHit {
            slug: slug.to_string(),
            entry: entries[m.index].clone(),
            positions: m.positions,
        })
        .collect()
}

/// Search within one installed docset. A missing install or a malformed
/// catalog surfaces as an error.
pub fn search_docset(
    cache: &CacheStore,
    slug: &str,
    query: &str,
) -> Result<Vec<SearchHit>> {
    let index = cache.load_index(slug)?;
    Ok(match_entries(slug, index.entries, query))
}

/// Search across every installed docset.
///
/// A docset whose catalog cannot be read or parsed is skipped silently;
/// the search never fails as a whole for that reason. Results are
/// concatenated in docset-enumeration order with each docset's internal
/// ranking preserved — there is no cross-corpus re-ranking.
pub fn search_all(cache: &CacheStore, query: &str) -> Result<Vec<SearchHit>> {
    let mut hits = Vec::new();
    for slug in cache.installed_slugs()? {
        let index = match cache.load_index(&slug) {
            Ok(index) => index,
            Err(err) => {
                tracing::debug!(slug, %err, "skipping unreadable catalog");
                continue;
            }
        };
        hits.extend(match_entries(&slug, index.entries, query));
    }
    Ok(hits)
}

/// Format hits for human-readable terminal output.
pub fn format_human(hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("No results found.");
        return;
    }

    for hit in hits {
        println!(
            "{}: {}  {}",
            hit.slug,
            hit.entry.display(),
            hit.entry.path
        );
    }
    println!("\n{} result(s)", hits.len());
}

/// Format hits as JSON output.
pub fn format_json(hits: &[SearchHit], query: &str) -> Result<()> {
    let out = serde_json::json!({
        "query": query,
        "result_count": hits.len(),
        "results": hits,
    });
    println!("{out}");
    Ok(())
}
