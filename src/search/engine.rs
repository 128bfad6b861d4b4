//! The search pipeline: scan, score, filter, sort.
//!
//! [`search`] is a pure function of the query and a snapshot of the
//! source collections. It never errors and never mutates its inputs;
//! callers re-run it on every keystroke or filter toggle and are
//! responsible for passing a stable snapshot if collections are mutated
//! concurrently elsewhere.

use std::cmp::Ordering;

use super::filters::apply_filters;
use super::query::{SearchQuery, SortBy, SortOrder};
use super::record::SourceCollections;
use super::result::SearchResult;
use super::scoring::{normalize, score_record};

/// Score every record from the non-excluded sources against the query,
/// apply the post-filters, and sort.
///
/// A blank query (no text, no type/level/subject/system filter) returns
/// an empty list without scanning: that is the UI's "no search performed
/// yet" state, distinct from a search that matched nothing.
pub fn search(query: &SearchQuery, sources: &SourceCollections) -> Vec<SearchResult> {
    if query.is_blank() {
        return Vec::new();
    }

    let text = query.trimmed_text();
    let needle = (!text.is_empty()).then(|| normalize(text));

    let mut results = Vec::new();
    for record in sources.records() {
        if !query.includes_source(record.source_type()) {
            continue;
        }
        match &needle {
            Some(needle) => {
                let (score, matched) = score_record(&record, needle);
                if score > 0 {
                    results.push(SearchResult::from_record(&record, score, matched));
                }
            }
            // Empty text: surface every record so pure-filter browsing works.
            None => results.push(SearchResult::from_record(&record, 1, Vec::new())),
        }
    }

    let mut results = apply_filters(results, query);
    sort_results(&mut results, query.sort_by, query.sort_order);
    results
}

/// Stable sort by the requested key.
///
/// Base comparators: relevance and date descending, title and author
/// ascending. `Ascending` reverses whichever base comparator is in
/// effect, so ascending-on-title deliberately comes out Z→A.
fn sort_results(results: &mut [SearchResult], sort_by: SortBy, sort_order: SortOrder) {
    results.sort_by(|a, b| {
        let ord = compare(a, b, sort_by);
        match sort_order {
            SortOrder::Descending => ord,
            SortOrder::Ascending => ord.reverse(),
        }
    });
}

fn compare(a: &SearchResult, b: &SearchResult, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Relevance => b.relevance_score.cmp(&a.relevance_score),
        SortBy::Date => {
            let epoch = chrono::DateTime::UNIX_EPOCH;
            b.date.unwrap_or(epoch).cmp(&a.date.unwrap_or(epoch))
        }
        SortBy::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortBy::Author => {
            let a_author = a.author.as_deref().unwrap_or("");
            let b_author = b.author.as_deref().unwrap_or("");
            a_author.to_lowercase().cmp(&b_author.to_lowercase())
        }
    }
}
