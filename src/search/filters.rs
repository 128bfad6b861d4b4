//! Post-scoring result filters.
//!
//! Applied after the per-source scan, in a fixed order: level, subject,
//! system, author. Each filter is a keep-test against the query's value
//! set; an empty set means no restriction, and a result with no value
//! for a filtered field is excluded, never passed through.

use crate::curriculum::{level_display_name, subject_display_name};

use super::query::SearchQuery;
use super::result::SearchResult;

/// Check whether a result passes every filter in the query.
pub fn passes_filters(result: &SearchResult, query: &SearchQuery) -> bool {
    if !query.level_filter.is_empty() {
        let Some(level) = result.level.as_deref() else {
            return false;
        };
        let display = level_display_name(level);
        if !query.level_filter.iter().any(|f| f == display) {
            return false;
        }
    }

    if !query.subject_filter.is_empty() {
        let Some(subject) = result.subject.as_deref() else {
            return false;
        };
        let display = subject_display_name(subject);
        if !query.subject_filter.iter().any(|f| *f == display) {
            return false;
        }
    }

    if !query.system_filter.is_empty() {
        let Some(system) = result.system.as_deref() else {
            return false;
        };
        if !query.system_filter.iter().any(|f| f == system) {
            return false;
        }
    }

    if !query.author_filter.is_empty() {
        let Some(author) = result.author.as_deref() else {
            return false;
        };
        if !query.author_filter.iter().any(|f| f == author) {
            return false;
        }
    }

    true
}

/// Filter a result list in place, preserving order.
pub fn apply_filters(results: Vec<SearchResult>, query: &SearchQuery) -> Vec<SearchResult> {
    results
        .into_iter()
        .filter(|r| passes_filters(r, query))
        .collect()
}
