//! Search result rows.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::query::SourceType;
use super::record::SourceRecord;

/// One row of the ranked result list.
///
/// Built fresh on every search call and owned by the caller; nothing in
/// the engine retains it. The `id` is namespaced with the source tag so
/// rows stay unique even when different collaborators reuse raw ids.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// Globally unique id: `"{source-tag}-{raw-id}"`.
    pub id: String,
    /// Which collaborator produced this row.
    pub source_type: SourceType,
    /// Display title (never empty; falls back to an "Untitled" label).
    pub title: String,
    /// Display description (never empty; falls back to a stock phrase).
    pub description: String,
    /// Additive relevance score; 1 for empty-text browse queries.
    pub relevance_score: u32,
    /// Field names that contributed to the score, in evaluation order.
    pub matched_fields: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl SearchResult {
    /// Build a result row from a scored record.
    pub fn from_record(
        record: &SourceRecord<'_>,
        relevance_score: u32,
        matched_fields: Vec<&'static str>,
    ) -> Self {
        let source_type = record.source_type();
        Self {
            id: format!("{}-{}", source_type.as_str(), record.raw_id()),
            source_type,
            title: record.title_or_default(),
            description: record.description_or_default(),
            relevance_score,
            matched_fields,
            category: record.category().map(String::from),
            level: record.level().map(String::from),
            subject: record.subject().map(String::from),
            system: record.system().map(String::from),
            author: record.author().map(String::from),
            date: record.date(),
            tags: record.tags().to_vec(),
        }
    }
}
