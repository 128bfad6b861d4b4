//! Search query value type and its enumerations.
//!
//! A [`SearchQuery`] is an immutable value constructed by the caller for
//! every invocation; the engine holds no state between calls.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Tag identifying which collaborator produced a record or result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SourceType {
    /// Content-library item
    Content,
    /// Curriculum scheme of work
    Scheme,
    /// Curriculum weekly plan
    WeeklyPlan,
    /// File-manager entry
    File,
    /// Lesson plan
    Lesson,
    /// Quiz
    Quiz,
    /// Curriculum general content. Reserved: part of the closed tag set
    /// but no collaborator currently emits it.
    Curriculum,
}

impl SourceType {
    /// Parse from a tag string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "content" => Some(Self::Content),
            "scheme" => Some(Self::Scheme),
            "weekly-plan" => Some(Self::WeeklyPlan),
            "file" => Some(Self::File),
            "lesson" => Some(Self::Lesson),
            "quiz" => Some(Self::Quiz),
            "curriculum" => Some(Self::Curriculum),
            _ => None,
        }
    }

    /// Convert to the tag string used in result ids and filters.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Scheme => "scheme",
            Self::WeeklyPlan => "weekly-plan",
            Self::File => "file",
            Self::Lesson => "lesson",
            Self::Quiz => "quiz",
            Self::Curriculum => "curriculum",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort key for the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Relevance score (descending base order)
    #[default]
    Relevance,
    /// Record date (descending base order, missing date = Unix epoch)
    Date,
    /// Title (ascending base order)
    Title,
    /// Author (ascending base order, missing author = empty string)
    Author,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Date => "date",
            Self::Title => "title",
            Self::Author => "author",
        }
    }
}

/// Sort polarity.
///
/// `Ascending` reverses the base comparator of every sort key, including
/// keys whose base order is already ascending. Requesting ascending on
/// `Title` therefore yields Z→A output; callers depend on this exact
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// One search invocation: free text plus categorical filters.
///
/// Empty `text` with at least one of the type/level/subject/system
/// filters set is a valid "browse" query; every filter set empty means
/// "no restriction" for that field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query, matched case-insensitively as a literal substring.
    #[serde(default)]
    pub text: String,
    /// Restrict to these source types (empty = all sources).
    #[serde(default)]
    pub type_filter: Vec<SourceType>,
    /// Restrict to these level display names (empty = all levels).
    #[serde(default)]
    pub level_filter: Vec<String>,
    /// Restrict to these subject display names (empty = all subjects).
    #[serde(default)]
    pub subject_filter: Vec<String>,
    /// Restrict to these education systems (empty = both).
    #[serde(default)]
    pub system_filter: Vec<String>,
    /// Restrict to these authors (empty = all authors).
    #[serde(default)]
    pub author_filter: Vec<String>,
    /// Sort key.
    #[serde(default)]
    pub sort_by: SortBy,
    /// Sort polarity.
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl SearchQuery {
    /// Create an empty query (matches nothing until text or filters are set).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the query text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder: restrict to the given source types.
    pub fn types(mut self, types: Vec<SourceType>) -> Self {
        self.type_filter = types;
        self
    }

    /// Builder: restrict to the given level display names.
    pub fn levels(mut self, levels: Vec<String>) -> Self {
        self.level_filter = levels;
        self
    }

    /// Builder: restrict to the given subject display names.
    pub fn subjects(mut self, subjects: Vec<String>) -> Self {
        self.subject_filter = subjects;
        self
    }

    /// Builder: restrict to the given education systems.
    pub fn systems(mut self, systems: Vec<String>) -> Self {
        self.system_filter = systems;
        self
    }

    /// Builder: restrict to the given authors.
    pub fn authors(mut self, authors: Vec<String>) -> Self {
        self.author_filter = authors;
        self
    }

    /// Builder: set the sort key.
    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Builder: set the sort polarity.
    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// The trimmed query text; whitespace-only input counts as empty.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// True when neither text nor any of the type/level/subject/system
    /// filters would constrain the scan. The author filter alone does
    /// not activate a search; this distinguishes the UI's "no search
    /// performed yet" empty state from "search matched nothing".
    pub fn is_blank(&self) -> bool {
        self.trimmed_text().is_empty()
            && self.type_filter.is_empty()
            && self.level_filter.is_empty()
            && self.subject_filter.is_empty()
            && self.system_filter.is_empty()
    }

    /// Check whether a source participates in the scan.
    pub fn includes_source(&self, source: SourceType) -> bool {
        self.type_filter.is_empty() || self.type_filter.contains(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_type_roundtrip() {
        for tag in ["content", "scheme", "weekly-plan", "file", "lesson", "quiz", "curriculum"] {
            let parsed = SourceType::parse(tag).unwrap();
            assert_eq!(parsed.as_str(), tag);
        }
    }

    #[test]
    fn test_source_type_parse_case_insensitive() {
        assert_eq!(SourceType::parse("Quiz"), Some(SourceType::Quiz));
        assert_eq!(SourceType::parse("WEEKLY-PLAN"), Some(SourceType::WeeklyPlan));
        assert_eq!(SourceType::parse("unknown"), None);
    }

    #[test]
    fn test_query_defaults() {
        let query = SearchQuery::new();
        assert_eq!(query.sort_by, SortBy::Relevance);
        assert_eq!(query.sort_order, SortOrder::Descending);
        assert!(query.is_blank());
    }

    #[test]
    fn test_is_blank_ignores_whitespace() {
        let query = SearchQuery::new().text("   ");
        assert!(query.is_blank());
    }

    #[test]
    fn test_is_blank_with_filters() {
        assert!(!SearchQuery::new().text("math").is_blank());
        assert!(!SearchQuery::new().types(vec![SourceType::Quiz]).is_blank());
        assert!(!SearchQuery::new().levels(vec!["Level I".to_string()]).is_blank());
        assert!(!SearchQuery::new().subjects(vec!["Arts".to_string()]).is_blank());
        assert!(!SearchQuery::new().systems(vec!["anglophone".to_string()]).is_blank());
    }

    #[test]
    fn test_author_filter_alone_stays_blank() {
        let query = SearchQuery::new().authors(vec!["Mme Fotso".to_string()]);
        assert!(query.is_blank());
    }

    #[test]
    fn test_includes_source() {
        let unrestricted = SearchQuery::new();
        assert!(unrestricted.includes_source(SourceType::File));

        let restricted = SearchQuery::new().types(vec![SourceType::Quiz, SourceType::Lesson]);
        assert!(restricted.includes_source(SourceType::Quiz));
        assert!(!restricted.includes_source(SourceType::File));
    }
}
