//! Multi-source relevance search.
//!
//! Scans every collaborator collection, scores records against the
//! query text, merges the scored rows into one list, filters, and sorts.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                        SearchQuery                             │
//! │        (text + type/level/subject/system/author filters)       │
//! └────────────────────────────────────────────────────────────────┘
//!                                │
//!                                ▼
//! ┌────────────────────────────────────────────────────────────────┐
//! │  Per-source scan (scoring.rs)                                  │
//! │  content · scheme · weekly-plan · file · lesson · quiz         │
//! │  weighted substring matches, or score=1 browse on empty text   │
//! └────────────────────────────────────────────────────────────────┘
//!                                │
//!                                ▼
//!                ┌───────────────────────────────┐
//!                │  Post-filters (filters.rs)    │
//!                │  level → subject → system →   │
//!                │  author                       │
//!                └───────────────────────────────┘
//!                                │
//!                                ▼
//!                     Stable sort (engine.rs)
//! ```

pub mod engine;
pub mod filters;
pub mod query;
pub mod record;
pub mod result;
pub mod scoring;

// Re-export main types
pub use engine::search;
pub use filters::{apply_filters, passes_filters};
pub use query::{SearchQuery, SortBy, SortOrder, SourceType};
pub use record::{
    ContentItem, FileRecord, LessonPlan, Quiz, QuizQuestion, SchemeOfWork, SourceCollections,
    SourceRecord, WeeklyPlan,
};
pub use result::SearchResult;
pub use scoring::{normalize, score_record};
