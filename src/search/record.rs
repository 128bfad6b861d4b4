//! Source record shapes supplied by the collaborator stores.
//!
//! Each collaborator (content library, curriculum store, file manager,
//! lesson and quiz collections) exposes its own record shape; the engine
//! sees them through the [`SourceRecord`] tagged union so that scoring
//! is a `match` over variants rather than field probing. Every search
//! field is optional or defaults to empty: an absent field behaves like
//! an empty one, never like an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::query::SourceType;

/// Content-library item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Curriculum scheme of work: one topic broken into objectives,
/// content points and activities for a teaching sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemeOfWork {
    pub id: String,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub content: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub term: Option<u8>,
    #[serde(default)]
    pub week: Option<u8>,
}

/// Curriculum weekly plan: a themed week with learning outcomes and
/// cross-curricular links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub id: String,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
    #[serde(default)]
    pub sub_themes: Vec<String>,
    #[serde(default)]
    pub cross_curricular_links: Vec<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub week: Option<u8>,
}

/// File-manager entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Teacher-authored lesson plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LessonPlan {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// One question inside a quiz. Only the question text participates in
/// search; options and answer belong to the authoring/taking flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub answer: Option<usize>,
}

/// Teacher-authored quiz.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Read-only snapshot of every collaborator collection for one search
/// call. Missing collaborators are simply empty vectors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceCollections {
    #[serde(default)]
    pub content: Vec<ContentItem>,
    #[serde(default)]
    pub schemes: Vec<SchemeOfWork>,
    #[serde(default)]
    pub weekly_plans: Vec<WeeklyPlan>,
    #[serde(default)]
    pub files: Vec<FileRecord>,
    #[serde(default)]
    pub lessons: Vec<LessonPlan>,
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
}

impl SourceCollections {
    /// Total record count across all sources.
    pub fn len(&self) -> usize {
        self.content.len()
            + self.schemes.len()
            + self.weekly_plans.len()
            + self.files.len()
            + self.lessons.len()
            + self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate every record as a [`SourceRecord`], source by source.
    pub fn records(&self) -> impl Iterator<Item = SourceRecord<'_>> {
        self.content
            .iter()
            .map(SourceRecord::Content)
            .chain(self.schemes.iter().map(SourceRecord::Scheme))
            .chain(self.weekly_plans.iter().map(SourceRecord::WeeklyPlan))
            .chain(self.files.iter().map(SourceRecord::File))
            .chain(self.lessons.iter().map(SourceRecord::Lesson))
            .chain(self.quizzes.iter().map(SourceRecord::Quiz))
    }
}

/// Borrowed view of one record from any source.
///
/// Gives the engine a uniform surface (type tag, id, display strings,
/// filterable metadata) over the heterogeneous per-source shapes.
#[derive(Debug, Clone, Copy)]
pub enum SourceRecord<'a> {
    Content(&'a ContentItem),
    Scheme(&'a SchemeOfWork),
    WeeklyPlan(&'a WeeklyPlan),
    File(&'a FileRecord),
    Lesson(&'a LessonPlan),
    Quiz(&'a Quiz),
}

impl SourceRecord<'_> {
    pub fn source_type(&self) -> SourceType {
        match self {
            Self::Content(_) => SourceType::Content,
            Self::Scheme(_) => SourceType::Scheme,
            Self::WeeklyPlan(_) => SourceType::WeeklyPlan,
            Self::File(_) => SourceType::File,
            Self::Lesson(_) => SourceType::Lesson,
            Self::Quiz(_) => SourceType::Quiz,
        }
    }

    pub fn raw_id(&self) -> &str {
        match self {
            Self::Content(r) => &r.id,
            Self::Scheme(r) => &r.id,
            Self::WeeklyPlan(r) => &r.id,
            Self::File(r) => &r.id,
            Self::Lesson(r) => &r.id,
            Self::Quiz(r) => &r.id,
        }
    }

    /// Display title, falling back to a per-source "Untitled" label when
    /// the underlying field is absent or empty.
    pub fn title_or_default(&self) -> String {
        let (field, fallback) = match self {
            Self::Content(r) => (r.title.as_deref(), "Untitled Content"),
            Self::Scheme(r) => (r.topic.as_deref(), "Untitled Scheme of Work"),
            Self::WeeklyPlan(r) => (r.theme.as_deref(), "Untitled Weekly Plan"),
            Self::File(r) => (r.name.as_deref(), "Untitled File"),
            Self::Lesson(r) => (r.title.as_deref(), "Untitled Lesson Plan"),
            Self::Quiz(r) => (r.title.as_deref(), "Untitled Quiz"),
        };
        match field {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Display description; sources without a description field derive
    /// one from their most descriptive content.
    pub fn description_or_default(&self) -> String {
        let derived = match self {
            Self::Content(r) => r.description.clone(),
            Self::File(r) => r.description.clone(),
            Self::Scheme(r) => join_nonempty(&r.objectives),
            Self::WeeklyPlan(r) => join_nonempty(&r.learning_outcomes),
            Self::Lesson(r) => r.content.clone(),
            Self::Quiz(r) => r.instructions.clone(),
        };
        match derived {
            Some(s) if !s.is_empty() => s,
            _ => "No description available".to_string(),
        }
    }

    pub fn level(&self) -> Option<&str> {
        match self {
            Self::Content(r) => r.level.as_deref(),
            Self::Scheme(r) => r.level.as_deref(),
            Self::WeeklyPlan(r) => r.level.as_deref(),
            Self::File(r) => r.level.as_deref(),
            Self::Lesson(r) => r.level.as_deref(),
            Self::Quiz(r) => r.level.as_deref(),
        }
    }

    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::Content(r) => r.subject.as_deref(),
            Self::Scheme(r) => r.subject.as_deref(),
            Self::WeeklyPlan(r) => r.subject.as_deref(),
            Self::File(r) => r.subject.as_deref(),
            Self::Lesson(r) => r.subject.as_deref(),
            Self::Quiz(r) => r.subject.as_deref(),
        }
    }

    pub fn system(&self) -> Option<&str> {
        match self {
            Self::Content(r) => r.system.as_deref(),
            Self::Scheme(r) => r.system.as_deref(),
            Self::WeeklyPlan(r) => r.system.as_deref(),
            Self::File(r) => r.system.as_deref(),
            Self::Lesson(r) => r.system.as_deref(),
            Self::Quiz(r) => r.system.as_deref(),
        }
    }

    pub fn author(&self) -> Option<&str> {
        match self {
            Self::Content(r) => r.author.as_deref(),
            Self::Scheme(r) => r.author.as_deref(),
            Self::WeeklyPlan(r) => r.author.as_deref(),
            Self::File(r) => r.author.as_deref(),
            Self::Lesson(r) => r.author.as_deref(),
            Self::Quiz(r) => r.author.as_deref(),
        }
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Content(r) => r.date,
            Self::Scheme(r) => r.date,
            Self::WeeklyPlan(r) => r.date,
            Self::File(r) => r.date,
            Self::Lesson(r) => r.date,
            Self::Quiz(r) => r.date,
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Content(r) => r.category.as_deref(),
            Self::File(r) => r.category.as_deref(),
            _ => None,
        }
    }

    pub fn tags(&self) -> &[String] {
        match self {
            Self::Content(r) => &r.tags,
            Self::File(r) => &r.tags,
            _ => &[],
        }
    }
}

fn join_nonempty(parts: &[String]) -> Option<String> {
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}
