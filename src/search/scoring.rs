//! Per-source relevance scoring.
//!
//! Each source exposes a fixed, ordered list of searchable fields with
//! integer weights; a field matches when the normalized query text is a
//! literal substring of its normalized content. No tokenization, no
//! fuzziness. Title-like fields carry the highest weight so that topical
//! matches outrank incidental tag matches.

use unicode_normalization::UnicodeNormalization;

use super::record::SourceRecord;

/// Normalize text to its case-insensitive comparable form: NFC followed
/// by Unicode lowercasing. Both the query and every candidate field go
/// through this before the containment test.
pub fn normalize(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// Score one record against an already-normalized, non-empty needle.
///
/// Returns the additive score and the matched field names in evaluation
/// order. A zero score means the record does not match at all.
pub fn score_record(record: &SourceRecord<'_>, needle: &str) -> (u32, Vec<&'static str>) {
    let mut tally = Tally::new(needle);
    match record {
        SourceRecord::Content(item) => {
            tally.field("title", 10, item.title.as_deref());
            tally.field("description", 8, item.description.as_deref());
            tally.field_any("tags", 5, &item.tags);
            tally.field("subject", 7, item.subject.as_deref());
        }
        SourceRecord::Scheme(scheme) => {
            tally.field("topic", 10, scheme.topic.as_deref());
            tally.field_any("objectives", 8, &scheme.objectives);
            tally.field_any("content", 6, &scheme.content);
            tally.field_any("activities", 5, &scheme.activities);
        }
        SourceRecord::WeeklyPlan(plan) => {
            tally.field("theme", 10, plan.theme.as_deref());
            tally.field_any("learning_outcomes", 8, &plan.learning_outcomes);
            tally.field_any("sub_themes", 6, &plan.sub_themes);
            tally.field_any("cross_curricular_links", 5, &plan.cross_curricular_links);
        }
        SourceRecord::File(file) => {
            tally.field("name", 10, file.name.as_deref());
            tally.field("description", 8, file.description.as_deref());
            tally.field("category", 6, file.category.as_deref());
            tally.field_any("tags", 5, &file.tags);
        }
        SourceRecord::Lesson(lesson) => {
            tally.field("title", 10, lesson.title.as_deref());
            tally.field("subject", 8, lesson.subject.as_deref());
            tally.field_any("objectives", 7, &lesson.objectives);
            tally.field("content", 6, lesson.content.as_deref());
        }
        SourceRecord::Quiz(quiz) => {
            tally.field("title", 10, quiz.title.as_deref());
            tally.field("subject", 8, quiz.subject.as_deref());
            tally.field("instructions", 7, quiz.instructions.as_deref());
            tally.questions("questions", 6, &quiz.questions);
        }
    }
    tally.finish()
}

/// Running score for one record.
struct Tally<'n> {
    needle: &'n str,
    score: u32,
    matched: Vec<&'static str>,
}

impl<'n> Tally<'n> {
    fn new(needle: &'n str) -> Self {
        Self {
            needle,
            score: 0,
            matched: Vec::new(),
        }
    }

    fn contains(&self, haystack: &str) -> bool {
        normalize(haystack).contains(self.needle)
    }

    /// Scalar field: absent counts as no match.
    fn field(&mut self, name: &'static str, weight: u32, value: Option<&str>) {
        if value.is_some_and(|v| self.contains(v)) {
            self.score += weight;
            self.matched.push(name);
        }
    }

    /// Array field: matches when ANY element contains the needle, and
    /// contributes its weight once regardless of how many elements match.
    fn field_any(&mut self, name: &'static str, weight: u32, values: &[String]) {
        if values.iter().any(|v| self.contains(v)) {
            self.score += weight;
            self.matched.push(name);
        }
    }

    /// Quiz questions: only the question text is searchable.
    fn questions(
        &mut self,
        name: &'static str,
        weight: u32,
        questions: &[super::record::QuizQuestion],
    ) {
        if questions.iter().any(|q| self.contains(&q.question)) {
            self.score += weight;
            self.matched.push(name);
        }
    }

    fn finish(self) -> (u32, Vec<&'static str>) {
        (self.score, self.matched)
    }
}
