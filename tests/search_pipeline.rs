//! End-to-end pipeline tests through the public API, covering the
//! documented contract scenarios: empty-state short-circuit, browse at
//! score 1, case-insensitivity, additive weights, zero-score exclusion,
//! filter exclusion on missing fields, and the sort-reversal behavior.

use chrono::{TimeZone, Utc};
use edusearch::search::{
    ContentItem, FileRecord, LessonPlan, Quiz, QuizQuestion, SearchQuery, SortBy, SortOrder,
    SourceCollections, SourceType, search,
};

fn fixture() -> SourceCollections {
    SourceCollections {
        content: vec![ContentItem {
            id: "1".into(),
            title: Some("Mathematics Lesson Plan - Addition".into()),
            description: Some("Practice sheets for addition".into()),
            subject: Some("mathematics".into()),
            level: Some("level-1".into()),
            system: Some("anglophone".into()),
            author: Some("Mme Fotso".into()),
            date: Some(Utc.with_ymd_and_hms(2025, 5, 2, 8, 0, 0).unwrap()),
            tags: vec!["math".into(), "addition".into()],
            ..Default::default()
        }],
        files: vec![FileRecord {
            id: "1".into(),
            name: Some("Math Worksheet".into()),
            category: Some("Mathematics".into()),
            subject: Some("mathematics".into()),
            date: Some(Utc.with_ymd_and_hms(2025, 2, 14, 8, 0, 0).unwrap()),
            ..Default::default()
        }],
        lessons: vec![LessonPlan {
            id: "1".into(),
            title: Some("Counting by tens".into()),
            subject: Some("mathematics".into()),
            objectives: vec!["Count to one hundred".into()],
            level: Some("level-2".into()),
            author: Some("M. Njoya".into()),
            ..Default::default()
        }],
        quizzes: vec![
            Quiz {
                id: "1".into(),
                title: Some("Grammar check".into()),
                subject: Some("english".into()),
                instructions: Some("Answer every question".into()),
                questions: vec![QuizQuestion {
                    question: "Pick the correct verb".into(),
                    options: vec!["go".into(), "goes".into()],
                    answer: Some(1),
                }],
                level: Some("level-3".into()),
                system: Some("anglophone".into()),
                author: Some("Mme Fotso".into()),
                ..Default::default()
            },
            Quiz {
                id: "2".into(),
                title: Some("Mental math sprint".into()),
                subject: Some("mathematics".into()),
                system: Some("anglophone".into()),
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}

#[test]
fn empty_query_empty_filters_is_the_empty_state() {
    let results = search(&SearchQuery::new(), &fixture());
    assert!(results.is_empty());
}

#[test]
fn empty_query_with_type_filter_surfaces_all_at_score_one() {
    let query = SearchQuery::new().types(vec![SourceType::Quiz]);
    let results = search(&query, &fixture());

    assert_eq!(results.len(), 2);
    for result in &results {
        assert_eq!(result.source_type, SourceType::Quiz);
        assert_eq!(result.relevance_score, 1);
        assert!(result.matched_fields.is_empty());
    }
}

#[test]
fn substring_match_is_case_insensitive() {
    let sources = fixture();
    let baseline = search(&SearchQuery::new().text("math"), &sources);
    assert!(!baseline.is_empty());

    for variant in ["MATH", "Math", "mAtH"] {
        let results = search(&SearchQuery::new().text(variant), &sources);
        assert_eq!(results.len(), baseline.len(), "query {variant:?}");
        for (a, b) in baseline.iter().zip(&results) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.relevance_score, b.relevance_score);
            assert_eq!(a.matched_fields, b.matched_fields);
        }
    }
}

#[test]
fn score_is_additive_in_field_order() {
    let sources = fixture();
    let results = search(&SearchQuery::new().text("mathematics"), &sources);

    let content = results.iter().find(|r| r.id == "content-1").unwrap();
    // title(10) + subject(7); description and tags do not contain the full word.
    assert_eq!(content.relevance_score, 17);
    assert_eq!(content.matched_fields, vec!["title", "subject"]);

    let lesson = results.iter().find(|r| r.id == "lesson-1").unwrap();
    // subject(8) only.
    assert_eq!(lesson.relevance_score, 8);
    assert_eq!(lesson.matched_fields, vec!["subject"]);
}

#[test]
fn zero_score_records_never_appear() {
    let results = search(&SearchQuery::new().text("photosynthesis"), &fixture());
    assert!(results.is_empty());
}

#[test]
fn missing_field_is_excluded_by_filter() {
    // The file record has no level; any level filter drops it even
    // though it matches the text.
    let query = SearchQuery::new()
        .text("math")
        .levels(vec!["Level I".to_string()]);
    let results = search(&query, &fixture());

    assert!(results.iter().all(|r| r.id != "file-1"));
    assert!(results.iter().any(|r| r.id == "content-1"));
}

#[test]
fn relevance_descending_then_ascending_reverses() {
    let sources = fixture();
    let query = SearchQuery::new().text("math");

    let descending = search(&query, &sources);
    let scores: Vec<u32> = descending.iter().map(|r| r.relevance_score).collect();
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1]);
    }

    let ascending = search(&query.clone().sort_order(SortOrder::Ascending), &sources);
    let scores: Vec<u32> = ascending.iter().map(|r| r.relevance_score).collect();
    for pair in scores.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn title_ascending_request_is_z_to_a() {
    let sources = fixture();
    let base = SearchQuery::new().text("math").sort_by(SortBy::Title);

    let default_order = search(&base.clone(), &sources);
    let titles: Vec<String> = default_order.iter().map(|r| r.title.to_lowercase()).collect();
    for pair in titles.windows(2) {
        assert!(pair[0] <= pair[1], "descending request sorts titles A→Z");
    }

    let reversed = search(&base.sort_order(SortOrder::Ascending), &sources);
    let titles: Vec<String> = reversed.iter().map(|r| r.title.to_lowercase()).collect();
    for pair in titles.windows(2) {
        assert!(pair[0] >= pair[1], "ascending request sorts titles Z→A");
    }
}

#[test]
fn date_sort_treats_missing_dates_as_epoch() {
    let query = SearchQuery::new().text("math").sort_by(SortBy::Date);
    let results = search(&query, &fixture());

    // Dated records first (newest leading), dateless records at the end.
    let last = results.last().unwrap();
    assert!(last.date.is_none());
    assert_eq!(results[0].id, "content-1");
}

#[test]
fn combined_scenario_from_the_contract() {
    let sources = SourceCollections {
        content: vec![ContentItem {
            id: "1".into(),
            title: Some("Math Quiz".into()),
            subject: Some("Mathematics".into()),
            tags: vec!["math".into()],
            ..Default::default()
        }],
        files: vec![FileRecord {
            id: "1".into(),
            name: Some("Math Worksheet".into()),
            category: Some("Mathematics".into()),
            subject: Some("Mathematics".into()),
            ..Default::default()
        }],
        ..Default::default()
    };

    let query = SearchQuery::new()
        .text("math")
        .subjects(vec!["Mathematics".to_string()]);
    let results = search(&query, &sources);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "content-1");
    assert_eq!(results[0].relevance_score, 10 + 5 + 7);
    assert_eq!(results[1].id, "file-1");
    assert_eq!(results[1].relevance_score, 10 + 6);
}

#[test]
fn system_and_author_filters_compose() {
    let query = SearchQuery::new()
        .text("math")
        .systems(vec!["anglophone".to_string()])
        .authors(vec!["Mme Fotso".to_string()]);
    let results = search(&query, &fixture());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "content-1");
}
