use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn write_library(dir: &std::path::Path) {
    std::fs::write(
        dir.join("content.json"),
        r#"[
            {
                "id": "1",
                "title": "Math Quiz",
                "subject": "Mathematics",
                "tags": ["math"],
                "level": "level-1",
                "system": "anglophone",
                "author": "Mme Fotso"
            }
        ]"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("files.json"),
        r#"[
            {
                "id": "1",
                "name": "Math Worksheet",
                "category": "Mathematics"
            }
        ]"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("quizzes.json"),
        r#"[
            {
                "id": "9",
                "title": "Reading comprehension",
                "subject": "english",
                "questions": [{"question": "Who is the main character?"}]
            }
        ]"#,
    )
    .unwrap();
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("edusearch").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("edusearch").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_search_human_output() {
    let dir = tempdir().unwrap();
    write_library(dir.path());

    let mut cmd = Command::cargo_bin("edusearch").unwrap();
    cmd.args(["search", "math", "--library"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Math Quiz"))
        .stdout(predicate::str::contains("Math Worksheet"))
        .stdout(predicate::str::contains("content-1"))
        .stdout(predicate::str::contains("file-1"));
}

#[test]
fn test_search_json_output_ranked() {
    let dir = tempdir().unwrap();
    write_library(dir.path());

    let mut cmd = Command::cargo_bin("edusearch").unwrap();
    let output = cmd
        .args(["-O", "json", "search", "math", "--library"])
        .arg(dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let envelope: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(envelope["status"], "ok");
    assert_eq!(envelope["count"], 2);

    let results = envelope["results"].as_array().unwrap();
    // Content item (title 10 + tags 5 + subject 7) outranks file (name 10 + category 6).
    assert_eq!(results[0]["id"], "content-1");
    assert_eq!(results[0]["relevance_score"], 22);
    assert_eq!(results[1]["id"], "file-1");
    assert_eq!(results[1]["relevance_score"], 16);
}

#[test]
fn test_search_type_filter() {
    let dir = tempdir().unwrap();
    write_library(dir.path());

    let mut cmd = Command::cargo_bin("edusearch").unwrap();
    let output = cmd
        .args(["-O", "json", "search", "math", "--type", "file", "--library"])
        .arg(dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let envelope: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(envelope["count"], 1);
    assert_eq!(envelope["results"][0]["id"], "file-1");
}

#[test]
fn test_browse_without_text() {
    let dir = tempdir().unwrap();
    write_library(dir.path());

    let mut cmd = Command::cargo_bin("edusearch").unwrap();
    let output = cmd
        .args(["-O", "json", "search", "--type", "quiz", "--library"])
        .arg(dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let envelope: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(envelope["count"], 1);
    assert_eq!(envelope["results"][0]["id"], "quiz-9");
    assert_eq!(envelope["results"][0]["relevance_score"], 1);
}

#[test]
fn test_blank_search_returns_nothing() {
    let dir = tempdir().unwrap();
    write_library(dir.path());

    let mut cmd = Command::cargo_bin("edusearch").unwrap();
    let output = cmd
        .args(["-O", "json", "search", "--library"])
        .arg(dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let envelope: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(envelope["count"], 0);
}

#[test]
fn test_missing_library_is_empty_not_error() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("edusearch").unwrap();
    cmd.args(["search", "math", "--library"])
        .arg(dir.path().join("absent"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No results"));
}

#[test]
fn test_malformed_library_fails() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("content.json"), "not json").unwrap();

    let mut cmd = Command::cargo_bin("edusearch").unwrap();
    cmd.args(["search", "math", "--library"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("content.json"));
}

#[test]
fn test_sources_counts() {
    let dir = tempdir().unwrap();
    write_library(dir.path());

    let mut cmd = Command::cargo_bin("edusearch").unwrap();
    let output = cmd
        .args(["-O", "json", "sources", "--library"])
        .arg(dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let envelope: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(envelope["total"], 3);
    let sources = envelope["sources"].as_array().unwrap();
    let quiz = sources.iter().find(|s| s["type"] == "quiz").unwrap();
    assert_eq!(quiz["count"], 1);
}

#[test]
fn test_limit_truncates() {
    let dir = tempdir().unwrap();
    write_library(dir.path());

    let mut cmd = Command::cargo_bin("edusearch").unwrap();
    let output = cmd
        .args(["-O", "json", "search", "math", "--limit", "1", "--library"])
        .arg(dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let envelope: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(envelope["count"], 1);
    assert_eq!(envelope["results"][0]["id"], "content-1");
}
