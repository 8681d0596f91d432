use crate::cli::support::{moodfit, write_favorites};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Search command tests
// ============================================================================

#[test]
fn test_search_without_favorites_file() {
    let dir = tempdir().unwrap();

    moodfit(dir.path())
        .args(["search", "raincoat"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No matching outfits found in your favorites.",
        ));
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let dir = tempdir().unwrap();
    write_favorites(
        dir.path(),
        &["yellow raincoat", "sun hat", "dark raincoat"],
    );

    moodfit(dir.path())
        .args(["search", "RAINCOAT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matching outfits found:"))
        .stdout(predicate::str::contains("yellow raincoat"))
        .stdout(predicate::str::contains("dark raincoat"))
        .stdout(predicate::str::contains("sun hat").not());
}

#[test]
fn test_search_finds_outfit_saved_by_suggest() {
    let dir = tempdir().unwrap();

    moodfit(dir.path())
        .args([
            "suggest",
            "-m",
            "sad",
            "-w",
            "cold",
            "--exclude",
            "soft hoodie",
            "--exclude",
            "thermal leggings",
            "--save",
        ])
        .assert()
        .success();

    moodfit(dir.path())
        .args(["search", "fuzzy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fuzzy socks"));
}

#[test]
fn test_search_json_keeps_duplicates() {
    let dir = tempdir().unwrap();
    write_favorites(dir.path(), &["jeans", "beanie", "jeans"]);

    let output = moodfit(dir.path())
        .args(["--format", "json", "search", "jean"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["term"], "jean");
    assert_eq!(json["matches"], serde_json::json!(["jeans", "jeans"]));
}
