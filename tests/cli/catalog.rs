use crate::cli::support::moodfit;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Catalog and moods command tests
// ============================================================================

#[test]
fn test_catalog_filtered_by_mood_and_weather() {
    let dir = tempdir().unwrap();

    moodfit(dir.path())
        .args(["catalog", "--mood", "nervous", "--weather", "hot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nervous / hot:"))
        .stdout(predicate::str::contains("  - loose t-shirt"))
        .stdout(predicate::str::contains("happy").not());
}

#[test]
fn test_catalog_json_lists_every_pair() {
    let dir = tempdir().unwrap();

    let output = moodfit(dir.path())
        .args(["--format", "json", "catalog"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let buckets = json.as_array().unwrap();
    assert_eq!(buckets.len(), 28);
    assert_eq!(buckets[0]["mood"], "happy");
    assert_eq!(buckets[0]["weather"], "sunny");
    assert_eq!(buckets[0]["outfits"][0], "bright sundress");
}

#[test]
fn test_moods_lists_closed_sets() {
    let dir = tempdir().unwrap();

    moodfit(dir.path())
        .arg("moods")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Moods: happy, calm, excited, sad, anxious, confident, nervous",
        ))
        .stdout(predicate::str::contains("Weather: sunny, rainy, cold, hot"))
        .stdout(predicate::str::contains("Uplift mood: happy"));
}
