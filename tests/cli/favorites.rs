use crate::cli::support::{moodfit, write_config, write_favorites};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Favorites command tests
// ============================================================================

#[test]
fn test_favorites_empty() {
    let dir = tempdir().unwrap();

    moodfit(dir.path())
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved outfits yet!"));
}

#[test]
fn test_favorites_numbered_in_save_order() {
    let dir = tempdir().unwrap();
    write_favorites(dir.path(), &["sandals", "denim skirt"]);

    moodfit(dir.path())
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Your favorite outfits:\n1. sandals\n2. denim skirt\n",
        ));
}

#[test]
fn test_favorites_json() {
    let dir = tempdir().unwrap();
    write_favorites(dir.path(), &["beanie"]);

    let output = moodfit(dir.path())
        .args(["--format", "json", "favorites"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, serde_json::json!(["beanie"]));
}

#[test]
fn test_favorites_configured_location() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "favorites_file = \"wardrobe/favs.txt\"\n");

    moodfit(dir.path())
        .args([
            "suggest",
            "-m",
            "anxious",
            "-w",
            "hot",
            "--exclude",
            "loose-fitting blouse",
            "--exclude",
            "linen shorts",
            "--save",
        ])
        .assert()
        .success();

    assert!(dir.path().join("wardrobe/favs.txt").exists());
    assert!(!dir.path().join("favorite_outfits.txt").exists());

    moodfit(dir.path())
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. comfortable sneakers"));
}
