use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

/// Get a Command for moodfit rooted at `dir`, isolated from the user's config
pub fn moodfit(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("moodfit");
    cmd.current_dir(dir)
        .env("MOODFIT_CONFIG_DIR", dir.join(".moodfit-config"))
        .env_remove("MOODFIT_LOG");
    cmd
}

/// Write a config.toml that `moodfit(dir)` will pick up
pub fn write_config(dir: &Path, content: &str) {
    let config_dir = dir.join(".moodfit-config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), content).unwrap();
}

/// Seed the default favorites log with one outfit per line
pub fn write_favorites(dir: &Path, outfits: &[&str]) {
    let mut content = String::new();
    for outfit in outfits {
        content.push_str(outfit);
        content.push('\n');
    }
    fs::write(dir.join("favorite_outfits.txt"), content).unwrap();
}
