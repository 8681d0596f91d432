//! Outfit image lookup
//!
//! Maps an outfit's exact text to a file name inside an images directory.
//! The index only resolves and probes paths; rendering is left to a viewer.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{MoodfitError, Result};
use crate::outfit::Outfit;

const EMBEDDED_IMAGES: &str = include_str!("../data/images.toml");

/// Result of resolving an outfit to an image file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLookup {
    /// The outfit has an image and the file exists
    Found(PathBuf),
    /// No image is configured for the outfit
    NotIndexed,
    /// An image is configured but the file is not in the directory
    FileMissing(PathBuf),
}

impl ImageLookup {
    /// Message shown to the user for this outcome
    pub fn describe(&self, outfit: &Outfit) -> String {
        match self {
            ImageLookup::Found(path) => {
                format!("Here is your outfit image for '{}': {}", outfit, path.display())
            }
            ImageLookup::NotIndexed => "Image not available".to_string(),
            ImageLookup::FileMissing(path) => {
                let file = path
                    .file_name()
                    .map(|f| f.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let folder = path
                    .parent()
                    .map(|d| d.display().to_string())
                    .unwrap_or_default();
                format!(
                    "Image file '{}' does not exist in the folder '{}'.",
                    file, folder
                )
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ImageTable {
    #[serde(default)]
    images: HashMap<String, String>,
}

/// Outfit -> image file table rooted at a directory
#[derive(Debug, Clone)]
pub struct ImageIndex {
    dir: PathBuf,
    entries: HashMap<String, String>,
}

impl ImageIndex {
    /// Index using the image table compiled into the binary
    pub fn embedded(dir: impl Into<PathBuf>) -> Result<Self> {
        Self::from_toml_str("embedded images", EMBEDDED_IMAGES, dir)
    }

    /// Index using an image table read from a TOML file
    pub fn load(path: &Path, dir: impl Into<PathBuf>) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            MoodfitError::invalid_catalog(path.display().to_string(), format!("unreadable: {}", e))
        })?;
        Self::from_toml_str(&path.display().to_string(), &content, dir)
    }

    pub fn from_toml_str(source_name: &str, content: &str, dir: impl Into<PathBuf>) -> Result<Self> {
        let table: ImageTable =
            toml::from_str(content).map_err(|e| MoodfitError::invalid_catalog(source_name, e))?;
        Ok(Self::new(dir, table.images))
    }

    pub fn new(dir: impl Into<PathBuf>, entries: HashMap<String, String>) -> Self {
        ImageIndex {
            dir: dir.into(),
            entries,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve an outfit to its image path, probing the filesystem once
    pub fn resolve(&self, outfit: &Outfit) -> ImageLookup {
        let Some(file) = self.entries.get(outfit.as_str()) else {
            debug!(%outfit, "image_not_indexed");
            return ImageLookup::NotIndexed;
        };

        let path = self.dir.join(file);
        if path.is_file() {
            debug!(%outfit, path = %path.display(), "image_found");
            ImageLookup::Found(path)
        } else {
            warn!(%outfit, path = %path.display(), "image file missing");
            ImageLookup::FileMissing(path)
        }
    }
}
