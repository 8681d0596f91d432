//! Configuration for moodfit (stored in ~/.config/moodfit/config.toml)
//!
//! Every field is optional. Relative paths resolve against the root directory
//! the command runs in, so the defaults match a project laid out as:
//!
//! ```text
//! <root>/favorite_outfits.txt
//! <root>/images/1.jpg ...
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{MoodfitError, Result};
use crate::favorites::{FavoritesStore, FAVORITES_FILE};
use crate::images::ImageIndex;

const CONFIG_DIR: &str = "moodfit";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "MOODFIT_CONFIG_DIR";

/// Default images directory, relative to the root directory
pub const IMAGES_DIR: &str = "images";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Favorites log location (default: `favorite_outfits.txt`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorites_file: Option<PathBuf>,

    /// Directory holding outfit images (default: `images`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images_dir: Option<PathBuf>,

    /// Catalog TOML replacing the embedded catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<PathBuf>,

    /// Image table TOML replacing the embedded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images_file: Option<PathBuf>,
}

impl AppConfig {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    MoodfitError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the user config, falling back to defaults when there is none
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(e) => {
                debug!(error = %e, "config_dir_unavailable");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load a config file from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            MoodfitError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| {
            MoodfitError::Other(format!(
                "failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    pub fn favorites_path(&self, root: &Path) -> PathBuf {
        resolve(
            root,
            self.favorites_file
                .as_deref()
                .unwrap_or(Path::new(FAVORITES_FILE)),
        )
    }

    pub fn images_path(&self, root: &Path) -> PathBuf {
        resolve(root, self.images_dir.as_deref().unwrap_or(Path::new(IMAGES_DIR)))
    }

    /// Configured catalog, or the embedded default
    pub fn catalog(&self, root: &Path) -> Result<Catalog> {
        match &self.catalog_file {
            Some(file) => Catalog::load(&resolve(root, file)),
            None => Catalog::embedded(),
        }
    }

    /// Configured image index, or the embedded table
    pub fn image_index(&self, root: &Path) -> Result<ImageIndex> {
        let dir = self.images_path(root);
        match &self.images_file {
            Some(file) => ImageIndex::load(&resolve(root, file), dir),
            None => ImageIndex::embedded(dir),
        }
    }

    pub fn favorites(&self, root: &Path) -> FavoritesStore {
        FavoritesStore::new(self.favorites_path(root))
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
