//! Favorites log
//!
//! A plain UTF-8 text file, one outfit per line, newline terminated. The log
//! is only ever appended to. Every operation opens the file, does one read or
//! one append, and drops the handle before returning.


use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use crate::error::{MoodfitError, Result};
use crate::outfit::Outfit;

/// Default log file name, relative to the root directory
pub const FAVORITES_FILE: &str = "favorite_outfits.txt";

/// Append-only store of saved outfits
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FavoritesStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an outfit, creating the log (and its directory) on first save.
    ///
    /// Blank or multi-line outfits are refused: they would not read back as
    /// the one entry that was saved.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self, outfit: &Outfit) -> Result<()> {
        if !outfit.is_single_line() {
            return Err(MoodfitError::invalid_value(
                "outfit",
                format!("{:?}", outfit.as_str()),
                "a single non-blank line",
            ));
        }
        self.append_line(outfit.as_str())
            .map_err(|e| MoodfitError::storage(&self.path, e))?;
        info!(%outfit, "favorite_saved");
        Ok(())
    }

    fn append_line(&self, line: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        file.flush()
    }

    /// Every saved outfit in save order; empty when nothing was saved yet
    pub fn list_all(&self) -> Result<Vec<Outfit>> {
        let start = Instant::now();
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "favorites_absent");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let outfits: Vec<Outfit> = content
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(Outfit::from)
            .collect();

        crate::trace_time!(start, "favorites_read", count = outfits.len());
        Ok(outfits)
    }

    /// Saved outfits containing `term`, ignoring case, in save order
    pub fn search(&self, term: &str) -> Result<Vec<Outfit>> {
        let matches: Vec<Outfit> = self
            .list_all()?
            .into_iter()
            .filter(|outfit| outfit.matches(term))
            .collect();

        debug!(term, matches = matches.len(), "favorites_search");
        Ok(matches)
    }
}
