//! Outfit catalog keyed by mood and weather
//!
//! The catalog is built once at startup, either from the embedded default
//! table or from a TOML file named in the config, and then passed explicitly
//! to whoever needs it. The only mutation is [`Catalog::remove`].
//!
//! File format: one table per mood, one array of outfits per weather.
//!
//! ```toml
//! [happy]
//! sunny = ["bright sundress", "colorful t-shirt and shorts"]
//! ```


use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::bail_catalog;
use crate::error::{MoodfitError, Result};
use crate::mood::{Mood, Weather};
use crate::outfit::{is_single_line, Outfit};

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.toml");

/// Outcome of a successful [`Catalog::remove`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removed {
    pub mood: Mood,
    pub weather: Weather,
    pub outfit: Outfit,
    /// Outfits left in the bucket after removal
    pub remaining: usize,
}

/// Mapping from (mood, weather) to an ordered list of outfits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    buckets: BTreeMap<(Mood, Weather), Vec<Outfit>>,
}

impl Catalog {
    /// The default catalog compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str("embedded catalog", EMBEDDED_CATALOG)
    }

    /// Load a catalog from a TOML file
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            MoodfitError::invalid_catalog(path.display().to_string(), format!("unreadable: {}", e))
        })?;
        Self::from_toml_str(&path.display().to_string(), &content)
    }

    /// Parse a catalog from TOML text; `source_name` only labels errors
    pub fn from_toml_str(source_name: &str, content: &str) -> Result<Self> {
        let raw: HashMap<String, HashMap<String, Vec<String>>> = toml::from_str(content)
            .map_err(|e| MoodfitError::invalid_catalog(source_name, e))?;

        let mut buckets = BTreeMap::new();
        for (mood_key, by_weather) in raw {
            let Ok(mood) = mood_key.parse::<Mood>() else {
                bail_catalog!(source_name, format!("unknown mood '{}'", mood_key));
            };
            for (weather_key, outfits) in by_weather {
                let Ok(weather) = weather_key.parse::<Weather>() else {
                    bail_catalog!(
                        source_name,
                        format!("unknown weather '{}' under [{}]", weather_key, mood_key)
                    );
                };
                if outfits.is_empty() {
                    bail_catalog!(source_name, format!("{}/{} has no outfits", mood, weather));
                }
                if let Some(bad) = outfits.iter().find(|o| !is_single_line(o)) {
                    bail_catalog!(
                        source_name,
                        format!("{}/{} has a blank or multi-line outfit {:?}", mood, weather, bad)
                    );
                }
                buckets.insert(
                    (mood, weather),
                    outfits.into_iter().map(Outfit::from).collect(),
                );
            }
        }

        debug!(source = source_name, buckets = buckets.len(), "catalog_loaded");
        Ok(Catalog { buckets })
    }

    /// Build a catalog directly from buckets
    pub fn from_buckets(buckets: impl IntoIterator<Item = ((Mood, Weather), Vec<Outfit>)>) -> Self {
        Catalog {
            buckets: buckets.into_iter().collect(),
        }
    }

    /// Outfits for a pair.
    ///
    /// `None` means the pair was never configured; `Some(&[])` means every
    /// outfit in it has been removed. Both are ordinary states.
    pub fn lookup(&self, mood: Mood, weather: Weather) -> Option<&[Outfit]> {
        self.buckets.get(&(mood, weather)).map(Vec::as_slice)
    }

    /// Remove the first outfit in the bucket whose text equals `outfit`
    pub fn remove(&mut self, mood: Mood, weather: Weather, outfit: &str) -> Result<Removed> {
        let not_found = || MoodfitError::OutfitNotFound {
            mood: mood.to_string(),
            weather: weather.to_string(),
            outfit: outfit.to_string(),
        };

        let bucket = self.buckets.get_mut(&(mood, weather)).ok_or_else(not_found)?;
        let position = bucket
            .iter()
            .position(|o| o == outfit)
            .ok_or_else(not_found)?;
        let removed = bucket.remove(position);

        debug!(%mood, %weather, outfit = %removed, remaining = bucket.len(), "catalog_remove");

        Ok(Removed {
            mood,
            weather,
            outfit: removed,
            remaining: bucket.len(),
        })
    }

    /// Every configured pair with its outfits, in mood then weather order
    pub fn buckets(&self) -> impl Iterator<Item = (Mood, Weather, &[Outfit])> {
        self.buckets
            .iter()
            .map(|((mood, weather), outfits)| (*mood, *weather, outfits.as_slice()))
    }

    /// Moods that have a pair in the catalog, emptied pairs included
    pub fn moods(&self) -> Vec<Mood> {
        let mut moods: Vec<Mood> = self.buckets.keys().map(|(mood, _)| *mood).collect();
        moods.dedup();
        moods
    }

    /// Number of configured pairs, emptied ones included
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
