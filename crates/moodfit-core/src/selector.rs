//! Outfit selection
//!
//! The selector applies the uplift override, looks the pair up in the
//! catalog and picks one outfit uniformly at random. The random source is a
//! type parameter so callers can seed or stub it.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::catalog::Catalog;
use crate::mood::{Mood, Weather, UPLIFT_MOOD};
use crate::outfit::Outfit;

/// Fallback text shown when no outfit exists for a pair
pub const NO_SUGGESTION_MESSAGE: &str = "No outfit suggestions available for this combination.";

/// Outcome of [`Selector::suggest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    Outfit(Outfit),
    /// The pair is absent from the catalog or its bucket was emptied
    NoneAvailable,
}

impl Suggestion {
    pub fn outfit(&self) -> Option<&Outfit> {
        match self {
            Suggestion::Outfit(outfit) => Some(outfit),
            Suggestion::NoneAvailable => None,
        }
    }

    /// Text to display: the outfit, or the fixed fallback message
    pub fn message(&self) -> &str {
        match self {
            Suggestion::Outfit(outfit) => outfit.as_str(),
            Suggestion::NoneAvailable => NO_SUGGESTION_MESSAGE,
        }
    }
}

/// Mood used for lookup; uplift always replaces the input mood
pub fn effective_mood(mood: Mood, uplift: bool) -> Mood {
    if uplift {
        UPLIFT_MOOD
    } else {
        mood
    }
}

/// Picks outfits from a catalog with an owned random source
#[derive(Debug)]
pub struct Selector<'c, R> {
    catalog: &'c Catalog,
    rng: R,
}

impl<'c> Selector<'c, StdRng> {
    /// Selector backed by an entropy-seeded generator
    pub fn from_entropy(catalog: &'c Catalog) -> Self {
        Self::new(catalog, StdRng::from_entropy())
    }

    /// Selector whose picks are reproducible for a given seed
    pub fn seeded(catalog: &'c Catalog, seed: u64) -> Self {
        Self::new(catalog, StdRng::seed_from_u64(seed))
    }
}

impl<'c, R: Rng> Selector<'c, R> {
    pub fn new(catalog: &'c Catalog, rng: R) -> Self {
        Selector { catalog, rng }
    }

    /// Suggest an outfit for the mood and weather.
    ///
    /// Never fails: a missing or emptied bucket yields
    /// [`Suggestion::NoneAvailable`].
    pub fn suggest(&mut self, mood: Mood, weather: Weather, uplift: bool) -> Suggestion {
        let effective = effective_mood(mood, uplift);

        let picked = self
            .catalog
            .lookup(effective, weather)
            .and_then(|outfits| outfits.choose(&mut self.rng));

        match picked {
            Some(outfit) => {
                debug!(%mood, %effective, %weather, uplift, %outfit, "suggest");
                Suggestion::Outfit(outfit.clone())
            }
            None => {
                debug!(%mood, %effective, %weather, uplift, "suggest_none_available");
                Suggestion::NoneAvailable
            }
        }
    }
}
