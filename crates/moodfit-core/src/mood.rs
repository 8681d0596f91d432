//! Mood and weather vocabularies
//!
//! Both sets are closed. Text parsing is case-insensitive and ignores
//! surrounding whitespace; display is always lowercase.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::MoodfitError;

/// Mood substituted for the user's own when an uplift is requested
pub const UPLIFT_MOOD: Mood = Mood::Happy;

/// The user's self-reported mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Calm,
    Excited,
    Sad,
    Anxious,
    Confident,
    Nervous,
}

impl Mood {
    /// Every mood, in catalog declaration order
    pub const ALL: [Mood; 7] = [
        Mood::Happy,
        Mood::Calm,
        Mood::Excited,
        Mood::Sad,
        Mood::Anxious,
        Mood::Confident,
        Mood::Nervous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Calm => "calm",
            Mood::Excited => "excited",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Confident => "confident",
            Mood::Nervous => "nervous",
        }
    }
}

impl FromStr for Mood {
    type Err = MoodfitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        match Mood::ALL.iter().find(|m| m.as_str() == wanted) {
            Some(mood) => Ok(*mood),
            None => bail_invalid!("mood", s, join_names(Mood::ALL.iter().map(Mood::as_str))),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The current weather condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Sunny,
    Rainy,
    Cold,
    Hot,
}

impl Weather {
    pub const ALL: [Weather; 4] = [Weather::Sunny, Weather::Rainy, Weather::Cold, Weather::Hot];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Sunny => "sunny",
            Weather::Rainy => "rainy",
            Weather::Cold => "cold",
            Weather::Hot => "hot",
        }
    }
}

impl FromStr for Weather {
    type Err = MoodfitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        match Weather::ALL.iter().find(|w| w.as_str() == wanted) {
            Some(weather) => Ok(*weather),
            None => bail_invalid!(
                "weather",
                s,
                join_names(Weather::ALL.iter().map(Weather::as_str))
            ),
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
