use std::fmt;

use serde::{Deserialize, Serialize};

/// A named clothing combination.
///
/// The text is opaque; equality is exact string equality and is the join key
/// into the image index and the favorites log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outfit(String);

impl Outfit {
    pub fn new(text: impl Into<String>) -> Self {
        Outfit(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the text survives a trip through the favorites log: one line,
    /// not blank
    pub fn is_single_line(&self) -> bool {
        is_single_line(&self.0)
    }

    /// Case-insensitive substring match used by favorites search
    pub fn matches(&self, term: &str) -> bool {
        self.0.to_lowercase().contains(&term.to_lowercase())
    }
}

pub(crate) fn is_single_line(text: &str) -> bool {
    !text.trim().is_empty() && !text.contains(['\n', '\r'])
}

impl fmt::Display for Outfit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Outfit {
    fn from(text: &str) -> Self {
        Outfit::new(text)
    }
}

impl From<String> for Outfit {
    fn from(text: String) -> Self {
        Outfit(text)
    }
}

impl PartialEq<str> for Outfit {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Outfit {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
