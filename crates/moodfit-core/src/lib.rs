//! Moodfit Core Library
//!
//! Outfit recommendations from mood and weather: the catalog, the selector
//! with its uplift override, image lookup and the favorites log.

pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod format;
pub mod images;
pub mod logging;
pub mod mood;
pub mod outfit;
pub mod selector;
