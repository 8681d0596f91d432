//! Command implementations for moodfit

pub mod catalog;
pub mod dispatch;
pub mod favorites;
pub mod moods;
pub mod search;
pub mod suggest;
