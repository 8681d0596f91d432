use moodfit_core::mood::{Mood, Weather};

/// Parse mood from string
pub fn parse_mood(s: &str) -> std::result::Result<Mood, String> {
    s.parse::<Mood>().map_err(|e| e.to_string())
}

/// Parse weather from string
pub fn parse_weather(s: &str) -> std::result::Result<Weather, String> {
    s.parse::<Weather>().map_err(|e| e.to_string())
}
