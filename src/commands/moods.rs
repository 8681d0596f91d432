//! `moodfit moods` command - the accepted mood and weather values

use crate::cli::OutputFormat;
use crate::commands::dispatch::command::CommandContext;
use moodfit_core::error::Result;
use moodfit_core::mood::{Mood, Weather, UPLIFT_MOOD};

/// Execute the moods command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "moods": Mood::ALL,
                "weather": Weather::ALL,
                "uplift_mood": UPLIFT_MOOD,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            let moods: Vec<&str> = Mood::ALL.iter().map(Mood::as_str).collect();
            let weather: Vec<&str> = Weather::ALL.iter().map(Weather::as_str).collect();
            println!("Moods: {}", moods.join(", "));
            println!("Weather: {}", weather.join(", "));
            println!("Uplift mood: {}", UPLIFT_MOOD);
        }
    }

    Ok(())
}
