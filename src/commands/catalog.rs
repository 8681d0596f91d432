//! `moodfit catalog` command - show the outfits behind each mood and weather

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::dispatch::command::CommandContext;
use moodfit_core::error::Result;
use moodfit_core::mood::{Mood, Weather};
use moodfit_core::outfit::Outfit;

#[derive(Debug, Serialize)]
struct BucketOutput<'a> {
    mood: Mood,
    weather: Weather,
    outfits: &'a [Outfit],
}

/// Execute the catalog command
pub fn execute(ctx: &CommandContext, mood: Option<Mood>, weather: Option<Weather>) -> Result<()> {
    let catalog = ctx.catalog()?;

    let buckets: Vec<BucketOutput> = catalog
        .buckets()
        .filter(|(m, w, _)| {
            mood.map_or(true, |wanted| wanted == *m) && weather.map_or(true, |wanted| wanted == *w)
        })
        .map(|(mood, weather, outfits)| BucketOutput {
            mood,
            weather,
            outfits,
        })
        .collect();

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&buckets)?);
        }
        OutputFormat::Human => {
            if buckets.is_empty() {
                println!("No catalog entries match.");
            }
            for bucket in &buckets {
                println!("{} / {}:", bucket.mood, bucket.weather);
                for outfit in bucket.outfits {
                    println!("  - {}", outfit);
                }
            }
        }
    }

    Ok(())
}
