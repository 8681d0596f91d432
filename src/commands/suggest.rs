//! `moodfit suggest` command - pick an outfit
//!
//! - `--uplift` swaps the mood for the happy bucket
//! - `--image` resolves the outfit's picture (existence check only)
//! - `--save` appends the outfit to the favorites log
//! - `--exclude` drops outfits from this run's catalog before picking
//! - `--seed` makes the pick reproducible

use serde::Serialize;

use crate::cli::{OutputFormat, SuggestArgs};
use crate::commands::dispatch::command::CommandContext;
use crate::commands::dispatch::trace_command;
use moodfit_core::error::{MoodfitError, Result};
use moodfit_core::images::ImageLookup;
use moodfit_core::mood::{Mood, Weather};
use moodfit_core::selector::{effective_mood, Selector, Suggestion};

#[derive(Debug, Serialize)]
struct SuggestOutput<'a> {
    mood: Mood,
    effective_mood: Mood,
    weather: Weather,
    uplift: bool,
    outfit: Option<&'a str>,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<ImageOutput>,
    saved: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ImageOutput {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    message: String,
}

/// Execute the suggest command
pub fn execute(ctx: &CommandContext, args: &SuggestArgs) -> Result<()> {
    let cli = ctx.cli;
    let mut catalog = ctx.catalog()?;

    let effective = effective_mood(args.mood, args.uplift);
    let mut warnings = Vec::new();
    for outfit in &args.exclude {
        match catalog.remove(effective, args.weather, outfit) {
            Ok(removed) => {
                tracing::debug!(outfit = %removed.outfit, remaining = removed.remaining, "excluded");
            }
            Err(e @ MoodfitError::OutfitNotFound { .. }) => {
                let message = e.to_string();
                ctx.warn(&message);
                warnings.push(message);
            }
            Err(e) => return Err(e),
        }
    }

    let mut selector = match args.seed {
        Some(seed) => Selector::seeded(&catalog, seed),
        None => Selector::from_entropy(&catalog),
    };
    let suggestion = selector.suggest(args.mood, args.weather, args.uplift);
    trace_command!(cli, ctx.start, "suggest");

    let image = match (args.image, &suggestion) {
        (true, Suggestion::Outfit(outfit)) => {
            let lookup = ctx.image_index()?.resolve(outfit);
            Some(ImageOutput {
                status: match lookup {
                    ImageLookup::Found(_) => "found",
                    ImageLookup::NotIndexed => "not_indexed",
                    ImageLookup::FileMissing(_) => "file_missing",
                },
                path: match &lookup {
                    ImageLookup::Found(path) | ImageLookup::FileMissing(path) => {
                        Some(path.display().to_string())
                    }
                    ImageLookup::NotIndexed => None,
                },
                message: lookup.describe(outfit),
            })
        }
        _ => None,
    };

    let saved = match (args.save, &suggestion) {
        (true, Suggestion::Outfit(outfit)) => {
            ctx.favorites().save(outfit)?;
            trace_command!(cli, ctx.start, "save_favorite");
            true
        }
        _ => false,
    };

    match cli.format {
        OutputFormat::Json => {
            let output = SuggestOutput {
                mood: args.mood,
                effective_mood: effective,
                weather: args.weather,
                uplift: args.uplift,
                outfit: suggestion.outfit().map(|o| o.as_str()),
                message: suggestion.message(),
                image,
                saved,
                warnings,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            match suggestion.outfit() {
                Some(outfit) => println!("Here's your suggested outfit: {}", outfit),
                None => println!("{}", suggestion.message()),
            }
            if let Some(image) = image {
                println!("{}", image.message);
            }
            if saved && !cli.quiet {
                if let Some(outfit) = suggestion.outfit() {
                    println!("Outfit '{}' has been saved to your favorites!", outfit);
                }
            }
        }
    }

    Ok(())
}
