//! `moodfit search` command - search saved favorites
//!
//! Case-insensitive substring match over every line of the favorites log.
//! A missing log is the same as an empty one.

use tracing::debug;

use crate::cli::OutputFormat;
use crate::commands::dispatch::command::CommandContext;
use crate::commands::dispatch::trace_command;
use moodfit_core::error::Result;

/// Execute the search command
pub fn execute(ctx: &CommandContext, term: &str) -> Result<()> {
    let favorites = ctx.favorites();
    let matches = favorites.search(term)?;
    trace_command!(ctx.cli, ctx.start, "search_favorites");

    debug!(term, count = matches.len(), path = %favorites.path().display(), "search");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "term": term,
                "matches": matches,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if matches.is_empty() {
                println!("No matching outfits found in your favorites.");
            } else {
                println!("Matching outfits found:");
                for outfit in &matches {
                    println!("{}", outfit);
                }
            }
        }
    }

    Ok(())
}
