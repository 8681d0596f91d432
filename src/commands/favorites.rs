//! `moodfit favorites` command - list saved outfits in save order

use crate::cli::OutputFormat;
use crate::commands::dispatch::command::CommandContext;
use moodfit_core::error::Result;

/// Execute the favorites command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let saved = ctx.favorites().list_all()?;

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&saved)?);
        }
        OutputFormat::Human => {
            if saved.is_empty() {
                println!("No saved outfits yet!");
                return Ok(());
            }
            if !ctx.cli.quiet {
                println!("Your favorite outfits:");
            }
            for (i, outfit) in saved.iter().enumerate() {
                println!("{}. {}", i + 1, outfit);
            }
        }
    }

    Ok(())
}
