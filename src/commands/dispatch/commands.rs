//! Command implementations for all moodfit commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use moodfit_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Suggest(args) => commands::suggest::execute(ctx, args),
            Commands::Search { term } => commands::search::execute(ctx, term),
            Commands::Favorites => commands::favorites::execute(ctx),
            Commands::Catalog { mood, weather } => {
                commands::catalog::execute(ctx, *mood, *weather)
            }
            Commands::Moods => commands::moods::execute(ctx),
        }
    }
}
