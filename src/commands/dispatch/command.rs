//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use moodfit_core::catalog::Catalog;
use moodfit_core::config::AppConfig;
use moodfit_core::error::Result;
use moodfit_core::favorites::FavoritesStore;
use moodfit_core::images::ImageIndex;

use super::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
    pub config: AppConfig,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Result<Self> {
        let config = AppConfig::load()?;
        trace_command!(cli, start, "load_config");
        Ok(Self {
            cli,
            root,
            start,
            config,
        })
    }

    pub fn catalog(&self) -> Result<Catalog> {
        let catalog = self.config.catalog(self.root)?;
        trace_command!(self.cli, self.start, "load_catalog");
        Ok(catalog)
    }

    pub fn image_index(&self) -> Result<ImageIndex> {
        self.config.image_index(self.root)
    }

    pub fn favorites(&self) -> FavoritesStore {
        self.config.favorites(self.root)
    }

    /// Print a non-fatal warning on stderr in human mode unless `--quiet`.
    ///
    /// JSON output carries its warnings in the command's own payload.
    pub fn warn(&self, message: &str) {
        tracing::warn!(warning = message, "command_warning");
        if self.cli.format == OutputFormat::Human && !self.cli.quiet {
            eprintln!("warning: {}", message);
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("moodfit {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Outfit suggestions from your mood and the weather.");
        println!();
        println!("Run `moodfit --help` for usage information.");
        Ok(())
    }
}
