//! CLI argument parsing for moodfit
//!
//! Uses clap for argument parsing. Mood and weather values are validated
//! here, so the core only ever sees members of the closed sets.
//! Global flags: --root, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod output;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use moodfit_core::mood::{Mood, Weather};
pub use args::SuggestArgs;
pub use output::OutputFormat;
use parse::{parse_mood, parse_weather};

/// Moodfit - outfit suggestions from your mood and the weather
#[derive(Parser, Debug)]
#[command(name = "moodfit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for the favorites log and images
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest an outfit for a mood and weather
    Suggest(SuggestArgs),

    /// Search saved favorites (case-insensitive substring)
    Search {
        /// Outfit or keyword to look for
        term: String,
    },

    /// List saved favorites in save order
    Favorites,

    /// Show catalog outfits, optionally for one mood and/or weather
    Catalog {
        /// Only this mood
        #[arg(long, short, value_parser = parse_mood)]
        mood: Option<Mood>,

        /// Only this weather
        #[arg(long, short, value_parser = parse_weather)]
        weather: Option<Weather>,
    },

    /// List the accepted moods and weather conditions
    Moods,
}
