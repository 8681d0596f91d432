use super::parse::{parse_mood, parse_weather};
use clap::Args;
use moodfit_core::mood::{Mood, Weather};

#[derive(Args, Debug, Clone)]
pub struct SuggestArgs {
    /// How you are feeling
    #[arg(long, short, value_parser = parse_mood)]
    pub mood: Mood,

    /// What the weather is like
    #[arg(long, short, value_parser = parse_weather)]
    pub weather: Weather,

    /// Pick from the happy outfits to boost your mood
    #[arg(long, short)]
    pub uplift: bool,

    /// Look up the outfit's picture
    #[arg(long)]
    pub image: bool,

    /// Save the suggestion to favorites
    #[arg(long, short)]
    pub save: bool,

    /// Seed the random pick for reproducible suggestions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Drop an outfit from the catalog before picking (can be repeated)
    #[arg(long, action = clap::ArgAction::Append)]
    pub exclude: Vec<String>,
}
