//! Recipe Finder - Entry Point

use clap::Parser;
use recipe_finder::model::{AppError, QueryState, CUISINES, DIFFICULTIES};
use recipe_finder::source::RecipeSource;
use recipe_finder::state::{AppState, DebouncedInput};
use recipe_finder::view::{ColorConfig, Palette, TuiOptions};
use std::path::PathBuf;
use tracing::info;

/// Recipe Finder - browse and filter recipes in the terminal
#[derive(Parser, Debug)]
#[command(name = "recipe-finder")]
#[command(version)]
#[command(about = "TUI application for browsing and filtering recipes")]
pub struct Args {
    /// Path to a JSON recipe catalog (uses the built-in catalog if not provided)
    pub file: Option<PathBuf>,

    /// Start with search query active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start with a cuisine selected
    #[arg(long, value_parser = CUISINES)]
    pub cuisine: Option<String>,

    /// Start with a difficulty selected
    #[arg(long, value_parser = DIFFICULTIES)]
    pub difficulty: Option<String>,

    /// Quiet period in milliseconds before a search is applied
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = recipe_finder::config::load_config_with_precedence(args.config.clone())?;
        let merged = recipe_finder::config::merge_config(config_file);
        let with_env = recipe_finder::config::apply_env_overrides(merged);
        recipe_finder::config::apply_cli_overrides(with_env, args.file.clone(), args.debounce_ms)
    };

    recipe_finder::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let recipes = RecipeSource::from_path(config.recipes_file.clone()).load()?;

    let initial_query = QueryState::new(
        args.search.unwrap_or_default(),
        args.cuisine.unwrap_or_default(),
        args.difficulty.unwrap_or_default(),
    );
    let input = DebouncedInput::with_query(initial_query, config.debounce());
    let options = TuiOptions {
        palette: Palette::new(ColorConfig::from_env_and_args(args.no_color)),
        card_width: config.card_width,
    };

    recipe_finder::view::run_app(AppState::new(recipes, input), options)?;

    Ok(())
}
