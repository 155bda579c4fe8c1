use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// foodgram - recipes and shopping lists
#[derive(Parser)]
#[command(name = "foodgram")]
#[command(about = "Recipe sharing backend with shopping list downloads", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Manage the ingredient catalogue
    Ingredient {
        #[command(subcommand)]
        command: IngredientCommands,
    },
    /// Manage recipe tags
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },
    /// Manage recipes
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },
}

#[derive(Subcommand)]
enum IngredientCommands {
    /// Load ingredients from a CSV (or .json) file, skipping those already present
    Load {
        #[arg(default_value = "data/ingredients.csv")]
        path: PathBuf,
    },
}

#[derive(Subcommand)]
enum TagCommands {
    /// Load tags from a CSV (or .json) file, or the default meal tags
    Load { path: Option<PathBuf> },
}

#[derive(Subcommand)]
enum RecipeCommands {
    /// Import recipes from a JSON file
    Import {
        /// Author id recorded on every imported recipe
        #[arg(long)]
        author: String,

        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = foodgram::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    foodgram::observability::init_observability(
        "foodgram",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Migrate => cli::migrate::migrate(&config).await,
        Commands::Reset => cli::migrate::reset(&config).await,
        Commands::Ingredient {
            command: IngredientCommands::Load { path },
        } => cli::ingredient::load(&config, path).await,
        Commands::Tag {
            command: TagCommands::Load { path },
        } => cli::tag::load(&config, path).await,
        Commands::Recipe {
            command: RecipeCommands::Import { author, path },
        } => cli::recipe::import(&config, author, path).await,
    }
}
