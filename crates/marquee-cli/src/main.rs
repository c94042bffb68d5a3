use anyhow::Result;
use clap::Parser;
use marquee_core::Config;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "marquee", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the catalog CSV (default: ~/.local/share/marquee/catalog.csv)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Recommend titles similar to a given title
    ///
    /// Builds a TF-IDF index over the tags of every catalog entry, then ranks
    /// all other titles by cosine similarity to the selected one. Titles with
    /// equal scores keep catalog order.
    ///
    /// Unknown titles produce no output. Use 'marquee titles <filter>' to find
    /// the exact spelling.
    Recommend {
        /// Exact catalog title
        title: String,

        /// Number of recommendations (default from config, normally 7)
        #[arg(short = 'n', long)]
        top_n: Option<usize>,

        /// Show the similarity score next to each title
        #[arg(long)]
        scores: bool,

        /// Print recommendations as JSON
        #[arg(long)]
        json: bool,
    },
    /// List catalog titles, sorted
    Titles {
        /// Only titles containing this text (case-insensitive)
        filter: Option<String>,
    },
    /// Show catalog and index statistics
    Stats,
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults if missing
    Init,
}

fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.catalog {
        Some(path) => Config::load_with_catalog_path(path)?,
        None => Config::load()?,
    };

    init_logging(&config.log_level);

    match cli.command {
        Commands::Recommend {
            title,
            top_n,
            scores,
            json,
        } => {
            let top_n = top_n.unwrap_or(config.top_n);
            commands::run_recommend(&config, &title, top_n, scores, json)?;
        }
        Commands::Titles { filter } => {
            commands::list_titles(&config, filter.as_deref())?;
        }
        Commands::Stats => {
            commands::show_stats(&config)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
