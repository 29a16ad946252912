use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use snapdeck_core::{AppConfig, PageDocument};

mod commands;

#[derive(Parser)]
#[command(name = "snapdeck")]
#[command(author, version, about = "A full-page section pager for landing pages")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Page document to open (the built-in demo when omitted)
    #[arg(short, long, global = true)]
    page: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the page in the terminal
    Run,
    /// Validate a page document and print its sections
    Check {
        /// Print the outline as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration file path
    Path,
}

/// Route logs to a file while the terminal is in raw mode, to stderr otherwise
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.general.log_level.clone()));

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}

fn load_page(path: Option<&PathBuf>) -> Result<PageDocument> {
    match path {
        Some(path) => PageDocument::load(path)
            .with_context(|| format!("loading page {}", path.display())),
        None => Ok(PageDocument::demo()?),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config commands must work even when the current file does not parse
    if let Some(Commands::Config { action }) = &cli.command {
        return match action {
            ConfigAction::Init { force } => commands::config::init(*force),
            ConfigAction::Path => commands::config::path(),
        };
    }

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    let interactive = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, interactive)?;

    match cli.command {
        Some(Commands::Run) | None => {
            let page = load_page(cli.page.as_ref())?;
            commands::run::run(config, page).await
        }
        Some(Commands::Check { json }) => {
            let page = load_page(cli.page.as_ref())?;
            commands::check::run(&page, json)
        }
        Some(Commands::Config { .. }) => Ok(()),
    }
}
