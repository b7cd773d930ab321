use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use reconnect::App;
use reconnect::config::{Config, StorageBackendKind};
use reconnect::onboarding::{MAX_RATING, MIN_RATING};

mod cli;

#[derive(Parser)]
#[command(name = "reconnect")]
#[command(about = "Disconnect to Reconnect - gentle digital detox challenges")]
#[command(version)]
struct Cli {
    /// Directory holding app state (defaults to ~/.reconnect/data)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Path to the config file (defaults to ~/.reconnect/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Keep all state in memory for this run only
    #[arg(long, global = true)]
    memory: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in (placeholder guest sign-in unless a name is given)
    Login {
        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Email address
        #[arg(long)]
        email: Option<String>,
    },

    /// Sign out and forget the stored profile
    Logout,

    /// Answer the six questions (1-5 each) and get a challenge assigned
    Onboard {
        /// Six ratings, 1 (rarely) to 5 (very often)
        #[arg(
            num_args = 6,
            value_parser = clap::value_parser!(u8).range(i64::from(MIN_RATING)..=i64::from(MAX_RATING))
        )]
        ratings: Vec<u8>,
    },

    /// Show progress, the leaderboard and tips
    Dashboard,

    /// Mark today as complete
    Complete,

    /// Open a page by path (/, /login, /onboarding, /dashboard, /blog, /challenges)
    Open {
        /// Page path, e.g. /dashboard
        path: String,
    },

    /// Read the blog
    Blog,

    /// List the available challenges
    Challenges,

    /// Show a motivation quote
    Quotes {
        /// Keep rotating quotes until interrupted
        #[arg(long)]
        follow: bool,
    },

    /// Write a default ~/.reconnect/config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so views stay readable
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(Config::global_config_path);

    let open_app = || -> Result<App> {
        let mut config = Config::load_or_default(&config_path)?;
        if let Some(dir) = &cli.data_dir {
            config.storage.data_dir = Some(dir.clone());
        }
        if cli.memory {
            config.storage.backend = StorageBackendKind::Memory;
        }
        App::open(config)
    };

    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Login { name, email } => {
            cli::session::login_command(&mut open_app()?, name, email);
        }
        Commands::Logout => cli::session::logout_command(&mut open_app()?),
        Commands::Onboard { ratings } => cli::onboard::onboard_command(&mut open_app()?, &ratings)?,
        Commands::Dashboard => cli::dashboard::dashboard_command(&open_app()?),
        Commands::Complete => cli::dashboard::complete_command(&mut open_app()?),
        Commands::Open { path } => cli::navigate::open_command(&open_app()?, &path)?,
        Commands::Blog => cli::content::blog_command(&open_app()?),
        Commands::Challenges => cli::content::challenges_command(&open_app()?),
        Commands::Quotes { follow } => cli::content::quotes_command(&open_app()?, follow).await,
        Commands::Init { force } => cli::init::init_command(&config_path, force)?,
    }

    Ok(())
}
