//! Roster CLI - teams, users and pull request reviewer assignment
//!
//! Every command runs against the SQLite database named by the config
//! (`--db`, `ROSTER_DB_PATH` or `~/.config/roster/config.toml`).

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use roster_core::{Config, ReviewerPicker, RosterService};
use roster_db::{Database, DatabaseConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{Output, PrArgs, TeamArgs, UserArgs};

const VERBOSE_FILTER: &str = "warn,roster=info,roster_core=info,roster_db=info";

/// Roster: teams, users and automatic pull request reviewer assignment
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// SQLite database file (overrides config and env)
    #[arg(long, global = true, env = "ROSTER_DB_PATH")]
    db: Option<PathBuf>,

    /// Seed for reviewer selection (overrides config and env)
    #[arg(long, global = true, env = "ROSTER_SEED")]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Create and inspect teams
    #[command(visible_alias = "t")]
    Team(TeamArgs),

    /// Inspect users and toggle their activity
    #[command(visible_alias = "u")]
    User(UserArgs),

    /// Open, merge and reassign pull requests
    Pr(PrArgs),

    /// Show review assignment counts per user
    Stats,

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.db.clone(), cli.seed)?;

    let default_filter = if cli.verbose {
        VERBOSE_FILTER
    } else {
        config.log.filter.as_str()
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    tracing::debug!(
        db = %config.database.path.display(),
        seed = ?config.assignment.seed,
        "Configuration loaded"
    );

    let out = Output::new(cli.json);

    let result = match cli.command {
        Some(Commands::Version) => {
            println!("roster {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Commands::Config) => show_config(&config, &out),
        Some(Commands::Team(args)) => {
            let service = open_service(&config).await?;
            args.execute(&service, &out).await
        }
        Some(Commands::User(args)) => {
            let service = open_service(&config).await?;
            args.execute(&service, &out).await
        }
        Some(Commands::Pr(args)) => {
            let service = open_service(&config).await?;
            args.execute(&service, &out).await
        }
        Some(Commands::Stats) => {
            let service = open_service(&config).await?;
            commands::stats::show(&service, &out).await
        }
        None => {
            println!("Roster - team rosters and pull request reviewer assignment");
            println!();
            println!("Use --help for usage information");
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<roster_core::Error>() {
            // Domain outcomes are reported, not propagated as crashes
            Some(domain) => {
                out.error(domain)?;
                Ok(ExitCode::FAILURE)
            }
            None => Err(err),
        },
    }
}

async fn open_service(config: &Config) -> anyhow::Result<commands::Service> {
    let db = Database::connect(DatabaseConfig::from(config.database.clone())).await?;
    let picker = ReviewerPicker::from_seed(config.assignment.seed);
    Ok(RosterService::new(Arc::new(db.store()), picker))
}

fn show_config(config: &Config, out: &Output) -> anyhow::Result<()> {
    if out.is_json() {
        return out.json(config);
    }

    println!("Roster Configuration");
    println!("====================");
    println!();
    print!("{}", toml::to_string_pretty(config)?);
    println!();
    if let Some(path) = Config::default_config_path() {
        println!("Config file: {}", path.display());
        if path.exists() {
            println!("  (exists)");
        } else {
            println!("  (not found - using defaults)");
        }
    }
    Ok(())
}
