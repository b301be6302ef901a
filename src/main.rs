//! MeshPanel - terminal admin dashboard
//!
//! Runs the interactive dashboard when started without a subcommand, or a
//! single headless command otherwise.

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use meshpanel::cli::{CliError, ConfigArgs, LogsArgs, ThemeArgs, UsersArgs};
use meshpanel::config::Config;
use meshpanel::constants::{APP_BINARY_NAME, APP_NAME};
use meshpanel::data::SampleData;
use meshpanel::storage::preference_storage;
use meshpanel::theme::{SystemColorScheme, ThemeManager};
use meshpanel::tui;

/// MeshPanel - terminal admin dashboard
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show or change the display mode
    Theme(ThemeArgs),
    /// List users
    Users(UsersArgs),
    /// List audit log events
    Logs(LogsArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool, interactive: bool) {
    let env_filter = std::env::var_os("RUST_LOG").is_some();
    // Log lines would tear the alternate screen unless explicitly requested
    if interactive && !env_filter && !verbose {
        return;
    }

    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_dashboard() -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e:#}");
            Config::default()
        }
    };

    let mut manager = ThemeManager::init(preference_storage(), &SystemColorScheme);
    manager.subscribe(|mode, palette| {
        debug!(
            "Palette switched to {mode} (background {})",
            palette.background.default
        );
    });

    let data = SampleData::generate(Utc::now());
    let mut state = tui::AppState::new(manager, &config, data);
    debug!("Starting {APP_NAME} on page {:?}", state.page);

    tui::run(&mut state)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.command.is_none());

    let result: Result<(), CliError> = match &cli.command {
        Some(Command::Theme(args)) => args.execute(),
        Some(Command::Users(args)) => args.execute(),
        Some(Command::Logs(args)) => args.execute(),
        Some(Command::Config(args)) => args.execute(),
        None => return run_dashboard(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.code.code());
    }

    Ok(())
}
