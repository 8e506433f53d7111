//! Accounts Vault CLI
//!
//! A terminal dashboard for the accounts you juggle across platforms.
//! Everything lives in memory and is gone when the session ends.

mod render;
mod shell;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use accounts_dashboard::{default_config_path, load_config, save_config, DashboardConfig};

/// Environment variable controlling log output
const LOG_ENV: &str = "ACCOUNTS_VAULT_LOG";

#[derive(Parser)]
#[command(name = "accounts-vault")]
#[command(version)]
#[command(about = "Accounts Vault - keep this session's accounts at hand")]
#[command(after_help = "EXAMPLES:
  accounts-vault                     Start at the login screen
  accounts-vault --demo --start /    Jump straight to a dashboard with demo accounts
  accounts-vault config init         Write a default config file

Accounts are kept in memory only and vanish when you quit.")]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path of the first view (/login or /; anything else opens the dashboard)
    #[arg(long, default_value = "/login")]
    start: String,

    /// Load demo accounts
    #[arg(long)]
    demo: bool,

    /// Delete without asking for confirmation
    #[arg(long)]
    yes: bool,

    /// Copy into an in-process buffer instead of the system clipboard
    #[arg(long)]
    memory_clipboard: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}

/// Initialize logging
fn init_logging() {
    // Log to stderr; stdout belongs to the dashboard
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .compact(),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    debug!("Using config file: {}", config_path.display());

    match &cli.command {
        Some(Commands::Config { action }) => match action {
            ConfigCommands::Init { force } => handle_config_init(&config_path, *force).await,
            ConfigCommands::Show => handle_config_show(&config_path).await,
        },
        None => {
            let config = load_config(&config_path).await?;
            shell::run_session(&cli, config).await
        }
    }
}

// === Command Handlers ===

async fn handle_config_init(path: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() && !force {
        println!("Config already exists at {}", path.display());
        println!("Use --force to overwrite it.");
        return Ok(());
    }

    save_config(path, &DashboardConfig::default()).await?;
    println!("Config written to {}", path.display());

    Ok(())
}

async fn handle_config_show(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(path).await?;

    println!("Config file: {}", path.display());
    if !path.exists() {
        println!("(not found, showing defaults)");
    }
    println!();
    println!("  login_delay_ms      {}", config.login_delay_ms);
    println!("  password_mask       {}", config.password_mask);
    println!("  date_format         {}", config.date_format);
    println!("  seed_demo_accounts  {}", config.seed_demo_accounts);
    println!(
        "  clipboard_command   {}",
        config.clipboard_command.as_deref().unwrap_or("(auto-detect)")
    );

    Ok(())
}
