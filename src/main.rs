//! Main entry point for the host stand console
//!
//! Parses arguments, loads configuration, sets up logging and then hands the
//! terminal to the interactive menu until the host exits.

use anyhow::Result;
use clap::Parser;
use host_stand::config::AppConfig;
use host_stand::{Console, RestaurantSession};
use std::io;
use std::path::PathBuf;
use tracing::{error, info};

/// Host Stand - seat parties, track tables and estimate waits
#[derive(Parser)]
#[command(
    name = "host-stand",
    version,
    about = "Interactive restaurant host stand for seating parties and tracking table times",
    long_about = "Host Stand is a terminal tool for a restaurant host. Clock servers in, \
                 seat parties at single tables or pushed-together groups depending on size, \
                 watch how long each table has been occupied and get a rough wait estimate."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Keep previous screens visible
    #[arg(long, help = "Do not clear the terminal between screens")]
    no_clear: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without opening the console")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
///
/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Log the effective configuration
fn display_startup_banner(config: &AppConfig) {
    info!("Host Stand v{}", host_stand::VERSION);
    info!("   Service: {}", config.service.name);
    info!("   Log level: {}", config.service.log_level);
    info!("   Clear screen: {}", config.console.clear_screen);
    info!("   Show server load: {}", config.console.show_server_load);
}

/// Load configuration from file or environment, then apply CLI overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if args.no_clear {
        config.console.clear_screen = false;
    }

    host_stand::config::validate_config(&config)?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    display_startup_banner(&config);

    if args.dry_run {
        println!("Configuration OK: {:?}", config);
        info!("Dry run completed - exiting without opening the console");
        return Ok(());
    }

    let mut session = RestaurantSession::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), config.console.clone());

    if let Err(e) = console.run(&mut session) {
        error!("Console failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
