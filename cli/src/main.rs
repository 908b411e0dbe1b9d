//! Storefront Pager — CLI
//!
//! Runs the REST API, or previews a pagination window in the terminal.
//!
//! ```sh
//! # Run with default config (~/.config/storefront-pager/config.toml)
//! storefront-pager
//!
//! # Custom config path and port
//! storefront-pager --config /etc/storefront-pager/config.toml --port 9090
//!
//! # Validate config without starting
//! storefront-pager --check
//!
//! # Preview the page buttons for page 10 of 20
//! storefront-pager window --page 10 --total-pages 20
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{error, info};

use storefront_pager::config::AppConfig;
use storefront_pager::domain::pagination::{clamp_page, max_visible_for_width, render_text};
use storefront_pager::server::{init_tracing, ServerHandle};
use storefront_pager::{ConfigError, DomainError};

/// Storefront Pager — pagination windows and catalog helpers.
#[derive(Parser, Debug)]
#[command(
    name = "storefront-pager",
    version,
    about = "Pagination windows and catalog helpers for the storefront back office",
    long_about = "Storefront Pager — REST API that computes compact pagination \
                  windows and normalizes catalog data.\n\n\
                  Default config: ~/.config/storefront-pager/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "STOREFRONT_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the REST API server (default).
    Serve,
    /// Print the compact pagination window for a page.
    Window {
        /// Current page (1-based).
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Total number of pages.
        #[arg(long)]
        total_pages: u32,
        /// Page slots before compaction; overrides --viewport-width.
        #[arg(long)]
        max_visible: Option<u32>,
        /// Viewport width in CSS pixels, used to pick the slot count.
        #[arg(long)]
        viewport_width: Option<u32>,
    },
}

/// Render the window for `page` of `total_pages` as one line of text.
fn preview_window(
    config: &AppConfig,
    page: u32,
    total_pages: u32,
    max_visible: Option<u32>,
    viewport_width: Option<u32>,
) -> Result<String, DomainError> {
    let pagination = &config.pagination;
    let max_visible = max_visible
        .or_else(|| viewport_width.map(|w| max_visible_for_width(w, pagination)))
        .unwrap_or(pagination.max_visible_wide);
    let items = pagination
        .window_policy()
        .build(page, total_pages, max_visible)?;
    Ok(render_text(&items, clamp_page(page, total_pages)))
}

/// Load the config file. In `strict` mode (`--check`) load errors are returned
/// instead of falling back to the defaults.
fn load_config(path: &Path, strict: bool) -> Result<AppConfig, ConfigError> {
    match AppConfig::load(path) {
        Ok(cfg) => Ok(cfg),
        Err(e) if strict => Err(e),
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", path.display(), e);
            eprintln!("Using default configuration.");
            Ok(AppConfig::default())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = AppConfig::resolve_path(cli.config);
    let mut config = match load_config(&config_path, cli.check) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration is invalid ({}): {}", config_path.display(), e);
            return Err(e.into());
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_tracing(&config);
    info!("Configuration: {}", config_path.display());

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        if let Err(e) = config.validate() {
            error!("Configuration is invalid: {}", e);
            return Err(e.into());
        }
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!(
            "   Page slots  : {} narrow / {} wide (breakpoint {}px)",
            config.pagination.max_visible_narrow,
            config.pagination.max_visible_wide,
            config.pagination.narrow_breakpoint_px
        );
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    match cli.command.unwrap_or(Command::Serve) {
        Command::Window {
            page,
            total_pages,
            max_visible,
            viewport_width,
        } => {
            let line = preview_window(&config, page, total_pages, max_visible, viewport_width)?;
            println!("{}", line);
        }
        Command::Serve => {
            let handle = ServerHandle::start(config).await?;
            handle.install_signal_handler();
            info!("Press Ctrl+C to shutdown gracefully.");
            handle.wait().await;
        }
    }

    Ok(())
}
