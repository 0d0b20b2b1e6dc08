//! # CLI Layer
//!
//! This module is **one possible UI client** for newsdesk; the HTTP server is
//! the other.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Initializes logging
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Load configuration and apply flag overrides
//! 3. **Dispatch**: Route commands to the server, the reader or the registry
//! 4. **Output Formatting**: Plain text via `render`

use super::render;
use super::setup::{parse_cli, Cli, Commands};
use crate::reader::ArticleReader;
use crate::server;
use anyhow::Context;
use newsdeskapp::categories;
use newsdeskapp::config::NewsConfig;
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    let cli = parse_cli();
    init_logging(cli.verbose, cli.quiet);

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Serve { .. } => server::serve(&config).await,
        Commands::Read { id, raw } => handle_read(&config, &id, raw).await,
        Commands::Categories => {
            print!("{}", render::category_tree(categories::categories()));
            Ok(())
        }
    }
}

/// Uses `RUST_LOG` if set, otherwise defaults based on verbosity flags.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so command output stays pipeable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> anyhow::Result<NewsConfig> {
    let mut config =
        NewsConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Commands::Serve { bind, data_dir } = &cli.command {
        apply_overrides(&mut config, bind.clone(), data_dir.clone());
    }
    Ok(config)
}

fn apply_overrides(
    config: &mut NewsConfig,
    bind: Option<String>,
    data_dir: Option<std::path::PathBuf>,
) {
    if let Some(bind) = bind {
        config.bind = bind;
    }
    if data_dir.is_some() {
        config.data_dir = data_dir;
    }
}

async fn handle_read(config: &NewsConfig, id: &str, raw: bool) -> anyhow::Result<()> {
    let reader = ArticleReader::from_config(&config.read);
    let view = reader.fetch_view(id).await?;
    print!("{}", render::article(&view, raw));
    Ok(())
}
