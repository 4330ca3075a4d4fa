// Folio - static portfolio site generator
//
// Renders a work-history tab list and a featured-projects carousel from a
// markdown content tree into a single accessible HTML page.
//
// Architecture:
// - Content (glob + serde_yaml + pulldown-cmark): markdown with frontmatter
// - Model: immutable job/project records
// - Components: tab, carousel, crossfade and reveal state machines
// - Site (maud): renders the page and writes the output directory
// - TUI (ratatui): interactive preview driving the same state machines

mod cli;
mod components;
mod config;
mod content;
mod logging;
mod model;
mod site;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing
///
/// Preview mode captures logs to the buffer (stderr would garble the
/// display); build mode writes them to stderr. File logging is added on top
/// when enabled. The returned guard must live until exit so logs flush.
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(
    logging: &LoggingConfig,
    preview: bool,
    log_buffer: &LogBuffer,
) -> Option<WorkerGuard> {
    let default_filter = format!("folio={}", logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let console = if preview {
        TuiLogLayer::new(log_buffer.clone()).boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    if !logging.file_enabled {
        tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .init();
        return None;
    }

    let file_appender = match logging.file_appender() {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!(
                "Warning: Could not create log directory {:?}: {}",
                logging.file_dir, e
            );
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();
            return None;
        }
    };

    // Non-blocking writer; JSON lines for structured parsing
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Build {
        content: None,
        out: None,
    });

    // Config subcommands print and exit
    if cli::handle_config_command(&command) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    command.apply_overrides(&mut config);

    let preview = matches!(command, Commands::Preview { .. });
    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config.logging, preview, &log_buffer);

    tracing::debug!("Motion preference: {}", config.motion.as_str());

    if preview {
        let (jobs, projects) = site::load_sections(&config)?;
        tui::run_preview(&config, jobs, projects, log_buffer).await?;
        return Ok(());
    }

    let report = site::build(&config)?;
    println!(
        "Built {} ({} jobs, {} projects, {} covers)",
        report.index.display(),
        report.jobs,
        report.projects,
        report.covers_copied
    );
    Ok(())
}
