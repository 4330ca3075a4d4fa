// CLI module - command-line argument parsing and config handlers
//
// Subcommands:
// - build (default): render the site into the output directory
// - preview: interactive terminal preview of both sections
// - config --show|--reset|--path: inspect or regenerate the config file

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Folio - static portfolio site generator
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version = VERSION)]
#[command(about = "Static portfolio site generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Build the site (default when no subcommand is given)
    Build {
        /// Content directory (overrides config and FOLIO_CONTENT_DIR)
        #[arg(long)]
        content: Option<PathBuf>,

        /// Output directory (overrides config and FOLIO_OUTPUT_DIR)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Browse the sections interactively in the terminal
    Preview {
        /// Content directory (overrides config and FOLIO_CONTENT_DIR)
        #[arg(long)]
        content: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Commands {
    /// Apply command-line directory overrides on top of env/file config
    pub fn apply_overrides(&self, config: &mut Config) {
        match self {
            Commands::Build { content, out } => {
                if let Some(dir) = content {
                    config.content_dir = dir.clone();
                }
                if let Some(dir) = out {
                    config.output_dir = dir.clone();
                }
            }
            Commands::Preview { content } => {
                if let Some(dir) = content {
                    config.content_dir = dir.clone();
                }
            }
            Commands::Config { .. } => {}
        }
    }
}

/// Handle the config subcommand. Returns true if it was handled (exit after).
pub fn handle_config_command(command: &Commands) -> bool {
    let Commands::Config { show, reset, path } = *command else {
        return false;
    };

    if path {
        handle_config_path();
    } else if show {
        handle_config_show();
    } else if reset {
        handle_config_reset();
    } else {
        // No flag provided, show help
        println!("Usage: folio config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
    }
    true
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("content_dir = {:?}", config.content_dir.display().to_string());
    println!("output_dir = {:?}", config.output_dir.display().to_string());
    println!("title = {:?}", config.title);
    println!("motion = {:?}", config.motion.as_str());
    println!();
    println!("[sections]");
    println!("featured_pattern = {:?}", config.sections.featured_pattern);
    println!("jobs_pattern = {:?}", config.sections.jobs_pattern);
    println!();
    println!("[carousel]");
    println!("speed_ms = {}", config.carousel.speed_ms);
    println!("infinite = {}", config.carousel.infinite);
    println!("autoplay = {}", config.carousel.autoplay);
    println!("dots = {}", config.carousel.dots);
    println!();
    println!("[tabs]");
    println!("fade_ms = {}", config.tabs.fade_ms);
    println!();
    println!("[reveal]");
    println!("delay_ms = {}", config.reveal.delay_ms);
    println!("duration_ms = {}", config.reveal.duration_ms);
    println!("distance = {:?}", config.reveal.distance);
    println!("view_factor = {}", config.reveal.view_factor);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}
