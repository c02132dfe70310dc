//! udt-start - Universal Data Tool start screen
//!
//! Shows the landing screen in the terminal and prints the user's choice as
//! JSON on stdout for the editor that launched it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use udt_start::branding::{APP_BINARY_NAME, APP_DISPLAY_NAME};
use udt_start::config::Config;
use udt_start::models::{TemplateCatalog, LANGUAGE_OPTIONS};
use udt_start::{app, logging};

/// Universal Data Tool start screen
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// JSON file listing recently opened documents
    #[arg(long, value_name = "FILE")]
    recent: Option<PathBuf>,

    /// Language code to start in (en, fr, cn, pt, nl)
    #[arg(long, value_name = "CODE")]
    lang: Option<String>,

    /// Hide the "downloading and installing" help link
    #[arg(long)]
    no_download_link: bool,

    /// Offer the collaborative session action
    #[arg(long)]
    session: bool,

    /// Append analytics events to this JSON-lines file
    #[arg(long, value_name = "FILE")]
    analytics_log: Option<PathBuf>,

    /// Do not record analytics events
    #[arg(long)]
    no_analytics: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in templates
    Templates {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the available languages
    Languages,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration.
    fn apply(&self, config: &mut Config) {
        if let Some(recent) = &self.recent {
            config.paths.recent_items = Some(recent.clone());
        }
        if let Some(lang) = &self.lang {
            config.ui.language = lang.clone();
        }
        if self.no_download_link {
            config.ui.show_download_link = false;
        }
        if self.session {
            config.session.enabled = true;
        }
        if let Some(log) = &self.analytics_log {
            config.analytics.log_file = Some(log.clone());
        }
        if self.no_analytics {
            config.analytics.enabled = false;
        }
    }
}

fn print_templates(json: bool) -> Result<()> {
    let catalog = TemplateCatalog::builtin();
    if json {
        let listing = serde_json::json!({
            "templates": catalog.templates(),
            "auth_templates": catalog.auth_templates(),
        });
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("Templates:");
    for template in catalog.templates() {
        println!("  {:<26} {}", template.name, template.description);
    }
    println!();
    println!("Authentication templates:");
    for template in catalog.auth_templates() {
        println!("  {:<26} {}", template.name, template.description);
    }
    Ok(())
}

fn print_languages() {
    for option in LANGUAGE_OPTIONS {
        println!("{:<4} {}", option.code, option.label);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Command::Templates { json }) => return print_templates(*json),
        Some(Command::Languages) => {
            print_languages();
            return Ok(());
        }
        None => {}
    }

    match logging::default_log_path() {
        Ok(path) => {
            if let Err(e) = logging::init(&path, cli.verbose) {
                eprintln!("Warning: logging disabled: {e:#}");
            }
        }
        Err(e) => eprintln!("Warning: logging disabled: {e:#}"),
    }
    tracing::info!("{} v{} starting", APP_DISPLAY_NAME, env!("CARGO_PKG_VERSION"));

    // Load or fall back to default config
    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: using default configuration: {e:#}");
        tracing::warn!("Failed to load config: {e:#}");
        Config::default()
    });
    cli.apply(&mut config);
    config
        .validate()
        .context(format!("Invalid options, see `{APP_BINARY_NAME} --help`"))?;

    if let Some(outcome) = app::run_start_screen(&config)? {
        println!("{}", serde_json::to_string(&outcome)?);
    }
    Ok(())
}
