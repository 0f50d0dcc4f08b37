//! menutree CLI - storefront navigation menu inspector
//!
//! Usage: menutree <COMMAND>
//!
//! Commands:
//!   render  Build and annotate a menu for a location
//!   check   Report dangling parents and duplicate ids

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use menutree::application::{RenderOptions, RenderUseCase};
use menutree::config::Config;
use menutree::presentation::cli::{Cli, Commands, SourceArgs};
use menutree::presentation::output::print_config_warnings;
use menutree::presentation::{render_diagnostics, render_menu, OutputFormat};
use menutree::JsonFileMenuSource;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = OutputFormat::from_json_flag(cli.json);
    match cli.command {
        Commands::Render {
            source,
            location,
            category_suffix,
            product_suffix,
            max_levels,
        } => cmd_render(
            &source,
            location,
            category_suffix,
            product_suffix,
            max_levels,
            format,
        ),
        Commands::Check { source } => cmd_check(&source, format),
    }
}

/// `RUST_LOG` wins; otherwise -v raises the level from `warn`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            print_config_warnings(path, &warnings);
            Ok(config.with_env_overrides())
        }
        None => {
            let cwd = std::env::current_dir().ok();
            Ok(Config::load_or_default(cwd.as_deref()))
        }
    }
}

fn cmd_render(
    source: &SourceArgs,
    location: String,
    category_suffix: Option<String>,
    product_suffix: Option<String>,
    max_levels: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let config = load_config(source.config.as_deref())?;

    let mut suffixes = config.urls.clone();
    if let Some(suffix) = category_suffix {
        suffixes.category_suffix = suffix;
    }
    if let Some(suffix) = product_suffix {
        suffixes.product_suffix = suffix;
    }

    let options = RenderOptions::from_config(&config, location)
        .with_identifier(source.menu.clone())
        .with_suffixes(suffixes)
        .with_max_levels(max_levels);

    let use_case = RenderUseCase::new(JsonFileMenuSource::new(&source.input));
    let result = use_case
        .execute(&options)
        .with_context(|| format!("failed to render menu from {}", source.input.display()))?;

    print!("{}", render_menu(&result.menu, format)?);
    Ok(())
}

fn cmd_check(source: &SourceArgs, format: OutputFormat) -> Result<()> {
    let config = load_config(source.config.as_deref())?;
    let identifier = source.menu.clone().or(config.menu.identifier);

    let use_case = RenderUseCase::new(JsonFileMenuSource::new(&source.input));
    let diagnostics = use_case
        .check(identifier.as_deref())
        .with_context(|| format!("failed to check menu from {}", source.input.display()))?;

    match format {
        OutputFormat::Json => {
            let messages: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
            let report = serde_json::json!({
                "ok": diagnostics.is_empty(),
                "diagnostics": messages,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            if diagnostics.is_empty() {
                println!("✓ menu is consistent");
            } else {
                print!("{}", render_diagnostics(&diagnostics));
            }
        }
    }

    if !diagnostics.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
