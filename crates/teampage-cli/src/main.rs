//! Team Page Generator CLI
//!
//! Asks about a manager and their team, then writes a static HTML page.

mod config;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use config::Config;
use teampage::{generate_page, GenerateOutcome};
use terminal::TerminalPrompter;

const LOG_ENV: &str = "TEAMPAGE_LOG";

#[derive(Parser)]
#[command(name = "teampage")]
#[command(about = "Team Page Generator - build an HTML page for your team", long_about = None)]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    init_logging();

    let config = Config::load()?;
    let generator_config = config.generator_config();
    tracing::debug!(output_dir = ?generator_config.output_dir, "Configuration loaded");

    println!("\n{}\n", " *** Welcome to the Team Page Generator *** ".bold());

    let mut prompter = TerminalPrompter::new();
    let outcome = generate_page(&mut prompter, &generator_config)
        .context("Failed to generate team page")?;

    match outcome {
        GenerateOutcome::Saved(path) => {
            println!("{} {} has been saved.", "✓".green(), path.display());
            println!(
                "\n{}\n",
                " *** Thank you for using the Team Page Generator! *** ".bold()
            );
        }
        other => {
            tracing::debug!(outcome = ?other, "Finished without writing a page");
        }
    }

    Ok(())
}

/// Diagnostics go to stderr, quiet unless TEAMPAGE_LOG asks for more
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
