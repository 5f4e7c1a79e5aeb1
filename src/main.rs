use anyhow::{Context, Result};
use clap::Parser;

use applist::catalog;
use applist::cli::args::{Cli, OutputFormat};
use applist::cli::output;
use applist::common::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("applist=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let config = Config::load(cli.config.as_deref())?;

    // Both lists are built before anything reaches stdout
    let lists = catalog::build_catalog(&cli.src, &config)
        .with_context(|| format!("Failed to build app list from {}", cli.src.display()))?;

    let mut stdout = std::io::stdout().lock();
    let written = match cli.format {
        OutputFormat::Markdown => output::write_markdown(&mut stdout, &lists),
        OutputFormat::Json => output::write_json(&mut stdout, &lists),
    };
    written.context("Failed to write output")?;

    Ok(())
}
