use colored::Colorize;
use modict::Dictionary;

use crate::cli::*;
use crate::config::{build_options, CliConfig};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let options = build_options(cli.command.args(), &config.build)?;
    tracing::debug!(dir = %options.include.dirname.display(), "building dictionary");

    let dictionary = match &cli.command {
        Command::Optional(_) => modict::optional(options)?,
        Command::Required(_) => modict::required(options)?,
        Command::Aggregate(_) => modict::aggregate(options)?,
        Command::Exists(_) => modict::exists(options)?,
    };

    println!("{}", render(&dictionary, cli.format)?);
    if cli.verbose {
        eprintln!("{} {} entries", "✓".green().bold(), dictionary.len().to_string().bold());
    }
    Ok(())
}

pub fn render(dictionary: &Dictionary, format: OutputFormat) -> anyhow::Result<String> {
    let text = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(dictionary)?,
        OutputFormat::Compact => serde_json::to_string(dictionary)?,
    };
    Ok(text)
}
