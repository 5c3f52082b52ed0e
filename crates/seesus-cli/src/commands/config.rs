use crate::context::{build_classifier, config_path, load_config};
use anyhow::{Context, Result};
use clap::Subcommand;
use seesus_config::ConfigManager;
use std::path::Path;

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Initialize config file at ~/.seesus/config.toml
    Init,

    /// Show config file path
    Path,

    /// Print the effective config
    Show,

    /// Validate config file and apply its overrides to a scratch classifier
    Validate,
}

pub fn handle_config_command(
    cmd: ConfigCommand,
    explicit: Option<&Path>,
    json: bool,
) -> Result<()> {
    match cmd {
        ConfigCommand::Init => init_config(explicit),
        ConfigCommand::Path => show_config_path(explicit),
        ConfigCommand::Show => show_config(explicit, json),
        ConfigCommand::Validate => validate_config(explicit),
    }
}

fn init_config(explicit: Option<&Path>) -> Result<()> {
    let path = config_path(explicit)?;

    if path.exists() {
        println!("Config already exists at: {}", path.display());
        println!("To reinitialize, please delete the existing config first.");
        return Ok(());
    }

    ConfigManager::init_at(&path)
        .with_context(|| format!("Failed to initialize config at {}", path.display()))?;
    println!("✓ Initialized config at: {}", path.display());
    Ok(())
}

fn show_config_path(explicit: Option<&Path>) -> Result<()> {
    println!("{}", config_path(explicit)?.display());
    Ok(())
}

fn show_config(explicit: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(explicit)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", toml::to_string_pretty(&config)?);
    }
    Ok(())
}

fn validate_config(explicit: Option<&Path>) -> Result<()> {
    let path = config_path(explicit)?;
    let manager = ConfigManager::load_from(&path)
        .context("Config not found or invalid. Run 'seesus config init' first.")?;

    let config = manager.config();
    config.validate()?;

    // Overrides must also name goals the data set knows
    let (classifier, confirmations) = build_classifier(config, None, &[])?;

    println!("✓ Config is valid");
    println!("  Version: {}", config.version);
    println!("  Log level: {}", config.settings.log_level);
    if let Some(data_file) = &config.settings.data_file {
        println!("  Data file: {}", data_file.display());
    }
    println!("  Goals: {}", classifier.goals().len());
    println!("  Overrides: {}", confirmations.len());
    for confirmation in &confirmations {
        println!("    {}", confirmation);
    }

    Ok(())
}
