//! Configuration commands

use anyhow::{bail, Context as _, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use std::io::IsTerminal;

use crate::config::CliConfig;
use crate::context::Context;
use crate::output::{print_field, OutputFormat};

/// Configuration management commands
#[derive(Debug, Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show the effective configuration
    Show,

    /// Show the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file without confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Execute configuration commands
pub async fn execute(ctx: &Context, cmd: ConfigCommands) -> Result<()> {
    match cmd.command {
        ConfigSubcommand::Show => show(ctx),
        ConfigSubcommand::Path => show_path(),
        ConfigSubcommand::Init { force } => init(ctx, force),
    }
}

fn show(ctx: &Context) -> Result<()> {
    let settings = &ctx.config.settings;

    if ctx.output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&ctx.config)?);
        return Ok(());
    }

    println!("{}", "Configuration".bold().underline());
    println!();
    println!("{}", "Settings:".cyan());
    print_field("api_url", ctx.api_url());
    print_field("page_size", &ctx.page_size().to_string());
    print_field(
        "timeout_secs",
        &settings
            .timeout_secs
            .map(|s| s.to_string())
            .unwrap_or_else(|| "none".to_string()),
    );
    print_field(
        "max_concurrency",
        &settings
            .max_concurrency
            .map(|n| n.to_string())
            .unwrap_or_else(|| "unbounded".to_string()),
    );
    print_field("color", &settings.color.to_string());
    Ok(())
}

fn show_path() -> Result<()> {
    let path = CliConfig::config_path()?;
    let status = if path.exists() {
        "✓".green()
    } else {
        "✗".red()
    };
    println!("{} {}", status, path.display());
    Ok(())
}

fn init(ctx: &Context, force: bool) -> Result<()> {
    let path = CliConfig::config_path()?;

    if path.exists() && !force {
        if !std::io::stdin().is_terminal() {
            bail!(
                "{} already exists; pass --force to overwrite",
                path.display()
            );
        }
        let confirm = dialoguer::Confirm::new()
            .with_prompt(format!("Overwrite {}?", path.display()))
            .default(false)
            .interact()
            .context("Failed to get confirmation")?;

        if !confirm {
            ctx.output.info("Cancelled");
            return Ok(());
        }
    }

    let path = CliConfig::default()
        .save()
        .context("Failed to save configuration")?;
    ctx.output
        .success(&format!("Wrote default configuration to {}", path.display()));
    Ok(())
}
