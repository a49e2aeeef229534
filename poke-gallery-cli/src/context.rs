//! CLI execution context

use anyhow::{Context as _, Result};
use poke_gallery_engine::{GalleryConfig, GalleryController};
use poke_gallery_sdk::{PokeApiClient, SdkConfig};
use std::sync::Arc;
use std::time::Duration;

use crate::cli::Cli;
use crate::config::CliConfig;
use crate::output::{OutputFormat, OutputWriter};
use crate::renderer::TerminalRenderer;

/// Execution context for CLI commands
pub struct Context {
    /// CLI configuration
    pub config: CliConfig,

    /// Output format
    pub output_format: OutputFormat,

    /// Output writer
    pub output: OutputWriter,

    /// Verbose mode
    pub verbose: bool,

    /// API URL override
    pub api_url_override: Option<String>,

    /// Page size override
    pub page_size_override: Option<u32>,
}

impl Context {
    /// Create a new context from CLI arguments
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = CliConfig::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Ignoring unreadable config file");
            CliConfig::default()
        });
        Ok(Self::with_config(cli, config))
    }

    pub fn with_config(cli: &Cli, config: CliConfig) -> Self {
        let no_color = cli.no_color || !config.settings.color;
        let output_format = cli.output;
        let output = OutputWriter::new(output_format, no_color);

        Self {
            config,
            output_format,
            output,
            verbose: cli.verbose,
            api_url_override: cli.api_url.clone(),
            page_size_override: cli.page_size,
        }
    }

    /// Get the effective API URL
    pub fn api_url(&self) -> &str {
        self.api_url_override
            .as_deref()
            .unwrap_or(&self.config.settings.api_url)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size_override
            .unwrap_or(self.config.settings.page_size)
    }

    /// Create an SDK client
    pub fn create_client(&self) -> Result<PokeApiClient> {
        let mut config = SdkConfig::new(self.api_url());

        if let Some(secs) = self.config.settings.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if self.verbose {
            config = config.with_logging(true);
        }

        PokeApiClient::new(config).context("Failed to create API client")
    }

    pub fn gallery_config(&self) -> GalleryConfig {
        let config = GalleryConfig::default().with_page_size(self.page_size());
        match self.config.settings.max_concurrency {
            Some(limit) => config.with_max_concurrency(limit),
            None => config,
        }
    }

    /// Wire a controller to the catalog client and a terminal renderer
    pub fn create_gallery(
        &self,
        interactive: bool,
    ) -> Result<(GalleryController, Arc<TerminalRenderer>)> {
        let client = self.create_client()?;
        let renderer = Arc::new(TerminalRenderer::new(self.output_format, interactive));
        let controller = GalleryController::from_source(
            self.gallery_config(),
            Arc::new(client.pokemon().clone()),
            renderer.clone(),
        )
        .context("Invalid gallery settings")?;
        Ok((controller, renderer))
    }
}
