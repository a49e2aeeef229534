//! PokeAPI SDK for poke-gallery
//!
//! This crate provides a typed client for the two catalog endpoints the
//! gallery consumes: the paged pokémon list and the per-pokémon detail.
//!
//! # Features
//!
//! - **Typed wire models**: list pages and detail records mapped onto the
//!   gallery's domain types
//! - **Single-attempt requests**: failures are classified, never retried
//! - **Gallery seams**: [`PokemonClient`] implements both `PageFetcher` and
//!   `DetailFetcher`
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use poke_gallery_sdk::{PokeApiClient, PaginationParams, SdkConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PokeApiClient::new(SdkConfig::default())?;
//!
//!     let page = client.pokemon().list(PaginationParams::new(0, 20)).await?;
//!     println!("Found {} pokémon", page.results.len());
//!
//!     let ditto = client.pokemon().get("ditto").await?;
//!     println!("#{} {}", ditto.id, ditto.name);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! ```rust,no_run
//! use poke_gallery_sdk::{PokeApiClient, SdkError};
//!
//! async fn lookup(client: &PokeApiClient) {
//!     match client.pokemon().get("missingno").await {
//!         Ok(p) => println!("Got {}", p.name),
//!         Err(SdkError::NotFound { key }) => eprintln!("No match for {}", key),
//!         Err(e) => eprintln!("Other error: {}", e),
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod resources;

// Re-export main types for convenience
pub use client::{HttpClient, PaginationParams};
pub use config::{SdkConfig, DEFAULT_BASE_URL};
pub use error::{SdkError, SdkResult};
pub use resources::pokemon::{
    Artwork, NamedResource, OtherSprites, Pokemon, PokemonClient, PokemonPage, Sprites, StatSlot,
    TypeSlot,
};

use std::sync::Arc;

/// The main client for the PokeAPI catalog.
///
/// # Example
///
/// ```rust,no_run
/// use poke_gallery_sdk::PokeApiClient;
/// use std::time::Duration;
///
/// let client = PokeApiClient::builder("https://pokeapi.co/api/v2")
///     .with_timeout(Duration::from_secs(30))
///     .build()?;
/// let pokemon = client.pokemon();
/// # Ok::<(), poke_gallery_sdk::SdkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http_client: Arc<HttpClient>,
    pokemon: PokemonClient,
}

impl PokeApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SdkConfig) -> SdkResult<Self> {
        let http_client = Arc::new(HttpClient::new(config)?);

        Ok(Self {
            pokemon: PokemonClient::new(Arc::clone(&http_client)),
            http_client,
        })
    }

    /// Create a new client using a builder pattern.
    pub fn builder(base_url: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(base_url)
    }

    /// Get the pokémon resource client.
    pub fn pokemon(&self) -> &PokemonClient {
        &self.pokemon
    }

    /// Get the base URL of the API.
    pub fn base_url(&self) -> &str {
        &self.http_client.config().base_url
    }
}

/// Builder for creating a PokeApiClient with fluent configuration.
#[derive(Debug)]
pub struct ClientBuilder {
    config: SdkConfig,
}

impl ClientBuilder {
    /// Create a new client builder with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            config: SdkConfig::new(base_url),
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Enable or disable request/response logging.
    pub fn with_logging(mut self, enable: bool) -> Self {
        self.config = self.config.with_logging(enable);
        self
    }

    /// Build the client.
    pub fn build(self) -> SdkResult<PokeApiClient> {
        PokeApiClient::new(self.config)
    }
}
