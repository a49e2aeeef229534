//! Pokémon resource client
//!
//! Wraps the two catalog endpoints the gallery depends on and maps their
//! wire format onto the domain records.

use crate::client::{HttpClient, PaginationParams};
use crate::error::{SdkError, SdkResult};
use async_trait::async_trait;
use poke_gallery_core::{
    DetailFetcher, ItemDetail, ItemSummary, PageFetcher, StatEntry, TypeRef,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

const RESOURCE: &str = "pokemon";

/// Client for pokémon operations
#[derive(Debug, Clone)]
pub struct PokemonClient {
    client: Arc<HttpClient>,
}

impl PokemonClient {
    /// Create a new pokémon client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// `GET /pokemon?limit={limit}&offset={offset}`
    pub async fn list(&self, params: PaginationParams) -> SdkResult<PokemonPage> {
        debug!(offset = params.offset, limit = params.limit, "Fetching page");
        self.client
            .get_with_query(&[RESOURCE], Some(&params))
            .await
    }

    /// `GET /pokemon/{name_or_id}`
    ///
    /// Any non-2xx answer is reported as [`SdkError::NotFound`] for `key`.
    pub async fn get(&self, key: &str) -> SdkResult<Pokemon> {
        debug!(key, "Fetching detail");
        self.client
            .get(&[RESOURCE, key])
            .await
            .map_err(|e| match e {
                SdkError::RemoteError { .. } => SdkError::NotFound {
                    key: key.to_string(),
                },
                other => other,
            })
    }
}

#[async_trait]
impl PageFetcher for PokemonClient {
    async fn fetch_page(&self, offset: u32, limit: u32) -> poke_gallery_core::Result<Vec<ItemSummary>> {
        let page = self.list(PaginationParams::new(offset, limit)).await?;
        Ok(page.into_summaries())
    }
}

#[async_trait]
impl DetailFetcher for PokemonClient {
    async fn fetch_detail(&self, key: &str) -> poke_gallery_core::Result<ItemDetail> {
        let pokemon = self.get(key).await?;
        Ok(pokemon.into())
    }
}

// ===== Wire Types =====

/// `{name, url}` reference used throughout the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedResource {
    /// Lower-case identifier, usable as a lookup key
    pub name: String,
    /// Link to the full resource
    #[serde(default)]
    pub url: Option<String>,
}

/// One page of the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonPage {
    /// Size of the whole catalog
    #[serde(default)]
    pub count: Option<u32>,
    /// Link to the following page, if any
    #[serde(default)]
    pub next: Option<String>,
    /// Link to the preceding page, if any
    #[serde(default)]
    pub previous: Option<String>,
    /// Entries of this page, in server order
    pub results: Vec<NamedResource>,
}

impl PokemonPage {
    /// Drop the links and keep one summary per entry, in order
    pub fn into_summaries(self) -> Vec<ItemSummary> {
        self.results
            .into_iter()
            .map(|r| ItemSummary::new(r.name))
            .collect()
    }
}

/// One elemental type of a pokémon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    /// 1 for the primary type, 2 for the secondary
    #[serde(default)]
    pub slot: u32,
    /// The type itself
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// One base stat of a pokémon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSlot {
    /// Base value
    pub base_stat: u32,
    /// Which stat this is
    pub stat: NamedResource,
}

/// Official artwork sprite set
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Artwork {
    /// Front-facing artwork URL
    #[serde(default)]
    pub front_default: Option<String>,
}

/// Alternative sprite sets
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OtherSprites {
    /// High-resolution official artwork
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

/// Sprite URLs of a pokémon
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Sprites {
    /// Small in-game sprite
    #[serde(default)]
    pub front_default: Option<String>,
    /// Alternative sprite sets
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

/// Detail record as served by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    /// National dex number
    pub id: u32,
    /// Lower-case name
    pub name: String,
    /// Weight in hectograms
    #[serde(default)]
    pub weight: u32,
    /// Height in decimetres
    #[serde(default)]
    pub height: u32,
    /// Types, primary first
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    /// Base stats in API order
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    /// Sprite URLs
    #[serde(default)]
    pub sprites: Sprites,
}

impl From<Pokemon> for ItemDetail {
    fn from(p: Pokemon) -> Self {
        let image_primary = p
            .sprites
            .other
            .and_then(|o| o.official_artwork)
            .and_then(|a| a.front_default);

        Self {
            id: p.id,
            name: p.name,
            weight_deci: p.weight,
            height_deci: p.height,
            types: p
                .types
                .into_iter()
                .map(|t| TypeRef { name: t.kind.name })
                .collect(),
            stats: p
                .stats
                .into_iter()
                .map(|s| StatEntry {
                    name: s.stat.name,
                    base_value: s.base_stat,
                })
                .collect(),
            image_primary,
            image_fallback: p.sprites.front_default,
        }
    }
}
