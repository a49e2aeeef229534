use async_trait::async_trait;

use crate::domain::{ItemDetail, ItemSummary};
use crate::error::Result;
use crate::projection::{CardView, DetailView};

/// Resolves one page of the list endpoint.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, offset: u32, limit: u32) -> Result<Vec<ItemSummary>>;
}

/// Resolves one name or numeric id to its detail record. Single attempt.
#[async_trait]
pub trait DetailFetcher: Send + Sync {
    async fn fetch_detail(&self, key: &str) -> Result<ItemDetail>;
}

/// Presentation capabilities the gallery drives.
///
/// Implementations receive plain projected data and decide how to paint it.
/// Methods take `&self`; renderers keep their own interior state.
pub trait Renderer: Send + Sync {
    fn append_card(&self, card: &CardView);
    fn clear_cards(&self);
    fn show_loading(&self, visible: bool);
    fn show_error(&self, visible: bool, message: Option<&str>);
    fn show_detail_modal(&self, detail: &DetailView);
    fn hide_detail_modal(&self);
    fn hide_load_more(&self);

    /// Synchronous user-facing notice, e.g. an empty search box.
    fn prompt(&self, message: &str);
}
