use poke_gallery_core::{
    CardView, CoreError, DetailFetcher, DetailView, GalleryViewState, ItemDetail, PageFetcher,
    PaginationCursor, Renderer, Result,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::config::GalleryConfig;
use crate::fan_out::FanOutResolver;

pub const LOAD_FAILED_MESSAGE: &str = "Could not load. Check your connection.";
pub const LOADING_MESSAGE: &str = "Loading pokémon...";
pub const EMPTY_SEARCH_PROMPT: &str = "Type a pokémon name to search";

pub fn no_match_message(query: &str) -> String {
    format!("No match for \"{}\"", query)
}

/// Trimmed, lower-cased search key. Empty means "nothing to search".
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

// ===== Outcomes =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A page load or search is already in flight.
    Busy,
    /// A search result is on screen; paging is suspended.
    SearchActive,
    EmptyQuery,
}

/// How a user operation settled. Fetch failures are reported here, never
/// as an `Err`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    PageLoaded { count: usize, offset: u32 },
    SearchMatched { id: u32, name: String },
    Failed { error: CoreError, message: String },
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Outcome::PageLoaded { .. } | Outcome::SearchMatched { .. }
        )
    }
}

// ===== State =====

#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    pub cursor: PaginationCursor,
    pub view: GalleryViewState,
}

// ===== Controller =====

/// Drives page loads, searches and the detail view against a [`Renderer`].
///
/// The controller is the only writer of [`GalleryState`] and the only place
/// fetch errors are caught. The state lock is never held across a fetch, so
/// read-only operations such as [`GalleryController::open_detail`] stay
/// available while a load is in flight.
///
/// Dropping a page load or search before it settles (a timeout, `select!`)
/// hides the loading banner and frees the controller for the next call.
pub struct GalleryController {
    pages: Arc<dyn PageFetcher>,
    details: Arc<dyn DetailFetcher>,
    resolver: FanOutResolver,
    renderer: Arc<dyn Renderer>,
    state: RwLock<GalleryState>,
    in_flight: AtomicBool,
}

impl GalleryController {
    pub fn new(
        config: GalleryConfig,
        pages: Arc<dyn PageFetcher>,
        details: Arc<dyn DetailFetcher>,
        renderer: Arc<dyn Renderer>,
    ) -> Result<Self> {
        config.validate()?;

        let mut resolver = FanOutResolver::new(Arc::clone(&details));
        if let Some(limit) = config.max_concurrency {
            resolver = resolver.with_max_concurrency(limit);
        }

        Ok(Self {
            pages,
            details,
            resolver,
            renderer,
            state: RwLock::new(GalleryState {
                cursor: PaginationCursor::new(config.page_size)?,
                view: GalleryViewState::new(),
            }),
            in_flight: AtomicBool::new(false),
        })
    }

    /// Build a controller over a single source serving both endpoints.
    pub fn from_source<S>(
        config: GalleryConfig,
        source: Arc<S>,
        renderer: Arc<dyn Renderer>,
    ) -> Result<Self>
    where
        S: PageFetcher + DetailFetcher + 'static,
    {
        let pages: Arc<dyn PageFetcher> = source.clone();
        let details: Arc<dyn DetailFetcher> = source;
        Self::new(config, pages, details, renderer)
    }

    pub async fn snapshot(&self) -> GalleryViewState {
        self.state.read().await.view.clone()
    }

    pub async fn cursor(&self) -> PaginationCursor {
        self.state.read().await.cursor
    }

    /// Fetch the page at the cursor, resolve every entry and append the
    /// cards. The cursor only moves when the whole page resolved.
    pub async fn load_next_page(&self) -> Outcome {
        let (mut fetch, offset, limit) = {
            let mut state = self.state.write().await;
            if state.view.search_active {
                warn!("Page load rejected while a search result is shown");
                return Outcome::Rejected(Rejection::SearchActive);
            }
            let Some(fetch) = self.begin() else {
                warn!(rejection = ?Rejection::Busy, "Page load rejected");
                return Outcome::Rejected(Rejection::Busy);
            };
            state.view.begin_fetch();
            (fetch, state.cursor.offset(), state.cursor.page_size())
        };

        debug!(offset, limit, "Loading page");
        fetch.show_banner();

        let result = self.fetch_page(offset, limit).await;

        fetch.hide_banner();

        match result {
            Ok(items) => {
                let count = items.len();
                let cards: Vec<CardView> = items.iter().map(CardView::from).collect();
                let offset = {
                    let mut state = self.state.write().await;
                    state.view.append_page(items);
                    state.cursor.advance();
                    state.cursor.offset()
                };
                fetch.settle();

                for card in &cards {
                    self.renderer.append_card(card);
                }
                self.renderer.show_error(false, None);

                info!(count, offset, "Page loaded");
                Outcome::PageLoaded { count, offset }
            }
            Err(e) => {
                error!(error = %e, offset, "Failed to load page");
                let outcome = self.fail(e, LOAD_FAILED_MESSAGE.to_string()).await;
                fetch.settle();
                outcome
            }
        }
    }

    /// Look up one entry by name or id and show it alone.
    ///
    /// On failure the cards already on screen are left as they were.
    pub async fn search(&self, query: &str) -> Outcome {
        let query = normalize_query(query);
        if query.is_empty() {
            self.renderer.prompt(EMPTY_SEARCH_PROMPT);
            return Outcome::Rejected(Rejection::EmptyQuery);
        }

        let mut fetch = {
            let mut state = self.state.write().await;
            let Some(fetch) = self.begin() else {
                warn!(rejection = ?Rejection::Busy, query = %query, "Search rejected");
                return Outcome::Rejected(Rejection::Busy);
            };
            state.view.begin_fetch();
            fetch
        };

        debug!(query = %query, "Searching");
        fetch.show_banner();

        let result = self.details.fetch_detail(&query).await;

        fetch.hide_banner();

        match result {
            Ok(item) => {
                let card = CardView::from(&item);
                let (id, name) = (item.id, item.name.clone());
                self.state.write().await.view.replace_with_match(item);
                fetch.settle();

                self.renderer.clear_cards();
                self.renderer.append_card(&card);
                self.renderer.hide_load_more();

                info!(id, name = %name, "Search matched");
                Outcome::SearchMatched { id, name }
            }
            Err(e) => {
                error!(error = %e, query = %query, "Search failed");
                let outcome = self.fail(e, no_match_message(&query)).await;
                fetch.settle();
                outcome
            }
        }
    }

    /// Show the expanded stats view for an already resolved record.
    pub fn open_detail(&self, item: &ItemDetail) -> DetailView {
        let view = DetailView::from(item);
        self.renderer.show_detail_modal(&view);
        view
    }

    /// Open the detail view of a card on screen, by 1-based position or name.
    pub async fn open_rendered(&self, key: &str) -> Option<DetailView> {
        let item = self.state.read().await.view.find(key).cloned();
        item.map(|item| self.open_detail(&item))
    }

    pub fn close_detail(&self) {
        self.renderer.hide_detail_modal();
    }

    async fn fetch_page(&self, offset: u32, limit: u32) -> Result<Vec<ItemDetail>> {
        let summaries = self.pages.fetch_page(offset, limit).await?;
        self.resolver.resolve_all(&summaries).await
    }

    async fn fail(&self, error: CoreError, message: String) -> Outcome {
        self.state.write().await.view.fail(message.clone());
        self.renderer.show_error(true, Some(&message));
        Outcome::Failed { error, message }
    }

    /// Claim the single fetch slot, or `None` while another fetch holds it.
    fn begin(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| InFlight {
                controller: self,
                banner: false,
                settled: false,
            })
    }
}

/// Holds the fetch slot for one page load or search and releases it on drop,
/// whether the operation settled or its future was dropped mid-flight.
struct InFlight<'a> {
    controller: &'a GalleryController,
    banner: bool,
    settled: bool,
}

impl InFlight<'_> {
    fn show_banner(&mut self) {
        self.controller.renderer.show_error(false, None);
        self.controller.renderer.show_loading(true);
        self.banner = true;
    }

    fn hide_banner(&mut self) {
        if std::mem::take(&mut self.banner) {
            self.controller.renderer.show_loading(false);
        }
    }

    /// The view has left Loading; nothing to undo on drop.
    fn settle(&mut self) {
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.hide_banner();
        if !self.settled {
            debug!("Fetch dropped before it settled");
            match self.controller.state.try_write() {
                Ok(mut state) => state.view.cancel_fetch(),
                Err(_) => warn!("State busy while releasing a dropped fetch; view mode left as is"),
            }
        }
        self.controller.in_flight.store(false, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for GalleryController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryController")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Pikachu "), "pikachu");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn test_no_match_message() {
        assert_eq!(no_match_message("ditto"), "No match for \"ditto\"");
    }

    #[test]
    fn test_outcome_success() {
        assert!(Outcome::PageLoaded { count: 20, offset: 20 }.is_success());
        assert!(!Outcome::Rejected(Rejection::Busy).is_success());
    }
}
