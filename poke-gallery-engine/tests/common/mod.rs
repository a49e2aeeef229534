// Shared fakes for engine tests

#![allow(dead_code)]

use async_trait::async_trait;
use poke_gallery_core::*;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

// ===== Catalog Fake =====

/// In-memory catalog serving both endpoints.
#[derive(Default)]
pub struct FakeCatalog {
    names: Vec<String>,
    details: HashMap<String, ItemDetail>,
    missing: HashSet<String>,
    delays: HashMap<String, Duration>,
    page_status: Mutex<Option<u16>>,
    page_gate: Option<Arc<Notify>>,
    pub page_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    completions: Mutex<Vec<String>>,
}

impl FakeCatalog {
    /// Catalog of `count` entries named `mon-1`, `mon-2`, ...
    pub fn with_entries(count: u32) -> Self {
        let mut catalog = Self::default();
        for id in 1..=count {
            catalog.insert(sample(id, &format!("mon-{}", id)));
        }
        catalog
    }

    pub fn insert(&mut self, item: ItemDetail) {
        self.names.push(item.name.clone());
        self.details.insert(item.name.clone(), item);
    }

    /// Listed, but its detail lookup fails.
    pub fn break_detail(mut self, name: &str) -> Self {
        self.missing.insert(name.to_string());
        self
    }

    pub fn delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_string(), delay);
        self
    }

    /// Every page request waits for `gate` to be notified.
    pub fn gate_pages(mut self, gate: Arc<Notify>) -> Self {
        self.page_gate = Some(gate);
        self
    }

    pub fn fail_pages_with(&self, status: Option<u16>) {
        *self.page_status.lock().unwrap() = status;
    }

    pub fn completion_order(&self) -> Vec<String> {
        self.completions.lock().unwrap().clone()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[async_trait]
impl PageFetcher for FakeCatalog {
    async fn fetch_page(&self, offset: u32, limit: u32) -> Result<Vec<ItemSummary>> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.page_gate {
            gate.notified().await;
        }
        if let Some(status) = *self.page_status.lock().unwrap() {
            return Err(CoreError::Remote { status });
        }
        Ok(self
            .names
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|name| ItemSummary::new(name.clone()))
            .collect())
    }
}

#[async_trait]
impl DetailFetcher for FakeCatalog {
    async fn fetch_detail(&self, key: &str) -> Result<ItemDetail> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
        self.completions.lock().unwrap().push(key.to_string());
        if self.missing.contains(key) {
            return Err(CoreError::NotFound {
                key: key.to_string(),
            });
        }
        self.details
            .get(key)
            .cloned()
            .ok_or_else(|| CoreError::NotFound {
                key: key.to_string(),
            })
    }
}

pub fn sample(id: u32, name: &str) -> ItemDetail {
    ItemDetail::new(id, name)
        .with_measurements(id * 10, id)
        .with_type("normal")
        .with_stat("hp", id)
        .with_images(Some(format!("https://img/art/{}.png", id)), None)
}

// ===== Recording Renderer =====

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    AppendCard(String),
    ClearCards,
    ShowLoading(bool),
    ShowError(bool, Option<String>),
    ShowDetail(String),
    HideDetail,
    HideLoadMore,
    Prompt(String),
}

/// Records every instruction and checks that the loading and error banners
/// are never visible together.
#[derive(Default)]
pub struct RecordingRenderer {
    events: Mutex<Vec<RenderEvent>>,
    cards: Mutex<Vec<String>>,
    loading: Mutex<bool>,
    error: Mutex<bool>,
    overlap: Mutex<bool>,
}

impl RecordingRenderer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn cards(&self) -> Vec<String> {
        self.cards.lock().unwrap().clone()
    }

    pub fn loading_visible(&self) -> bool {
        *self.loading.lock().unwrap()
    }

    pub fn error_visible(&self) -> bool {
        *self.error.lock().unwrap()
    }

    pub fn banners_ever_overlapped(&self) -> bool {
        *self.overlap.lock().unwrap()
    }

    fn record(&self, event: RenderEvent) {
        self.events.lock().unwrap().push(event);
        if self.loading_visible() && self.error_visible() {
            *self.overlap.lock().unwrap() = true;
        }
    }
}

impl Renderer for RecordingRenderer {
    fn append_card(&self, card: &CardView) {
        self.cards.lock().unwrap().push(card.name.clone());
        self.record(RenderEvent::AppendCard(card.name.clone()));
    }

    fn clear_cards(&self) {
        self.cards.lock().unwrap().clear();
        self.record(RenderEvent::ClearCards);
    }

    fn show_loading(&self, visible: bool) {
        *self.loading.lock().unwrap() = visible;
        self.record(RenderEvent::ShowLoading(visible));
    }

    fn show_error(&self, visible: bool, message: Option<&str>) {
        *self.error.lock().unwrap() = visible;
        self.record(RenderEvent::ShowError(visible, message.map(str::to_string)));
    }

    fn show_detail_modal(&self, detail: &DetailView) {
        self.record(RenderEvent::ShowDetail(detail.name.clone()));
    }

    fn hide_detail_modal(&self) {
        self.record(RenderEvent::HideDetail);
    }

    fn hide_load_more(&self) {
        self.record(RenderEvent::HideLoadMore);
    }

    fn prompt(&self, message: &str) {
        self.record(RenderEvent::Prompt(message.to_string()));
    }
}
