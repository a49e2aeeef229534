use serde::{Deserialize, Serialize};

use super::item::ItemDetail;

// ===== View Mode =====

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "mode", content = "message", rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Idle,
    Loading,
    Error(String),
}

impl ViewMode {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewMode::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewMode::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewMode::Error(message) => Some(message),
            _ => None,
        }
    }
}

// ===== Gallery View State =====

/// What the gallery currently shows.
///
/// `items` grows by whole pages while browsing and is replaced by a single
/// entry when a search succeeds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GalleryViewState {
    pub mode: ViewMode,
    pub items: Vec<ItemDetail>,
    pub search_active: bool,
}

impl GalleryViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch(&mut self) {
        self.mode = ViewMode::Loading;
    }

    pub fn append_page(&mut self, page: Vec<ItemDetail>) {
        self.items.extend(page);
        self.mode = ViewMode::Idle;
    }

    pub fn replace_with_match(&mut self, item: ItemDetail) {
        self.items = vec![item];
        self.search_active = true;
        self.mode = ViewMode::Idle;
    }

    /// Leave Loading without touching items when a fetch is abandoned.
    pub fn cancel_fetch(&mut self) {
        if self.mode.is_loading() {
            self.mode = ViewMode::Idle;
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.mode = ViewMode::Error(message.into());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a rendered item by 1-based position or by exact name.
    pub fn find(&self, key: &str) -> Option<&ItemDetail> {
        let key = key.trim();
        if let Ok(position) = key.parse::<usize>() {
            return position
                .checked_sub(1)
                .and_then(|index| self.items.get(index));
        }
        let key = key.to_lowercase();
        self.items.iter().find(|item| item.name == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str) -> ItemDetail {
        ItemDetail::new(id, name)
    }

    #[test]
    fn test_append_page_returns_to_idle() {
        let mut state = GalleryViewState::new();
        state.begin_fetch();
        assert!(state.mode.is_loading());

        state.append_page(vec![item(1, "bulbasaur"), item(2, "ivysaur")]);
        assert_eq!(state.mode, ViewMode::Idle);
        assert_eq!(state.len(), 2);
        assert!(!state.search_active);
    }

    #[test]
    fn test_replace_with_match() {
        let mut state = GalleryViewState::new();
        state.append_page(vec![item(1, "bulbasaur"), item(2, "ivysaur")]);

        state.begin_fetch();
        state.replace_with_match(item(132, "ditto"));
        assert_eq!(state.len(), 1);
        assert_eq!(state.items[0].name, "ditto");
        assert!(state.search_active);
    }

    #[test]
    fn test_cancel_fetch_only_leaves_loading() {
        let mut state = GalleryViewState::new();
        state.append_page(vec![item(1, "bulbasaur")]);

        state.begin_fetch();
        state.cancel_fetch();
        assert_eq!(state.mode, ViewMode::Idle);
        assert_eq!(state.len(), 1);

        state.fail("boom");
        state.cancel_fetch();
        assert_eq!(state.mode.error_message(), Some("boom"));
    }

    #[test]
    fn test_fail_keeps_items() {
        let mut state = GalleryViewState::new();
        state.append_page(vec![item(1, "bulbasaur")]);

        state.begin_fetch();
        state.fail("boom");
        assert_eq!(state.mode.error_message(), Some("boom"));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_find_by_position_and_name() {
        let mut state = GalleryViewState::new();
        state.append_page(vec![item(1, "bulbasaur"), item(4, "charmander")]);

        assert_eq!(state.find("2").map(|i| i.id), Some(4));
        assert_eq!(state.find("Bulbasaur").map(|i| i.id), Some(1));
        assert!(state.find("0").is_none());
        assert!(state.find("3").is_none());
        assert!(state.find("pikachu").is_none());
    }

    #[test]
    fn test_view_mode_serialization() {
        let json = serde_json::to_value(ViewMode::Error("oops".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({"mode": "error", "message": "oops"}));

        let json = serde_json::to_value(ViewMode::Idle).unwrap();
        assert_eq!(json, serde_json::json!({"mode": "idle"}));
    }
}
