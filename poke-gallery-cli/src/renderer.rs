//! Terminal implementation of the gallery display surface

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use poke_gallery_core::{CardView, DetailView, Renderer};
use poke_gallery_engine::LOADING_MESSAGE;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::output::{card_line, OutputFormat, OutputWriter};

/// Prints gallery updates as the controller drives them.
///
/// In interactive mode cards are echoed as they arrive and banners go to
/// stderr. One-shot commands collect the cards and print them once the
/// command settles; their failures surface through the command result.
pub struct TerminalRenderer {
    output: OutputWriter,
    interactive: bool,
    cards: Mutex<Vec<CardView>>,
    spinner: Mutex<Option<ProgressBar>>,
    error_visible: AtomicBool,
    detail_open: AtomicBool,
    load_more_visible: AtomicBool,
}

impl TerminalRenderer {
    pub fn new(format: OutputFormat, interactive: bool) -> Self {
        Self {
            output: OutputWriter::new(format, false),
            interactive,
            cards: Mutex::new(Vec::new()),
            spinner: Mutex::new(None),
            error_visible: AtomicBool::new(false),
            detail_open: AtomicBool::new(false),
            load_more_visible: AtomicBool::new(true),
        }
    }

    /// Cards currently in the gallery, in display order
    pub fn cards(&self) -> Vec<CardView> {
        self.cards.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail_open.load(Ordering::SeqCst)
    }

    pub fn is_error_visible(&self) -> bool {
        self.error_visible.load(Ordering::SeqCst)
    }

    pub fn is_load_more_visible(&self) -> bool {
        self.load_more_visible.load(Ordering::SeqCst)
    }

    fn start_spinner(&self) -> Option<ProgressBar> {
        if self.output.format() != OutputFormat::Table {
            return None;
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(LOADING_MESSAGE);
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }
}

impl Renderer for TerminalRenderer {
    fn append_card(&self, card: &CardView) {
        if let Ok(mut cards) = self.cards.lock() {
            cards.push(card.clone());
        }
        if self.interactive {
            println!("{}", card_line(card));
        }
    }

    fn clear_cards(&self) {
        if let Ok(mut cards) = self.cards.lock() {
            cards.clear();
        }
        if self.interactive {
            println!("{}", "─".repeat(40).dimmed());
        }
    }

    fn show_loading(&self, visible: bool) {
        let Ok(mut spinner) = self.spinner.lock() else {
            return;
        };
        if visible {
            if spinner.is_none() {
                *spinner = self.start_spinner();
            }
        } else if let Some(pb) = spinner.take() {
            pb.finish_and_clear();
        }
    }

    fn show_error(&self, visible: bool, message: Option<&str>) {
        self.error_visible.store(visible, Ordering::SeqCst);
        if visible && self.interactive {
            if let Some(message) = message {
                self.output.error(message);
            }
        }
    }

    fn show_detail_modal(&self, detail: &DetailView) {
        self.detail_open.store(true, Ordering::SeqCst);
        if let Err(e) = self.output.write_detail(detail) {
            tracing::warn!(error = %e, "Failed to print detail view");
        }
    }

    fn hide_detail_modal(&self) {
        if self.detail_open.swap(false, Ordering::SeqCst) && self.interactive {
            println!("{}", "Detail closed.".dimmed());
        }
    }

    fn hide_load_more(&self) {
        if self.load_more_visible.swap(false, Ordering::SeqCst) && self.interactive {
            println!(
                "{}",
                "Showing a search result; `more` is unavailable for this session.".dimmed()
            );
        }
    }

    fn prompt(&self, message: &str) {
        if self.interactive {
            self.output.info(message);
        }
    }
}
