//! Output formatting for CLI

use anyhow::Result;
use clap::ValueEnum;
use colored::{Color, Colorize};
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Table};
use poke_gallery_core::{CardView, DetailView, TypeBadge};
use serde::Serialize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
    /// Compact format (single line per item)
    Compact,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Compact => write!(f, "compact"),
        }
    }
}

/// Output writer that handles different formats
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write the gallery cards
    pub fn write_cards(&self, cards: &[CardView]) -> Result<()> {
        match self.format {
            OutputFormat::Table => {
                if cards.is_empty() {
                    println!("{}", "No pokémon found.".dimmed());
                    return Ok(());
                }

                let mut table = Table::new();
                table.load_preset(UTF8_FULL);
                table.apply_modifier(UTF8_ROUND_CORNERS);
                table.set_header(
                    ["#", "Name", "Types", "Image"]
                        .iter()
                        .map(|h| Cell::new(h).fg(comfy_table::Color::Cyan)),
                );

                for card in cards {
                    table.add_row(vec![
                        Cell::new(&card.number),
                        Cell::new(&card.name),
                        Cell::new(badge_labels(&card.badges)),
                        Cell::new(card.image.as_deref().unwrap_or("-")),
                    ]);
                }

                println!("{table}");
                println!(
                    "\n{} {} pokémon",
                    "Total:".bold(),
                    cards.len().to_string().green()
                );
            }
            OutputFormat::Json => print_json(&cards)?,
            OutputFormat::Compact => {
                for card in cards {
                    println!("{}", card_line(card));
                }
            }
        }
        Ok(())
    }

    /// Write the expanded stats view
    pub fn write_detail(&self, detail: &DetailView) -> Result<()> {
        match self.format {
            OutputFormat::Json => print_json(detail)?,
            OutputFormat::Compact => {
                let stats: Vec<String> = detail
                    .stats
                    .iter()
                    .map(|s| format!("{}={}", s.name, s.value))
                    .collect();
                println!("{}\t{}", detail_heading(detail), stats.join(" "));
            }
            OutputFormat::Table => print_detail(detail),
        }
        Ok(())
    }

    /// Write a success message
    pub fn success(&self, message: &str) {
        if self.format == OutputFormat::Table {
            println!("{} {}", "✓".green(), message);
        }
    }

    /// Write an error message
    pub fn error(&self, message: &str) {
        if self.format == OutputFormat::Table {
            eprintln!("{} {}", "✗".red(), message);
        } else {
            eprintln!("Error: {}", message);
        }
    }

    /// Write an info message
    pub fn info(&self, message: &str) {
        if self.format == OutputFormat::Table {
            println!("{} {}", "ℹ".blue(), message);
        } else {
            eprintln!("{}", message);
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One-line card: `#007 squirtle water`
pub fn card_line(card: &CardView) -> String {
    let badges: Vec<String> = card.badges.iter().map(paint_badge).collect();
    format!(
        "{} {} {}",
        format!("#{}", card.number).dimmed(),
        card.name.bold(),
        badges.join(" ")
    )
}

pub fn detail_heading(detail: &DetailView) -> String {
    format!("{} {}", detail.name.bold(), detail.subtitle().dimmed())
}

/// Full stats view with one bar per stat
pub fn print_detail(detail: &DetailView) {
    print_section(&detail.name);
    print_field("Image", detail.image.as_deref().unwrap_or("-"));
    println!("  {}", detail.subtitle());
    let badges: Vec<String> = detail.badges.iter().map(paint_badge).collect();
    println!("  {}", badges.join(" "));

    print_section("Base stats");
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    for stat in &detail.stats {
        table.add_row(vec![
            Cell::new(&stat.name),
            Cell::new(stat_bar(stat.width_pct)),
            Cell::new(stat.value),
        ]);
    }
    println!("{table}");
}

const BAR_CELLS: usize = 20;

/// Fixed-width bar; `width_pct` is already clipped to 0..=100.
pub fn stat_bar(width_pct: f64) -> String {
    let filled = ((width_pct / 100.0) * BAR_CELLS as f64).round() as usize;
    let filled = filled.min(BAR_CELLS);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

fn badge_labels(badges: &[TypeBadge]) -> String {
    badges
        .iter()
        .map(|b| b.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn paint_badge(badge: &TypeBadge) -> String {
    format!("[{}]", badge.label)
        .color(badge_color(&badge.class))
        .bold()
        .to_string()
}

/// Terminal color for a `type-<name>` badge class
pub fn badge_color(class: &str) -> Color {
    match class.trim_start_matches("type-") {
        "fire" => Color::Red,
        "water" | "ice" => Color::Blue,
        "grass" | "bug" => Color::Green,
        "electric" => Color::Yellow,
        "psychic" | "fairy" => Color::Magenta,
        "poison" | "ghost" | "dragon" => Color::BrightMagenta,
        "ground" | "rock" | "fighting" => Color::BrightYellow,
        "flying" => Color::Cyan,
        "steel" => Color::BrightWhite,
        "dark" => Color::BrightBlack,
        _ => Color::White,
    }
}

/// Print a key-value pair in detail format
pub fn print_field(key: &str, value: &str) {
    println!("  {}: {}", key.cyan(), value);
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", title.bold().underline());
}
