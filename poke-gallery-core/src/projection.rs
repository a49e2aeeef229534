//! Renderer-facing projections of detail records
//!
//! The gallery never hands raw catalog data to a renderer. Cards and the
//! expanded stats view are computed here so every renderer shows the same
//! numbers, units and ordering.

use serde::Serialize;

use crate::domain::ItemDetail;

/// Stat values at or above this baseline fill the whole bar.
pub const STAT_SCALE_MAX: u32 = 150;

/// Identifier as shown on cards, zero-padded to three digits.
pub fn format_number(id: u32) -> String {
    format!("{:03}", id)
}

/// Primary artwork first, then the fallback sprite, else nothing.
pub fn select_image(item: &ItemDetail) -> Option<&str> {
    item.image_primary
        .as_deref()
        .or(item.image_fallback.as_deref())
}

/// Bar width in percent, clipped at [`STAT_SCALE_MAX`].
pub fn stat_bar_width(base_value: u32) -> f64 {
    f64::from(base_value.min(STAT_SCALE_MAX)) / f64::from(STAT_SCALE_MAX) * 100.0
}

pub fn deci_to_unit(value: u32) -> f64 {
    f64::from(value) / 10.0
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TypeBadge {
    pub label: String,
    pub class: String,
}

impl TypeBadge {
    pub fn new(type_name: &str) -> Self {
        Self {
            label: type_name.to_string(),
            class: format!("type-{}", type_name),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CardView {
    pub id: u32,
    pub number: String,
    pub name: String,
    pub image: Option<String>,
    pub badges: Vec<TypeBadge>,
}

impl From<&ItemDetail> for CardView {
    fn from(item: &ItemDetail) -> Self {
        Self {
            id: item.id,
            number: format_number(item.id),
            name: item.name.clone(),
            image: select_image(item).map(str::to_string),
            badges: badges(item),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatBar {
    pub name: String,
    pub value: u32,
    pub width_pct: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetailView {
    pub id: u32,
    pub number: String,
    pub name: String,
    pub image: Option<String>,
    pub weight_kg: f64,
    pub height_m: f64,
    pub badges: Vec<TypeBadge>,
    pub stats: Vec<StatBar>,
}

impl DetailView {
    /// `#025 · Weight: 6 kg · Height: 0.4 m`
    pub fn subtitle(&self) -> String {
        format!(
            "#{} · Weight: {} kg · Height: {} m",
            self.number, self.weight_kg, self.height_m
        )
    }
}

impl From<&ItemDetail> for DetailView {
    fn from(item: &ItemDetail) -> Self {
        Self {
            id: item.id,
            number: format_number(item.id),
            name: item.name.clone(),
            image: select_image(item).map(str::to_string),
            weight_kg: deci_to_unit(item.weight_deci),
            height_m: deci_to_unit(item.height_deci),
            badges: badges(item),
            stats: item
                .stats
                .iter()
                .map(|stat| StatBar {
                    name: stat.name.clone(),
                    value: stat.base_value,
                    width_pct: stat_bar_width(stat.base_value),
                })
                .collect(),
        }
    }
}

fn badges(item: &ItemDetail) -> Vec<TypeBadge> {
    item.types.iter().map(|t| TypeBadge::new(&t.name)).collect()
}
