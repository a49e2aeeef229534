use serde::{Deserialize, Serialize};

// ===== List Endpoint =====

/// Minimal reference returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ItemSummary {
    pub name: String,
}

impl ItemSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ===== Detail Endpoint =====

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct StatEntry {
    pub name: String,
    pub base_value: u32,
}

/// Full attribute set for one catalog item.
///
/// Weight and height keep the catalog's decikilogram/decimeter units;
/// conversion happens in the projection layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemDetail {
    pub id: u32,
    pub name: String,
    pub weight_deci: u32,
    pub height_deci: u32,
    pub types: Vec<TypeRef>,
    pub stats: Vec<StatEntry>,
    pub image_primary: Option<String>,
    pub image_fallback: Option<String>,
}

impl ItemDetail {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            weight_deci: 0,
            height_deci: 0,
            types: vec![],
            stats: vec![],
            image_primary: None,
            image_fallback: None,
        }
    }

    pub fn with_measurements(mut self, weight_deci: u32, height_deci: u32) -> Self {
        self.weight_deci = weight_deci;
        self.height_deci = height_deci;
        self
    }

    pub fn with_type(mut self, name: impl Into<String>) -> Self {
        self.types.push(TypeRef { name: name.into() });
        self
    }

    pub fn with_stat(mut self, name: impl Into<String>, base_value: u32) -> Self {
        self.stats.push(StatEntry {
            name: name.into(),
            base_value,
        });
        self
    }

    pub fn with_images(mut self, primary: Option<String>, fallback: Option<String>) -> Self {
        self.image_primary = primary;
        self.image_fallback = fallback;
        self
    }

    pub fn summary(&self) -> ItemSummary {
        ItemSummary::new(self.name.clone())
    }
}
