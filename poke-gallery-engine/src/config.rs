use poke_gallery_core::{CoreError, Result, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryConfig {
    pub page_size: u32,
    /// Cap on simultaneous detail requests per page. `None` fans out fully.
    #[serde(default)]
    pub max_concurrency: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_concurrency: None,
        }
    }
}

impl GalleryConfig {
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = Some(max_concurrency);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(CoreError::Validation(
                "Page size must be greater than zero".to_string(),
            ));
        }
        if self.max_concurrency == Some(0) {
            return Err(CoreError::Validation(
                "Max concurrency must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
