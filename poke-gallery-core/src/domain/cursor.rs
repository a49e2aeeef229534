use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Pagination progress over the list endpoint.
///
/// The offset only ever moves forward, by exactly one page, and only
/// through [`PaginationCursor::advance`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationCursor {
    offset: u32,
    page_size: u32,
}

impl PaginationCursor {
    pub fn new(page_size: u32) -> Result<Self> {
        if page_size == 0 {
            return Err(CoreError::Validation(
                "Page size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            offset: 0,
            page_size,
        })
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of pages consumed so far.
    pub fn pages_loaded(&self) -> u32 {
        self.offset / self.page_size
    }

    pub fn advance(&mut self) {
        self.offset = self.offset.saturating_add(self.page_size);
    }
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self {
            offset: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
