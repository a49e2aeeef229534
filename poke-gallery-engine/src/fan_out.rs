use futures::future::{try_join_all, FutureExt};
use futures::stream::{self, StreamExt, TryStreamExt};
use poke_gallery_core::{DetailFetcher, ItemDetail, ItemSummary, Result};
use std::sync::Arc;
use tracing::debug;

/// Resolves a page of summaries into detail records.
///
/// All fetches for a page run interleaved on the calling task. The output
/// is positional (`out[i]` belongs to `summaries[i]`) whatever order the
/// responses arrive in, and the first failure to arrive fails the whole
/// page, with or without a concurrency cap.
#[derive(Clone)]
pub struct FanOutResolver {
    details: Arc<dyn DetailFetcher>,
    max_concurrency: Option<usize>,
}

impl FanOutResolver {
    pub fn new(details: Arc<dyn DetailFetcher>) -> Self {
        Self {
            details,
            max_concurrency: None,
        }
    }

    /// Keep at most `limit` detail requests in flight. Zero is treated as one.
    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = Some(limit.max(1));
        self
    }

    pub fn max_concurrency(&self) -> Option<usize> {
        self.max_concurrency
    }

    pub async fn resolve_all(&self, summaries: &[ItemSummary]) -> Result<Vec<ItemDetail>> {
        if summaries.is_empty() {
            return Ok(vec![]);
        }

        debug!(
            count = summaries.len(),
            max_concurrency = ?self.max_concurrency,
            "Resolving page details"
        );

        let fetches = summaries
            .iter()
            .map(|summary| self.details.fetch_detail(&summary.name));

        let Some(limit) = self.max_concurrency else {
            return try_join_all(fetches).await;
        };

        let mut indexed: Vec<(usize, ItemDetail)> = stream::iter(
            fetches
                .enumerate()
                .map(|(index, fetch)| fetch.map(move |result| result.map(|item| (index, item)))),
        )
        .buffer_unordered(limit)
        .try_collect()
        .await?;

        indexed.sort_unstable_by_key(|(index, _)| *index);
        Ok(indexed.into_iter().map(|(_, item)| item).collect())
    }
}

impl std::fmt::Debug for FanOutResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanOutResolver")
            .field("max_concurrency", &self.max_concurrency)
            .finish()
    }
}
