//! Gallery listing

use anyhow::{bail, Result};
use poke_gallery_engine::Outcome;

use super::settle;
use crate::context::Context;

/// Load `pages` pages and print every card
pub async fn execute(ctx: &Context, pages: u32) -> Result<()> {
    if pages == 0 {
        bail!("--pages must be at least 1");
    }

    let (controller, renderer) = ctx.create_gallery(false)?;
    for _ in 0..pages {
        if let Outcome::PageLoaded { count: 0, offset } = settle(controller.load_next_page().await)? {
            tracing::debug!(offset, "Reached the end of the catalog");
            break;
        }
    }

    let cards = renderer.cards();
    ctx.output.write_cards(&cards)?;
    Ok(())
}
