//! Single-entry lookups

use anyhow::{Context as _, Result};
use poke_gallery_engine::Outcome;

use super::settle;
use crate::context::Context;

/// Print the card of one entry
pub async fn search(ctx: &Context, query: &str) -> Result<()> {
    let (controller, renderer) = ctx.create_gallery(false)?;
    settle(controller.search(query).await)?;

    ctx.output.write_cards(&renderer.cards())?;
    Ok(())
}

/// Print the expanded stats view of one entry
pub async fn show(ctx: &Context, query: &str) -> Result<()> {
    let (controller, _renderer) = ctx.create_gallery(false)?;
    let name = match settle(controller.search(query).await)? {
        Outcome::SearchMatched { name, .. } => name,
        other => anyhow::bail!("Unexpected outcome: {:?}", other),
    };

    controller
        .open_rendered(&name)
        .await
        .with_context(|| format!("\"{}\" is not in the gallery", name))?;
    Ok(())
}
