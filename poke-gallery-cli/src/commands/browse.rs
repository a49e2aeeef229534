//! Interactive gallery

use anyhow::Result;

use crate::context::Context;
use crate::session::Session;

pub async fn execute(ctx: &Context) -> Result<()> {
    let (controller, renderer) = ctx.create_gallery(true)?;
    tracing::info!(api_url = ctx.api_url(), page_size = ctx.page_size(), "Starting browse session");

    Session::new(&controller, &renderer, &ctx.output).run().await
}
