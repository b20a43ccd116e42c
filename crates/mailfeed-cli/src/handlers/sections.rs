use super::HandlerContext;
use crate::presentation::text::format_sections;
use anyhow::Result;
use mailfeed_runtime::FeedApi;

pub async fn handle(ctx: &HandlerContext) -> Result<()> {
    let api = ctx.api()?;
    let sections = api.list_sections(&ctx.config.tab).await?;
    ctx.emit(&sections, |color| format_sections(&sections, color))
}
