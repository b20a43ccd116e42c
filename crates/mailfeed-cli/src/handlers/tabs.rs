use super::HandlerContext;
use crate::presentation::text::format_tabs;
use anyhow::Result;
use mailfeed_runtime::FeedApi;

pub async fn handle(ctx: &HandlerContext) -> Result<()> {
    let api = ctx.api()?;
    let tabs = api.list_tabs().await?;
    ctx.emit(&tabs, |color| format_tabs(&tabs, &ctx.config.tab, color))
}
