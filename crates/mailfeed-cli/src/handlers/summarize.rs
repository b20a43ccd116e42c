use super::HandlerContext;
use anyhow::Result;
use mailfeed_runtime::FeedApi;
use mailfeed_types::MessageId;
use serde_json::json;

pub async fn handle(ctx: &HandlerContext, id: &str) -> Result<()> {
    let api = ctx.api()?;
    let id = MessageId::new(id);
    api.enqueue_summary(&id).await?;

    ctx.emit(&json!({ "queued": id }), |_| {
        vec![format!("Summary requested for {}", id)]
    })
}
