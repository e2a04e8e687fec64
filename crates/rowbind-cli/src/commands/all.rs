use serde_json::Value as JsonValue;

use crate::context::AppContext;

pub async fn run(model: &str, ctx: &AppContext) -> anyhow::Result<JsonValue> {
    let entities = ctx.store.all(&ctx.model(model)).await?;
    Ok(serde_json::to_value(&entities)?)
}
