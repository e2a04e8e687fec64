use serde_json::{Value as JsonValue, json};

use crate::context::AppContext;

pub async fn run(sql: &str, ctx: &AppContext) -> anyhow::Result<JsonValue> {
    ctx.store.gateway().await.execute_batch(sql).await?;
    Ok(json!({ "ok": true }))
}
