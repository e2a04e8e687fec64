use rowbind_core::Value;
use serde_json::Value as JsonValue;

use crate::context::AppContext;

pub async fn run(model: &str, id: &str, ctx: &AppContext) -> anyhow::Result<JsonValue> {
    let entity = ctx
        .store
        .find(&ctx.model(model), Value::parse_literal(id))
        .await?
        .ok_or_else(|| anyhow::anyhow!("{model} {id} not found"))?;
    Ok(serde_json::to_value(&entity)?)
}
