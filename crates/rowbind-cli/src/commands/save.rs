use anyhow::Context;
use rowbind_core::Attributes;
use serde_json::Value as JsonValue;

use crate::context::AppContext;

pub async fn run(model: &str, attributes: &str, ctx: &AppContext) -> anyhow::Result<JsonValue> {
    let attributes: Attributes = serde_json::from_str(attributes)
        .context("attributes must be a JSON object of null, number, or string values")?;

    let mut entity = ctx.model(model).entity(attributes);
    ctx.store.save(&mut entity).await?;
    Ok(serde_json::to_value(&entity)?)
}
