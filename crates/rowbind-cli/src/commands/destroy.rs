use rowbind_core::{Attributes, Value};
use serde_json::{Value as JsonValue, json};

use crate::context::AppContext;

/// Delete by identity without loading the row first.
///
/// Reports how many rows were deleted; zero means no row had that identity.
pub async fn run(model: &str, id: &str, ctx: &AppContext) -> anyhow::Result<JsonValue> {
    let model = ctx.model(model);
    let id = Value::parse_literal(id);

    let mut attributes = Attributes::new();
    attributes.insert(model.identity(), id.clone());
    let affected = ctx.store.destroy(&model.entity(attributes)).await?;

    Ok(json!({ "destroyed": { "model": model.name(), "id": id, "affected": affected } }))
}
