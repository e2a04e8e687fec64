use serde_json::Value as JsonValue;

use crate::cli::Commands;
use crate::context::AppContext;

pub mod all;
pub mod destroy;
pub mod exec;
pub mod find;
pub mod save;

/// Run one command and return the response to print.
pub async fn dispatch(command: Commands, ctx: &AppContext) -> anyhow::Result<JsonValue> {
    match command {
        Commands::Exec { sql } => exec::run(&sql, ctx).await,
        Commands::Save { model, attributes } => save::run(&model, &attributes, ctx).await,
        Commands::Find { model, id } => find::run(&model, &id, ctx).await,
        Commands::All { model } => all::run(&model, ctx).await,
        Commands::Destroy { model, id } => destroy::run(&model, &id, ctx).await,
    }
}
