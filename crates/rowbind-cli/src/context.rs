use anyhow::Context;
use rowbind_config::RowbindConfig;
use rowbind_core::Model;
use rowbind_db::{LibsqlGateway, Store};

use crate::cli::GlobalFlags;

/// Everything a command handler needs: resolved config and the one store.
pub struct AppContext {
    pub config: RowbindConfig,
    pub store: Store<LibsqlGateway>,
}

impl AppContext {
    /// Apply flag overrides to `config` and open its database.
    pub async fn init(mut config: RowbindConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        if let Some(db) = &flags.db {
            config.database.path.clone_from(db);
        }
        if let Some(identity) = &flags.identity {
            config.model.identity.clone_from(identity);
        }
        config.validate()?;

        let gateway = LibsqlGateway::from_config(&config.database)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;
        let store = Store::with_naming(gateway, config.table_naming());

        tracing::debug!(path = %config.database.path, "application context ready");
        Ok(Self { config, store })
    }

    /// Model descriptor for a type name, using the configured identity.
    pub fn model(&self, type_name: &str) -> Model {
        self.config.model.model(type_name)
    }
}
