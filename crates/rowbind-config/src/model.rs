//! Model defaults.

use serde::{Deserialize, Serialize};

fn default_identity() -> String {
    rowbind_core::DEFAULT_IDENTITY.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Identity attribute for models that do not name their own.
    #[serde(default = "default_identity")]
    pub identity: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            identity: default_identity(),
        }
    }
}

impl ModelConfig {
    /// Build a model descriptor for `type_name` using the configured identity.
    pub fn model(&self, type_name: &str) -> rowbind_core::Model {
        rowbind_core::Model::new(type_name).with_identity(self.identity.clone())
    }
}
