//! Type-level entity descriptors.

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::entity::Entity;

/// Identity attribute name used when a model does not specify one.
pub const DEFAULT_IDENTITY: &str = "id";

/// The type of an entity: its simple name and the attribute that acts as its
/// primary key.
///
/// A model declares no columns. Two entities of one model may carry
/// different attribute sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Model {
    name: String,
    identity: String,
}

impl Model {
    /// A model whose identity attribute is [`DEFAULT_IDENTITY`].
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identity: DEFAULT_IDENTITY.to_string(),
        }
    }

    #[must_use]
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = identity.into();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Construct an entity of this model. Never fails.
    #[must_use]
    pub fn entity(&self, attributes: impl Into<Attributes>) -> Entity {
        Entity::new(self.clone(), attributes.into())
    }
}
