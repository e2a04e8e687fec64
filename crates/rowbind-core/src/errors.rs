//! Errors raised by entity access and statement derivation.

use thiserror::Error;

/// Caller errors detected before anything reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    /// The attribute name is not part of the entity's bound set.
    #[error("Attribute not found: {model}.{name}")]
    AttributeNotFound { model: String, name: String },

    /// An identity-keyed operation ran on an entity without an identity value.
    #[error("Missing identity: {model} has no value for '{identity}'")]
    MissingIdentity { model: String, identity: String },

    /// An update would carry no assignments.
    #[error("Empty update: {model} has no attributes besides '{identity}'")]
    EmptyUpdate { model: String, identity: String },
}
