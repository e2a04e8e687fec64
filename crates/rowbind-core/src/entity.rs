//! In-memory rows with a construction-time attribute set.

use serde::{Serialize, Serializer};

use crate::attributes::Attributes;
use crate::errors::EntityError;
use crate::model::Model;
use crate::value::Value;

/// One row of a model's table, held as whatever attributes it was built from.
///
/// The attribute set is closed after construction: [`Entity::set`] only
/// rebinds existing names. The identity attribute is the one exception and
/// is bound by [`Entity::mark_persisted`] once storage has assigned it.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    model: Model,
    attributes: Attributes,
}

impl Entity {
    #[must_use]
    pub const fn new(model: Model, attributes: Attributes) -> Self {
        Self { model, attributes }
    }

    #[must_use]
    pub const fn model(&self) -> &Model {
        &self.model
    }

    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    #[must_use]
    pub fn into_attributes(self) -> Attributes {
        self.attributes
    }

    /// Read a bound attribute.
    ///
    /// # Errors
    ///
    /// Returns `EntityError::AttributeNotFound` if `name` was not bound.
    pub fn get(&self, name: &str) -> Result<&Value, EntityError> {
        self.attributes
            .get(name)
            .ok_or_else(|| self.not_found(name))
    }

    /// Rebind an existing attribute and return its previous value.
    ///
    /// # Errors
    ///
    /// Returns `EntityError::AttributeNotFound` if `name` was not bound.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<Value, EntityError> {
        match self.attributes.get_mut(name) {
            Some(slot) => Ok(std::mem::replace(slot, value.into())),
            None => Err(self.not_found(name)),
        }
    }

    /// The identity value, or `None` when the attribute is absent or null.
    #[must_use]
    pub fn identity(&self) -> Option<&Value> {
        self.attributes
            .get(self.model.identity())
            .filter(|value| !value.is_null())
    }

    /// Whether this entity corresponds to a stored row.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.identity().is_some()
    }

    /// Bind the identity assigned by storage after an insert.
    ///
    /// Overwrites a null identity in place, or appends the identity attribute
    /// when it was not supplied at construction.
    pub fn mark_persisted(&mut self, identity: Value) {
        let name = self.model.identity().to_string();
        self.attributes.insert(name, identity);
    }

    /// Identity value for identity-keyed operations.
    ///
    /// # Errors
    ///
    /// Returns `EntityError::MissingIdentity` when the identity is absent or null.
    pub fn require_identity(&self) -> Result<&Value, EntityError> {
        self.identity().ok_or_else(|| EntityError::MissingIdentity {
            model: self.model.name().to_string(),
            identity: self.model.identity().to_string(),
        })
    }

    fn not_found(&self, name: &str) -> EntityError {
        EntityError::AttributeNotFound {
            model: self.model.name().to_string(),
            name: name.to_string(),
        }
    }
}

impl Serialize for Entity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.attributes.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::attributes;

    fn post() -> Model {
        Model::new("Post")
    }

    #[test]
    fn construction_round_trips_every_attribute() {
        let source = attributes! {
            "title" => "Le Wagon",
            "views" => 12,
            "score" => 4.5,
            "body" => Value::Null,
        };
        let entity = post().entity(source.clone());

        for (name, value) in source.iter() {
            assert_eq!(entity.get(name).unwrap(), value);
        }
        assert_eq!(entity.attributes(), &source);
    }

    #[test]
    fn unknown_attribute_is_an_error_not_null() {
        let mut entity = post().entity(attributes! { "title" => "Le Wagon" });

        assert_eq!(
            entity.get("author"),
            Err(EntityError::AttributeNotFound {
                model: "Post".into(),
                name: "author".into()
            })
        );
        assert!(entity.set("author", "x").is_err());
        assert!(!entity.attributes().contains("author"));
    }

    #[test]
    fn set_rebinds_and_returns_previous() {
        let mut entity = post().entity(attributes! { "title" => "draft" });
        let previous = entity.set("title", "final").unwrap();

        assert_eq!(previous, Value::from("draft"));
        assert_eq!(entity.get("title").unwrap(), &Value::from("final"));
    }

    #[test]
    fn null_identity_counts_as_new() {
        let fresh = post().entity(attributes! { "title" => "a" });
        let null_id = post().entity(attributes! { "id" => Value::Null, "title" => "a" });
        let stored = post().entity(attributes! { "id" => 1, "title" => "a" });

        assert!(!fresh.is_persisted());
        assert!(!null_id.is_persisted());
        assert!(stored.is_persisted());
        assert!(matches!(
            fresh.require_identity(),
            Err(EntityError::MissingIdentity { .. })
        ));
    }

    #[test]
    fn mark_persisted_appends_or_overwrites_identity() {
        let mut fresh = post().entity(attributes! { "title" => "a" });
        fresh.mark_persisted(Value::Integer(7));
        assert_eq!(fresh.attributes().names().collect::<Vec<_>>(), vec!["title", "id"]);
        assert_eq!(fresh.identity(), Some(&Value::Integer(7)));

        let mut null_id = post().entity(attributes! { "id" => Value::Null, "title" => "a" });
        null_id.mark_persisted(Value::Integer(8));
        assert_eq!(null_id.attributes().names().collect::<Vec<_>>(), vec!["id", "title"]);
        assert_eq!(null_id.get("id").unwrap(), &Value::Integer(8));
    }

    #[test]
    fn custom_identity_name_is_respected() {
        let model = Model::new("Account").with_identity("account_id");
        let entity = model.entity(attributes! { "id" => 5, "account_id" => 9 });
        assert_eq!(entity.identity(), Some(&Value::Integer(9)));
    }

    #[test]
    fn serializes_as_flat_object() {
        let entity = Model::new("User").entity(attributes! { "id" => 3, "name" => "Rafa" });
        assert_eq!(
            serde_json::to_value(&entity).unwrap(),
            serde_json::json!({"id": 3, "name": "Rafa"})
        );
    }
}
