//! SQL derivation from attribute snapshots.
//!
//! Every statement is built from the attributes an entity holds at call
//! time, the model's identity attribute, and a table name. Identifiers are
//! interpolated as quoted SQL identifiers; values only ever travel as
//! numbered `?N` parameters.

use crate::attributes::Attributes;
use crate::entity::Entity;
use crate::errors::EntityError;
use crate::model::Model;
use crate::naming::TableNaming;
use crate::value::Value;

/// SQL text plus its positional parameters.
///
/// `params[i]` binds placeholder `?{i + 1}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Statement {
    #[must_use]
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }
}

/// The statement `save` resolves to for a given entity.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveStatement {
    Insert(Statement),
    Update(Statement),
}

impl SaveStatement {
    #[must_use]
    pub const fn statement(&self) -> &Statement {
        match self {
            Self::Insert(s) | Self::Update(s) => s,
        }
    }

    #[must_use]
    pub const fn is_insert(&self) -> bool {
        matches!(self, Self::Insert(_))
    }
}

/// Quote `name` as a SQL identifier, doubling embedded quotes.
#[must_use]
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Derives statements against one model's table.
#[derive(Debug, Clone)]
pub struct StatementBuilder<'a> {
    model: &'a Model,
    table: String,
}

impl<'a> StatementBuilder<'a> {
    #[must_use]
    pub fn new(model: &'a Model, naming: &dyn TableNaming) -> Self {
        Self {
            model,
            table: naming.table_name(model.name()),
        }
    }

    /// Use an explicit table name instead of a naming policy.
    #[must_use]
    pub fn with_table(model: &'a Model, table: impl Into<String>) -> Self {
        Self {
            model,
            table: table.into(),
        }
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Insert when the identity is absent or null, update otherwise.
    ///
    /// # Errors
    ///
    /// Returns `EntityError::EmptyUpdate` if the entity has an identity but
    /// nothing else to assign.
    pub fn save(&self, entity: &Entity) -> Result<SaveStatement, EntityError> {
        if entity.is_persisted() {
            self.update(entity.attributes()).map(SaveStatement::Update)
        } else {
            Ok(SaveStatement::Insert(self.insert(entity.attributes())))
        }
    }

    /// `INSERT` of every attribute except an absent or null identity.
    ///
    /// With nothing left to insert the statement falls back to
    /// `DEFAULT VALUES`.
    #[must_use]
    pub fn insert(&self, attributes: &Attributes) -> Statement {
        let identity = self.model.identity();
        let mut columns = Vec::with_capacity(attributes.len());
        let mut placeholders = Vec::with_capacity(attributes.len());
        let mut params = Vec::with_capacity(attributes.len());

        for (name, value) in attributes.iter() {
            if name == identity && value.is_null() {
                continue;
            }
            columns.push(quote_ident(name));
            params.push(value.clone());
            placeholders.push(format!("?{}", params.len()));
        }

        let table = quote_ident(&self.table);
        if columns.is_empty() {
            return Statement::new(format!("INSERT INTO {table} DEFAULT VALUES"), params);
        }
        Statement::new(
            format!(
                "INSERT INTO {table} ({}) VALUES ({})",
                columns.join(", "),
                placeholders.join(", ")
            ),
            params,
        )
    }

    /// `UPDATE` assigning every non-identity attribute, filtered by identity.
    ///
    /// The identity value is bound exactly once, as the last parameter.
    ///
    /// # Errors
    ///
    /// Returns `EntityError::MissingIdentity` when the identity is absent or
    /// null, and `EntityError::EmptyUpdate` when no other attribute exists.
    pub fn update(&self, attributes: &Attributes) -> Result<Statement, EntityError> {
        let identity = self.model.identity();
        let id = attributes
            .get(identity)
            .filter(|value| !value.is_null())
            .ok_or_else(|| EntityError::MissingIdentity {
                model: self.model.name().to_string(),
                identity: identity.to_string(),
            })?;

        let mut sets = Vec::with_capacity(attributes.len());
        let mut params = Vec::with_capacity(attributes.len());
        for (name, value) in attributes.iter().filter(|(name, _)| *name != identity) {
            params.push(value.clone());
            sets.push(format!("{} = ?{}", quote_ident(name), params.len()));
        }

        if sets.is_empty() {
            return Err(EntityError::EmptyUpdate {
                model: self.model.name().to_string(),
                identity: identity.to_string(),
            });
        }

        params.push(id.clone());
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ?{}",
            quote_ident(&self.table),
            sets.join(", "),
            quote_ident(identity),
            params.len()
        );
        Ok(Statement::new(sql, params))
    }

    /// Point lookup by identity.
    #[must_use]
    pub fn select_by_identity(&self, id: &Value) -> Statement {
        Statement::new(
            format!(
                "SELECT * FROM {} WHERE {} = ?1",
                quote_ident(&self.table),
                quote_ident(self.model.identity())
            ),
            vec![id.clone()],
        )
    }

    /// Full scan, no filter.
    #[must_use]
    pub fn select_all(&self) -> Statement {
        Statement::new(
            format!("SELECT * FROM {}", quote_ident(&self.table)),
            Vec::new(),
        )
    }

    /// Delete by identity.
    #[must_use]
    pub fn delete_by_identity(&self, id: &Value) -> Statement {
        Statement::new(
            format!(
                "DELETE FROM {} WHERE {} = ?1",
                quote_ident(&self.table),
                quote_ident(self.model.identity())
            ),
            vec![id.clone()],
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::attributes;
    use crate::naming::{Pluralize, TableMap};

    #[test]
    fn insert_orders_columns_placeholders_and_params_together() {
        let model = Model::new("Post");
        let builder = StatementBuilder::new(&model, &Pluralize);
        let stmt = builder.insert(&attributes! { "title" => "Le Wagon", "views" => 3 });

        assert_eq!(
            stmt,
            Statement::new(
                r#"INSERT INTO "posts" ("title", "views") VALUES (?1, ?2)"#,
                vec![Value::from("Le Wagon"), Value::Integer(3)]
            )
        );
    }

    #[test]
    fn insert_skips_null_identity_anywhere_in_order() {
        let model = Model::new("Post");
        let builder = StatementBuilder::new(&model, &Pluralize);
        let stmt = builder.insert(&attributes! {
            "title" => "a",
            "id" => Value::Null,
            "body" => Value::Null,
        });

        assert_eq!(stmt.sql, r#"INSERT INTO "posts" ("title", "body") VALUES (?1, ?2)"#);
        assert_eq!(stmt.params, vec![Value::from("a"), Value::Null]);
    }

    #[test]
    fn insert_without_columns_uses_default_values() {
        let model = Model::new("Tick");
        let stmt = StatementBuilder::new(&model, &Pluralize).insert(&Attributes::new());
        assert_eq!(stmt.sql, r#"INSERT INTO "ticks" DEFAULT VALUES"#);
        assert!(stmt.params.is_empty());
    }

    #[test]
    fn user_update_binds_assignments_then_identity() {
        let model = Model::new("User");
        let entity = model.entity(attributes! { "id" => 3, "name" => "Rafa", "age" => 22 });
        let save = StatementBuilder::new(&model, &Pluralize).save(&entity).unwrap();

        assert!(!save.is_insert());
        assert_eq!(
            save.statement(),
            &Statement::new(
                r#"UPDATE "users" SET "name" = ?1, "age" = ?2 WHERE "id" = ?3"#,
                vec![Value::from("Rafa"), Value::Integer(22), Value::Integer(3)]
            )
        );
    }

    #[test]
    fn update_never_assigns_identity_even_when_not_first() {
        let model = Model::new("User");
        let stmt = StatementBuilder::new(&model, &Pluralize)
            .update(&attributes! { "name" => "Rafa", "id" => 9, "age" => 22 })
            .unwrap();

        assert_eq!(stmt.sql, r#"UPDATE "users" SET "name" = ?1, "age" = ?2 WHERE "id" = ?3"#);
        assert_eq!(stmt.params.last(), Some(&Value::Integer(9)));
        assert_eq!(
            stmt.params.iter().filter(|v| **v == Value::Integer(9)).count(),
            1
        );
    }

    #[test]
    fn identity_only_update_is_rejected() {
        let model = Model::new("User");
        let err = StatementBuilder::new(&model, &Pluralize)
            .update(&attributes! { "id" => 3 })
            .unwrap_err();
        assert_eq!(
            err,
            EntityError::EmptyUpdate {
                model: "User".into(),
                identity: "id".into()
            }
        );
    }

    #[test]
    fn update_without_identity_is_rejected() {
        let model = Model::new("User");
        let builder = StatementBuilder::new(&model, &Pluralize);
        assert!(matches!(
            builder.update(&attributes! { "name" => "Rafa" }),
            Err(EntityError::MissingIdentity { .. })
        ));
        assert!(matches!(
            builder.update(&attributes! { "id" => Value::Null, "name" => "Rafa" }),
            Err(EntityError::MissingIdentity { .. })
        ));
    }

    #[test]
    fn save_chooses_insert_for_new_entities() {
        let model = Model::new("Post");
        let entity = model.entity(attributes! { "title" => "Le Wagon" });
        let save = StatementBuilder::new(&model, &Pluralize).save(&entity).unwrap();
        assert!(save.is_insert());
    }

    #[test]
    fn lookup_delete_and_scan() {
        let model = Model::new("Person").with_identity("person_id");
        let tables = TableMap::new().with("Person", "people");
        let builder = StatementBuilder::new(&model, &tables);
        let id = Value::Integer(4);

        assert_eq!(builder.table(), "people");
        assert_eq!(
            builder.select_by_identity(&id),
            Statement::new(
                r#"SELECT * FROM "people" WHERE "person_id" = ?1"#,
                vec![Value::Integer(4)]
            )
        );
        assert_eq!(
            builder.delete_by_identity(&id),
            Statement::new(
                r#"DELETE FROM "people" WHERE "person_id" = ?1"#,
                vec![Value::Integer(4)]
            )
        );
        assert_eq!(builder.select_all(), Statement::new(r#"SELECT * FROM "people""#, vec![]));
    }

    #[test]
    fn identifiers_are_quoted_not_trusted() {
        assert_eq!(quote_ident("plain"), r#""plain""#);
        assert_eq!(quote_ident(r#"a"; DROP TABLE x; --"#), r#""a""; DROP TABLE x; --""#);

        let model = Model::new("Post");
        let stmt = StatementBuilder::with_table(&model, "posts")
            .insert(&attributes! { r#"we"ird"# => 1 });
        assert_eq!(stmt.sql, r#"INSERT INTO "posts" ("we""ird") VALUES (?1)"#);
    }
}
