//! Entity persistence over a gateway.
//!
//! `Store` owns the single gateway shared by every model and the table
//! naming policy. Each operation holds the gateway lock from its first
//! statement to its last, so an insert and the identity read that follows
//! it cannot interleave with another caller.

use rowbind_core::{Entity, Model, Pluralize, SaveStatement, StatementBuilder, TableNaming, Value};
use tokio::sync::{Mutex, MutexGuard};

use crate::error::DatabaseError;
use crate::gateway::Gateway;

/// Persists entities of any model through one shared gateway.
pub struct Store<G> {
    gateway: Mutex<G>,
    naming: Box<dyn TableNaming>,
}

impl<G: Gateway> Store<G> {
    /// A store using the default `lowercase + "s"` table naming.
    pub fn new(gateway: G) -> Self {
        Self::with_naming(gateway, Pluralize)
    }

    /// A store deriving table names from `naming`.
    pub fn with_naming(gateway: G, naming: impl TableNaming + 'static) -> Self {
        Self {
            gateway: Mutex::new(gateway),
            naming: Box::new(naming),
        }
    }

    /// Table that rows of `model` live in.
    pub fn table_name(&self, model: &Model) -> String {
        self.naming.table_name(model.name())
    }

    /// Statement builder bound to `model`'s table.
    pub fn statements<'m>(&self, model: &'m Model) -> StatementBuilder<'m> {
        StatementBuilder::new(model, self.naming.as_ref())
    }

    /// Exclusive access to the gateway, e.g. to create tables.
    pub async fn gateway(&self) -> MutexGuard<'_, G> {
        self.gateway.lock().await
    }

    /// Consume the store and hand back its gateway.
    pub fn into_gateway(self) -> G {
        self.gateway.into_inner()
    }

    /// Insert a new entity or update a persisted one.
    ///
    /// An entity whose identity is absent or null is inserted, and its
    /// identity attribute is then bound to the value storage generated.
    /// Otherwise every non-identity attribute is written back and the
    /// entity is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Entity` for an identity-only update, or the
    /// gateway's error unchanged. On error the entity is not modified.
    pub async fn save(&self, entity: &mut Entity) -> Result<(), DatabaseError> {
        let save = self.statements(entity.model()).save(entity)?;
        let mut gateway = self.gateway.lock().await;

        match save {
            SaveStatement::Insert(statement) => {
                tracing::debug!(
                    model = entity.model().name(),
                    params = statement.params.len(),
                    "insert"
                );
                gateway.execute(&statement).await?;
                let identity = gateway.last_insert_identity()?;
                tracing::debug!(model = entity.model().name(), %identity, "inserted");
                entity.mark_persisted(identity);
            }
            SaveStatement::Update(statement) => {
                let affected = gateway.execute(&statement).await?;
                tracing::debug!(model = entity.model().name(), affected, "updated");
            }
        }
        Ok(())
    }

    /// Delete the row matching the entity's identity.
    ///
    /// The in-memory entity keeps all of its attributes, identity included.
    /// Returns the number of rows storage reports as deleted, which is zero
    /// when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns `EntityError::MissingIdentity` (wrapped) without touching
    /// storage when the identity is absent or null, or the gateway's error.
    pub async fn destroy(&self, entity: &Entity) -> Result<u64, DatabaseError> {
        let identity = entity.require_identity()?;
        let statement = self.statements(entity.model()).delete_by_identity(identity);

        let affected = self.gateway.lock().await.execute(&statement).await?;
        tracing::debug!(model = entity.model().name(), %identity, affected, "destroyed");
        Ok(affected)
    }

    /// Look up one entity of `model` by identity.
    ///
    /// Returns `None` when no row matches. Identities are expected to be
    /// unique; if storage still returns several rows the first one is used
    /// and a warning is logged.
    ///
    /// # Errors
    ///
    /// Returns the gateway's error.
    pub async fn find(
        &self,
        model: &Model,
        id: impl Into<Value>,
    ) -> Result<Option<Entity>, DatabaseError> {
        let id = id.into();
        let builder = self.statements(model);
        let statement = builder.select_by_identity(&id);

        let rows = self.gateway.lock().await.query(&statement).await?;
        if rows.len() > 1 {
            tracing::warn!(
                table = builder.table(),
                %id,
                rows = rows.len(),
                "identity lookup matched several rows; using the first"
            );
        }
        Ok(rows.into_iter().next().map(|row| model.entity(row)))
    }

    /// Every entity of `model`, in the order storage returns them.
    ///
    /// # Errors
    ///
    /// Returns the gateway's error.
    pub async fn all(&self, model: &Model) -> Result<Vec<Entity>, DatabaseError> {
        let statement = self.statements(model).select_all();
        let rows = self.gateway.lock().await.query(&statement).await?;
        tracing::debug!(model = model.name(), rows = rows.len(), "scanned");
        Ok(rows.into_iter().map(|row| model.entity(row)).collect())
    }
}
