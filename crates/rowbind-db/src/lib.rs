//! # rowbind-db
//!
//! libSQL persistence for rowbind entities.
//!
//! [`Store`] implements save, destroy, find and all over any [`Gateway`].
//! [`LibsqlGateway`] is the production gateway: a single local libSQL
//! connection (file or `:memory:`) shared by every model.
//!
//! rowbind does not manage schemas. Tables must already exist; callers that
//! own their schema can create it with [`LibsqlGateway::execute_batch`].

pub mod convert;
pub mod error;
pub mod gateway;
pub mod store;

pub use error::DatabaseError;
pub use gateway::{Gateway, Row};
pub use store::Store;

use libsql::Builder;
use rowbind_config::DatabaseConfig;
use rowbind_core::{Attributes, Statement, Value};

use crate::convert::{from_libsql, to_libsql};

/// A local libSQL database and its one connection.
pub struct LibsqlGateway {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl LibsqlGateway {
    /// Open a local database at `path` (or `":memory:"`).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or the
    /// foreign-key pragma fails.
    pub async fn open_local(path: &str, foreign_keys: bool) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Per-connection in SQLite
        if foreign_keys {
            conn.execute("PRAGMA foreign_keys = ON", ())
                .await
                .map_err(|e| DatabaseError::Query(format!("PRAGMA foreign_keys: {e}")))?;
        }

        tracing::debug!(path, foreign_keys, "opened libSQL database");
        Ok(Self { db, conn })
    }

    /// Open the database described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        Self::open_local(&config.path, config.foreign_keys).await
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Run a batch of unparameterized SQL, e.g. `CREATE TABLE` statements.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if any statement fails.
    pub async fn execute_batch(&self, sql: &str) -> Result<(), DatabaseError> {
        self.conn.execute_batch(sql).await?;
        Ok(())
    }
}

impl Gateway for LibsqlGateway {
    async fn execute(&mut self, statement: &Statement) -> Result<u64, DatabaseError> {
        let params = statement.params.iter().map(to_libsql).collect::<Vec<_>>();
        let affected = self
            .conn
            .execute(&statement.sql, libsql::params_from_iter(params))
            .await?;
        Ok(affected)
    }

    async fn query(&mut self, statement: &Statement) -> Result<Vec<Attributes>, DatabaseError> {
        let params = statement.params.iter().map(to_libsql).collect::<Vec<_>>();
        let mut rows = self
            .conn
            .query(&statement.sql, libsql::params_from_iter(params))
            .await?;

        let columns = (0..rows.column_count())
            .map(|idx| (idx, rows.column_name(idx).unwrap_or_default().to_string()))
            .collect::<Vec<_>>();

        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            let mut attributes = Attributes::with_capacity(columns.len());
            for (idx, name) in &columns {
                let value = from_libsql(name, row.get_value(*idx)?)?;
                attributes.insert(name.as_str(), value);
            }
            out.push(attributes);
        }
        Ok(out)
    }

    fn last_insert_identity(&self) -> Result<Value, DatabaseError> {
        Ok(Value::Integer(self.conn.last_insert_rowid()))
    }
}
