//! The persistence gateway seam.
//!
//! A gateway runs one parameterized statement at a time. It binds
//! `Statement::params` positionally and never splices values into SQL.

use std::future::Future;

use rowbind_core::{Attributes, Statement, Value};

use crate::error::DatabaseError;

/// One result row: column name → value, in the order storage returned them.
pub type Row = Attributes;

/// A connection that can execute statements and report generated identities.
///
/// Gateways are not expected to be re-entrant. `Store` serializes every call
/// behind its own lock, so implementations can take `&mut self`.
pub trait Gateway: Send {
    /// Run a statement that returns no rows; yields the affected-row count.
    fn execute(
        &mut self,
        statement: &Statement,
    ) -> impl Future<Output = Result<u64, DatabaseError>>;

    /// Run a statement and collect every row it returns.
    fn query(
        &mut self,
        statement: &Statement,
    ) -> impl Future<Output = Result<Vec<Row>, DatabaseError>>;

    /// Identity generated by the most recent insert on this connection.
    fn last_insert_identity(&self) -> Result<Value, DatabaseError>;
}
