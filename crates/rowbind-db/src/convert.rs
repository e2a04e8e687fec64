//! Conversions between rowbind values and libSQL values.
//!
//! libSQL also has a BLOB storage class. Blobs never come from rowbind
//! parameters, and reading one back is an error rather than a lossy cast.

use rowbind_core::Value;

use crate::error::DatabaseError;

#[must_use]
pub fn to_libsql(value: &Value) -> libsql::Value {
    match value {
        Value::Null => libsql::Value::Null,
        Value::Integer(v) => libsql::Value::Integer(*v),
        Value::Real(v) => libsql::Value::Real(*v),
        Value::Text(v) => libsql::Value::Text(v.clone()),
    }
}

/// Convert a column value read from `column`.
///
/// # Errors
///
/// Returns `DatabaseError::UnsupportedColumn` for BLOB values.
pub fn from_libsql(column: &str, value: libsql::Value) -> Result<Value, DatabaseError> {
    match value {
        libsql::Value::Null => Ok(Value::Null),
        libsql::Value::Integer(v) => Ok(Value::Integer(v)),
        libsql::Value::Real(v) => Ok(Value::Real(v)),
        libsql::Value::Text(v) => Ok(Value::Text(v)),
        libsql::Value::Blob(bytes) => Err(DatabaseError::UnsupportedColumn {
            column: column.to_string(),
            kind: format!("BLOB ({} bytes)", bytes.len()),
        }),
    }
}
