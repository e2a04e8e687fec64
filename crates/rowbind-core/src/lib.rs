//! # rowbind-core
//!
//! Schema-less entities and the SQL they imply.
//!
//! An [`Entity`] is a [`Model`] plus whatever [`Attributes`] it was built
//! from. The [`StatementBuilder`] turns that snapshot into parameterized
//! `INSERT`, `UPDATE`, `SELECT` and `DELETE` statements, choosing insert or
//! update from the presence of the identity attribute. Nothing in this crate
//! performs I/O; executing statements is the job of `rowbind-db`.

pub mod attributes;
pub mod entity;
pub mod errors;
pub mod model;
pub mod naming;
pub mod statement;
pub mod value;

pub use attributes::Attributes;
pub use entity::Entity;
pub use errors::EntityError;
pub use model::{DEFAULT_IDENTITY, Model};
pub use naming::{Pluralize, TableMap, TableNaming};
pub use statement::{SaveStatement, Statement, StatementBuilder};
pub use value::Value;
