//! Table naming policies.
//!
//! The default convention is fixed: lower-case the model's type name and
//! append `s`. No irregular plurals. [`TableMap`] layers explicit overrides
//! on top for tables that do not follow it.

use std::collections::HashMap;

/// Maps a model's type name to the table that stores it.
///
/// Implementations must be pure: the same type name always yields the same
/// table name.
pub trait TableNaming: Send + Sync {
    fn table_name(&self, type_name: &str) -> String;
}

/// `Post` → `posts`, `BlogPost` → `blogposts`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pluralize;

impl TableNaming for Pluralize {
    fn table_name(&self, type_name: &str) -> String {
        let mut table = type_name.to_lowercase();
        table.push('s');
        table
    }
}

impl<F> TableNaming for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn table_name(&self, type_name: &str) -> String {
        self(type_name)
    }
}

/// Lookup table of explicit type → table names, falling back to
/// [`Pluralize`] for everything else.
///
/// Type names are matched case-insensitively, consistent with the default
/// policy which already discards case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableMap {
    overrides: HashMap<String, String>,
}

impl TableMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, type_name: impl Into<String>, table: impl Into<String>) -> Self {
        self.overrides
            .insert(type_name.into().to_lowercase(), table.into());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TableMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            overrides: iter
                .into_iter()
                .map(|(k, v)| (k.into().to_lowercase(), v.into()))
                .collect(),
        }
    }
}

impl TableNaming for TableMap {
    fn table_name(&self, type_name: &str) -> String {
        self.overrides
            .get(&type_name.to_lowercase())
            .cloned()
            .unwrap_or_else(|| Pluralize.table_name(type_name))
    }
}
