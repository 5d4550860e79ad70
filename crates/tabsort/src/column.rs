//! Column descriptors and the disabled-column set.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::kind::ColumnKind;

/// Describes one displayed column.
///
/// The order of descriptors in a slice is the display order. `kind`
/// selects the comparator family; when absent it is inferred from the
/// key (see [`ColumnKind::infer`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Field name looked up in each row.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Explicit comparator kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ColumnKind>,
}

impl Column {
    /// Creates a column whose kind is inferred from its key.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Column {
            key: key.into(),
            label: label.into(),
            kind: None,
        }
    }

    /// Sets an explicit comparator kind.
    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// The kind used for sorting: the explicit one, or the inferred one.
    pub fn resolved_kind(&self) -> ColumnKind {
        self.kind.unwrap_or_else(|| ColumnKind::infer(&self.key))
    }
}

/// Column keys that are shown but exempt from sorting.
///
/// Only membership matters; the order keys were added in is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisabledColumns {
    keys: HashSet<String>,
}

impl DisabledColumns {
    /// An empty set: every column is sortable.
    pub fn new() -> Self {
        DisabledColumns::default()
    }

    /// Returns `true` if clicks on `key` must be ignored.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Adds a key to the set.
    pub fn insert(&mut self, key: impl Into<String>) {
        self.keys.insert(key.into());
    }

    /// Returns `true` if no column is disabled.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over the disabled keys in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for DisabledColumns {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        DisabledColumns {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}
