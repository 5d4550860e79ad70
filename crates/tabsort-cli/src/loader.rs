//! Loading table rows from bundled datasets and JSON files.

use std::collections::HashSet;
use std::path::PathBuf;

use serde_json::Value as Json;
use tabsort::{JsonRow, Row};
use thiserror::Error;

use crate::config::DataSource;

/// Datasets compiled into the binary.
const EMBEDDED: &[(&str, &str)] = &[
    ("users", include_str!("../data/users.json")),
    ("courses", include_str!("../data/courses.json")),
];

/// Error loading the rows of one data source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{origin} must contain a JSON array of rows")]
    NotAnArray { origin: String },

    #[error("{origin}: row {index} is not a JSON object")]
    NotAnObject { origin: String, index: usize },

    #[error("{origin}: row {index} has no string or number \"id\"")]
    MissingId { origin: String, index: usize },

    #[error("{origin}: id {id} appears more than once")]
    DuplicateId { origin: String, id: String },

    #[error("unknown embedded dataset \"{name}\" (available: {available})")]
    UnknownDataset { name: String, available: String },
}

/// Names of the bundled datasets.
pub fn embedded_names() -> Vec<&'static str> {
    EMBEDDED.iter().map(|(name, _)| *name).collect()
}

/// Loads the rows of `source`.
pub fn load(source: &DataSource) -> Result<Vec<JsonRow>, LoadError> {
    let origin = source.to_string();
    let rows = match source {
        DataSource::Embedded(name) => {
            let text = EMBEDDED
                .iter()
                .find(|(n, _)| *n == name.as_str())
                .map(|(_, text)| *text)
                .ok_or_else(|| LoadError::UnknownDataset {
                    name: name.clone(),
                    available: embedded_names().join(", "),
                })?;
            parse_rows(&origin, text)?
        }
        DataSource::File(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?;
            parse_rows(&origin, &text)?
        }
    };
    log::debug!("loaded {} rows from {}", rows.len(), origin);
    Ok(rows)
}

/// Parses a JSON array of row objects, each with a unique scalar `id`.
pub fn parse_rows(origin: &str, text: &str) -> Result<Vec<JsonRow>, LoadError> {
    let value: Json = serde_json::from_str(text).map_err(|source| LoadError::Json {
        origin: origin.to_string(),
        source,
    })?;
    let Json::Array(items) = value else {
        return Err(LoadError::NotAnArray {
            origin: origin.to_string(),
        });
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let row = JsonRow::from_json(item).ok_or_else(|| LoadError::NotAnObject {
            origin: origin.to_string(),
            index,
        })?;
        if !matches!(row.id(), Some(Json::String(_) | Json::Number(_))) {
            return Err(LoadError::MissingId {
                origin: origin.to_string(),
                index,
            });
        }
        // Compare rendering keys, so `1` and `1.0` collide.
        let id = row.row_key().into_owned();
        if !seen.insert(id.clone()) {
            return Err(LoadError::DuplicateId {
                origin: origin.to_string(),
                id,
            });
        }
        rows.push(row);
    }
    Ok(rows)
}
