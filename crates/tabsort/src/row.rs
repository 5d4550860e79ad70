//! Row access.
//!
//! This module provides the [`Row`] trait through which the engine reads
//! field values, and [`JsonRow`], the implementation for plain JSON
//! records as produced by data loaders.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

use crate::value::{Number, Value};

/// Name of the field that identifies a [`JsonRow`].
pub const ID_FIELD: &str = "id";

/// Trait for records that can be shown in a table.
///
/// Rows are read-only to the engine: it never mutates or clones them,
/// it only borrows field values.
///
/// # Manual Implementation
///
/// ```
/// use std::borrow::Cow;
/// use tabsort::{Number, Row, Value};
///
/// struct Course {
///     id: u32,
///     name: String,
///     money: Option<String>,
/// }
///
/// impl Row for Course {
///     fn field(&self, key: &str) -> Value<'_> {
///         match key {
///             "id" => Value::Number(Number::U64(self.id as u64)),
///             "name" => Value::String(&self.name),
///             "money" => self.money.as_deref().into(),
///             _ => Value::None,
///         }
///     }
///
///     fn values(&self) -> Vec<Value<'_>> {
///         ["id", "name", "money"].iter().map(|k| self.field(k)).collect()
///     }
///
///     fn row_key(&self) -> Cow<'_, str> {
///         Cow::Owned(self.id.to_string())
///     }
/// }
/// ```
pub trait Row {
    /// Returns the value stored under `key`, or [`Value::None`] if the
    /// row has no such field.
    fn field(&self, key: &str) -> Value<'_>;

    /// Returns every field value the row carries, in any order.
    ///
    /// Search matches against all of them, whether or not a column shows
    /// the field.
    fn values(&self) -> Vec<Value<'_>>;

    /// Unique, stable identifier used as the rendering key.
    fn row_key(&self) -> Cow<'_, str>;
}

impl<R: Row + ?Sized> Row for &R {
    fn field(&self, key: &str) -> Value<'_> {
        (**self).field(key)
    }

    fn values(&self) -> Vec<Value<'_>> {
        (**self).values()
    }

    fn row_key(&self) -> Cow<'_, str> {
        (**self).row_key()
    }
}

/// A row backed by a JSON object.
///
/// # Example
///
/// ```
/// use tabsort::{JsonRow, Row, Value};
///
/// let row: JsonRow = serde_json::from_str(r#"{"id": 7, "name": "Ada", "age": null}"#).unwrap();
/// assert_eq!(row.field("name"), Value::String("Ada"));
/// assert_eq!(row.field("age"), Value::None);
/// assert_eq!(row.field("missing"), Value::None);
/// assert_eq!(row.row_key(), "7");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonRow {
    fields: Map<String, Json>,
}

impl JsonRow {
    /// Wraps a JSON object.
    pub fn new(fields: Map<String, Json>) -> Self {
        JsonRow { fields }
    }

    /// Converts a JSON value into a row, if it is an object.
    pub fn from_json(value: Json) -> Option<Self> {
        match value {
            Json::Object(fields) => Some(JsonRow { fields }),
            _ => None,
        }
    }

    /// The raw `id` field, if present.
    pub fn id(&self) -> Option<&Json> {
        self.fields.get(ID_FIELD)
    }

    /// The underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Json> {
        &self.fields
    }
}

impl From<Map<String, Json>> for JsonRow {
    fn from(fields: Map<String, Json>) -> Self {
        JsonRow { fields }
    }
}

impl Row for JsonRow {
    fn field(&self, key: &str) -> Value<'_> {
        self.fields.get(key).map_or(Value::None, json_value)
    }

    fn values(&self) -> Vec<Value<'_>> {
        self.fields.values().map(json_value).collect()
    }

    fn row_key(&self) -> Cow<'_, str> {
        self.id()
            .map(json_value)
            .and_then(|v| v.to_text())
            .unwrap_or(Cow::Borrowed(""))
    }
}

/// Borrows a JSON value as a cell [`Value`].
///
/// Arrays and objects become [`Value::Opaque`] carrying their JSON text.
pub fn json_value(value: &Json) -> Value<'_> {
    match value {
        Json::Null => Value::None,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => Value::Number(Number::from(n)),
        Json::String(s) => Value::String(s),
        Json::Array(_) | Json::Object(_) => Value::Opaque(Cow::Owned(value.to_string())),
    }
}
