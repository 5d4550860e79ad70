//! Column kinds and the per-column comparator registry.
//!
//! Every column resolves to one [`ColumnKind`] when the registry is
//! built. Sorting then turns each row's cell into a [`SortKey`] through
//! that kind, once per row, and orders rows by comparing keys.
//!
//! # Comparison policy
//!
//! Keys are compared by a ranked policy; the first rule that applies wins:
//!
//! | Rule | Applies to | Ordering |
//! |------|------------|----------|
//! | Nulls | null or missing cells | after everything, in both directions |
//! | Numeric | numbers and fully numeric strings | numeric, direction applies |
//! | Date | `date` columns | by timestamp, direction applies; unparseable dates go after valid values, in both directions |
//! | Currency | `currency` columns, `$`-prefixed | numeric on the amount, direction applies |
//! | Text | everything else | case-insensitive, accent-folded, direction applies |
//!
//! Within one direction, numbers rank before dates and dates before text,
//! so a column mixing them still has a total order.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use deunicode::deunicode;
use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::ordering::Dir;
use crate::value::{parse_finite, Value};

/// Key inferred as a date column.
pub const DATE_KEY: &str = "start_date";
/// Key inferred as a currency column.
pub const CURRENCY_KEY: &str = "money";
/// Prefix recognised by currency columns.
pub const CURRENCY_PREFIX: char = '$';

/// Comparator family of a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Numbers compare numerically, anything else as text.
    #[default]
    Text,
    /// Non-numeric values are parsed as calendar dates.
    Date,
    /// `$`-prefixed amounts compare numerically.
    Currency,
}

impl ColumnKind {
    /// Infers a kind from a column key.
    ///
    /// `start_date` is a date column, `money` a currency column, and
    /// every other key is text.
    pub fn infer(key: &str) -> Self {
        match key {
            DATE_KEY => ColumnKind::Date,
            CURRENCY_KEY => ColumnKind::Currency,
            _ => ColumnKind::Text,
        }
    }

    /// Resolves a cell value into its sort key under this kind.
    pub fn sort_key(self, value: &Value<'_>) -> SortKey {
        if value.is_none() {
            return SortKey::Null;
        }
        if let Some(n) = value.numeric() {
            return SortKey::Number(n);
        }
        let text = value.to_text().unwrap_or_default();
        match self {
            ColumnKind::Date => match parse_date(&text) {
                Some(millis) => SortKey::Date(millis),
                None => SortKey::InvalidDate,
            },
            ColumnKind::Currency => match parse_currency(&text) {
                Some(amount) => SortKey::Number(amount),
                None => SortKey::Text(TextKey::new(&text)),
            },
            ColumnKind::Text => SortKey::Text(TextKey::new(&text)),
        }
    }

    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKind::Text => "text",
            ColumnKind::Date => "date",
            ColumnKind::Currency => "currency",
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A cell value resolved for comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// A finite number (native, numeric string, or currency amount).
    Number(f64),
    /// A valid date, in milliseconds since the Unix epoch.
    Date(i64),
    /// Text compared with [`TextKey`] collation.
    Text(TextKey),
    /// A date column value that is not a date.
    InvalidDate,
    /// Null or missing.
    Null,
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Date(_) => 1,
            SortKey::Text(_) => 2,
            SortKey::InvalidDate => 3,
            SortKey::Null => 4,
        }
    }

    /// Compares two keys for the given direction.
    ///
    /// Nulls and invalid dates are placed last regardless of `dir`; every
    /// other pair has its ordering flipped for descending sorts.
    pub fn compare(&self, other: &SortKey, dir: Dir) -> Ordering {
        match (self, other) {
            (SortKey::Null, SortKey::Null) => Ordering::Equal,
            (SortKey::Null, _) => Ordering::Greater,
            (_, SortKey::Null) => Ordering::Less,

            (SortKey::InvalidDate, SortKey::InvalidDate) => Ordering::Equal,
            (SortKey::InvalidDate, _) => Ordering::Greater,
            (_, SortKey::InvalidDate) => Ordering::Less,

            (SortKey::Number(a), SortKey::Number(b)) => {
                dir.apply(a.partial_cmp(b).unwrap_or(Ordering::Equal))
            }
            (SortKey::Date(a), SortKey::Date(b)) => dir.apply(a.cmp(b)),
            (SortKey::Text(a), SortKey::Text(b)) => dir.apply(a.cmp(b)),
            (a, b) => dir.apply(a.rank().cmp(&b.rank())),
        }
    }
}

/// Collation key for the text fallback.
///
/// Text is lower-cased, then compared on its ASCII transliteration so
/// that accented letters sort next to their base letter ("émile" between
/// "emil" and "emma"). Ties on the transliteration fall back to the
/// lower-cased text itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TextKey {
    folded: String,
    lowered: String,
}

impl TextKey {
    /// Builds the collation key for `text`.
    pub fn new(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let folded = deunicode(&lowered).to_lowercase();
        TextKey { folded, lowered }
    }
}

/// Parses a currency amount such as `$49.99`.
///
/// Returns `None` for values without the `$` prefix; other currencies are
/// compared as text.
pub fn parse_currency(text: &str) -> Option<f64> {
    text.strip_prefix(CURRENCY_PREFIX).and_then(parse_finite)
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Parses a calendar date or date-time into milliseconds since the Unix
/// epoch.
///
/// Accepts RFC 3339 timestamps, ISO dates and date-times without an
/// offset (read as UTC), and the common `MM/DD/YYYY` and month-name forms.
pub fn parse_date(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp_millis());
        }
    }
    None
}

/// Column kinds resolved once from a set of column descriptors.
///
/// Keys that no descriptor names resolve by [`ColumnKind::infer`].
///
/// # Example
///
/// ```
/// use tabsort::{Column, ColumnKind, ComparatorRegistry};
///
/// let columns = vec![
///     Column::new("name", "Name"),
///     Column::new("joined", "Joined").kind(ColumnKind::Date),
/// ];
/// let registry = ComparatorRegistry::from_columns(&columns);
/// assert_eq!(registry.kind("joined"), ColumnKind::Date);
/// assert_eq!(registry.kind("money"), ColumnKind::Currency);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparatorRegistry {
    kinds: HashMap<String, ColumnKind>,
}

impl ComparatorRegistry {
    /// An empty registry; every key is inferred.
    pub fn new() -> Self {
        ComparatorRegistry::default()
    }

    /// Resolves the kind of every column.
    pub fn from_columns(columns: &[Column]) -> Self {
        let kinds = columns
            .iter()
            .map(|c| (c.key.clone(), c.resolved_kind()))
            .collect();
        ComparatorRegistry { kinds }
    }

    /// Registers or overrides the kind for `key`.
    pub fn register(mut self, key: impl Into<String>, kind: ColumnKind) -> Self {
        self.kinds.insert(key.into(), kind);
        self
    }

    /// The kind used to compare values of `key`.
    pub fn kind(&self, key: &str) -> ColumnKind {
        self.kinds
            .get(key)
            .copied()
            .unwrap_or_else(|| ColumnKind::infer(key))
    }
}
