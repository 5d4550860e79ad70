//! Sort direction and the tri-state sort configuration.
//!
//! Provides [`Dir`] for sort direction, [`OrderBy`] for an active
//! column ordering, and [`SortConfig`] for "sorted by one column, or not
//! sorted at all".

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::SortConfigError;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An active ordering: one column key and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderBy {
    /// The column key to sort by.
    pub key: String,
    /// The sort direction.
    pub dir: Dir,
}

impl OrderBy {
    /// Creates a new ascending ordering for the given key.
    pub fn asc(key: impl Into<String>) -> Self {
        OrderBy {
            key: key.into(),
            dir: Dir::Asc,
        }
    }

    /// Creates a new descending ordering for the given key.
    pub fn desc(key: impl Into<String>) -> Self {
        OrderBy {
            key: key.into(),
            dir: Dir::Desc,
        }
    }

    /// Creates a new ordering with the given direction.
    pub fn new(key: impl Into<String>, dir: Dir) -> Self {
        OrderBy {
            key: key.into(),
            dir,
        }
    }
}

/// The current sort of a table.
///
/// Either unsorted, or sorted by exactly one column in one direction.
/// A key without a direction (or the reverse) cannot be constructed, so
/// the unsorted state has a single canonical value.
///
/// On the wire the configuration keeps the flat `{ key, direction }`
/// shape, with both fields `null` when unsorted:
///
/// ```
/// use tabsort::SortConfig;
///
/// let config = SortConfig::asc("age");
/// let json = serde_json::to_string(&config).unwrap();
/// assert_eq!(json, r#"{"key":"age","direction":"asc"}"#);
///
/// let unsorted: SortConfig = serde_json::from_str(r#"{"key":null,"direction":null}"#).unwrap();
/// assert!(unsorted.is_unsorted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "SortConfigRaw", into = "SortConfigRaw")]
pub struct SortConfig {
    order: Option<OrderBy>,
}

impl SortConfig {
    /// The canonical "no sort" configuration.
    pub fn unsorted() -> Self {
        SortConfig { order: None }
    }

    /// Sorted by `key` in the given direction.
    pub fn by(key: impl Into<String>, dir: Dir) -> Self {
        SortConfig {
            order: Some(OrderBy::new(key, dir)),
        }
    }

    /// Sorted ascending by `key`.
    pub fn asc(key: impl Into<String>) -> Self {
        Self::by(key, Dir::Asc)
    }

    /// Sorted descending by `key`.
    pub fn desc(key: impl Into<String>) -> Self {
        Self::by(key, Dir::Desc)
    }

    /// Returns `true` for the "no sort" configuration.
    pub fn is_unsorted(&self) -> bool {
        self.order.is_none()
    }

    /// The active ordering, if any.
    pub fn order(&self) -> Option<&OrderBy> {
        self.order.as_ref()
    }

    /// The active column key, if any.
    pub fn key(&self) -> Option<&str> {
        self.order.as_ref().map(|o| o.key.as_str())
    }

    /// The active direction, if any.
    pub fn direction(&self) -> Option<Dir> {
        self.order.as_ref().map(|o| o.dir)
    }

    /// The direction `key` is sorted in, or `None` if `key` is not the
    /// active column.
    pub fn direction_of(&self, key: &str) -> Option<Dir> {
        self.order
            .as_ref()
            .filter(|o| o.key == key)
            .map(|o| o.dir)
    }
}

impl From<OrderBy> for SortConfig {
    fn from(order: OrderBy) -> Self {
        SortConfig { order: Some(order) }
    }
}

impl std::fmt::Display for SortConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.order {
            Some(order) => write!(f, "{} {}", order.key, order.dir),
            None => write!(f, "unsorted"),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct SortConfigRaw {
    key: Option<String>,
    direction: Option<Dir>,
}

impl From<SortConfig> for SortConfigRaw {
    fn from(config: SortConfig) -> Self {
        match config.order {
            Some(OrderBy { key, dir }) => SortConfigRaw {
                key: Some(key),
                direction: Some(dir),
            },
            None => SortConfigRaw {
                key: None,
                direction: None,
            },
        }
    }
}

impl TryFrom<SortConfigRaw> for SortConfig {
    type Error = SortConfigError;

    fn try_from(raw: SortConfigRaw) -> Result<Self, Self::Error> {
        match (raw.key, raw.direction) {
            (Some(key), Some(dir)) => Ok(SortConfig::by(key, dir)),
            (None, None) => Ok(SortConfig::unsorted()),
            (Some(key), None) => Err(SortConfigError::KeyWithoutDirection { key }),
            (None, Some(dir)) => Err(SortConfigError::DirectionWithoutKey {
                direction: dir.as_str(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Asc.apply(Ordering::Greater), Ordering::Greater);
        assert_eq!(Dir::Asc.apply(Ordering::Equal), Ordering::Equal);

        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Greater), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn dir_display() {
        assert_eq!(Dir::Asc.to_string(), "asc");
        assert_eq!(Dir::Desc.to_string(), "desc");
    }

    #[test]
    fn order_by_constructors() {
        let asc = OrderBy::asc("name");
        assert_eq!(asc.key, "name");
        assert_eq!(asc.dir, Dir::Asc);

        let desc = OrderBy::desc("age");
        assert_eq!(desc.key, "age");
        assert_eq!(desc.dir, Dir::Desc);
    }

    #[test]
    fn unsorted_is_default() {
        let config = SortConfig::default();
        assert!(config.is_unsorted());
        assert_eq!(config.key(), None);
        assert_eq!(config.direction(), None);
        assert_eq!(config, SortConfig::unsorted());
    }

    #[test]
    fn accessors_follow_active_order() {
        let config = SortConfig::desc("money");
        assert_eq!(config.key(), Some("money"));
        assert_eq!(config.direction(), Some(Dir::Desc));
        assert_eq!(config.direction_of("money"), Some(Dir::Desc));
        assert_eq!(config.direction_of("name"), None);
        assert_eq!(config.to_string(), "money desc");
        assert_eq!(SortConfig::unsorted().to_string(), "unsorted");
    }

    #[test]
    fn wire_form_round_trips() {
        let json = serde_json::to_string(&SortConfig::unsorted()).unwrap();
        assert_eq!(json, r#"{"key":null,"direction":null}"#);

        let parsed: SortConfig =
            serde_json::from_str(r#"{"key":"age","direction":"desc"}"#).unwrap();
        assert_eq!(parsed, SortConfig::desc("age"));
    }

    #[test]
    fn mixed_wire_states_are_rejected() {
        let raw = SortConfigRaw {
            key: Some("age".into()),
            direction: None,
        };
        assert_eq!(
            SortConfig::try_from(raw),
            Err(SortConfigError::KeyWithoutDirection { key: "age".into() })
        );

        let raw = SortConfigRaw {
            key: None,
            direction: Some(Dir::Asc),
        };
        assert_eq!(
            SortConfig::try_from(raw),
            Err(SortConfigError::DirectionWithoutKey { direction: "asc" })
        );

        assert!(serde_json::from_str::<SortConfig>(r#"{"key":"age","direction":null}"#).is_err());
    }
}
