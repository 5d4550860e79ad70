//! Sort-state transitions.
//!
//! Clicking a column header cycles that column through
//! ascending → descending → unsorted → ascending. Clicking a different
//! column always starts it at ascending and forgets the previous column.
//!
//! ```text
//!            click k               click k              click k
//! unsorted ──────────▶ (k, asc) ──────────▶ (k, desc) ──────────▶ unsorted
//!                          ▲                    │
//!                          └──── click j ≠ k ───┘  (→ (j, asc))
//! ```
//!
//! The functions here are pure: the host owns the [`TableState`] and
//! replaces it with whatever the transition returns.

use serde::{Deserialize, Serialize};

use crate::column::DisabledColumns;
use crate::ordering::{Dir, SortConfig};

/// Next sort configuration after a click on `key`.
///
/// This is the transition table itself; it does not know about disabled
/// columns. Use [`dispatch_click`] at the event boundary.
///
/// # Example
///
/// ```
/// use tabsort::{state, SortConfig};
///
/// let s1 = state::next_sort(&SortConfig::unsorted(), "age");
/// assert_eq!(s1, SortConfig::asc("age"));
/// let s2 = state::next_sort(&s1, "age");
/// assert_eq!(s2, SortConfig::desc("age"));
/// let s3 = state::next_sort(&s2, "age");
/// assert!(s3.is_unsorted());
/// ```
pub fn next_sort(current: &SortConfig, key: &str) -> SortConfig {
    match current.direction_of(key) {
        None => SortConfig::asc(key),
        Some(Dir::Asc) => SortConfig::desc(key),
        Some(Dir::Desc) => SortConfig::unsorted(),
    }
}

/// Handles a header click, ignoring clicks on disabled columns.
pub fn dispatch_click(current: &SortConfig, key: &str, disabled: &DisabledColumns) -> SortConfig {
    if disabled.contains(key) {
        log::debug!("ignoring click on disabled column '{}'", key);
        return current.clone();
    }
    let next = next_sort(current, key);
    log::debug!("sort '{}' clicked: {} -> {}", key, current, next);
    next
}

/// Interaction state of one table instance: the sort and the search text.
///
/// The default value is the canonical empty state, which is what a freshly
/// mounted table starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    /// Current sort configuration.
    pub sort: SortConfig,
    /// Current search text; empty means no filter.
    pub search: String,
}

impl TableState {
    /// The canonical empty state.
    pub fn new() -> Self {
        TableState::default()
    }

    /// State after a click on the header of `key`.
    pub fn click(&self, key: &str, disabled: &DisabledColumns) -> TableState {
        TableState {
            sort: dispatch_click(&self.sort, key, disabled),
            search: self.search.clone(),
        }
    }

    /// State after the search text changed.
    ///
    /// The sort is kept: searching narrows the rows, it does not reset
    /// their order.
    pub fn with_search(&self, search: impl Into<String>) -> TableState {
        TableState {
            sort: self.sort.clone(),
            search: search.into(),
        }
    }
}
