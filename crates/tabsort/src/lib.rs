//! Tabsort - search and tri-state column sorting for data tables.
//!
//! Tabsort is the engine behind a reusable table component. Given rows,
//! column descriptors and the table's interaction state, it produces the
//! rows to display. It supports:
//!
//! - Free-text search across every field of a row
//! - Single-column sorting that cycles ascending → descending → unsorted
//! - Per-column comparator kinds: text, date, currency
//! - Nulls that sort last in both directions
//! - Disabled columns that ignore sort clicks
//!
//! The engine is stateless. The host owns a [`TableState`], feeds events
//! through the pure transitions in [`state`], and calls
//! [`pipeline::derive`] to recompute the visible rows.
//!
//! # Quick Start
//!
//! ```rust
//! use tabsort::{display, pipeline, Column, ComparatorRegistry, DisabledColumns, JsonRow, Row, TableState};
//!
//! let rows: Vec<JsonRow> = serde_json::from_str(r#"[
//!     {"id": 1, "full_name": "Ada", "age": 30, "email": "ada@example.com"},
//!     {"id": 2, "full_name": "Bob", "age": null, "email": null},
//!     {"id": 3, "full_name": "Cyd", "age": 25, "email": "cyd@example.com"}
//! ]"#).unwrap();
//!
//! let columns = vec![Column::new("full_name", "Full Name"), Column::new("age", "Age")];
//! let disabled: DisabledColumns = ["email"].into_iter().collect();
//! let registry = ComparatorRegistry::from_columns(&columns);
//!
//! // Two clicks on "Age": ascending, then descending.
//! let state = TableState::new()
//!     .click("age", &disabled)
//!     .click("age", &disabled);
//!
//! let shown = pipeline::derive(&rows, &state, &registry);
//! let ages: Vec<_> = shown.iter().map(|r| display::display(&r.field("age"))).collect();
//! assert_eq!(ages, vec!["30", "25", "——"]);
//! ```
//!
//! # Ordering
//!
//! | Cell | Ascending | Descending |
//! |------|-----------|------------|
//! | number / numeric string | numeric | reversed |
//! | date (date columns) | by timestamp | reversed |
//! | `$` amount (currency columns) | numeric | reversed |
//! | text | case-insensitive | reversed |
//! | unparseable date | after all of the above | after all of the above |
//! | null / missing | last | last |
//!
//! Sorting is stable: rows that compare equal keep their filtered order.

mod column;
pub mod display;
mod error;
pub mod kind;
mod ordering;
pub mod pipeline;
mod row;
pub mod search;
pub mod sort;
pub mod state;
mod value;

// Re-export public API
pub use column::{Column, DisabledColumns};
pub use error::{Result, SortConfigError};
pub use kind::{ColumnKind, ComparatorRegistry, SortKey};
pub use ordering::{Dir, OrderBy, SortConfig};
pub use row::{json_value, JsonRow, Row, ID_FIELD};
pub use state::TableState;
pub use value::{Number, Value};
