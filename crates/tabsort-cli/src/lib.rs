//! Terminal host for tabsort tables.
//!
//! The binary reads a page configuration (YAML), loads every table's rows,
//! and either renders the tables once (`tabsort show`) or runs a
//! line-oriented event loop over one table (`tabsort interactive`).

pub mod config;
pub mod loader;
pub mod page;
pub mod repl;

pub use config::{ConfigError, DataSource, PageConfig, TableConfig};
pub use loader::LoadError;
pub use page::{LoadedTable, Page};
pub use repl::{CommandError, Event, Session};
