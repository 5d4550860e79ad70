//! Page configuration.
//!
//! A page is a list of tables, each naming its data source, columns,
//! and disabled columns. Pages are written in YAML:
//!
//! ```yaml
//! tables:
//!   - name: users
//!     title: Developers
//!     data: { embedded: users }    # or { file: path/to/rows.json }
//!     disabled: [email]
//!     columns:
//!       - { key: full_name, label: Full Name }
//!       - { key: start_date, label: Start Date, kind: date }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tabsort::{Column, DisabledColumns};
use thiserror::Error;

const DEFAULT_PAGE: &str = include_str!("../data/page.yaml");

/// Error loading or validating a page configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("config defines no tables")]
    NoTables,

    #[error("table \"{0}\" is defined more than once")]
    DuplicateTable(String),

    #[error("table \"{table}\" has no columns")]
    NoColumns { table: String },

    #[error("table \"{table}\" disables \"{key}\", which is not one of its columns")]
    UnknownDisabledColumn { table: String, key: String },
}

/// Where a table's rows come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// A dataset bundled into the binary, by name.
    Embedded(String),
    /// A JSON file on disk.
    File(PathBuf),
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Embedded(name) => write!(f, "embedded:{}", name),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One table of the page.
///
/// Tables always mount unsorted; there is no initial sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// Unique name, used by `--table`.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub data: DataSource,
    #[serde(default)]
    pub disabled: DisabledColumns,
    pub columns: Vec<Column>,
}

impl TableConfig {
    fn has_column(&self, key: &str) -> bool {
        self.columns.iter().any(|c| c.key == key)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.columns.is_empty() {
            return Err(ConfigError::NoColumns {
                table: self.name.clone(),
            });
        }
        if let Some(key) = self.disabled.iter().find(|key| !self.has_column(key)) {
            return Err(ConfigError::UnknownDisabledColumn {
                table: self.name.clone(),
                key: key.to_string(),
            });
        }
        Ok(())
    }
}

/// The tables shown by the host, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub tables: Vec<TableConfig>,
}

impl PageConfig {
    /// Parses and validates a page from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let page: PageConfig = serde_yaml::from_str(text)?;
        page.validate()?;
        Ok(page)
    }

    /// Reads a page from a YAML file.
    ///
    /// Relative `file` data sources are resolved against the directory
    /// containing the config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut page = Self::from_yaml(&text)?;
        if let Some(base) = path.parent() {
            page.resolve_paths(base);
        }
        Ok(page)
    }

    /// The bundled page over the sample datasets.
    pub fn default_page() -> Result<Self, ConfigError> {
        Self::from_yaml(DEFAULT_PAGE)
    }

    /// Looks up a table by name.
    pub fn table(&self, name: &str) -> Option<&TableConfig> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Table names, in page order.
    pub fn names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tables.is_empty() {
            return Err(ConfigError::NoTables);
        }
        let mut seen = HashSet::new();
        for table in &self.tables {
            if !seen.insert(table.name.as_str()) {
                return Err(ConfigError::DuplicateTable(table.name.clone()));
            }
            table.validate()?;
        }
        Ok(())
    }

    fn resolve_paths(&mut self, base: &Path) {
        for table in &mut self.tables {
            if let DataSource::File(path) = &mut table.data {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabsort::ColumnKind;

    #[test]
    fn default_page_reproduces_both_tables() {
        let page = PageConfig::default_page().unwrap();
        assert_eq!(page.names(), ["users", "courses"]);

        let users = page.table("users").unwrap();
        assert_eq!(users.data, DataSource::Embedded("users".into()));
        assert!(users.disabled.contains("email"));
        let keys: Vec<_> = users.columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["full_name", "email", "gender", "age", "start_date"]);

        let courses = page.table("courses").unwrap();
        assert!(courses.disabled.is_empty());
        assert_eq!(courses.columns[3].label, "Course Price");
        assert_eq!(courses.columns[3].resolved_kind(), ColumnKind::Currency);
    }

    #[test]
    fn parses_file_source_and_explicit_kind() {
        let page = PageConfig::from_yaml(
            r#"
tables:
  - name: events
    data: { file: events.json }
    columns:
      - { key: when, label: When, kind: date }
"#,
        )
        .unwrap();
        let table = &page.tables[0];
        assert_eq!(table.data, DataSource::File("events.json".into()));
        assert_eq!(table.title, None);
        assert_eq!(table.columns[0].resolved_kind(), ColumnKind::Date);
    }

    #[test]
    fn rejects_empty_page() {
        let err = PageConfig::from_yaml("tables: []").unwrap_err();
        assert!(matches!(err, ConfigError::NoTables));
    }

    #[test]
    fn rejects_duplicate_names() {
        let yaml = r#"
tables:
  - { name: a, data: { embedded: users }, columns: [{ key: x, label: X }] }
  - { name: a, data: { embedded: courses }, columns: [{ key: y, label: Y }] }
"#;
        let err = PageConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateTable(name) if name == "a"));
    }

    #[test]
    fn rejects_disabled_key_outside_columns() {
        let yaml = r#"
tables:
  - { name: a, data: { embedded: users }, disabled: [email], columns: [{ key: x, label: X }] }
"#;
        let err = PageConfig::from_yaml(yaml).unwrap_err();
        assert_eq!(
            err.to_string(),
            "table \"a\" disables \"email\", which is not one of its columns"
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        let yaml = r#"
tables:
  - name: a
    data: { embedded: users }
    sort: { key: x, direction: asc }
    columns: [{ key: x, label: X }]
"#;
        assert!(matches!(
            PageConfig::from_yaml(yaml).unwrap_err(),
            ConfigError::Yaml(_)
        ));
    }

    #[test]
    fn rejects_table_without_columns() {
        let yaml = "tables:\n  - { name: a, data: { embedded: users }, columns: [] }\n";
        assert!(matches!(
            PageConfig::from_yaml(yaml).unwrap_err(),
            ConfigError::NoColumns { .. }
        ));
    }
}
