//! The loaded page: every configured table with its rows and state.

use tabsort::{JsonRow, TableState};
use tabsort_render::{TableProps, TableView};

use crate::config::{PageConfig, TableConfig};
use crate::loader::{self, LoadError};

/// One table: its configuration, current rows and interaction state.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub config: TableConfig,
    pub rows: Vec<JsonRow>,
    pub state: TableState,
}

impl LoadedTable {
    fn new(config: TableConfig) -> Self {
        LoadedTable {
            config,
            rows: Vec::new(),
            state: TableState::default(),
        }
    }

    /// Table name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Handles a click on the header of `key`.
    pub fn click(&mut self, key: &str) {
        self.state = self.state.click(key, &self.config.disabled);
    }

    /// Replaces the search text.
    pub fn search(&mut self, text: impl Into<String>) {
        self.state = self.state.with_search(text);
    }

    fn props(&self, loading: bool) -> TableProps {
        let mut props = TableProps::new(self.config.columns.clone())
            .disabled(self.config.disabled.clone())
            .loading(loading);
        props.title = self.config.title.clone();
        props
    }
}

/// All tables of a page, sharing one loading flag.
#[derive(Debug, Clone)]
pub struct Page {
    tables: Vec<LoadedTable>,
    loading: bool,
}

impl Page {
    /// A page whose tables are still loading.
    pub fn new(config: PageConfig) -> Self {
        Page {
            tables: config.tables.into_iter().map(LoadedTable::new).collect(),
            loading: true,
        }
    }

    /// Loads the rows of every table.
    ///
    /// All sources are read before any table is updated; on error no rows
    /// change and the loading flag keeps its previous value.
    pub fn load_all(&mut self) -> Result<(), LoadError> {
        let was_loading = self.loading;
        self.loading = true;

        let loaded: Result<Vec<_>, _> = self
            .tables
            .iter()
            .map(|t| loader::load(&t.config.data))
            .collect();

        match loaded {
            Ok(all) => {
                for (table, rows) in self.tables.iter_mut().zip(all) {
                    table.rows = rows;
                }
                self.loading = false;
                log::info!("loaded {} tables", self.tables.len());
                Ok(())
            }
            Err(err) => {
                self.loading = was_loading;
                Err(err)
            }
        }
    }

    /// Reloads every table, keeping sort and search state.
    pub fn reload(&mut self) -> Result<(), LoadError> {
        self.load_all()
    }

    /// Whether the rows have not been loaded yet.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn tables(&self) -> &[LoadedTable] {
        &self.tables
    }

    pub fn table(&self, name: &str) -> Option<&LoadedTable> {
        self.tables.iter().find(|t| t.name() == name)
    }

    pub fn table_mut(&mut self, name: &str) -> Option<&mut LoadedTable> {
        self.tables.iter_mut().find(|t| t.name() == name)
    }

    /// Table names, in page order.
    pub fn names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name()).collect()
    }

    /// Builds the view of one table.
    pub fn view(&self, table: &LoadedTable) -> TableView {
        TableView::build(&table.props(self.loading), &table.rows, &table.state)
    }

    /// Builds the views of every table, in page order.
    pub fn views(&self) -> Vec<TableView> {
        self.tables.iter().map(|t| self.view(t)).collect()
    }
}
