//! The table view model.
//!
//! [`TableView`] is everything a renderer needs to draw one table: the
//! header cells with their sort-arrow states, and a body that is either a
//! loading placeholder, an empty placeholder, or the display rows. It is
//! plain data and serializes to JSON for non-terminal hosts.

use serde::Serialize;
use tabsort::{
    display, pipeline, Column, ComparatorRegistry, Dir, DisabledColumns, Row, TableState,
};

/// Message shown in place of rows when nothing matches.
pub const EMPTY_MESSAGE: &str = "No data found";

/// Message shown in place of the table while data loads.
pub const LOADING_MESSAGE: &str = "Loading...";

/// State of one sort arrow in a header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowState {
    /// The column is sorted in this arrow's direction.
    Active,
    /// The column is not the sort column.
    Neutral,
    /// The column is sorted in the opposite direction.
    Hidden,
}

/// The up (ascending) and down (descending) arrows of a sortable header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Arrows {
    /// Ascending arrow.
    pub up: ArrowState,
    /// Descending arrow.
    pub down: ArrowState,
}

impl Arrows {
    /// Arrow states for a column sorted in `dir`, or unsorted for `None`.
    pub fn for_direction(dir: Option<Dir>) -> Self {
        match dir {
            Some(Dir::Asc) => Arrows {
                up: ArrowState::Active,
                down: ArrowState::Hidden,
            },
            Some(Dir::Desc) => Arrows {
                up: ArrowState::Hidden,
                down: ArrowState::Active,
            },
            None => Arrows {
                up: ArrowState::Neutral,
                down: ArrowState::Neutral,
            },
        }
    }
}

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    /// Column key.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Whether clicking the header sorts the column.
    pub sortable: bool,
    /// Sort arrows; absent for disabled columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrows: Option<Arrows>,
}

/// Zebra striping, counted from one: the first row is odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stripe {
    /// Rows one, three, five and so on.
    Odd,
    /// Rows two, four, six and so on.
    Even,
}

impl Stripe {
    fn for_index(index: usize) -> Self {
        if (index + 1) % 2 == 0 {
            Stripe::Even
        } else {
            Stripe::Odd
        }
    }
}

/// One display row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    /// Rendering key, taken from the row's identifier.
    pub key: String,
    /// Display text per column, in column order.
    pub cells: Vec<String>,
    /// Zebra stripe of this row.
    pub stripe: Stripe,
    /// Whether this is the last row (drawn without a trailing separator).
    pub last: bool,
}

/// Table body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Body {
    /// Data is still loading; the table is not drawn.
    Loading { message: String },
    /// No rows to show; one placeholder cell spans every column.
    Empty { colspan: usize, message: String },
    /// Rows to show, in display order.
    Rows { rows: Vec<RowView> },
}

/// Inputs of one table instance that do not change with interaction.
#[derive(Debug, Clone, Default)]
pub struct TableProps {
    /// Displayed columns, in order.
    pub columns: Vec<Column>,
    /// Optional caption above the table.
    pub title: Option<String>,
    /// Columns that ignore sort clicks.
    pub disabled: DisabledColumns,
    /// Whether the data source is still loading.
    pub loading: bool,
}

impl TableProps {
    /// Props with the given columns, no title, nothing disabled.
    pub fn new(columns: Vec<Column>) -> Self {
        TableProps {
            columns,
            ..TableProps::default()
        }
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the disabled columns.
    pub fn disabled(mut self, disabled: DisabledColumns) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the loading flag.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Comparator kinds for these columns.
    pub fn registry(&self) -> ComparatorRegistry {
        ComparatorRegistry::from_columns(&self.columns)
    }
}

/// Everything needed to draw one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    /// Caption above the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Current search text, echoed into the search box.
    pub search: String,
    /// One cell per column, in column order.
    pub headers: Vec<HeaderCell>,
    /// Loading placeholder, empty placeholder, or rows.
    pub body: Body,
}

impl TableView {
    /// Builds the view for `rows` under `state`.
    ///
    /// While `props.loading` is set the rows are neither searched nor
    /// sorted and the body is [`Body::Loading`].
    pub fn build<R: Row>(props: &TableProps, rows: &[R], state: &TableState) -> Self {
        let headers = props
            .columns
            .iter()
            .map(|column| header_cell(column, props, state))
            .collect();

        let body = if props.loading {
            Body::Loading {
                message: LOADING_MESSAGE.to_string(),
            }
        } else {
            let shown = pipeline::derive(rows, state, &props.registry());
            body_for(&shown, &props.columns)
        };

        TableView {
            title: props.title.clone(),
            search: state.search.clone(),
            headers,
            body,
        }
    }

    /// Display rows, or an empty slice for loading and empty bodies.
    pub fn rows(&self) -> &[RowView] {
        match &self.body {
            Body::Rows { rows } => rows,
            _ => &[],
        }
    }

    /// Returns `true` while the body is a loading placeholder.
    pub fn is_loading(&self) -> bool {
        matches!(self.body, Body::Loading { .. })
    }
}

fn header_cell(column: &Column, props: &TableProps, state: &TableState) -> HeaderCell {
    let sortable = !props.disabled.contains(&column.key);
    HeaderCell {
        key: column.key.clone(),
        label: column.label.clone(),
        sortable,
        arrows: sortable.then(|| Arrows::for_direction(state.sort.direction_of(&column.key))),
    }
}

fn body_for<R: Row>(shown: &[&R], columns: &[Column]) -> Body {
    if shown.is_empty() {
        return Body::Empty {
            colspan: columns.len(),
            message: EMPTY_MESSAGE.to_string(),
        };
    }

    let count = shown.len();
    let rows = shown
        .iter()
        .enumerate()
        .map(|(index, row)| RowView {
            key: row.row_key().into_owned(),
            cells: columns
                .iter()
                .map(|c| display::display(&row.field(&c.key)).into_owned())
                .collect(),
            stripe: Stripe::for_index(index),
            last: index + 1 == count,
        })
        .collect();
    Body::Rows { rows }
}
