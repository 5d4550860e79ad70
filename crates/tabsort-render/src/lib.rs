//! View model and terminal rendering for tabsort tables.
//!
//! [`TableView::build`] runs the tabsort pipeline for one table and
//! captures what a host draws: header cells with their sort arrows, and a
//! body that is a loading placeholder, an empty placeholder, or the
//! display rows with nulls already replaced by the placeholder text.
//!
//! [`TextTable`] draws a view for the terminal. The view itself is plain
//! serializable data, so other hosts can consume it as JSON.

mod decorator;
mod util;
mod view;

pub use decorator::{header_text, BorderStyle, Styles, TextTable};
pub use util::{display_width, pad_right, truncate_end};
pub use view::{
    ArrowState, Arrows, Body, HeaderCell, RowView, Stripe, TableProps, TableView, EMPTY_MESSAGE,
    LOADING_MESSAGE,
};
