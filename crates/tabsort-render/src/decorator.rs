//! Text rendering of a [`TableView`] with borders, header arrows and
//! placeholder rows.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use tabsort::{Column, JsonRow, SortConfig, TableState};
//! use tabsort_render::{BorderStyle, TableProps, TableView, TextTable};
//!
//! let rows: Vec<JsonRow> = serde_json::from_value(json!([
//!     {"id": 1, "name": "Ana", "money": "$50"},
//!     {"id": 2, "name": "Bo", "money": "$10"}
//! ])).unwrap();
//! let props = TableProps::new(vec![Column::new("name", "Name"), Column::new("money", "Price")]);
//! let state = TableState { sort: SortConfig::asc("money"), search: String::new() };
//!
//! let view = TableView::build(&props, &rows, &state);
//! let text = TextTable::new().border(BorderStyle::Ascii).render(&view);
//! assert_eq!(text, "\
//! +---------+----------+
//! | Name △▽ | Price ▲  |
//! +---------+----------+
//! | Bo      | $10      |
//! +---------+----------+
//! | Ana     | $50      |
//! +---------+----------+
//! Search: (none)");
//! ```

use console::Style;

use crate::util::{display_width, pad_right, truncate_end};
use crate::view::{ArrowState, Arrows, Body, HeaderCell, Stripe, TableView};

/// Border style for table decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderStyle {
    /// No borders; columns are separated by spaces.
    None,
    /// ASCII borders: +, -, |
    Ascii,
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    #[default]
    Light,
    /// Heavy Unicode box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    Heavy,
    /// Double-line Unicode box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    Double,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
}

impl BorderStyle {
    /// Parses a style name as accepted on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "none" => Some(BorderStyle::None),
            "ascii" => Some(BorderStyle::Ascii),
            "light" => Some(BorderStyle::Light),
            "heavy" => Some(BorderStyle::Heavy),
            "double" => Some(BorderStyle::Double),
            "rounded" => Some(BorderStyle::Rounded),
            _ => None,
        }
    }

    fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::None => BorderChars::empty(),
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
            BorderStyle::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                left_t: '┣',
                cross: '╋',
                right_t: '┫',
                top_t: '┳',
                bottom_t: '┻',
            },
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                left_t: '╠',
                cross: '╬',
                right_t: '╣',
                top_t: '╦',
                bottom_t: '╩',
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
        }
    }
}

/// Box-drawing characters for a border style.
#[derive(Clone, Copy, Debug)]
struct BorderChars {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    left_t: char,
    cross: char,
    right_t: char,
    top_t: char,
    bottom_t: char,
}

impl BorderChars {
    fn empty() -> Self {
        BorderChars {
            horizontal: ' ',
            vertical: ' ',
            top_left: ' ',
            top_right: ' ',
            bottom_left: ' ',
            bottom_right: ' ',
            left_t: ' ',
            cross: ' ',
            right_t: ' ',
            top_t: ' ',
            bottom_t: ' ',
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum LineType {
    Top,
    Middle,
    /// Separator above a row that spans every column.
    MiddleClosing,
    Bottom,
    /// Bottom border below a row that spans every column.
    BottomSpanned,
}

/// Terminal styles applied after layout, so escape codes never affect
/// column widths.
#[derive(Clone, Debug)]
pub struct Styles {
    /// Caption above the table.
    pub title: Style,
    /// Header labels.
    pub header: Style,
    /// The arrow of the active sort direction.
    pub active_arrow: Style,
    /// Both arrows of an unsorted, sortable column.
    pub neutral_arrow: Style,
    /// Loading and empty messages.
    pub placeholder: Style,
    /// Every second row.
    pub even_row: Style,
}

impl Styles {
    /// Styles that emit no escape codes.
    pub fn plain() -> Self {
        Styles {
            title: Style::new(),
            header: Style::new(),
            active_arrow: Style::new(),
            neutral_arrow: Style::new(),
            placeholder: Style::new(),
            even_row: Style::new(),
        }
    }

    /// The default colored styles.
    pub fn colored() -> Self {
        Styles {
            title: Style::new().bold().force_styling(true),
            header: Style::new().bold().cyan().force_styling(true),
            active_arrow: Style::new().bold().yellow().force_styling(true),
            neutral_arrow: Style::new().dim().force_styling(true),
            placeholder: Style::new().italic().dim().force_styling(true),
            even_row: Style::new().dim().force_styling(true),
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Styles::plain()
    }
}

const UP_ACTIVE: char = '▲';
const UP_NEUTRAL: char = '△';
const DOWN_ACTIVE: char = '▼';
const DOWN_NEUTRAL: char = '▽';
const TRUNCATION_MARKER: &str = "…";

/// Renders table views as text.
#[derive(Clone, Debug)]
pub struct TextTable {
    border: BorderStyle,
    styles: Styles,
    max_cell_width: Option<usize>,
    show_search: bool,
}

impl Default for TextTable {
    fn default() -> Self {
        TextTable::new()
    }
}

impl TextTable {
    /// A renderer with light borders, plain styles and no width limit.
    pub fn new() -> Self {
        TextTable {
            border: BorderStyle::Light,
            styles: Styles::plain(),
            max_cell_width: None,
            show_search: true,
        }
    }

    /// Set the border style.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Set the styles.
    pub fn styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Truncate cells wider than `width` columns.
    pub fn max_cell_width(mut self, width: usize) -> Self {
        self.max_cell_width = Some(width);
        self
    }

    /// Whether to print the search line under the table.
    pub fn show_search(mut self, show: bool) -> Self {
        self.show_search = show;
        self
    }

    /// Render the complete table: title, borders, header, body and the
    /// search line.
    ///
    /// While loading, only the loading message is printed.
    pub fn render(&self, view: &TableView) -> String {
        if let Body::Loading { message } = &view.body {
            return self.styles.placeholder.apply_to(message).to_string();
        }

        let mut output = Vec::new();
        if let Some(title) = &view.title {
            output.push(self.styles.title.apply_to(title).to_string());
        }

        let headers: Vec<String> = view
            .headers
            .iter()
            .map(|h| self.fit(&header_text(h)))
            .collect();
        let data: Vec<Vec<String>> = view
            .rows()
            .iter()
            .map(|row| row.cells.iter().map(|c| self.fit(c)).collect())
            .collect();
        let widths = column_widths(&headers, &data);

        self.push_line(&mut output, &widths, LineType::Top);
        output.push(self.header_row(&view.headers, &headers, &widths));

        match &view.body {
            Body::Rows { rows } => {
                self.push_line(&mut output, &widths, LineType::Middle);
                for (row, cells) in rows.iter().zip(&data) {
                    let line = self.wrap_row(&self.join_cells(cells, &widths));
                    let line = match row.stripe {
                        Stripe::Even => self.styles.even_row.apply_to(line).to_string(),
                        Stripe::Odd => line,
                    };
                    output.push(line);
                    if !row.last {
                        self.push_line(&mut output, &widths, LineType::Middle);
                    }
                }
                self.push_line(&mut output, &widths, LineType::Bottom);
            }
            Body::Empty { message, .. } => {
                self.push_line(&mut output, &widths, LineType::MiddleClosing);
                output.push(self.spanning_row(message, &widths));
                self.push_line(&mut output, &widths, LineType::BottomSpanned);
            }
            Body::Loading { .. } => {}
        }

        if self.show_search {
            let search = if view.search.is_empty() {
                "(none)".to_string()
            } else {
                format!("\"{}\"", view.search)
            };
            output.push(format!("Search: {}", search));
        }

        output.join("\n")
    }

    fn fit(&self, text: &str) -> String {
        match self.max_cell_width {
            Some(max) => truncate_end(text, max, TRUNCATION_MARKER),
            None => text.to_string(),
        }
    }

    fn header_row(&self, cells: &[HeaderCell], texts: &[String], widths: &[usize]) -> String {
        let styled: Vec<String> = cells
            .iter()
            .zip(texts)
            .zip(widths)
            .map(|((cell, text), &width)| {
                let padding = width.saturating_sub(display_width(text));
                let styled = self.style_header(cell, text);
                format!("{}{}", styled, " ".repeat(padding))
            })
            .collect();
        self.wrap_row(&styled.join(self.column_separator().as_str()))
    }

    /// Styles the label and arrows of an already laid-out header text.
    fn style_header(&self, cell: &HeaderCell, text: &str) -> String {
        let Some(arrows) = cell.arrows else {
            return self.styles.header.apply_to(text).to_string();
        };
        let suffix = arrow_text(arrows);
        match text.strip_suffix(&suffix) {
            Some(label) => format!(
                "{}{}{}",
                self.styles.header.apply_to(label),
                self.style_arrow(arrows.up, up_char(arrows.up)),
                self.style_arrow(arrows.down, down_char(arrows.down)),
            ),
            // Truncated: arrows were cut, style the whole text as a header.
            None => self.styles.header.apply_to(text).to_string(),
        }
    }

    fn style_arrow(&self, state: ArrowState, ch: char) -> String {
        match state {
            ArrowState::Active => self.styles.active_arrow.apply_to(ch).to_string(),
            ArrowState::Neutral => self.styles.neutral_arrow.apply_to(ch).to_string(),
            ArrowState::Hidden => ch.to_string(),
        }
    }

    fn join_cells(&self, cells: &[String], widths: &[usize]) -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, &width)| pad_right(cell, width))
            .collect::<Vec<_>>()
            .join(self.column_separator().as_str())
    }

    fn spanning_row(&self, message: &str, widths: &[usize]) -> String {
        let inner = spanned_width(widths, display_width(&self.column_separator()));
        let text = truncate_end(message, inner, TRUNCATION_MARKER);
        let padding = inner.saturating_sub(display_width(&text));
        let styled = self.styles.placeholder.apply_to(text).to_string();
        self.wrap_row(&format!("{}{}", styled, " ".repeat(padding)))
    }

    fn column_separator(&self) -> String {
        let chars = self.border.chars();
        if self.border == BorderStyle::None {
            "  ".to_string()
        } else {
            format!(" {} ", chars.vertical)
        }
    }

    /// Wrap a row content with vertical borders.
    fn wrap_row(&self, content: &str) -> String {
        if self.border == BorderStyle::None {
            return content.to_string();
        }

        let chars = self.border.chars();
        format!("{} {} {}", chars.vertical, content, chars.vertical)
    }

    fn push_line(&self, output: &mut Vec<String>, widths: &[usize], line_type: LineType) {
        if self.border == BorderStyle::None {
            return;
        }
        output.push(self.horizontal_line(widths, line_type));
    }

    /// Generate a horizontal line with joints at the column boundaries.
    fn horizontal_line(&self, widths: &[usize], line_type: LineType) -> String {
        let chars = self.border.chars();
        let (left, joint, right) = match line_type {
            LineType::Top => (chars.top_left, chars.top_t, chars.top_right),
            LineType::Middle => (chars.left_t, chars.cross, chars.right_t),
            LineType::MiddleClosing => (chars.left_t, chars.bottom_t, chars.right_t),
            LineType::Bottom => (chars.bottom_left, chars.bottom_t, chars.bottom_right),
            LineType::BottomSpanned => (chars.bottom_left, chars.horizontal, chars.bottom_right),
        };

        let segments: Vec<String> = widths
            .iter()
            .map(|&w| std::iter::repeat_n(chars.horizontal, w + 2).collect())
            .collect();
        format!("{}{}{}", left, segments.join(joint.to_string().as_str()), right)
    }
}

fn up_char(state: ArrowState) -> char {
    match state {
        ArrowState::Active => UP_ACTIVE,
        ArrowState::Neutral => UP_NEUTRAL,
        ArrowState::Hidden => ' ',
    }
}

fn down_char(state: ArrowState) -> char {
    match state {
        ArrowState::Active => DOWN_ACTIVE,
        ArrowState::Neutral => DOWN_NEUTRAL,
        ArrowState::Hidden => ' ',
    }
}

fn arrow_text(arrows: Arrows) -> String {
    format!("{}{}", up_char(arrows.up), down_char(arrows.down))
}

/// Plain header text: the label, followed by the two arrow slots for
/// sortable columns.
pub fn header_text(cell: &HeaderCell) -> String {
    match cell.arrows {
        Some(arrows) => format!("{} {}", cell.label, arrow_text(arrows)),
        None => cell.label.clone(),
    }
}

fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| display_width(cell))
                .chain(std::iter::once(display_width(header)))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn spanned_width(widths: &[usize], separator_width: usize) -> usize {
    widths.iter().sum::<usize>() + separator_width * widths.len().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{TableProps, TableView};
    use serde_json::json;
    use tabsort::{Column, JsonRow, SortConfig, TableState};

    fn rows() -> Vec<JsonRow> {
        serde_json::from_value(json!([
            {"id": 1, "name": "Ana", "email": null},
            {"id": 2, "name": "Bo", "email": "bo@x.io"}
        ]))
        .unwrap()
    }

    fn props() -> TableProps {
        TableProps::new(vec![Column::new("name", "Name"), Column::new("email", "Email")])
            .disabled(["email"].into_iter().collect())
    }

    #[test]
    fn border_style_names() {
        assert_eq!(BorderStyle::from_name("ASCII"), Some(BorderStyle::Ascii));
        assert_eq!(BorderStyle::from_name("rounded"), Some(BorderStyle::Rounded));
        assert_eq!(BorderStyle::from_name("dotted"), None);
    }

    #[test]
    fn header_text_with_and_without_arrows() {
        let view = TableView::build(&props(), &rows(), &TableState::new());
        assert_eq!(header_text(&view.headers[0]), "Name △▽");
        assert_eq!(header_text(&view.headers[1]), "Email");
    }

    #[test]
    fn renders_descending_with_null_placeholder() {
        let state = TableState {
            sort: SortConfig::desc("name"),
            search: String::new(),
        };
        let view = TableView::build(&props().title("People"), &rows(), &state);
        let text = TextTable::new().border(BorderStyle::Ascii).render(&view);
        assert_eq!(
            text,
            "\
People
+---------+---------+
| Name  ▼ | Email   |
+---------+---------+
| Bo      | bo@x.io |
+---------+---------+
| Ana     | ——      |
+---------+---------+
Search: (none)"
        );
    }

    #[test]
    fn renders_empty_placeholder_across_columns() {
        let state = TableState::new().with_search("zzz");
        let view = TableView::build(&props(), &rows(), &state);
        let text = TextTable::new().border(BorderStyle::Light).render(&view);
        assert_eq!(
            text,
            "\
┌─────────┬───────┐
│ Name △▽ │ Email │
├─────────┴───────┤
│ No data found   │
└─────────────────┘
Search: \"zzz\""
        );
    }

    #[test]
    fn renders_loading_only() {
        let view = TableView::build(
            &props().title("People").loading(true),
            &rows(),
            &TableState::new(),
        );
        let text = TextTable::new().render(&view);
        assert_eq!(text, "Loading...");
    }

    #[test]
    fn borderless_layout() {
        let view = TableView::build(&props(), &rows(), &TableState::new());
        let text = TextTable::new()
            .border(BorderStyle::None)
            .show_search(false)
            .render(&view);
        assert_eq!(
            text,
            "Name △▽  Email  \nAna      ——     \nBo       bo@x.io"
        );
    }

    #[test]
    fn truncates_wide_cells() {
        let view = TableView::build(&props(), &rows(), &TableState::new());
        let text = TextTable::new()
            .border(BorderStyle::None)
            .show_search(false)
            .max_cell_width(4)
            .render(&view);
        assert_eq!(text, "Nam…  Ema…\nAna   ——  \nBo    bo@…");
    }

    #[test]
    fn colored_styles_do_not_change_layout() {
        let view = TableView::build(&props(), &rows(), &TableState::new());
        let plain = TextTable::new().render(&view);
        let colored = TextTable::new().styles(Styles::colored()).render(&view);
        assert_ne!(plain, colored);
        assert_eq!(console::strip_ansi_codes(&colored), plain);
    }

    #[test]
    fn dims_even_rows_only() {
        let view = TableView::build(&props(), &rows(), &TableState::new());
        let colored = TextTable::new()
            .border(BorderStyle::None)
            .show_search(false)
            .styles(Styles::colored())
            .render(&view);
        let lines: Vec<&str> = colored.lines().collect();
        assert_eq!(lines[1], "Ana      ——     ");
        assert_ne!(lines[2], "Bo       bo@x.io");
        assert_eq!(console::strip_ansi_codes(lines[2]), "Bo       bo@x.io");
    }
}
