//! Filter-then-sort composition.

use crate::column::Column;
use crate::kind::ComparatorRegistry;
use crate::row::Row;
use crate::search;
use crate::sort;
use crate::state::TableState;

/// Rows ready for display: searched with `state.search`, then ordered by
/// `state.sort`.
///
/// Recomputing is cheap and pure; hosts call this whenever the rows or
/// the state change and may cache the result however they like.
///
/// # Example
///
/// ```
/// use tabsort::{pipeline, ComparatorRegistry, DisabledColumns, JsonRow, TableState};
///
/// let rows: Vec<JsonRow> = serde_json::from_str(r#"[
///     {"id": 1, "name": "Lin", "money": "$50"},
///     {"id": 2, "name": "Sam", "money": "$10"},
///     {"id": 3, "name": "Ana", "money": "$30"}
/// ]"#).unwrap();
///
/// let state = TableState::new()
///     .with_search("a")
///     .click("money", &DisabledColumns::new());
/// let shown = pipeline::derive(&rows, &state, &ComparatorRegistry::new());
/// let names: Vec<_> = shown.iter().map(|r| r.as_map()["name"].as_str().unwrap()).collect();
/// assert_eq!(names, vec!["Sam", "Ana"]);
/// ```
pub fn derive<'a, R: Row>(
    rows: &'a [R],
    state: &TableState,
    registry: &ComparatorRegistry,
) -> Vec<&'a R> {
    let filtered = search::filter_refs(rows, &state.search);
    sort::sort_refs(filtered, &state.sort, registry)
}

/// Same as [`derive`], resolving comparator kinds from `columns`.
pub fn derive_for_columns<'a, R: Row>(
    rows: &'a [R],
    columns: &[Column],
    state: &TableState,
) -> Vec<&'a R> {
    derive(rows, state, &ComparatorRegistry::from_columns(columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::DisabledColumns;
    use crate::ordering::SortConfig;
    use crate::row::JsonRow;
    use serde_json::json;

    fn courses() -> Vec<JsonRow> {
        vec![
            json!({"id": 1, "name": "Ana", "github_username": "ana-dev", "money": "$50"}),
            json!({"id": 2, "name": "Bo", "github_username": "bo42", "money": "$10"}),
            json!({"id": 3, "name": "Cy", "github_username": "GitHubber", "money": "$30"}),
        ]
        .into_iter()
        .map(|v| JsonRow::from_json(v).unwrap())
        .collect()
    }

    fn ids(rows: &[&JsonRow]) -> Vec<i64> {
        rows.iter().map(|r| r.as_map()["id"].as_i64().unwrap()).collect()
    }

    #[test]
    fn empty_state_is_identity() {
        let rows = courses();
        let shown = derive(&rows, &TableState::new(), &ComparatorRegistry::new());
        assert_eq!(ids(&shown), vec![1, 2, 3]);
    }

    #[test]
    fn filter_then_sort() {
        let rows = courses();
        let state = TableState {
            sort: SortConfig::desc("money"),
            search: "a".into(),
        };
        // Only Ana's row contains an "a".
        let shown = derive(&rows, &state, &ComparatorRegistry::new());
        assert_eq!(ids(&shown), vec![1]);

        let state = state.with_search("b");
        let shown = derive(&rows, &state, &ComparatorRegistry::new());
        assert_eq!(ids(&shown), vec![3, 2]);
    }

    #[test]
    fn columns_drive_the_registry() {
        let rows: Vec<JsonRow> = vec![
            json!({"id": 1, "price": "$9"}),
            json!({"id": 2, "price": "$10"}),
        ]
        .into_iter()
        .map(|v| JsonRow::from_json(v).unwrap())
        .collect();
        let state = TableState::new().click("price", &DisabledColumns::new());

        let text = vec![Column::new("price", "Price")];
        assert_eq!(ids(&derive_for_columns(&rows, &text, &state)), vec![2, 1]);

        let currency = vec![Column::new("price", "Price").kind(crate::ColumnKind::Currency)];
        assert_eq!(ids(&derive_for_columns(&rows, &currency, &state)), vec![1, 2]);
    }

    #[test]
    fn empty_rows() {
        let rows: Vec<JsonRow> = Vec::new();
        let state = TableState::new().with_search("x");
        assert!(derive(&rows, &state, &ComparatorRegistry::new()).is_empty());
    }
}
