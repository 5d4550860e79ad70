//! Free-text search across row fields.

use std::borrow::Cow;

use crate::row::Row;
use crate::value::Value;

/// Returns `true` if any field of `row` contains `needle`.
///
/// `needle` must already be lower-cased. Null fields never match.
pub fn row_matches<R: Row + ?Sized>(row: &R, needle: &str) -> bool {
    row.values().iter().any(|value| value_matches(value, needle))
}

fn value_matches(value: &Value<'_>, needle: &str) -> bool {
    value
        .to_text()
        .is_some_and(|text| text.to_lowercase().contains(needle))
}

/// Filters rows by a free-text query.
///
/// A row is kept when at least one of its field values, in canonical
/// string form and lower-cased, contains the lower-cased query. Matching
/// rows keep their relative order. An empty query keeps every row.
///
/// # Example
///
/// ```
/// use tabsort::{search, JsonRow};
///
/// let rows: Vec<JsonRow> = serde_json::from_str(r#"[
///     {"id": 1, "github_username": "OctoCat"},
///     {"id": 2, "github_username": "rustacean"}
/// ]"#).unwrap();
///
/// let found = search::filter(&rows, "octo");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].as_map()["id"], 1);
/// ```
pub fn filter<'a, R: Row>(rows: &'a [R], query: &str) -> Cow<'a, [R]>
where
    R: Clone,
{
    if query.is_empty() {
        return Cow::Borrowed(rows);
    }
    Cow::Owned(filter_refs(rows.iter(), query).into_iter().cloned().collect())
}

/// Filters rows by a free-text query, returning references into `rows`.
///
/// Same matching rules as [`filter`], without cloning rows.
pub fn filter_refs<'a, R, I>(rows: I, query: &str) -> Vec<&'a R>
where
    R: Row + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let needle = query.to_lowercase();
    let matched: Vec<&'a R> = rows
        .into_iter()
        .filter(|row| needle.is_empty() || row_matches(*row, &needle))
        .collect();
    log::trace!("search {:?} matched {} rows", query, matched.len());
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::JsonRow;
    use serde_json::json;

    fn rows() -> Vec<JsonRow> {
        vec![
            json!({"id": 1, "name": "Ada Lovelace", "email": null, "age": 36}),
            json!({"id": 2, "name": "Alan Turing", "email": "alan@example.com", "age": 41}),
            json!({"id": 3, "name": "Grace Hopper", "email": "grace@navy.mil", "age": null}),
        ]
        .into_iter()
        .map(|v| JsonRow::from_json(v).unwrap())
        .collect()
    }

    fn ids(rows: &[&JsonRow]) -> Vec<i64> {
        rows.iter().map(|r| r.as_map()["id"].as_i64().unwrap()).collect()
    }

    #[test]
    fn empty_query_borrows_input() {
        let rows = rows();
        let result = filter(&rows, "");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn case_insensitive_substring() {
        let rows = rows();
        assert_eq!(ids(&filter_refs(&rows, "TURING")), vec![2]);
        assert_eq!(ids(&filter_refs(&rows, "a")), vec![1, 2, 3]);
    }

    #[test]
    fn numbers_match_by_decimal_form() {
        let rows = rows();
        assert_eq!(ids(&filter_refs(&rows, "41")), vec![2]);
        // The id field is searched too.
        assert_eq!(ids(&filter_refs(&rows, "3")), vec![1, 3]);
    }

    #[test]
    fn nulls_never_match() {
        let rows = rows();
        assert!(filter_refs(&rows, "null").is_empty());
    }

    #[test]
    fn no_match_returns_empty() {
        let rows = rows();
        assert!(filter(&rows, "zzz").is_empty());
    }

    #[test]
    fn empty_rows() {
        let rows: Vec<JsonRow> = Vec::new();
        assert!(filter(&rows, "x").is_empty());
        assert!(filter(&rows, "").is_empty());
    }
}
