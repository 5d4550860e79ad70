//! The sort engine.
//!
//! Rows are ordered by a single column under a [`SortConfig`]. Each row's
//! cell is resolved to a [`SortKey`] once, through the column's
//! [`ColumnKind`](crate::ColumnKind), and the keys are then sorted with a
//! stable sort so rows that compare equal keep their input order.

use crate::kind::{ComparatorRegistry, SortKey};
use crate::ordering::SortConfig;
use crate::row::Row;

/// Orders row references according to `config`.
///
/// The input is never reordered in place. With an unsorted config the
/// rows come back in input order.
pub fn sort_refs<'a, R, I>(rows: I, config: &SortConfig, registry: &ComparatorRegistry) -> Vec<&'a R>
where
    R: Row + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let Some(order) = config.order() else {
        return rows.into_iter().collect();
    };

    let kind = registry.kind(&order.key);
    let mut keyed: Vec<(SortKey, &'a R)> = rows
        .into_iter()
        .map(|row| (kind.sort_key(&row.field(&order.key)), row))
        .collect();

    // `sort_by` is stable: equal keys keep their relative order.
    keyed.sort_by(|(a, _), (b, _)| a.compare(b, order.dir));

    log::trace!(
        "sorted {} rows by {} ({} column)",
        keyed.len(),
        config,
        kind
    );
    keyed.into_iter().map(|(_, row)| row).collect()
}

/// Returns a sorted copy of `rows`.
///
/// # Example
///
/// ```
/// use tabsort::{sort, ComparatorRegistry, JsonRow, SortConfig};
///
/// let rows: Vec<JsonRow> = serde_json::from_str(r#"[
///     {"id": 1, "age": 30},
///     {"id": 2, "age": null},
///     {"id": 3, "age": 25}
/// ]"#).unwrap();
///
/// let registry = ComparatorRegistry::new();
/// let sorted = sort::sort(&rows, &SortConfig::asc("age"), &registry);
/// let ids: Vec<_> = sorted.iter().map(|r| r.as_map()["id"].as_i64().unwrap()).collect();
/// assert_eq!(ids, vec![3, 1, 2]);
/// ```
pub fn sort<R: Row + Clone>(rows: &[R], config: &SortConfig, registry: &ComparatorRegistry) -> Vec<R> {
    sort_refs(rows, config, registry)
        .into_iter()
        .cloned()
        .collect()
}
