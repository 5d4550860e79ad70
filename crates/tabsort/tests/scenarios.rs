//! End-to-end scenarios over the two demo datasets: developers and courses.

use serde_json::json;
use tabsort::{
    display, pipeline, Column, ComparatorRegistry, DisabledColumns, JsonRow, Row, SortConfig,
    TableState,
};

fn rows(values: Vec<serde_json::Value>) -> Vec<JsonRow> {
    values
        .into_iter()
        .map(|v| JsonRow::from_json(v).unwrap())
        .collect()
}

fn developers() -> Vec<JsonRow> {
    rows(vec![
        json!({"id": 1, "full_name": "Mira Holt", "email": "mira@example.com", "gender": "Female", "age": 34, "start_date": "2021-04-12"}),
        json!({"id": 2, "full_name": "Jonas Berg", "email": null, "gender": "Male", "age": null, "start_date": "2019-11-03"}),
        json!({"id": 3, "full_name": "Ines Costa", "email": "ines@example.org", "gender": "Female", "age": 27, "start_date": null}),
        json!({"id": 4, "full_name": "Tomás Ruiz", "email": "tomas@example.net", "gender": "Male", "age": 41, "start_date": "2020-02-29"}),
    ])
}

fn developer_columns() -> Vec<Column> {
    vec![
        Column::new("full_name", "Full Name"),
        Column::new("email", "Email"),
        Column::new("gender", "Gender"),
        Column::new("age", "Age"),
        Column::new("start_date", "Start Date"),
    ]
}

fn courses() -> Vec<JsonRow> {
    rows(vec![
        json!({"id": "c1", "name": "Rust Basics", "country": "Norway", "github_username": "fjordcoder", "money": "$50"}),
        json!({"id": "c2", "name": "Async Deep Dive", "country": "Chile", "github_username": "GitHubNinja", "money": "$10"}),
        json!({"id": "c3", "name": "Macros", "country": "Japan", "github_username": "gith0und", "money": "$125"}),
    ])
}

fn keys(shown: &[&JsonRow]) -> Vec<String> {
    shown.iter().map(|r| r.row_key().into_owned()).collect()
}

#[test]
fn age_scenario_from_three_rows() {
    let data = rows(vec![
        json!({"id": 1, "age": 30}),
        json!({"id": 2, "age": null}),
        json!({"id": 3, "age": 25}),
    ]);
    let registry = ComparatorRegistry::new();

    let asc = TableState {
        sort: SortConfig::asc("age"),
        search: String::new(),
    };
    assert_eq!(keys(&pipeline::derive(&data, &asc, &registry)), ["3", "1", "2"]);

    let desc = TableState {
        sort: SortConfig::desc("age"),
        search: String::new(),
    };
    assert_eq!(keys(&pipeline::derive(&data, &desc, &registry)), ["1", "3", "2"]);
}

#[test]
fn money_scenario() {
    let data = rows(vec![
        json!({"id": 1, "money": "$50"}),
        json!({"id": 2, "money": "$10"}),
    ]);
    let state = TableState {
        sort: SortConfig::asc("money"),
        search: String::new(),
    };
    let shown = pipeline::derive(&data, &state, &ComparatorRegistry::new());
    let money: Vec<_> = shown.iter().map(|r| display::display(&r.field("money"))).collect();
    assert_eq!(money, ["$10", "$50"]);
}

#[test]
fn gith_search_matches_usernames_case_insensitively() {
    let data = courses();
    let state = TableState::new().with_search("gith");
    let shown = pipeline::derive(&data, &state, &ComparatorRegistry::new());
    assert_eq!(keys(&shown), ["c2", "c3"]);
}

#[test]
fn course_money_cycle_through_clicks() {
    let data = courses();
    let registry = ComparatorRegistry::new();
    let disabled = DisabledColumns::new();

    let state = TableState::new().click("money", &disabled);
    assert_eq!(keys(&pipeline::derive(&data, &state, &registry)), ["c2", "c1", "c3"]);

    let state = state.click("money", &disabled);
    assert_eq!(keys(&pipeline::derive(&data, &state, &registry)), ["c3", "c1", "c2"]);

    let state = state.click("money", &disabled);
    assert!(state.sort.is_unsorted());
    assert_eq!(keys(&pipeline::derive(&data, &state, &registry)), ["c1", "c2", "c3"]);
}

#[test]
fn developer_table_respects_disabled_email() {
    let data = developers();
    let columns = developer_columns();
    let disabled: DisabledColumns = ["email"].into_iter().collect();

    let state = TableState::new().click("email", &disabled);
    assert!(state.sort.is_unsorted());
    assert_eq!(
        keys(&pipeline::derive_for_columns(&data, &columns, &state)),
        ["1", "2", "3", "4"]
    );
}

#[test]
fn developer_start_dates_with_null_last() {
    let data = developers();
    let columns = developer_columns();
    let disabled = DisabledColumns::new();

    let state = TableState::new().click("start_date", &disabled);
    assert_eq!(
        keys(&pipeline::derive_for_columns(&data, &columns, &state)),
        ["2", "4", "1", "3"]
    );

    let state = state.click("start_date", &disabled);
    assert_eq!(
        keys(&pipeline::derive_for_columns(&data, &columns, &state)),
        ["1", "4", "2", "3"]
    );
}

#[test]
fn developer_names_fold_accents() {
    let data = developers();
    let columns = developer_columns();
    let state = TableState::new().click("full_name", &DisabledColumns::new());
    assert_eq!(
        keys(&pipeline::derive_for_columns(&data, &columns, &state)),
        ["3", "2", "1", "4"]
    );
}

#[test]
fn switching_columns_restarts_ascending() {
    let disabled = DisabledColumns::new();
    let state = TableState::new()
        .click("age", &disabled)
        .click("age", &disabled)
        .click("gender", &disabled);
    assert_eq!(state.sort, SortConfig::asc("gender"));
}

#[test]
fn search_then_sort_on_developers() {
    let data = developers();
    let columns = developer_columns();
    let state = TableState::new()
        .with_search("FEMALE")
        .click("age", &DisabledColumns::new())
        .click("age", &DisabledColumns::new());
    assert_eq!(
        keys(&pipeline::derive_for_columns(&data, &columns, &state)),
        ["1", "3"]
    );
}

#[test]
fn null_cells_display_placeholder() {
    let data = developers();
    let jonas = &data[1];
    assert_eq!(display::display(&jonas.field("email")), "——");
    assert_eq!(display::display(&jonas.field("age")), "——");
    assert_eq!(display::display(&jonas.field("gender")), "Male");
}
