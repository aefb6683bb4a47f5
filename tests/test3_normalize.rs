use gametrack::normalize::{
    ResultTable, STANDINGS_COLUMNS, iso_datetime_or_null, rename_columns, sanitize_records,
};
use serde_json::{Map, Value, json};

fn table_from(payload: Value, name: Option<&str>) -> ResultTable {
    ResultTable::from_result_sets(&payload, "test", name).expect("well-formed payload")
}

#[test]
fn records_replace_null_cells_with_column_sentinels() {
    let table = table_from(
        json!({
            "resultSets": [{
                "name": "Rows",
                "headers": ["PLAYER", "PTS", "SCHOOL"],
                "rowSet": [
                    ["Stephen Curry", 29.4, null],
                    [null, null, "Davidson"]
                ]
            }]
        }),
        None,
    );

    let records = table.records();
    assert_eq!(records[0]["SCHOOL"], "");
    assert_eq!(records[1]["PLAYER"], "");
    assert_eq!(records[1]["PTS"], 0);
}

#[test]
fn duplicate_columns_keep_the_first_occurrence() {
    let table = table_from(
        json!({
            "resultSets": [{
                "name": "Rows",
                "headers": ["TEAM_ID", "PTS", "TEAM_ID"],
                "rowSet": [[1610612744, 108, 9999]]
            }]
        }),
        None,
    );

    let records = table.records();
    assert_eq!(records[0].len(), 2);
    assert_eq!(records[0]["TEAM_ID"], 1610612744_i64);
}

#[test]
fn datetime_columns_become_iso_strings_or_null() {
    let table = table_from(
        json!({
            "resultSets": [{
                "name": "Rows",
                "headers": ["GAME_DATE", "PTS"],
                "rowSet": [
                    ["2025-10-29T19:30:00", 28],
                    ["OCT 31, 2025", 14],
                    ["not a date", 7]
                ]
            }]
        }),
        None,
    );

    let records = table.records();
    assert_eq!(records[0]["GAME_DATE"], "2025-10-29T19:30:00");
    assert_eq!(records[1]["GAME_DATE"], "2025-10-31");
    assert_eq!(records[2]["GAME_DATE"], Value::Null);
}

#[test]
fn result_set_lookup_is_by_name_and_schema_errors_surface() {
    let payload = json!({
        "resultSets": [
            {"name": "First", "headers": ["A"], "rowSet": [[1]]},
            {"name": "Standings", "headers": ["TeamID"], "rowSet": [[2]]}
        ]
    });

    let table = table_from(payload.clone(), Some("standings"));
    assert_eq!(table.name, "Standings");

    assert!(ResultTable::from_result_sets(&payload, "test", Some("Nope")).is_err());
    assert!(ResultTable::from_result_sets(&json!({"cursor": 1}), "test", None).is_err());
}

#[test]
fn sanitizing_already_normalized_records_is_a_noop() {
    let mut record = Map::new();
    record.insert("PLAYER".to_string(), json!("Stephen Curry"));
    record.insert("PTS".to_string(), json!(29.4));
    record.insert("GAME_DATE".to_string(), json!("2025-10-29T19:30:00"));
    let records = vec![record];

    let once = sanitize_records(records);
    let twice = sanitize_records(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn sanitize_fills_nulls_using_kinds_from_sibling_records() {
    let records = vec![
        serde_json::from_value(json!({"PTS": 10.0, "TEAM": "GSW"})).unwrap(),
        serde_json::from_value(json!({"PTS": null, "TEAM": null})).unwrap(),
    ];

    let clean = sanitize_records(records);
    assert_eq!(clean[1]["PTS"], 0);
    assert_eq!(clean[1]["TEAM"], "");
}

#[test]
fn declared_standings_mapping_renames_and_passes_unknowns_through() {
    let record: Map<String, Value> = serde_json::from_value(json!({
        "TeamID": 1610612738,
        "PlayoffRank": 1,
        "ConferenceGamesBack": 0.0,
        "ClinchIndicator": " - e"
    }))
    .unwrap();

    let renamed = rename_columns(&record, STANDINGS_COLUMNS);
    assert_eq!(renamed["ConferenceRank"], 1);
    assert_eq!(renamed["GamesBack"], 0.0);
    assert!(!renamed.contains_key("PlayoffRank"));
    // unknown columns survive under their original name
    assert_eq!(renamed["ClinchIndicator"], " - e");
}

#[test]
fn datetime_coercion_accepts_the_wire_formats() {
    assert_eq!(
        iso_datetime_or_null(&json!("2026-01-16T02:30:00Z")),
        "2026-01-16T02:30:00+00:00"
    );
    assert_eq!(iso_datetime_or_null(&json!("2025-10-29")), "2025-10-29");
    assert_eq!(iso_datetime_or_null(&json!("")), Value::Null);
    assert_eq!(iso_datetime_or_null(&json!(42)), Value::Null);
}
