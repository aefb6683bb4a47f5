use crate::model::{NormalizedRecord, UpstreamError};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::debug;
use serde_json::{Map, Value};

/// Declared mapping from provider standings headers to the canonical names the
/// frontend reads. Identity entries document the canon; anything not listed
/// here passes through under its original name (and gets logged) rather than
/// being guessed at by substring heuristics.
pub const STANDINGS_COLUMNS: &[(&str, &str)] = &[
    ("TeamID", "TeamID"),
    ("TeamCity", "TeamCity"),
    ("TeamName", "TeamName"),
    ("TeamSlug", "TeamTricode"),
    ("Conference", "Conference"),
    ("PlayoffRank", "ConferenceRank"),
    ("WINS", "WINS"),
    ("LOSSES", "LOSSES"),
    ("WinPCT", "WinPCT"),
    ("ConferenceGamesBack", "GamesBack"),
];

/// Columns that carry datetimes on the wire. These are re-emitted as ISO-8601
/// strings, or null when unparseable.
const DATETIME_COLUMNS: &[&str] = &["GAME_DATE", "GAME_DATE_EST", "BIRTHDATE"];

#[derive(Clone, Copy, PartialEq)]
enum ColumnKind {
    Numeric,
    Text,
}

/// One `{name, headers, rowSet}` table out of a provider `resultSets` payload.
pub struct ResultTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ResultTable {
    /// Picks the result set called `name` (case-insensitive), or the first one
    /// when `name` is `None`, out of a provider response.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::Schema` when the payload does not carry the
    /// expected `resultSets` wire shape.
    pub fn from_result_sets(
        payload: &Value,
        context: &str,
        name: Option<&str>,
    ) -> Result<Self, UpstreamError> {
        let sets = payload
            .get("resultSets")
            .and_then(Value::as_array)
            .ok_or_else(|| UpstreamError::schema(context, "missing resultSets array"))?;

        let set = match name {
            Some(wanted) => sets.iter().find(|s| {
                s.get("name")
                    .and_then(Value::as_str)
                    .is_some_and(|n| n.eq_ignore_ascii_case(wanted))
            }),
            None => sets.first(),
        }
        .ok_or_else(|| {
            UpstreamError::schema(
                context,
                format!("result set {:?} not present", name.unwrap_or("<first>")),
            )
        })?;

        let headers = set
            .get("headers")
            .and_then(Value::as_array)
            .ok_or_else(|| UpstreamError::schema(context, "result set has no headers"))?
            .iter()
            .map(|h| h.as_str().unwrap_or_default().to_string())
            .collect();

        let rows = set
            .get("rowSet")
            .and_then(Value::as_array)
            .ok_or_else(|| UpstreamError::schema(context, "result set has no rowSet"))?
            .iter()
            .map(|r| r.as_array().cloned().unwrap_or_default())
            .collect();

        Ok(ResultTable {
            name: set
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            headers,
            rows,
        })
    }

    /// Flattens the table into normalized records: duplicate headers dropped
    /// (first occurrence wins), null-like cells replaced by the column's
    /// sentinel, datetime columns re-emitted as ISO-8601 or null.
    pub fn records(&self) -> Vec<NormalizedRecord> {
        // first occurrence of each header wins
        let mut kept: Vec<usize> = Vec::with_capacity(self.headers.len());
        for (i, header) in self.headers.iter().enumerate() {
            if !self.headers[..i].contains(header) {
                kept.push(i);
            }
        }

        let kinds: Vec<ColumnKind> = kept
            .iter()
            .map(|&col| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .find(|v| !v.is_null())
                    .map_or(ColumnKind::Text, column_kind_of)
            })
            .collect();

        self.rows
            .iter()
            .map(|row| {
                let mut record = Map::with_capacity(kept.len());
                for (&col, &kind) in kept.iter().zip(&kinds) {
                    let header = &self.headers[col];
                    let cell = row.get(col).unwrap_or(&Value::Null);
                    record.insert(header.clone(), sanitize_cell(header, cell, kind));
                }
                record
            })
            .collect()
    }
}

fn column_kind_of(value: &Value) -> ColumnKind {
    if value.is_number() {
        ColumnKind::Numeric
    } else {
        ColumnKind::Text
    }
}

fn sanitize_cell(header: &str, cell: &Value, kind: ColumnKind) -> Value {
    if DATETIME_COLUMNS.iter().any(|c| c.eq_ignore_ascii_case(header)) {
        return iso_datetime_or_null(cell);
    }
    match cell {
        Value::Null => match kind {
            ColumnKind::Numeric => Value::from(0),
            ColumnKind::Text => Value::from(""),
        },
        other => other.clone(),
    }
}

/// Sanitizes a flat record list in place of the tabular path: per-key column
/// kinds are inferred across the whole set, then null-like values are replaced
/// by the matching sentinel. Running this over already-normalized records is a
/// no-op.
pub fn sanitize_records(records: Vec<NormalizedRecord>) -> Vec<NormalizedRecord> {
    let mut kinds: Map<String, Value> = Map::new();
    for record in &records {
        for (key, value) in record {
            if !value.is_null() && !kinds.contains_key(key) {
                kinds.insert(key.clone(), value.clone());
            }
        }
    }

    records
        .into_iter()
        .map(|record| {
            record
                .into_iter()
                .map(|(key, value)| {
                    let kind = kinds.get(&key).map_or(ColumnKind::Text, column_kind_of);
                    let clean = sanitize_cell(&key, &value, kind);
                    (key, clean)
                })
                .collect()
        })
        .collect()
}

/// Applies a declared column mapping. Unmapped columns are kept under their
/// original names and reported at debug level so upstream schema drift shows
/// up in the logs instead of being silently renamed away.
pub fn rename_columns(record: &NormalizedRecord, mapping: &[(&str, &str)]) -> NormalizedRecord {
    let mut renamed = Map::with_capacity(record.len());
    let mut unknown: Vec<&str> = Vec::new();
    for (key, value) in record {
        match mapping.iter().find(|(from, _)| from == key) {
            Some((_, to)) => {
                renamed.insert((*to).to_string(), value.clone());
            }
            None => {
                unknown.push(key);
                renamed.insert(key.clone(), value.clone());
            }
        }
    }
    if !unknown.is_empty() {
        debug!("unmapped upstream columns retained verbatim: {unknown:?}");
    }
    renamed
}

/// Best-effort datetime coercion: ISO-8601 out, null when nothing parses.
pub fn iso_datetime_or_null(raw: &Value) -> Value {
    let Some(text) = raw.as_str() else {
        return Value::Null;
    };
    let text = text.trim();
    if text.is_empty() {
        return Value::Null;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Value::from(dt.to_rfc3339());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Value::from(dt.format("%Y-%m-%dT%H:%M:%S").to_string());
    }
    if let Ok(d) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Value::from(d.format("%Y-%m-%d").to_string());
    }
    // game logs ship dates like "OCT 29, 2025"
    if let Ok(d) = NaiveDate::parse_from_str(&title_case_month(text), "%b %d, %Y") {
        return Value::from(d.format("%Y-%m-%d").to_string());
    }
    Value::Null
}

fn title_case_month(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if i < 3 {
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
