use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::config::PORTAL_DOWNLOAD_DIR;

use super::errors::ExportError;
use super::types::ColumnDescriptor;

/// Column key reserved for UI-only controls. Never exported.
pub const ACTIONS_COLUMN_KEY: &str = "actions";

/// Field names tried in order when labelling elements of an object array.
/// These match the shapes the portal tables actually render: role
/// assignments (`role`), exam results (`exam_name`) and anything carrying
/// a display `name`. Elements with none of these fall back to a compact
/// JSON dump.
///
/// A field counts as a label when it is present and neither null nor an
/// empty string; non-string scalars such as `0` or `false` are rendered as
/// labels rather than skipped, so the policy keys on field presence, not
/// truthiness.
const OBJECT_LABEL_FIELDS: &[&str] = &["name", "role", "exam_name"];

/// Render rows into CSV text: a quoted header row from the column titles,
/// then one line per row, `\n`-separated.
///
/// An empty row set is an error; columns keyed `actions` are dropped.
pub fn render_csv(rows: &[Value], columns: &[ColumnDescriptor]) -> Result<String, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::EmptyInput);
    }

    let export_cols: Vec<&ColumnDescriptor> = columns
        .iter()
        .filter(|c| c.key != ACTIONS_COLUMN_KEY)
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        export_cols
            .iter()
            .map(|c| quote(&c.title))
            .collect::<Vec<_>>()
            .join(","),
    );

    for row in rows {
        let line = export_cols
            .iter()
            .map(|col| quote(&render_value(resolve_path(row, &col.key))))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

/// Render rows and write `<table>_<username>.csv` into `dir`, returning
/// the written path.
pub fn write_csv_to(
    dir: &Path,
    rows: &[Value],
    columns: &[ColumnDescriptor],
    table_name: &str,
    username: &str,
) -> Result<PathBuf, ExportError> {
    let content = render_csv(rows, columns)?;
    let path = dir.join(export_file_name(table_name, username));
    std::fs::write(&path, content).map_err(|e| ExportError::Io(e.to_string()))?;
    tracing::info!("Wrote CSV export to {}", path.display());
    Ok(path)
}

/// Like `write_csv_to`, using the configured download directory.
pub fn write_csv(
    rows: &[Value],
    columns: &[ColumnDescriptor],
    table_name: &str,
    username: &str,
) -> Result<PathBuf, ExportError> {
    write_csv_to(
        Path::new(PORTAL_DOWNLOAD_DIR.as_str()),
        rows,
        columns,
        table_name,
        username,
    )
}

/// `<table>_<username>.csv`, both components sanitized.
pub fn export_file_name(table_name: &str, username: &str) -> String {
    format!(
        "{}_{}.csv",
        sanitize_component(table_name),
        sanitize_component(username)
    )
}

/// Replace every character outside `[A-Za-z0-9-_]` with `_`.
fn sanitize_component(component: &str) -> String {
    component
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Follow a dotted key path into a row. A missing intermediate yields
/// `None` so the cell renders empty instead of failing the whole row.
fn resolve_path<'a>(row: &'a Value, key: &str) -> Option<&'a Value> {
    let mut value = row;
    for part in key.split('.') {
        value = value.get(part)?;
    }
    Some(value)
}

/// Cell rendering policy, applied in order:
///
/// 1. array of scalars: elements joined with `"; "`
/// 2. array of objects: each element labelled via `OBJECT_LABEL_FIELDS`,
///    joined with `"; "`
/// 3. object: compact JSON dump
/// 4. absent or null: empty string
/// 5. anything else: its natural string form (strings unquoted)
fn render_value(value: Option<&Value>) -> String {
    let Some(value) = value else {
        return String::new();
    };

    match value {
        Value::Null => String::new(),
        Value::Array(items) => items
            .iter()
            .map(render_element)
            .collect::<Vec<_>>()
            .join("; "),
        Value::Object(_) => dump(value),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn render_element(item: &Value) -> String {
    match item {
        Value::Object(map) => label_field(map).unwrap_or_else(|| dump(item)),
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn label_field(map: &serde_json::Map<String, Value>) -> Option<String> {
    OBJECT_LABEL_FIELDS.iter().find_map(|field| {
        match map.get(*field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    })
}

fn dump(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Standard CSV escaping: wrap in double quotes, internal quotes doubled.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
