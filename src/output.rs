//! Output rendering
//!
//! Renders API records for the terminal: aligned tables for humans, JSON
//! and YAML for scripts. Table columns address record fields by
//! dot-notation path, so nested values like `assignee.name` work without
//! decoding into typed structs.

use anyhow::Result;
use clap::ValueEnum;
use serde_json::Value;

/// Output format selected with `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse a config-file value, falling back to the table view.
    pub fn from_config(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            _ => OutputFormat::Table,
        }
    }
}

/// One table column: header, dot-notation field path, display width.
pub struct Column {
    pub header: &'static str,
    pub path: &'static str,
    pub width: usize,
}

/// Print a collection of records in the selected format.
pub fn print_items(format: OutputFormat, items: &[Value], columns: &[Column]) -> Result<()> {
    match format {
        OutputFormat::Table => print!("{}", render_table(items, columns)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Value::Array(items.to_vec()))?)
        }
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(items)?),
    }
    Ok(())
}

/// Print a single record.
///
/// The table view falls back to YAML: a one-row table hides most of the
/// record, and detail views are where every field matters.
pub fn print_item(format: OutputFormat, item: &Value) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(item)?),
        OutputFormat::Table | OutputFormat::Yaml => print!("{}", serde_yaml::to_string(item)?),
    }
    Ok(())
}

/// Render records as an aligned text table.
fn render_table(items: &[Value], columns: &[Column]) -> String {
    let mut out = String::new();

    for column in columns {
        out.push_str(&pad(column.header, column.width));
    }
    out.push('\n');

    for item in items {
        for column in columns {
            out.push_str(&pad(&extract_json_value(item, column.path), column.width));
        }
        out.push('\n');
    }

    if items.is_empty() {
        out.push_str("(no results)\n");
    }

    out
}

/// Pad or clip a cell to its column width, leaving a separating space.
fn pad(text: &str, width: usize) -> String {
    let mut cell: String = text.chars().take(width).collect();
    if text.chars().count() > width {
        // Leave a visible mark where the cell was clipped
        cell.pop();
        cell.push('…');
    }
    format!("{:<width$} ", cell, width = width)
}

/// Extract a value from JSON using a dot-notation path
pub fn extract_json_value(item: &Value, path: &str) -> String {
    let parts: Vec<&str> = path.split('.').collect();
    let mut current = item;

    for part in parts {
        // Handle array index
        if let Ok(idx) = part.parse::<usize>() {
            current = match current.get(idx) {
                Some(v) => v,
                None => return "-".to_string(),
            };
        } else {
            current = match current.get(part) {
                Some(v) => v,
                None => return "-".to_string(),
            };
        }
    }

    match current {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "-".to_string(),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(_) => "[object]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_nested_paths() {
        let item = json!({ "assignee": { "name": "gsanchez" }, "id": 7 });
        assert_eq!(extract_json_value(&item, "assignee.name"), "gsanchez");
        assert_eq!(extract_json_value(&item, "id"), "7");
        assert_eq!(extract_json_value(&item, "missing.path"), "-");
    }

    #[test]
    fn extracts_array_indexes() {
        let item = json!({ "members": [{ "name": "first" }] });
        assert_eq!(extract_json_value(&item, "members.0.name"), "first");
        assert_eq!(extract_json_value(&item, "members.3.name"), "-");
    }

    #[test]
    fn tables_align_and_clip() {
        let columns = [
            Column { header: "ID", path: "id", width: 6 },
            Column { header: "NAME", path: "name", width: 8 },
        ];
        let items = [json!({ "id": 12, "name": "a very long project name" })];

        let table = render_table(&items, &columns);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains('…'));
    }

    #[test]
    fn empty_tables_say_so() {
        let columns = [Column { header: "ID", path: "id", width: 4 }];
        assert!(render_table(&[], &columns).contains("(no results)"));
    }
}
