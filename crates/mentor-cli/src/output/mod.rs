use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Arrays of objects become one row per item; a single object becomes
/// key/value rows.
fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();
    let rendered = match serde_json::to_value(value)? {
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let mut headers = Vec::<String>::new();
            for key in items.iter().filter_map(Value::as_object).flat_map(|map| map.keys()) {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
            let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
            let rows = items
                .iter()
                .filter_map(Value::as_object)
                .map(|map| {
                    headers
                        .iter()
                        .map(|header| map.get(header).map_or_else(|| String::from("-"), cell))
                        .collect()
                })
                .collect::<Vec<_>>();
            table::render_table(&header_refs, &rows, options)
        }
        Value::Array(items) => {
            let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
            table::render_table(&["value"], &rows, options)
        }
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(value)])
                .collect::<Vec<_>>();
            table::render_table(&["key", "value"], &rows, options)
        }
        scalar => table::render_table(&["value"], &[vec![cell(&scalar)]], options),
    };
    Ok(rendered)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}
