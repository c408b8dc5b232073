use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{TableOptions, render_table};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(serde_json::to_value(value)?, table_options()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_value_table(value: Value, options: TableOptions) -> anyhow::Result<String> {
    match value {
        Value::Array(items) => Ok(render_rows(&items, options)),
        Value::Object(map) => Ok(render_object(map, options)),
        scalar => Ok(render_table(&["value"], &[vec![cell(&scalar)]], options)),
    }
}

/// Objects render as key/value pairs, followed by one table per list of
/// records they hold (e.g. a report's `outcomes`).
fn render_object(map: Map<String, Value>, options: TableOptions) -> String {
    let (lists, scalars): (Vec<_>, Vec<_>) = map
        .into_iter()
        .partition(|(_, value)| is_record_list(value));

    let mut sections = Vec::new();
    if !scalars.is_empty() {
        let rows = scalars
            .iter()
            .map(|(key, value)| vec![key.clone(), cell(value)])
            .collect::<Vec<_>>();
        sections.push(render_table(&["key", "value"], &rows, options));
    }
    for (key, value) in lists {
        if let Value::Array(items) = value {
            sections.push(format!("{key}:\n{}", render_rows(&items, options)));
        }
    }
    sections.join("\n\n")
}

fn is_record_list(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| !items.is_empty() && items.iter().all(Value::is_object))
}

fn render_rows(items: &[Value], options: TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
        return render_table(&["value"], &rows, options);
    }

    // Union of keys across records, in first-seen order.
    let mut headers = Vec::<&str>::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(Map::keys) {
        if !headers.contains(&key.as_str()) {
            headers.push(key);
        }
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    render_table(&headers, &rows, options)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::{cell, render, render_rows};
    use crate::cli::OutputFormat;
    use crate::output::table::TableOptions;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[derive(Serialize)]
    struct Summary {
        scanned: u32,
        outcomes: Vec<Outcome>,
    }

    #[derive(Serialize)]
    struct Outcome {
        id: &'static str,
        status: &'static str,
    }

    fn sample() -> Summary {
        Summary {
            scanned: 2,
            outcomes: vec![
                Outcome {
                    id: "a",
                    status: "updated",
                },
                Outcome {
                    id: "b",
                    status: "failed",
                },
            ],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&sample(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["scanned"], 2);
        assert_eq!(parsed["outcomes"][1]["status"], "failed");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&sample(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_splits_scalars_and_record_lists() {
        let out = render(&sample(), OutputFormat::Table).expect("table render should work");
        let mut sections = out.split("\n\n");
        let scalars = sections.next().unwrap();
        assert!(scalars.starts_with("key"));
        assert!(scalars.contains("scanned"));
        let outcomes = sections.next().unwrap();
        assert!(outcomes.starts_with("outcomes:\nid"));
        assert!(outcomes.contains("failed"));
    }

    #[test]
    fn rows_keep_first_seen_column_order() {
        let items = vec![json!({"id": "x", "style": "flowstate"}), json!({"id": "y", "tags": []})];
        let out = render_rows(&items, PLAIN);
        let header: Vec<&str> = out.lines().next().unwrap().split_whitespace().collect();
        assert_eq!(header, vec!["id", "style", "tags"]);
        assert_eq!(render_rows(&[], PLAIN), "(no rows)");
    }

    #[test]
    fn cells_flatten_string_lists() {
        assert_eq!(cell(&json!(["therapeutic", "flow"])), "therapeutic, flow");
        assert_eq!(cell(&json!(null)), "-");
        assert_eq!(cell(&json!({"a": 1})), "{\"a\":1}");
    }
}
