//! Tabular rendering of query result rows
//!
//! Columns come from the first row's keys, in order. Rows are expected to
//! share that shape; when a later row carries extra keys they are appended
//! as columns (first-seen order) and cells missing from a row stay empty.

use contracts::usecases::u603_run_query::Row;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultTable {
    pub columns: Vec<String>,
    /// Display text per row, aligned with `columns`
    pub rows: Vec<Vec<String>>,
    /// Whether every row had exactly the first row's key set
    pub uniform: bool,
}

impl ResultTable {
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut uniform = true;

        if let Some(first) = rows.first() {
            columns.extend(first.keys().cloned());
            for row in &rows[1..] {
                if row.len() != first.len() || row.keys().any(|k| !first.contains_key(k)) {
                    uniform = false;
                }
                for key in row.keys() {
                    if !columns.iter().any(|c| c == key) {
                        columns.push(key.clone());
                    }
                }
            }
        }

        let cells = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|c| row.get(c).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self {
            columns,
            rows: cells,
            uniform,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Display text of a JSON value: strings verbatim, everything else in its
/// JSON form (`null`, `1`, `true`, `[1,2]`).
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[component]
pub fn ResultGrid(table: ResultTable) -> impl IntoView {
    if !table.uniform {
        log::warn!(
            "result rows have differing key sets; rendering union of {} columns",
            table.columns.len()
        );
    }

    let ResultTable { columns, rows, .. } = table;

    view! {
        <div class="results__table">
            <Table>
                <TableHeader>
                    <TableRow>
                        {columns
                            .into_iter()
                            .map(|c| view! { <TableHeaderCell>{c}</TableHeaderCell> })
                            .collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <TableRow>
                                    {row
                                        .into_iter()
                                        .map(|cell| view! { <TableCell>{cell}</TableCell> })
                                        .collect_view()}
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(json: &str) -> Vec<Row> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_single_row_single_column() {
        let table = ResultTable::from_rows(&rows(r#"[{"x":1}]"#));
        assert_eq!(table.columns, vec!["x"]);
        assert_eq!(table.rows, vec![vec!["1".to_string()]]);
        assert!(table.uniform);
    }

    #[test]
    fn test_columns_keep_backend_order() {
        let table = ResultTable::from_rows(&rows(
            r#"[{"name":"Ann","dept":"Engineering","annual_salary":82000.5},
                {"name":"Bob","dept":"Sales","annual_salary":null}]"#,
        ));
        assert_eq!(table.columns, vec!["name", "dept", "annual_salary"]);
        assert_eq!(table.rows[0], vec!["Ann", "Engineering", "82000.5"]);
        assert_eq!(table.rows[1], vec!["Bob", "Sales", "null"]);
        assert!(table.uniform);
    }

    #[test]
    fn test_heterogeneous_rows_use_union_of_keys() {
        let table = ResultTable::from_rows(&rows(r#"[{"a":1,"b":2},{"a":3,"c":true}]"#));
        assert_eq!(table.columns, vec!["a", "b", "c"]);
        assert_eq!(table.rows[0], vec!["1", "2", ""]);
        assert_eq!(table.rows[1], vec!["3", "", "true"]);
        assert!(!table.uniform);
    }

    #[test]
    fn test_empty_rows() {
        let table = ResultTable::from_rows(&[]);
        assert!(table.is_empty());
        assert!(table.columns.is_empty());
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Value::from("plain")), "plain");
        assert_eq!(cell_text(&Value::Null), "null");
        assert_eq!(cell_text(&Value::from(false)), "false");
        assert_eq!(cell_text(&serde_json::json!([1, 2])), "[1,2]");
    }
}
