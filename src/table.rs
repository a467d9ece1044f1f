use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::{BreachRecord, Value};

/// A named, ordered sequence of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Column-oriented table with a fixed row count.
///
/// Every column holds exactly `len()` values. Names are not required to be
/// unique; lookups by name return the first match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Build a table from columns, which must all have the same length.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let rows = columns.first().map(|c| c.values.len()).unwrap_or(0);
        for column in &columns {
            if column.values.len() != rows {
                bail!(
                    "column '{}' has {} values, expected {}",
                    column.name,
                    column.values.len(),
                    rows
                );
            }
        }
        Ok(Self { columns, rows })
    }

    /// A table with `rows` rows and no columns.
    pub fn empty(rows: usize) -> Self {
        Self {
            columns: Vec::new(),
            rows,
        }
    }

    /// Build a table from a header and row-major values.
    pub fn from_rows<H, R>(headers: &[H], rows: Vec<R>) -> Result<Self>
    where
        H: AsRef<str>,
        R: IntoIterator<Item = Value>,
    {
        let mut columns: Vec<Column> = headers
            .iter()
            .map(|h| Column::new(h.as_ref(), Vec::with_capacity(rows.len())))
            .collect();
        let row_count = rows.len();

        for (idx, row) in rows.into_iter().enumerate() {
            let cells: Vec<Value> = row.into_iter().collect();
            if cells.len() != columns.len() {
                bail!(
                    "row {} has {} values, header has {}",
                    idx,
                    cells.len(),
                    columns.len()
                );
            }
            for (column, cell) in columns.iter_mut().zip(cells) {
                column.values.push(cell);
            }
        }

        Ok(Self {
            columns,
            rows: row_count,
        })
    }

    /// Parse a JSON array of objects (one object per row).
    ///
    /// Columns appear in first-seen key order; a key absent from a row
    /// yields a missing cell for that row.
    pub fn from_json_records(json: &str) -> Result<Self> {
        let parsed: serde_json::Value =
            serde_json::from_str(json).context("Failed to parse JSON records")?;
        let records = match parsed {
            serde_json::Value::Array(items) => items,
            _ => bail!("expected a JSON array of records"),
        };

        let rows = records.len();
        let mut table = Table::empty(rows);

        for (idx, record) in records.into_iter().enumerate() {
            let object = match record {
                serde_json::Value::Object(map) => map,
                other => bail!("record {} is not an object: {}", idx, other),
            };
            for (key, value) in object {
                let pos = match table.position(&key) {
                    Some(pos) => pos,
                    None => {
                        table
                            .columns
                            .push(Column::new(key, vec![Value::Missing; rows]));
                        table.columns.len() - 1
                    }
                };
                table.columns[pos].values[idx] = Value::from(value);
            }
        }

        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Values of the first column called `name`.
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.position(name).map(|pos| self.columns[pos].values.as_slice())
    }

    /// Replace the values of `name` in place, or append a new column.
    /// Callers must pass exactly `len()` values.
    pub(crate) fn set_column(&mut self, name: impl Into<String>, values: Vec<Value>) {
        let name = name.into();
        debug_assert_eq!(values.len(), self.rows);
        match self.position(&name) {
            Some(pos) => self.columns[pos].values = values,
            None => self.columns.push(Column::new(name, values)),
        }
    }

    /// Append a column even if one with the same name already exists.
    pub(crate) fn push_column(&mut self, column: Column) {
        debug_assert_eq!(column.values.len(), self.rows);
        self.columns.push(column);
    }

    /// Typed view of every row. Intended for normalized tables: cells that
    /// are not already of the canonical type read as `None`.
    pub fn records(&self) -> Vec<BreachRecord> {
        let int_at = |name: &str, row: usize| match self.column(name).map(|c| &c[row]) {
            Some(Value::Int(i)) => Some(*i),
            _ => None,
        };
        let text_at = |name: &str, row: usize| match self.column(name).map(|c| &c[row]) {
            Some(Value::Text(s)) => Some(s.clone()),
            _ => None,
        };

        (0..self.rows)
            .map(|row| BreachRecord {
                year: int_at("year", row),
                industry: text_at("industry", row),
                attack_vector: text_at("attack_vector", row),
                records_exposed: int_at("records_exposed", row),
                org_size: text_at("org_size", row),
                country: text_at("country", row),
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_ragged_columns() {
        let err = Table::new(vec![
            Column::new("a", vec![Value::Int(1), Value::Int(2)]),
            Column::new("b", vec![Value::Int(1)]),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("column 'b'"));
    }

    #[test]
    fn test_from_rows() {
        let table = Table::from_rows(
            &["Year", "Industry"],
            vec![
                vec![Value::from(2021), Value::from("Finance")],
                vec![Value::from(2022), Value::Missing],
            ],
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.width(), 2);
        assert_eq!(table.column_names(), vec!["Year", "Industry"]);
        assert_eq!(table.column("Industry").unwrap()[1], Value::Missing);
    }

    #[test]
    fn test_from_rows_rejects_wrong_width() {
        let result = Table::from_rows(&["a", "b"], vec![vec![Value::Int(1)]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_records() {
        let table = Table::from_json_records(
            r#"[{"Year": 2021, "Industry": "Retail"},
                {"Industry": "Health", "Country": "DE"}]"#,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.column_names(), vec!["Year", "Industry", "Country"]);
        assert_eq!(table.column("Year").unwrap()[1], Value::Missing);
        assert_eq!(
            table.column("Country").unwrap()[1],
            Value::Text("DE".into())
        );
    }

    #[test]
    fn test_from_json_records_rejects_non_tabular() {
        assert!(Table::from_json_records(r#"{"Year": 2021}"#).is_err());
        assert!(Table::from_json_records(r#"[1, 2]"#).is_err());
        assert!(Table::from_json_records("not json").is_err());
    }

    #[test]
    fn test_set_column_replaces_in_place() {
        let mut table = Table::from_rows(
            &["a", "b"],
            vec![vec![Value::Int(1), Value::Int(2)]],
        )
        .unwrap();
        table.set_column("a", vec![Value::Int(9)]);
        table.set_column("c", vec![Value::Missing]);
        assert_eq!(table.column_names(), vec!["a", "b", "c"]);
        assert_eq!(table.column("a").unwrap(), &[Value::Int(9)]);
    }

    #[test]
    fn test_push_column_keeps_duplicates() {
        let mut table = Table::empty(1);
        table.push_column(Column::new("Notes", vec![Value::from("a")]));
        table.push_column(Column::new("Notes", vec![Value::from("b")]));
        assert_eq!(table.column_names(), vec!["Notes", "Notes"]);
        assert_eq!(table.column("Notes").unwrap(), &[Value::from("a")]);
    }

    #[test]
    fn test_empty_table() {
        let table = Table::empty(0);
        assert!(table.is_empty());
        assert_eq!(table.width(), 0);
        assert!(table.records().is_empty());
    }
}
