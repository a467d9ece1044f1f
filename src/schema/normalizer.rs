use tracing::debug;

use crate::models::{BreachRecord, Value};
use crate::schema::aliases::canonical_name;
use crate::schema::coerce::{int_column, text_column};
use crate::schema::{NUMERIC_COLUMNS, REQUIRED_COLUMNS, TEXT_COLUMNS};
use crate::table::{Column, Table};

/// Normalize a raw breach table into the canonical schema.
///
/// 1. Trim every column name.
/// 2. Rename known aliases (exact match). When several columns end up with
///    the same canonical name, the last one's values win and the column stays
///    where the first one was. Other columns pass through as-is, duplicates
///    included.
/// 3. Add any missing required column, filled with missing cells.
/// 4. Coerce `year`/`records_exposed` to integers and the text columns to
///    trimmed strings.
///
/// The input is left untouched. Malformed cells become missing; this never fails.
pub fn normalize(table: &Table) -> Table {
    let mut out = Table::empty(table.len());

    for column in table.columns() {
        let trimmed = column.name.trim();
        let name = canonical_name(trimmed);
        if name != trimmed {
            debug!(from = trimmed, to = name, "renamed column");
        }
        if !is_canonical(name) {
            out.push_column(Column::new(name, column.values.clone()));
            continue;
        }
        if out.contains(name) {
            debug!(column = name, "duplicate column, later values win");
        }
        out.set_column(name, column.values.clone());
    }

    for name in REQUIRED_COLUMNS {
        if !out.contains(name) {
            debug!(column = name, "backfilling missing required column");
            out.set_column(name, vec![Value::Missing; table.len()]);
        }
    }

    for name in NUMERIC_COLUMNS {
        if let Some(values) = out.column(name) {
            let (coerced, degraded) = int_column(values);
            if degraded > 0 {
                debug!(column = name, degraded, "unparseable values set to missing");
            }
            out.set_column(name, coerced);
        }
    }

    for name in TEXT_COLUMNS {
        if let Some(values) = out.column(name) {
            let coerced = text_column(values);
            out.set_column(name, coerced);
        }
    }

    out
}

fn is_canonical(name: &str) -> bool {
    REQUIRED_COLUMNS.contains(&name) || TEXT_COLUMNS.contains(&name)
}

/// Normalize and return typed rows.
pub fn normalize_records(table: &Table) -> Vec<BreachRecord> {
    normalize(table).records()
}
