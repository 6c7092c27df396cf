//! Logical table naming and CTE synthesis

use crate::core::{Column, Table};
use crate::error::Result;
use crate::sql::classifier::is_aggregation;

const LOGICAL_TABLE_PREFIX: &str = "__";

/// Returns the logical table name for a table, e.g. `fact` -> `__fact`
pub fn logical_table_name(table: &Table) -> String {
    format!("{}{}", LOGICAL_TABLE_PREFIX, table.name)
}

/// Returns true if `name` is a logical table name
pub fn is_logical_table(name: &str) -> bool {
    name.starts_with(LOGICAL_TABLE_PREFIX) && name.len() > LOGICAL_TABLE_PREFIX.len()
}

fn column_projection(column: &Column) -> String {
    // Skip the self-alias when expr and name already agree
    if column.sql_expr().to_lowercase() != column.name.to_lowercase() {
        format!("{} AS {}", column.sql_expr(), column.name)
    } else {
        column.sql_expr().to_string()
    }
}

/// Builds the CTE that materializes a table's logical row shape.
///
/// Only row-preserving columns are projected: aggregated measure
/// expressions must be evaluated by the outer query over the full row set,
/// not baked into the logical table. Expects a column-shape table; a table
/// with no row-preserving columns falls back to `SELECT *`.
pub fn generate_cte(table: &Table) -> Result<String> {
    let mut columns = Vec::new();
    for column in &table.columns {
        if is_aggregation(column)? {
            continue;
        }
        columns.push(column_projection(column));
    }
    if columns.is_empty() {
        columns.push("*".to_string());
    }

    let mut cte = format!("WITH {} AS (\n", logical_table_name(table));
    cte.push_str("SELECT\n");
    cte.push_str(&columns.join(",\n"));
    cte.push('\n');
    cte.push_str(&format!("FROM {}", table.base_table.qualified_name()));
    cte.push(')');
    Ok(cte)
}
