//! Field mapping for the model comparison boundary
//!
//! Comparison tooling diffs a semantic table against a vendor-equivalent
//! representation field by field. Each field maps to a keyed record: the
//! key is the uppercased SQL expression, the section is the fixed label
//! for the field's kind, and the details payload is the raw field record.

use serde::Serialize;

use crate::core::{ColumnKind, Table};
use crate::error::Result;

/// One field of a table, keyed for comparison display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldComparison {
    pub field_key: String,
    pub section: &'static str,
    pub field_details: serde_json::Value,
}

fn comparison_entry<T: Serialize>(
    expr: &str,
    kind: ColumnKind,
    record: &T,
) -> Result<FieldComparison> {
    Ok(FieldComparison {
        field_key: expr.to_uppercase(),
        section: kind.section(),
        field_details: serde_json::to_value(record)?,
    })
}

/// Maps every field of a table to its comparison record.
///
/// Split-shape sections map in order (dimensions, time dimensions,
/// measures); a canonicalized table maps its columns through their kind.
pub fn comparison_fields(table: &Table) -> Result<Vec<FieldComparison>> {
    let mut fields = Vec::new();

    for column in &table.columns {
        fields.push(comparison_entry(column.sql_expr(), column.kind, column)?);
    }
    for d in &table.dimensions {
        fields.push(comparison_entry(d.sql_expr(), ColumnKind::Dimension, d)?);
    }
    for td in &table.time_dimensions {
        fields.push(comparison_entry(
            td.sql_expr(),
            ColumnKind::TimeDimension,
            td,
        )?);
    }
    for m in &table.measures {
        fields.push(comparison_entry(m.sql_expr(), ColumnKind::Measure, m)?);
    }

    Ok(fields)
}
