//! Canonicalizes semantic models into the flat column shape

use crate::core::model::{Column, ColumnKind, SemanticModel};
use crate::error::{Result, SqlLoomError};

/// Converts a semantic model from the split dimension/measure shape to the
/// flat column shape. Returns a new model; the input is left untouched.
///
/// Tables already in column shape pass through unchanged. Split-shape
/// sections are folded into `columns` in a fixed order: dimensions, then
/// time dimensions, then measures, each preserving its original relative
/// order. A table populating both shapes at once is rejected.
pub fn to_column_format(model: &SemanticModel) -> Result<SemanticModel> {
    let mut ret = model.clone();
    for table in &mut ret.tables {
        let column_shape = !table.columns.is_empty();
        if column_shape && table.has_split_shape() {
            return Err(SqlLoomError::MixedTableShape(table.name.clone()));
        }
        if column_shape {
            continue;
        }

        for d in &table.dimensions {
            table.columns.push(Column::from_field(d, ColumnKind::Dimension));
        }
        for td in &table.time_dimensions {
            table
                .columns
                .push(Column::from_field(td, ColumnKind::TimeDimension));
        }
        for m in &table.measures {
            table.columns.push(Column::from_field(m, ColumnKind::Measure));
        }
        table.dimensions.clear();
        table.time_dimensions.clear();
        table.measures.clear();
    }
    Ok(ret)
}
