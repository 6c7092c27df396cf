//! Classifies column expressions as aggregating or row-preserving

use std::collections::HashSet;
use std::ops::ControlFlow;

use once_cell::sync::Lazy;
use sqlparser::ast::{visit_expressions, Expr, ObjectName, ObjectNamePart};

use crate::core::{Column, ColumnKind};
use crate::error::{Result, SqlLoomError};

/// Aggregate functions in the canonical dialect that reduce the row count
static AGGREGATE_FUNCTIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "ANY_VALUE",
        "APPROX_COUNT_DISTINCT",
        "APPROX_PERCENTILE",
        "ARRAY_AGG",
        "AVG",
        "BITAND_AGG",
        "BITOR_AGG",
        "BITXOR_AGG",
        "BOOLAND_AGG",
        "BOOLOR_AGG",
        "CORR",
        "COUNT",
        "COUNT_IF",
        "COVAR_POP",
        "COVAR_SAMP",
        "HLL",
        "KURTOSIS",
        "LISTAGG",
        "MAX",
        "MEDIAN",
        "MIN",
        "MODE",
        "OBJECT_AGG",
        "PERCENTILE_CONT",
        "PERCENTILE_DISC",
        "SKEW",
        "STDDEV",
        "STDDEV_POP",
        "STDDEV_SAMP",
        "SUM",
        "VARIANCE",
        "VAR_POP",
        "VAR_SAMP",
    ])
});

fn is_aggregate_function(name: &ObjectName) -> bool {
    match name.0.last() {
        Some(ObjectNamePart::Identifier(ident)) => {
            AGGREGATE_FUNCTIONS.contains(ident.value.to_uppercase().as_str())
        }
        _ => false,
    }
}

/// Returns true if the column's expression aggregates rows.
///
/// Only expressions that change the number of rows count as aggregations:
/// a window-attached aggregate (e.g. `SUM(x) OVER (...)`) produces one
/// value per input row and is classified as row-preserving. Snowflake
/// rejects window functions inside aggregate functions, so when both kinds
/// of node are present the aggregate can only be the window-attached one.
///
/// Fails if the expression does not parse, or if a row-reducing aggregate
/// appears on a non-measure column.
pub fn is_aggregation(column: &Column) -> Result<bool> {
    let parsed = crate::sql::parse::parse_expression(column.sql_expr())?;

    let mut aggregates = 0usize;
    let mut windows = 0usize;
    let _ = visit_expressions(&parsed, |expr: &Expr| {
        if let Expr::Function(func) = expr {
            if func.over.is_some() {
                windows += 1;
            }
            if is_aggregate_function(&func.name) {
                aggregates += 1;
            }
        }
        ControlFlow::<()>::Continue(())
    });

    if aggregates > 0 && windows == 0 {
        if column.kind != ColumnKind::Measure {
            return Err(SqlLoomError::AggregationOnNonMeasure {
                column: column.name.clone(),
            });
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_column_is_not_aggregation() {
        let col = Column::dimension("region").with_expr("region_code");
        assert!(!is_aggregation(&col).unwrap());
    }

    #[test]
    fn test_measure_sum_is_aggregation() {
        let col = Column::measure("total").with_expr("SUM(amount)");
        assert!(is_aggregation(&col).unwrap());
    }

    #[test]
    fn test_nested_aggregate_is_aggregation() {
        let col = Column::measure("total").with_expr("COALESCE(SUM(amount), 0)");
        assert!(is_aggregation(&col).unwrap());
    }

    #[test]
    fn test_aggregate_on_dimension_rejected() {
        let col = Column::dimension("region").with_expr("SUM(x)");
        let err = is_aggregation(&col).unwrap_err();
        assert!(matches!(
            err,
            SqlLoomError::AggregationOnNonMeasure { column } if column == "region"
        ));
    }

    #[test]
    fn test_windowed_aggregate_is_row_preserving() {
        // One value per row, so legal on any column kind
        let col = Column::dimension("running_total")
            .with_expr("SUM(amount) OVER (PARTITION BY region ORDER BY sold_at)");
        assert!(!is_aggregation(&col).unwrap());
    }

    #[test]
    fn test_window_function_is_row_preserving() {
        let col = Column::dimension("rn").with_expr("ROW_NUMBER() OVER (ORDER BY sold_at)");
        assert!(!is_aggregation(&col).unwrap());
    }

    #[test]
    fn test_scalar_function_is_not_aggregation() {
        let col = Column::dimension("region").with_expr("UPPER(region_code)");
        assert!(!is_aggregation(&col).unwrap());
    }

    #[test]
    fn test_unparseable_expression_fails() {
        let col = Column::dimension("bad").with_expr("SUM(");
        assert!(matches!(
            is_aggregation(&col).unwrap_err(),
            SqlLoomError::SqlParse(_)
        ));
    }

    #[test]
    fn test_case_insensitive_function_name() {
        let col = Column::measure("total").with_expr("sum(amount)");
        assert!(is_aggregation(&col).unwrap());
    }
}
