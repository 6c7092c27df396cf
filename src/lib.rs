//! sqlloom: a semantic-model-to-SQL compiler
//!
//! A semantic model is an ordered catalog of logical tables whose columns
//! are SQL expressions over physical base tables. sqlloom materializes
//! each logical table as a CTE and splices the CTEs into a query's WITH
//! clause, and can reverse the transformation one CTE at a time. All
//! operations are pure value transformations in the canonical (Snowflake)
//! dialect.
//!
//! ```
//! use sqlloom::{expand_logical_tables, Field, FullyQualifiedTable, SemanticModel, Table};
//!
//! let model = SemanticModel::new().with_table(
//!     Table::new("fact", FullyQualifiedTable::new("fact_tbl").with_schema("sch"))
//!         .with_dimension(Field::new("region").with_expr("region_code"))
//!         .with_measure(Field::new("total").with_expr("SUM(amount)")),
//! );
//!
//! let sql = expand_logical_tables("SELECT region FROM __fact", &model)?;
//! assert!(sql.contains("WITH __fact AS"));
//! # Ok::<(), sqlloom::SqlLoomError>(())
//! ```

pub mod compare;
pub mod config;
pub mod core;
pub mod error;
pub mod sql;

pub use crate::compare::{comparison_fields, FieldComparison};
pub use crate::core::{
    to_column_format, Column, ColumnKind, Field, FullyQualifiedTable, SemanticModel, Table,
};
pub use crate::error::{Result, SqlLoomError};
pub use crate::sql::{
    expand_logical_tables, generate_cte, is_aggregation, is_logical_table, logical_table_name,
    strip_logical_cte,
};
