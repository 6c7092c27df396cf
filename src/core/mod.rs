//! Core semantic model types and canonicalization

mod canonical;
mod model;

pub use canonical::to_column_format;
pub use model::{Column, ColumnKind, Field, FullyQualifiedTable, SemanticModel, Table};
