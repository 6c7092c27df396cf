//! Error types for sqlloom

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqlLoomError {
    #[error("SQL parse error: {0}")]
    SqlParse(String),

    #[error("Unsupported statement: {0}")]
    UnsupportedStatement(String),

    #[error("Table '{0}' defines both columns and dimensions/time_dimensions/measures")]
    MixedTableShape(String),

    #[error("Aggregation expressions are only allowed on measure columns: {column}")]
    AggregationOnNonMeasure { column: String },

    #[error("Query must start with a logical table CTE")]
    MissingLogicalCte,

    #[error("Invalid model config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SqlLoomError>;
