//! Core semantic model types: SemanticModel, Table, Column, Field

use serde::{Deserialize, Serialize};

/// Column kind classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    #[default]
    Dimension,
    TimeDimension,
    Measure,
}

impl ColumnKind {
    /// Returns the section label this kind maps to in comparison views
    pub fn section(&self) -> &'static str {
        match self {
            ColumnKind::Dimension => "dimensions",
            ColumnKind::TimeDimension => "time_dimensions",
            ColumnKind::Measure => "measures",
        }
    }
}

fn default_data_type() -> String {
    "TEXT".to_string()
}

/// A field in the split table shape (dimension, time dimension or measure)
///
/// All three sections share this record; `default_aggregation` is only
/// meaningful for measures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// SQL expression (defaults to name if not provided)
    #[serde(default)]
    pub expr: Option<String>,
    #[serde(default = "default_data_type")]
    pub data_type: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sample_values: Vec<String>,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub default_aggregation: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expr: None,
            data_type: default_data_type(),
            synonyms: Vec::new(),
            description: None,
            sample_values: Vec::new(),
            unique: false,
            default_aggregation: None,
        }
    }

    pub fn with_expr(mut self, expr: impl Into<String>) -> Self {
        self.expr = Some(expr.into());
        self
    }

    pub fn with_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = data_type.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_synonym(mut self, synonym: impl Into<String>) -> Self {
        self.synonyms.push(synonym.into());
        self
    }

    pub fn with_sample_value(mut self, value: impl Into<String>) -> Self {
        self.sample_values.push(value.into());
        self
    }

    pub fn with_default_aggregation(mut self, agg: impl Into<String>) -> Self {
        self.default_aggregation = Some(agg.into());
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Returns the SQL expression for this field
    pub fn sql_expr(&self) -> &str {
        self.expr.as_deref().unwrap_or(&self.name)
    }
}

/// A column in the canonical (flat) table shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    /// SQL expression (defaults to name if not provided)
    #[serde(default)]
    pub expr: Option<String>,
    #[serde(default = "default_data_type")]
    pub data_type: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sample_values: Vec<String>,
    #[serde(default)]
    pub unique: bool,
    /// Only meaningful when kind is Measure
    #[serde(default)]
    pub default_aggregation: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
            expr: None,
            data_type: default_data_type(),
            synonyms: Vec::new(),
            description: None,
            sample_values: Vec::new(),
            unique: false,
            default_aggregation: None,
        }
    }

    pub fn dimension(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Dimension)
    }

    pub fn time_dimension(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::TimeDimension)
    }

    pub fn measure(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Measure)
    }

    pub fn with_expr(mut self, expr: impl Into<String>) -> Self {
        self.expr = Some(expr.into());
        self
    }

    pub fn with_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = data_type.into();
        self
    }

    pub fn with_default_aggregation(mut self, agg: impl Into<String>) -> Self {
        self.default_aggregation = Some(agg.into());
        self
    }

    /// Builds a canonical column from a split-shape field
    pub fn from_field(field: &Field, kind: ColumnKind) -> Self {
        Self {
            name: field.name.clone(),
            kind,
            expr: field.expr.clone(),
            data_type: field.data_type.clone(),
            synonyms: field.synonyms.clone(),
            description: field.description.clone(),
            sample_values: field.sample_values.clone(),
            unique: field.unique,
            default_aggregation: field.default_aggregation.clone(),
        }
    }

    /// Returns the SQL expression for this column
    pub fn sql_expr(&self) -> &str {
        self.expr.as_deref().unwrap_or(&self.name)
    }
}

/// A physical table reference, qualified up to database.schema.table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullyQualifiedTable {
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    pub table: String,
}

impl FullyQualifiedTable {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            database: None,
            schema: None,
            table: table.into(),
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Renders the qualified name, omitting absent qualifiers from the left
    pub fn qualified_name(&self) -> String {
        let mut fqn = self.table.clone();
        if let Some(schema) = &self.schema {
            fqn = format!("{}.{}", schema, fqn);
        }
        if let Some(database) = &self.database {
            fqn = format!("{}.{}", database, fqn);
        }
        fqn
    }
}

/// A logical table over a physical base table
///
/// Column definitions live in exactly one of two shapes: the flat `columns`
/// list, or the split `dimensions`/`time_dimensions`/`measures` lists.
/// Populating both is a validation error caught at canonicalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub base_table: FullyQualifiedTable,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub dimensions: Vec<Field>,
    #[serde(default)]
    pub time_dimensions: Vec<Field>,
    #[serde(default)]
    pub measures: Vec<Field>,
}

impl Table {
    pub fn new(name: impl Into<String>, base_table: FullyQualifiedTable) -> Self {
        Self {
            name: name.into(),
            description: None,
            base_table,
            columns: Vec::new(),
            dimensions: Vec::new(),
            time_dimensions: Vec::new(),
            measures: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_dimension(mut self, field: Field) -> Self {
        self.dimensions.push(field);
        self
    }

    pub fn with_time_dimension(mut self, field: Field) -> Self {
        self.time_dimensions.push(field);
        self
    }

    pub fn with_measure(mut self, field: Field) -> Self {
        self.measures.push(field);
        self
    }

    /// True if any split-shape section is populated
    pub fn has_split_shape(&self) -> bool {
        !self.dimensions.is_empty()
            || !self.time_dimensions.is_empty()
            || !self.measures.is_empty()
    }
}

/// An ordered catalog of logical tables
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SemanticModel {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl SemanticModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    /// Find a table by name
    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }
}
