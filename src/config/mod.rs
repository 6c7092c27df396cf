//! Loading semantic model definitions from YAML

use std::fs;
use std::path::Path;

use crate::core::SemanticModel;
use crate::error::{Result, SqlLoomError};

/// Load a semantic model from a YAML string
pub fn load_from_string(yaml: &str) -> Result<SemanticModel> {
    serde_yaml::from_str(yaml).map_err(|e| SqlLoomError::Config(e.to_string()))
}

/// Load a semantic model from a YAML file
pub fn load_from_file(path: impl AsRef<Path>) -> Result<SemanticModel> {
    let contents = fs::read_to_string(path)?;
    load_from_string(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{to_column_format, ColumnKind};

    #[test]
    fn test_load_split_shape() {
        let yaml = r#"
name: sales
tables:
  - name: fact
    description: order facts
    base_table:
      database: db
      schema: sch
      table: fact_tbl
    dimensions:
      - name: region
        expr: region_code
        synonyms: [area]
    time_dimensions:
      - name: sold_at
        data_type: TIMESTAMP_NTZ
    measures:
      - name: total
        expr: SUM(amount)
        default_aggregation: sum
"#;
        let model = load_from_string(yaml).unwrap();
        assert_eq!(model.name.as_deref(), Some("sales"));

        let table = model.get_table("fact").unwrap();
        assert_eq!(table.base_table.qualified_name(), "db.sch.fact_tbl");
        assert_eq!(table.dimensions[0].synonyms, vec!["area"]);
        assert_eq!(table.measures[0].default_aggregation.as_deref(), Some("sum"));
        // Defaults applied where the document is silent
        assert_eq!(table.dimensions[0].data_type, "TEXT");
        assert!(!table.dimensions[0].unique);
    }

    #[test]
    fn test_load_column_shape() {
        let yaml = r#"
tables:
  - name: fact
    base_table:
      table: fact_tbl
    columns:
      - name: region
        kind: dimension
        expr: region_code
      - name: total
        kind: measure
        expr: SUM(amount)
"#;
        let model = load_from_string(yaml).unwrap();
        let table = model.get_table("fact").unwrap();
        assert_eq!(table.columns[0].kind, ColumnKind::Dimension);
        assert_eq!(table.columns[1].kind, ColumnKind::Measure);
    }

    #[test]
    fn test_mixed_shape_loads_then_fails_canonicalization() {
        let yaml = r#"
tables:
  - name: fact
    base_table:
      table: fact_tbl
    columns:
      - name: region
        kind: dimension
    dimensions:
      - name: region
"#;
        let model = load_from_string(yaml).unwrap();
        assert!(to_column_format(&model).is_err());
    }

    #[test]
    fn test_malformed_yaml_fails() {
        assert!(matches!(
            load_from_string("tables: [not a table").unwrap_err(),
            SqlLoomError::Config(_)
        ));
    }

    #[test]
    fn test_missing_file_fails() {
        assert!(matches!(
            load_from_file("/nonexistent/model.yaml").unwrap_err(),
            SqlLoomError::Io(_)
        ));
    }
}
