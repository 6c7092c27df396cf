//! Query rewriter: expands logical tables into WITH clauses, and strips
//! them back out

use sqlparser::ast::{Cte, Statement};

use crate::core::{to_column_format, SemanticModel};
use crate::error::{Result, SqlLoomError};
use crate::sql::cte::{generate_cte, is_logical_table};
use crate::sql::parse;

/// Expands every logical table in the model as a CTE spliced into the
/// query's WITH clause.
///
/// Synthesized CTEs are placed before any CTEs the query already has, in
/// model order, so author-written CTEs can reference logical tables by
/// name. Returns the rewritten query pretty-printed.
pub fn expand_logical_tables(sql: &str, model: &SemanticModel) -> Result<String> {
    let model = to_column_format(model)?;

    let mut fragments = Vec::new();
    for table in &model.tables {
        let cte_sql = generate_cte(table)?;
        fragments.push(parse::parse_with_fragment(&cte_sql)?);
    }

    let mut statement = parse::parse_statement(sql)?;
    let Statement::Query(query) = &mut statement else {
        return Err(SqlLoomError::UnsupportedStatement(
            "only query statements can reference logical tables".into(),
        ));
    };

    if !fragments.is_empty() {
        match query.with.take() {
            None => {
                let mut merged = fragments.remove(0);
                for fragment in fragments {
                    merged.cte_tables.extend(fragment.cte_tables);
                }
                query.with = Some(merged);
            }
            Some(mut existing) => {
                let mut cte_tables: Vec<Cte> = fragments
                    .into_iter()
                    .flat_map(|fragment| fragment.cte_tables)
                    .collect();
                cte_tables.append(&mut existing.cte_tables);
                existing.cte_tables = cte_tables;
                query.with = Some(existing);
            }
        }
    }

    Ok(parse::render_pretty(&statement))
}

/// Removes the leading logical-table CTE from a previously expanded query.
///
/// Strips exactly one CTE per call; when the WITH clause holds only that
/// CTE the whole clause is dropped. Fails if the query has no WITH clause
/// or its first CTE is not a logical table, which is also how callers
/// looping over a multiply-expanded query detect that none remain.
pub fn strip_logical_cte(sql: &str) -> Result<String> {
    let mut statement = parse::parse_statement(sql)?;
    let Statement::Query(query) = &mut statement else {
        return Err(SqlLoomError::MissingLogicalCte);
    };

    let only_cte = {
        let with = query.with.as_ref().ok_or(SqlLoomError::MissingLogicalCte)?;
        let first = with
            .cte_tables
            .first()
            .ok_or(SqlLoomError::MissingLogicalCte)?;
        if !is_logical_table(&first.alias.name.value) {
            return Err(SqlLoomError::MissingLogicalCte);
        }
        with.cte_tables.len() == 1
    };

    if only_cte {
        query.with = None;
    } else if let Some(with) = query.with.as_mut() {
        with.cte_tables.remove(0);
    }

    Ok(parse::render_pretty(&statement))
}
