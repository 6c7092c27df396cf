//! Narrow wrapper around the SQL parser
//!
//! All contact with sqlparser's parse/render entry points goes through
//! here; the rewrite logic only sees statements, expressions and WITH
//! fragments in the canonical dialect.

use sqlparser::ast::{Expr, Statement, With};
use sqlparser::dialect::SnowflakeDialect;
use sqlparser::parser::Parser;
use sqlparser::tokenizer::Token;

use crate::error::{Result, SqlLoomError};

/// Parse SQL into a single statement
pub fn parse_statement(sql: &str) -> Result<Statement> {
    let mut statements = Parser::parse_sql(&SnowflakeDialect {}, sql)
        .map_err(|e| SqlLoomError::SqlParse(e.to_string()))?;
    match statements.len() {
        0 => Err(SqlLoomError::SqlParse("empty SQL".into())),
        1 => Ok(statements.remove(0)),
        _ => Err(SqlLoomError::SqlParse(
            "expected a single statement".into(),
        )),
    }
}

/// Parse a bare SQL expression, requiring the full input to be consumed
pub fn parse_expression(sql: &str) -> Result<Expr> {
    let dialect = SnowflakeDialect {};
    let mut parser = Parser::new(&dialect)
        .try_with_sql(sql)
        .map_err(|e| SqlLoomError::SqlParse(e.to_string()))?;
    let expr = parser
        .parse_expr()
        .map_err(|e| SqlLoomError::SqlParse(e.to_string()))?;
    parser
        .expect_token(&Token::EOF)
        .map_err(|e| SqlLoomError::SqlParse(e.to_string()))?;
    Ok(expr)
}

/// Parse a `WITH name AS (...)` fragment into a WITH-clause node
///
/// sqlparser has no entry point for a bare WITH clause, so the fragment is
/// parsed attached to a dummy body and the body discarded.
pub fn parse_with_fragment(cte_sql: &str) -> Result<With> {
    let statement = parse_statement(&format!("{} SELECT 1", cte_sql))?;
    match statement {
        Statement::Query(query) => query.with.ok_or_else(|| {
            SqlLoomError::SqlParse(format!("not a WITH fragment: {}", cte_sql))
        }),
        _ => Err(SqlLoomError::SqlParse(format!(
            "not a WITH fragment: {}",
            cte_sql
        ))),
    }
}

/// Render a statement as pretty-printed SQL
pub fn render_pretty(statement: &Statement) -> String {
    format!("{statement:#}")
}
