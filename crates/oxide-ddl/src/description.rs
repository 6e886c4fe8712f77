//! Table and column description statements.

use std::fmt;

use crate::quoter::Quoter;
use crate::schema::TableDefinition;

/// Trait for turning descriptions into SQL statements.
pub trait DescriptionGenerator: Send + Sync + fmt::Debug {
    /// Statement attaching `description` to a table.
    fn table_description(
        &self,
        quoter: &dyn Quoter,
        table: &str,
        schema: Option<&str>,
        description: &str,
    ) -> Option<String>;

    /// Statement attaching `description` to a column.
    fn column_description(
        &self,
        quoter: &dyn Quoter,
        table: &str,
        schema: Option<&str>,
        column: &str,
        description: &str,
    ) -> Option<String>;

    /// All description statements for a new table, table first.
    fn create_table_descriptions(&self, quoter: &dyn Quoter, table: &TableDefinition) -> Vec<String> {
        let schema = table.schema_name.as_deref();
        let table_stmt = table
            .description
            .as_deref()
            .and_then(|d| self.table_description(quoter, &table.name, schema, d));
        let column_stmts = table.columns.iter().filter_map(|c| {
            c.description
                .as_deref()
                .and_then(|d| self.column_description(quoter, &table.name, schema, &c.name, d))
        });
        table_stmt.into_iter().chain(column_stmts).collect()
    }
}

/// Drops all descriptions.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyDescriptionGenerator;

impl DescriptionGenerator for EmptyDescriptionGenerator {
    fn table_description(&self, _: &dyn Quoter, _: &str, _: Option<&str>, _: &str) -> Option<String> {
        None
    }

    fn column_description(
        &self,
        _: &dyn Quoter,
        _: &str,
        _: Option<&str>,
        _: &str,
        _: &str,
    ) -> Option<String> {
        None
    }
}

/// Emits `COMMENT ON` statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentDescriptionGenerator;

impl DescriptionGenerator for CommentDescriptionGenerator {
    fn table_description(
        &self,
        quoter: &dyn Quoter,
        table: &str,
        schema: Option<&str>,
        description: &str,
    ) -> Option<String> {
        Some(format!(
            "COMMENT ON TABLE {} IS {}",
            quoter.quote_table_name(table, schema),
            quoter.quote_value(description)
        ))
    }

    fn column_description(
        &self,
        quoter: &dyn Quoter,
        table: &str,
        schema: Option<&str>,
        column: &str,
        description: &str,
    ) -> Option<String> {
        Some(format!(
            "COMMENT ON COLUMN {}.{} IS {}",
            quoter.quote_table_name(table, schema),
            quoter.quote_column_name(column),
            quoter.quote_value(description)
        ))
    }
}
