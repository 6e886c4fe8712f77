//! Column definition formatting.

use std::fmt;

use crate::quoter::Quoter;
use crate::schema::{ColumnDefinition, DefaultValue, SqlType};

/// Trait for dialect-specific column definition SQL.
pub trait ColumnFormatter: Send + Sync + fmt::Debug {
    /// Returns the SQL type name for the given type.
    fn type_name(&self, sql_type: &SqlType) -> String;

    /// Returns the type emitted for `column`.
    ///
    /// Dialects that encode identity in the type (e.g. `SERIAL`) override this.
    fn column_type(&self, column: &ColumnDefinition) -> String {
        self.type_name(&column.sql_type)
    }

    /// Returns the keyword marking an identity column, if the dialect uses one.
    fn identity_keyword(&self) -> Option<&'static str> {
        Some("GENERATED BY DEFAULT AS IDENTITY")
    }

    /// Renders a default value.
    fn render_default(&self, default: &DefaultValue) -> String {
        default.to_sql()
    }

    /// Generates column definition SQL.
    ///
    /// `inline_primary_key` is false when the table declares a composite
    /// primary key clause instead.
    fn format(&self, quoter: &dyn Quoter, column: &ColumnDefinition, inline_primary_key: bool) -> String {
        format_column(self, quoter, column, inline_primary_key)
    }
}

/// The baseline column layout shared by all formatters:
/// `name type [PRIMARY KEY] [identity] [NOT NULL] [UNIQUE] [DEFAULT v]`.
pub fn format_column<F: ColumnFormatter + ?Sized>(
    formatter: &F,
    quoter: &dyn Quoter,
    column: &ColumnDefinition,
    inline_primary_key: bool,
) -> String {
    let mut sql = format!(
        "{} {}",
        quoter.quote_column_name(&column.name),
        formatter.column_type(column)
    );

    let primary_key = inline_primary_key && column.primary_key;
    if primary_key {
        sql.push_str(" PRIMARY KEY");
    }

    if column.identity {
        if let Some(keyword) = formatter.identity_keyword() {
            sql.push(' ');
            sql.push_str(keyword);
        }
    }

    if !column.nullable && !primary_key {
        sql.push_str(" NOT NULL");
    }

    if column.unique && !column.primary_key {
        sql.push_str(" UNIQUE");
    }

    if let Some(ref default) = column.default {
        sql.push_str(" DEFAULT ");
        sql.push_str(&formatter.render_default(default));
    }

    sql
}

/// ANSI SQL column formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericColumn;

impl GenericColumn {
    /// Creates a new generic column formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ColumnFormatter for GenericColumn {
    fn type_name(&self, sql_type: &SqlType) -> String {
        match sql_type {
            SqlType::SmallInt => "SMALLINT".to_string(),
            SqlType::Integer => "INTEGER".to_string(),
            SqlType::BigInt => "BIGINT".to_string(),
            SqlType::Text => "TEXT".to_string(),
            SqlType::Varchar(len) => format!("VARCHAR({len})"),
            SqlType::Char(len) => format!("CHAR({len})"),
            SqlType::Boolean => "BOOLEAN".to_string(),
            SqlType::Date => "DATE".to_string(),
            SqlType::Time => "TIME".to_string(),
            SqlType::Timestamp => "TIMESTAMP".to_string(),
            SqlType::Real => "REAL".to_string(),
            SqlType::Double => "DOUBLE PRECISION".to_string(),
            SqlType::Decimal(p, s) => format!("DECIMAL({p}, {s})"),
            SqlType::Blob => "BLOB".to_string(),
            SqlType::Json => "JSON".to_string(),
            SqlType::Uuid => "UUID".to_string(),
            SqlType::Custom(name) => name.clone(),
        }
    }
}
