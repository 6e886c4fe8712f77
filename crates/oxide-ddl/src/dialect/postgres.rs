//! PostgreSQL dialect.

use crate::column::ColumnFormatter;
use crate::description::CommentDescriptionGenerator;
use crate::error::Result;
use crate::expressions::{AlterColumnExpression, DeleteIndexExpression};
use crate::generator::{Generator, Rules, Template, Templates};
use crate::options::{CompatibilityMode, GeneratorOptions};
use crate::quoter::AnsiQuoter;
use crate::schema::{ColumnDefinition, DefaultValue, SqlType};

/// Dialect name.
pub const NAME: &str = "postgres";

/// PostgreSQL column formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresColumn;

impl ColumnFormatter for PostgresColumn {
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
            SqlType::Blob => "BYTEA".to_string(),
            SqlType::Json => "JSONB".to_string(),
            SqlType::Uuid => "UUID".to_string(),
            SqlType::Custom(name) => name.clone(),
        }
    }

    fn column_type(&self, column: &ColumnDefinition) -> String {
        // PostgreSQL uses SERIAL/BIGSERIAL for auto-increment
        match (&column.sql_type, column.identity) {
            (SqlType::SmallInt | SqlType::Integer, true) => "SERIAL".to_string(),
            (SqlType::BigInt, true) => "BIGSERIAL".to_string(),
            (sql_type, _) => self.type_name(sql_type),
        }
    }

    fn identity_keyword(&self) -> Option<&'static str> {
        None
    }

    fn render_default(&self, default: &DefaultValue) -> String {
        match default {
            DefaultValue::Bool(true) => "TRUE".to_string(),
            DefaultValue::Bool(false) => "FALSE".to_string(),
            _ => default.to_sql(),
        }
    }
}

/// PostgreSQL templates.
pub const TEMPLATES: Templates = Templates {
    drop_index: Template::new("DROP INDEX {0}"),
    ..Templates::GENERIC
};

/// PostgreSQL rule table.
pub const RULES: Rules = Rules {
    alter_column,
    delete_index,
    ..Rules::GENERIC
};

/// Creates a PostgreSQL generator. The compatibility mode defaults to strict.
#[must_use]
pub fn generator(options: &GeneratorOptions) -> Generator {
    Generator::new(
        NAME,
        AnsiQuoter,
        PostgresColumn,
        CommentDescriptionGenerator,
        options.mode_or(CompatibilityMode::Strict),
    )
    .with_templates(TEMPLATES)
    .with_rules(RULES)
}

fn alter_column(g: &Generator, e: &AlterColumnExpression) -> Result<String> {
    let q = g.quoter();
    let schema = e.schema_name.as_deref();
    let column = &e.column;
    let name = q.quote_column_name(&column.name);

    // SERIAL is a pseudo-type and only valid in CREATE TABLE / ADD COLUMN
    let mut clauses = vec![format!(
        "ALTER COLUMN {} TYPE {}",
        name,
        g.column().type_name(&column.sql_type)
    )];
    clauses.push(if column.nullable {
        format!("ALTER COLUMN {name} DROP NOT NULL")
    } else {
        format!("ALTER COLUMN {name} SET NOT NULL")
    });
    if let Some(ref default) = column.default {
        clauses.push(format!(
            "ALTER COLUMN {} SET DEFAULT {}",
            name,
            g.column().render_default(default)
        ));
    }

    let mut statements = vec![format!(
        "ALTER TABLE {} {}",
        q.quote_table_name(&e.table_name, schema),
        clauses.join(", ")
    )];
    if let Some(ref description) = column.description {
        statements.extend(g.description().column_description(
            q,
            &e.table_name,
            schema,
            &column.name,
            description,
        ));
    }
    Ok(statements.join(";\n"))
}

fn delete_index(g: &Generator, e: &DeleteIndexExpression) -> Result<String> {
    // Indexes live in the table's schema, so the index name is qualified
    let index = &e.index;
    Ok(g.templates().drop_index.render(&[&g
        .quoter()
        .qualify(&index.name, index.schema_name.as_deref())]))
}
