//! Baseline generation rules.
//!
//! These target a relational engine with ordinary `ALTER TABLE` support.
//! Dialect modules reuse them for every kind they do not override.

use crate::error::Result;
use crate::expressions::{
    AlterColumnExpression, AlterDefaultConstraintExpression, CreateColumnExpression,
    CreateConstraintExpression, CreateForeignKeyExpression, CreateIndexExpression,
    CreateSequenceExpression, CreateTableExpression, DeleteColumnExpression,
    DeleteConstraintExpression, DeleteDefaultConstraintExpression, DeleteForeignKeyExpression,
    DeleteIndexExpression, DeleteSequenceExpression, DeleteTableExpression, RenameColumnExpression,
    RenameTableExpression,
};
use crate::schema::{ConstraintKind, ForeignKeyDefinition, IndexDefinition};

use super::Generator;

/// Rejection message for an index with an empty column list.
pub const INDEX_WITHOUT_COLUMNS: &str = "An index must cover at least one column";

/// Quotes and joins column names.
pub fn column_list<S: AsRef<str>>(generator: &Generator, columns: &[S]) -> String {
    columns
        .iter()
        .map(|c| generator.quoter().quote_column_name(c.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders index columns with an explicit direction on each one.
pub fn index_column_list(generator: &Generator, index: &IndexDefinition) -> String {
    index
        .columns
        .iter()
        .map(|c| {
            format!(
                "{} {}",
                generator.quoter().quote_column_name(&c.name),
                c.direction.as_sql()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Returns `"UNIQUE "` for unique indexes.
pub const fn unique_prefix(index: &IndexDefinition) -> &'static str {
    if index.unique {
        "UNIQUE "
    } else {
        ""
    }
}

/// Renders `CONSTRAINT fk FOREIGN KEY (..) REFERENCES p (..) [ON DELETE ..] [ON UPDATE ..]`.
pub fn foreign_key_clause(generator: &Generator, fk: &ForeignKeyDefinition) -> String {
    let q = generator.quoter();
    let mut sql = format!(
        "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({})",
        q.quote_constraint_name(&fk.name),
        column_list(generator, &fk.foreign_columns),
        q.quote_table_name(&fk.primary_table, fk.primary_table_schema.as_deref()),
        column_list(generator, &fk.primary_columns)
    );
    if let Some(action) = fk.on_delete.as_sql() {
        sql.push_str(" ON DELETE ");
        sql.push_str(action);
    }
    if let Some(action) = fk.on_update.as_sql() {
        sql.push_str(" ON UPDATE ");
        sql.push_str(action);
    }
    sql
}

/// Joins a statement with its trailing description statements.
fn with_descriptions(statement: String, descriptions: Vec<String>) -> String {
    if descriptions.is_empty() {
        return statement;
    }
    std::iter::once(statement)
        .chain(descriptions)
        .collect::<Vec<_>>()
        .join(";\n")
}

pub fn create_table(g: &Generator, e: &CreateTableExpression) -> Result<String> {
    let table = &e.table;
    let q = g.quoter();

    let primary_key: Vec<&str> = table.primary_key_columns().collect();
    let inline_primary_key = primary_key.len() == 1;

    let mut definitions: Vec<String> = table
        .columns
        .iter()
        .map(|c| g.column().format(q, c, inline_primary_key))
        .collect();

    if primary_key.len() > 1 {
        definitions.push(format!("PRIMARY KEY ({})", column_list(g, &primary_key)));
    }

    definitions.extend(table.foreign_keys.iter().map(|fk| foreign_key_clause(g, fk)));

    let statement = format!(
        "CREATE TABLE {} ({})",
        q.quote_table_name(&table.name, table.schema_name.as_deref()),
        definitions.join(", ")
    );
    Ok(with_descriptions(
        statement,
        g.description().create_table_descriptions(q, table),
    ))
}

pub fn delete_table(g: &Generator, e: &DeleteTableExpression) -> Result<String> {
    Ok(format!(
        "DROP TABLE {}",
        g.quoter().quote_table_name(&e.table_name, e.schema_name.as_deref())
    ))
}

pub fn rename_table(g: &Generator, e: &RenameTableExpression) -> Result<String> {
    let q = g.quoter();
    Ok(g.templates().rename_table.render(&[
        &q.quote_table_name(&e.old_name, e.schema_name.as_deref()),
        &q.quote_table_name(&e.new_name, None),
    ]))
}

pub fn create_column(g: &Generator, e: &CreateColumnExpression) -> Result<String> {
    let q = g.quoter();
    let schema = e.schema_name.as_deref();
    let statement = format!(
        "ALTER TABLE {} ADD COLUMN {}",
        q.quote_table_name(&e.table_name, schema),
        g.column().format(q, &e.column, true)
    );
    let description = e.column.description.as_deref().and_then(|d| {
        g.description()
            .column_description(q, &e.table_name, schema, &e.column.name, d)
    });
    Ok(with_descriptions(statement, description.into_iter().collect()))
}

pub fn delete_column(g: &Generator, e: &DeleteColumnExpression) -> Result<String> {
    let q = g.quoter();
    Ok(format!(
        "ALTER TABLE {} DROP COLUMN {}",
        q.quote_table_name(&e.table_name, e.schema_name.as_deref()),
        q.quote_column_name(&e.column_name)
    ))
}

pub fn rename_column(g: &Generator, e: &RenameColumnExpression) -> Result<String> {
    let q = g.quoter();
    Ok(format!(
        "ALTER TABLE {} RENAME COLUMN {} TO {}",
        q.quote_table_name(&e.table_name, e.schema_name.as_deref()),
        q.quote_column_name(&e.old_name),
        q.quote_column_name(&e.new_name)
    ))
}

pub fn alter_column(g: &Generator, e: &AlterColumnExpression) -> Result<String> {
    let q = g.quoter();
    Ok(format!(
        "ALTER TABLE {} ALTER COLUMN {}",
        q.quote_table_name(&e.table_name, e.schema_name.as_deref()),
        g.column().format(q, &e.column, false)
    ))
}

pub fn alter_default_constraint(g: &Generator, e: &AlterDefaultConstraintExpression) -> Result<String> {
    let q = g.quoter();
    Ok(format!(
        "ALTER TABLE {} ALTER COLUMN {} SET DEFAULT {}",
        q.quote_table_name(&e.table_name, e.schema_name.as_deref()),
        q.quote_column_name(&e.column_name),
        g.column().render_default(&e.default_value)
    ))
}

pub fn delete_default_constraint(g: &Generator, e: &DeleteDefaultConstraintExpression) -> Result<String> {
    let q = g.quoter();
    Ok(format!(
        "ALTER TABLE {} ALTER COLUMN {} DROP DEFAULT",
        q.quote_table_name(&e.table_name, e.schema_name.as_deref()),
        q.quote_column_name(&e.column_name)
    ))
}

pub fn create_foreign_key(g: &Generator, e: &CreateForeignKeyExpression) -> Result<String> {
    let fk = &e.foreign_key;
    if fk.is_already_embedded() {
        return Ok(String::new());
    }
    Ok(format!(
        "ALTER TABLE {} ADD {}",
        g.quoter()
            .quote_table_name(&fk.foreign_table, fk.foreign_table_schema.as_deref()),
        foreign_key_clause(g, fk)
    ))
}

pub fn delete_foreign_key(g: &Generator, e: &DeleteForeignKeyExpression) -> Result<String> {
    let fk = &e.foreign_key;
    if fk.is_already_embedded() {
        return Ok(String::new());
    }
    let q = g.quoter();
    Ok(format!(
        "ALTER TABLE {} DROP CONSTRAINT {}",
        q.quote_table_name(&fk.foreign_table, fk.foreign_table_schema.as_deref()),
        q.quote_constraint_name(&fk.name)
    ))
}

pub fn create_sequence(g: &Generator, e: &CreateSequenceExpression) -> Result<String> {
    let seq = &e.sequence;
    let mut sql = format!(
        "CREATE SEQUENCE {}",
        g.quoter()
            .quote_sequence_name(&seq.name, seq.schema_name.as_deref())
    );
    if let Some(step) = seq.increment {
        sql.push_str(&format!(" INCREMENT BY {step}"));
    }
    if let Some(min) = seq.min_value {
        sql.push_str(&format!(" MINVALUE {min}"));
    }
    if let Some(max) = seq.max_value {
        sql.push_str(&format!(" MAXVALUE {max}"));
    }
    if let Some(start) = seq.start_with {
        sql.push_str(&format!(" START WITH {start}"));
    }
    if let Some(cache) = seq.cache {
        sql.push_str(&format!(" CACHE {cache}"));
    }
    if seq.cycle {
        sql.push_str(" CYCLE");
    }
    Ok(sql)
}

pub fn delete_sequence(g: &Generator, e: &DeleteSequenceExpression) -> Result<String> {
    Ok(format!(
        "DROP SEQUENCE {}",
        g.quoter()
            .quote_sequence_name(&e.sequence_name, e.schema_name.as_deref())
    ))
}

pub fn create_constraint(g: &Generator, e: &CreateConstraintExpression) -> Result<String> {
    let c = &e.constraint;
    let q = g.quoter();
    let body = match &c.kind {
        ConstraintKind::PrimaryKey => format!("PRIMARY KEY ({})", column_list(g, &c.columns)),
        ConstraintKind::Unique => format!("UNIQUE ({})", column_list(g, &c.columns)),
        ConstraintKind::Check { expression } => format!("CHECK ({expression})"),
    };
    Ok(format!(
        "ALTER TABLE {} ADD CONSTRAINT {} {}",
        q.quote_table_name(&c.table_name, c.schema_name.as_deref()),
        q.quote_constraint_name(&c.name),
        body
    ))
}

pub fn delete_constraint(g: &Generator, e: &DeleteConstraintExpression) -> Result<String> {
    let c = &e.constraint;
    let q = g.quoter();
    Ok(format!(
        "ALTER TABLE {} DROP CONSTRAINT {}",
        q.quote_table_name(&c.table_name, c.schema_name.as_deref()),
        q.quote_constraint_name(&c.name)
    ))
}

pub fn create_index(g: &Generator, e: &CreateIndexExpression) -> Result<String> {
    let index = &e.index;
    if index.columns.is_empty() {
        return g.unsupported(INDEX_WITHOUT_COLUMNS);
    }
    let q = g.quoter();
    let schema = index.schema_name.as_deref();
    Ok(g.templates().create_index.render(&[
        unique_prefix(index),
        &q.quote_index_name(&index.name, schema),
        &q.quote_table_name(&index.table_name, schema),
        &index_column_list(g, index),
    ]))
}

pub fn delete_index(g: &Generator, e: &DeleteIndexExpression) -> Result<String> {
    let index = &e.index;
    let q = g.quoter();
    let schema = index.schema_name.as_deref();
    Ok(g.templates().drop_index.render(&[
        &q.quote_index_name(&index.name, schema),
        &q.quote_table_name(&index.table_name, schema),
    ]))
}
