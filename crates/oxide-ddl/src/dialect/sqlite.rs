//! SQLite dialect.
//!
//! SQLite has limited `ALTER TABLE` support: columns cannot be altered, there
//! are no sequences or named default constraints, and foreign keys and
//! constraints only exist as part of `CREATE TABLE`. UNIQUE constraints are
//! emulated with unique indexes. Index names live in the schema, not the
//! table, so the schema prefixes the index name instead of the table name.

use crate::column::ColumnFormatter;
use crate::description::EmptyDescriptionGenerator;
use crate::error::Result;
use crate::expressions::{
    AlterColumnExpression, AlterDefaultConstraintExpression, CreateColumnExpression,
    CreateConstraintExpression, CreateForeignKeyExpression, CreateIndexExpression,
    CreateSequenceExpression, CreateTableExpression,
    DeleteConstraintExpression, DeleteDefaultConstraintExpression, DeleteForeignKeyExpression,
    DeleteIndexExpression, DeleteSequenceExpression,
};
use crate::generator::generic::{self, index_column_list, unique_prefix};
use crate::generator::{Generator, Rules, Template, Templates};
use crate::options::{CompatibilityMode, GeneratorOptions};
use crate::quoter::Quoter;
use crate::schema::{ColumnDefinition, SqlType, TableDefinition};

/// Dialect name.
pub const NAME: &str = "sqlite";

/// SQLite identifier quoter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteQuoter;

impl Quoter for SqliteQuoter {
    fn quote_index_name(&self, name: &str, schema: Option<&str>) -> String {
        self.qualify(name, schema)
    }
}

/// SQLite column formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteColumn;

impl ColumnFormatter for SqliteColumn {
    fn type_name(&self, sql_type: &SqlType) -> String {
        // SQLite has dynamic typing with type affinity
        match sql_type {
            SqlType::SmallInt | SqlType::Integer | SqlType::BigInt => "INTEGER".to_string(),
            SqlType::Boolean => "INTEGER".to_string(),
            SqlType::Real | SqlType::Double => "REAL".to_string(),
            SqlType::Decimal(_, _) => "NUMERIC".to_string(),
            SqlType::Text | SqlType::Varchar(_) | SqlType::Char(_) => "TEXT".to_string(),
            SqlType::Date | SqlType::Time | SqlType::Timestamp => "TEXT".to_string(),
            SqlType::Json | SqlType::Uuid => "TEXT".to_string(),
            SqlType::Blob => "BLOB".to_string(),
            SqlType::Custom(name) => name.clone(),
        }
    }

    fn column_type(&self, column: &ColumnDefinition) -> String {
        if column.identity {
            "INTEGER".to_string()
        } else {
            self.type_name(&column.sql_type)
        }
    }

    fn identity_keyword(&self) -> Option<&'static str> {
        Some("AUTOINCREMENT")
    }
}

/// SQLite templates.
pub const TEMPLATES: Templates = Templates {
    rename_table: Template::new("ALTER TABLE {0} RENAME TO {1}"),
    create_index: Template::new("CREATE {0}INDEX {1} ON {2} ({3})"),
    drop_index: Template::new("DROP INDEX {0}"),
};

/// SQLite rule table.
pub const RULES: Rules = Rules {
    create_table,
    create_column,
    alter_column,
    alter_default_constraint,
    delete_default_constraint,
    create_foreign_key,
    delete_foreign_key,
    create_sequence,
    delete_sequence,
    create_constraint,
    delete_constraint,
    create_index,
    delete_index,
    ..Rules::GENERIC
};

/// Creates a SQLite generator. The compatibility mode defaults to strict.
#[must_use]
pub fn generator(options: &GeneratorOptions) -> Generator {
    Generator::new(
        NAME,
        SqliteQuoter,
        SqliteColumn,
        EmptyDescriptionGenerator,
        options.mode_or(CompatibilityMode::Strict),
    )
    .with_templates(TEMPLATES)
    .with_rules(RULES)
}

fn create_table(g: &Generator, e: &CreateTableExpression) -> Result<String> {
    let mut identities = e.table.columns.iter().filter(|c| c.identity);
    let Some(identity) = identities.next() else {
        return generic::create_table(g, e);
    };
    if identities.next().is_some() {
        return g.unsupported("SQLite allows only one AUTOINCREMENT column per table");
    }

    // AUTOINCREMENT is only valid on the table's sole INTEGER PRIMARY KEY
    let identity = identity.name.clone();
    let table = TableDefinition {
        columns: e
            .table
            .columns
            .iter()
            .map(|c| ColumnDefinition {
                primary_key: c.name == identity,
                nullable: c.nullable && c.name != identity,
                ..c.clone()
            })
            .collect(),
        ..e.table.clone()
    };
    generic::create_table(g, &CreateTableExpression::new(table))
}

fn create_column(g: &Generator, e: &CreateColumnExpression) -> Result<String> {
    if e.column.identity {
        return g.unsupported("SQLite cannot add an AUTOINCREMENT column");
    }
    if e.column.primary_key {
        return g.unsupported("SQLite cannot add a PRIMARY KEY column");
    }
    generic::create_column(g, e)
}

fn alter_column(g: &Generator, _: &AlterColumnExpression) -> Result<String> {
    g.unsupported("SQLite does not support alter column")
}

fn alter_default_constraint(g: &Generator, _: &AlterDefaultConstraintExpression) -> Result<String> {
    g.unsupported("SQLite does not support altering of default constraints")
}

fn delete_default_constraint(g: &Generator, _: &DeleteDefaultConstraintExpression) -> Result<String> {
    g.unsupported("Default constraints are not supported in SQLite")
}

fn create_foreign_key(g: &Generator, e: &CreateForeignKeyExpression) -> Result<String> {
    // Already emitted inline by CREATE TABLE
    if e.foreign_key.is_already_embedded() {
        return Ok(String::new());
    }
    g.unsupported("Foreign keys are not supported in SQLite")
}

fn delete_foreign_key(g: &Generator, e: &DeleteForeignKeyExpression) -> Result<String> {
    if e.foreign_key.is_already_embedded() {
        return Ok(String::new());
    }
    g.unsupported("Foreign keys are not supported in SQLite")
}

fn create_sequence(g: &Generator, _: &CreateSequenceExpression) -> Result<String> {
    g.unsupported("Sequences are not supported in SQLite")
}

fn delete_sequence(g: &Generator, _: &DeleteSequenceExpression) -> Result<String> {
    g.unsupported("Sequences are not supported in SQLite")
}

fn create_constraint(g: &Generator, e: &CreateConstraintExpression) -> Result<String> {
    if !e.constraint.is_unique() {
        return g.unsupported("Only UNIQUE constraints are supported in SQLite");
    }
    g.generate_create_index(&e.to_unique_index())
}

fn delete_constraint(g: &Generator, e: &DeleteConstraintExpression) -> Result<String> {
    if !e.constraint.is_unique() {
        return g.unsupported("Only UNIQUE constraints are supported in SQLite");
    }
    g.generate_delete_index(&e.to_index_drop())
}

fn create_index(g: &Generator, e: &CreateIndexExpression) -> Result<String> {
    let index = &e.index;
    if index.columns.is_empty() {
        return g.unsupported(generic::INDEX_WITHOUT_COLUMNS);
    }
    let q = g.quoter();
    Ok(g.templates().create_index.render(&[
        unique_prefix(index),
        &q.quote_index_name(&index.name, index.schema_name.as_deref()),
        &q.quote_table_name(&index.table_name, None),
        &index_column_list(g, index),
    ]))
}

fn delete_index(g: &Generator, e: &DeleteIndexExpression) -> Result<String> {
    let index = &e.index;
    Ok(g.templates().drop_index.render(&[&g
        .quoter()
        .quote_index_name(&index.name, index.schema_name.as_deref())]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DdlError;
    use crate::expressions::{CreateTableExpression, RenameTableExpression};
    use crate::schema::{
        ConstraintDefinition, ConstraintKind, DefaultValue, ForeignKeyDefinition, ForeignKeyRule,
        IndexColumnDefinition, IndexDefinition, SequenceDefinition, TableDefinition,
    };

    fn strict() -> Generator {
        generator(&GeneratorOptions::new())
    }

    fn loose() -> Generator {
        generator(&GeneratorOptions::new().compatibility_mode(CompatibilityMode::Loose))
    }

    #[test]
    fn test_defaults_to_strict() {
        assert_eq!(strict().compatibility().mode(), CompatibilityMode::Strict);
        assert_eq!(strict().name(), "sqlite");
    }

    #[test]
    fn test_create_table_with_identity() {
        let expr = CreateTableExpression::new(
            TableDefinition::new("users")
                .column(ColumnDefinition::new("id", SqlType::BigInt).identity())
                .column(ColumnDefinition::new("username", SqlType::Varchar(255)).not_null().unique())
                .column(
                    ColumnDefinition::new("active", SqlType::Boolean)
                        .not_null()
                        .default(DefaultValue::Bool(true)),
                ),
        );

        assert_eq!(
            strict().generate_create_table(&expr).unwrap(),
            "CREATE TABLE \"users\" (\"id\" INTEGER PRIMARY KEY AUTOINCREMENT, \
             \"username\" TEXT NOT NULL UNIQUE, \"active\" INTEGER NOT NULL DEFAULT 1)"
        );
    }

    #[test]
    fn test_identity_is_the_only_primary_key() {
        let composite = CreateTableExpression::new(
            TableDefinition::new("t")
                .column(ColumnDefinition::new("id", SqlType::Integer).primary_key().identity())
                .column(ColumnDefinition::new("k", SqlType::Integer).primary_key()),
        );
        assert_eq!(
            strict().generate_create_table(&composite).unwrap(),
            "CREATE TABLE \"t\" (\"id\" INTEGER PRIMARY KEY AUTOINCREMENT, \"k\" INTEGER NOT NULL)"
        );

        let separate = CreateTableExpression::new(
            TableDefinition::new("t")
                .column(ColumnDefinition::new("id", SqlType::Integer).primary_key())
                .column(ColumnDefinition::new("n", SqlType::Integer).identity()),
        );
        assert_eq!(
            strict().generate_create_table(&separate).unwrap(),
            "CREATE TABLE \"t\" (\"id\" INTEGER NOT NULL, \"n\" INTEGER PRIMARY KEY AUTOINCREMENT)"
        );
    }

    #[test]
    fn test_two_identity_columns_are_unsupported() {
        let expr = CreateTableExpression::new(
            TableDefinition::new("t")
                .column(ColumnDefinition::new("a", SqlType::Integer).identity())
                .column(ColumnDefinition::new("b", SqlType::Integer).identity()),
        );
        let err = strict().generate_create_table(&expr).unwrap_err();
        assert!(err.to_string().contains("only one AUTOINCREMENT"));
        assert_eq!(loose().generate_create_table(&expr).unwrap(), "");
    }

    #[test]
    fn test_add_identity_or_primary_key_column_is_unsupported() {
        let identity = CreateColumnExpression::new(
            "t",
            ColumnDefinition::new("n", SqlType::Integer).identity(),
        );
        let err = strict().generate_create_column(&identity).unwrap_err();
        assert!(err.to_string().contains("cannot add an AUTOINCREMENT column"));
        assert_eq!(loose().generate_create_column(&identity).unwrap(), "");

        let primary_key = CreateColumnExpression::new(
            "t",
            ColumnDefinition::new("k", SqlType::Integer).primary_key(),
        );
        assert!(strict().generate_create_column(&primary_key).is_err());

        let plain = CreateColumnExpression::new("t", ColumnDefinition::new("bio", SqlType::Text));
        assert_eq!(
            strict().generate_create_column(&plain).unwrap(),
            "ALTER TABLE \"t\" ADD COLUMN \"bio\" TEXT"
        );
    }

    #[test]
    fn test_create_table_embeds_foreign_key() {
        let expr = CreateTableExpression::new(
            TableDefinition::new("orders")
                .column(ColumnDefinition::new("id", SqlType::Integer).primary_key())
                .column(ColumnDefinition::new("user_id", SqlType::Integer).not_null())
                .foreign_key(
                    ForeignKeyDefinition::new("FK_orders_users", "orders", "users")
                        .column("user_id", "id")
                        .on_delete(ForeignKeyRule::Cascade),
                ),
        );

        assert_eq!(
            strict().generate_create_table(&expr).unwrap(),
            "CREATE TABLE \"orders\" (\"id\" INTEGER PRIMARY KEY, \"user_id\" INTEGER NOT NULL, \
             CONSTRAINT \"FK_orders_users\" FOREIGN KEY (\"user_id\") REFERENCES \"users\" (\"id\") \
             ON DELETE CASCADE)"
        );

        for fk in expr.embedded_foreign_keys() {
            assert_eq!(strict().generate_create_foreign_key(&fk).unwrap(), "");
        }
    }

    #[test]
    fn test_rename_table() {
        let expr = RenameTableExpression::new("old_users", "users");
        assert_eq!(
            strict().generate_rename_table(&expr).unwrap(),
            "ALTER TABLE \"old_users\" RENAME TO \"users\""
        );
    }

    #[test]
    fn test_unsupported_operations() {
        let column = ColumnDefinition::new("name", SqlType::Text);
        let cases: Vec<(Result<String>, Result<String>, &str)> = vec![
            (
                strict().generate_alter_column(&AlterColumnExpression::new("users", column.clone())),
                loose().generate_alter_column(&AlterColumnExpression::new("users", column)),
                "alter column",
            ),
            (
                strict().generate_create_sequence(&CreateSequenceExpression::new(
                    SequenceDefinition::new("seq"),
                )),
                loose().generate_create_sequence(&CreateSequenceExpression::new(
                    SequenceDefinition::new("seq"),
                )),
                "Sequences",
            ),
            (
                strict().generate_delete_sequence(&DeleteSequenceExpression::new("seq")),
                loose().generate_delete_sequence(&DeleteSequenceExpression::new("seq")),
                "Sequences",
            ),
            (
                strict().generate_delete_default_constraint(
                    &DeleteDefaultConstraintExpression::new("users", "name"),
                ),
                loose().generate_delete_default_constraint(
                    &DeleteDefaultConstraintExpression::new("users", "name"),
                ),
                "Default constraints",
            ),
            (
                strict().generate_alter_default_constraint(&AlterDefaultConstraintExpression::new(
                    "users",
                    "name",
                    DefaultValue::Null,
                )),
                loose().generate_alter_default_constraint(&AlterDefaultConstraintExpression::new(
                    "users",
                    "name",
                    DefaultValue::Null,
                )),
                "default constraints",
            ),
        ];

        for (strict_result, loose_result, needle) in cases {
            match strict_result {
                Err(DdlError::Unsupported { dialect, feature }) => {
                    assert_eq!(dialect, "sqlite");
                    assert!(feature.contains(needle), "{feature} should mention {needle}");
                }
                other => panic!("expected unsupported error, got {other:?}"),
            }
            assert_eq!(loose_result.unwrap(), "");
        }
    }

    #[test]
    fn test_foreign_key_unsupported_unless_embedded() {
        let fk = ForeignKeyDefinition::new("FK_orders_users", "orders", "users").column("user_id", "id");

        let create = CreateForeignKeyExpression::new(fk.clone());
        assert!(strict().generate_create_foreign_key(&create).is_err());
        assert_eq!(loose().generate_create_foreign_key(&create).unwrap(), "");

        let delete = DeleteForeignKeyExpression::new(fk.clone());
        assert!(strict().generate_delete_foreign_key(&delete).is_err());

        let embedded = DeleteForeignKeyExpression::new(fk.embedded());
        assert_eq!(strict().generate_delete_foreign_key(&embedded).unwrap(), "");
    }

    #[test]
    fn test_unique_constraint_becomes_index() {
        let expr = CreateConstraintExpression::new(
            ConstraintDefinition::unique("UQ_users_email", "users", ["email"]).schema("main"),
        );
        assert_eq!(
            strict().generate_create_constraint(&expr).unwrap(),
            "CREATE UNIQUE INDEX \"main\".\"UQ_users_email\" ON \"users\" (\"email\" ASC)"
        );

        let drop = DeleteConstraintExpression::new(
            ConstraintDefinition::unique("UQ_users_email", "users", ["email"]).schema("main"),
        );
        assert_eq!(
            strict().generate_delete_constraint(&drop).unwrap(),
            "DROP INDEX \"main\".\"UQ_users_email\""
        );
    }

    #[test]
    fn test_non_unique_constraint_is_unsupported() {
        let pk = CreateConstraintExpression::new(ConstraintDefinition::primary_key(
            "PK_users", "users", ["id"],
        ));
        let err = strict().generate_create_constraint(&pk).unwrap_err();
        assert!(err.to_string().contains("Only UNIQUE constraints"));
        assert_eq!(loose().generate_create_constraint(&pk).unwrap(), "");

        let check = DeleteConstraintExpression::new(ConstraintDefinition::new(
            "CK_age",
            "users",
            ConstraintKind::Check {
                expression: "age > 0".to_string(),
            },
        ));
        assert!(strict().generate_delete_constraint(&check).is_err());
        assert_eq!(loose().generate_delete_constraint(&check).unwrap(), "");
    }

    #[test]
    fn test_create_index_schema_prefixes_index_name() {
        let expr = CreateIndexExpression::new(
            IndexDefinition::new("IX_users_name", "users")
                .schema("main")
                .column(IndexColumnDefinition::descending("last"))
                .column(IndexColumnDefinition::new("first")),
        );
        assert_eq!(
            strict().generate_create_index(&expr).unwrap(),
            "CREATE INDEX \"main\".\"IX_users_name\" ON \"users\" (\"last\" DESC, \"first\" ASC)"
        );
    }

    #[test]
    fn test_index_without_columns_is_rejected() {
        let expr = CreateIndexExpression::new(IndexDefinition::new("IX_users", "users"));
        assert!(strict().generate_create_index(&expr).unwrap_err().is_unsupported());
        assert_eq!(loose().generate_create_index(&expr).unwrap(), "");
    }

    #[test]
    fn test_delete_index() {
        let expr = DeleteIndexExpression::new(IndexDefinition::new("IX_users_name", "users"));
        assert_eq!(
            strict().generate_delete_index(&expr).unwrap(),
            "DROP INDEX \"IX_users_name\""
        );
    }

    #[test]
    fn test_type_names() {
        let c = SqliteColumn;
        assert_eq!(c.type_name(&SqlType::BigInt), "INTEGER");
        assert_eq!(c.type_name(&SqlType::Varchar(255)), "TEXT");
        assert_eq!(c.type_name(&SqlType::Boolean), "INTEGER");
        assert_eq!(c.type_name(&SqlType::Timestamp), "TEXT");
        assert_eq!(c.type_name(&SqlType::Blob), "BLOB");
    }
}
