#![allow(dead_code)]

use oxide_ddl::prelude::*;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn strict(dialect: Dialect) -> Generator {
    init_tracing();
    dialect.generator(&GeneratorOptions::new().compatibility_mode(CompatibilityMode::Strict))
}

pub fn loose(dialect: Dialect) -> Generator {
    init_tracing();
    dialect.generator(&GeneratorOptions::new().compatibility_mode(CompatibilityMode::Loose))
}

pub fn generate(generator: &Generator, expression: impl Into<Expression>) -> String {
    let expression = expression.into();
    generator
        .generate(&expression)
        .unwrap_or_else(|e| panic!("Failed to generate {}: {e}", expression.kind()))
}

pub fn generate_err(generator: &Generator, expression: impl Into<Expression>) -> DdlError {
    let expression = expression.into();
    generator
        .generate(&expression)
        .expect_err(&format!("Expected {} to be rejected", expression.kind()))
}

pub fn users_email_index(unique: bool) -> CreateIndexExpression {
    let mut index =
        IndexDefinition::new("IX_Users_Email", "Users").column(IndexColumnDefinition::new("Email"));
    index.unique = unique;
    CreateIndexExpression::new(index)
}

/// One expression of every kind.
pub fn one_of_each() -> Vec<Expression> {
    let fk = ForeignKeyDefinition::new("FK_Orders_Users", "Orders", "Users").column("UserId", "Id");
    vec![
        CreateTableExpression::new(
            TableDefinition::new("Users")
                .column(ColumnDefinition::new("Id", SqlType::Integer).primary_key())
                .column(ColumnDefinition::new("Email", SqlType::Varchar(255)).not_null()),
        )
        .into(),
        DeleteTableExpression::new("Users").into(),
        RenameTableExpression::new("Users", "Accounts").into(),
        CreateColumnExpression::new("Users", ColumnDefinition::new("Bio", SqlType::Text)).into(),
        DeleteColumnExpression::new("Users", "Bio").into(),
        RenameColumnExpression::new("Users", "Bio", "About").into(),
        AlterColumnExpression::new("Users", ColumnDefinition::new("Email", SqlType::Text)).into(),
        AlterDefaultConstraintExpression::new("Users", "Email", DefaultValue::String(String::new()))
            .into(),
        DeleteDefaultConstraintExpression::new("Users", "Email").into(),
        CreateForeignKeyExpression::new(fk.clone()).into(),
        DeleteForeignKeyExpression::new(fk).into(),
        CreateSequenceExpression::new(SequenceDefinition::new("UserIds").increment(1)).into(),
        DeleteSequenceExpression::new("UserIds").into(),
        CreateConstraintExpression::new(ConstraintDefinition::unique(
            "UQ_Users_Email",
            "Users",
            ["Email"],
        ))
        .into(),
        DeleteConstraintExpression::new(ConstraintDefinition::primary_key(
            "PK_Users",
            "Users",
            ["Id"],
        ))
        .into(),
        users_email_index(false).into(),
        DeleteIndexExpression::new(IndexDefinition::new("IX_Users_Email", "Users")).into(),
    ]
}
