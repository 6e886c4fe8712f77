//! Dialect-aware DDL generation for schema migrations.
//!
//! `oxide-ddl` turns dialect-independent change expressions (create table,
//! add index, drop foreign key, ...) into SQL text for a specific database
//! engine. It never touches a connection: applying the statements and
//! recording which migrations ran belongs to the runner.
//!
//! # Architecture
//!
//! - **Quoter** - Escapes identifiers for a dialect
//! - **Compatibility policy** - Strict (error) or loose (no-op) handling of
//!   operations a dialect cannot express
//! - **Generic rules** - Baseline SQL for every expression kind
//! - **Dialects** - Rule tables that override only where an engine diverges,
//!   rewriting operations where needed (e.g. UNIQUE constraints become unique
//!   indexes on SQLite)
//!
//! # Example
//!
//! ```rust
//! use oxide_ddl::prelude::*;
//!
//! let sqlite = Dialect::Sqlite.generator(&GeneratorOptions::new());
//!
//! let index = CreateIndexExpression::new(
//!     IndexDefinition::new("IX_Users_Email", "Users").column(IndexColumnDefinition::new("Email")),
//! );
//! assert_eq!(
//!     sqlite.generate(&index.into()).unwrap(),
//!     r#"CREATE INDEX "IX_Users_Email" ON "Users" ("Email" ASC)"#
//! );
//!
//! // SQLite cannot alter columns; loose mode turns that into a no-op.
//! let loose = Dialect::Sqlite
//!     .generator(&GeneratorOptions::new().compatibility_mode(CompatibilityMode::Loose));
//! let alter = AlterColumnExpression::new("Users", ColumnDefinition::new("Email", SqlType::Text));
//! assert_eq!(loose.generate(&alter.into()).unwrap(), "");
//! ```

pub mod column;
pub mod compatibility;
pub mod description;
pub mod dialect;
pub mod error;
pub mod expressions;
pub mod generator;
pub mod options;
pub mod quoter;
pub mod schema;
pub mod validation;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::column::{ColumnFormatter, GenericColumn};
    pub use crate::compatibility::CompatibilityPolicy;
    pub use crate::description::{
        CommentDescriptionGenerator, DescriptionGenerator, EmptyDescriptionGenerator,
    };
    pub use crate::dialect::Dialect;
    pub use crate::error::{DdlError, Result};
    pub use crate::expressions::{
        AlterColumnExpression, AlterDefaultConstraintExpression, CreateColumnExpression,
        CreateConstraintExpression, CreateForeignKeyExpression, CreateIndexExpression,
        CreateSequenceExpression, CreateTableExpression, DeleteColumnExpression,
        DeleteConstraintExpression, DeleteDefaultConstraintExpression, DeleteForeignKeyExpression,
        DeleteIndexExpression, DeleteSequenceExpression, DeleteTableExpression, Expression,
        ExpressionKind, RenameColumnExpression, RenameTableExpression,
    };
    pub use crate::generator::{Generator, Rules, Template, Templates};
    pub use crate::options::{CompatibilityMode, GeneratorOptions};
    pub use crate::quoter::{AnsiQuoter, Quoter};
    pub use crate::schema::{
        ColumnDefinition, ConstraintDefinition, ConstraintKind, DefaultValue, Direction,
        ForeignKeyDefinition, ForeignKeyRule, IndexColumnDefinition, IndexDefinition,
        SequenceDefinition, SqlType, TableDefinition,
    };
    pub use crate::validation::{Validate, ensure_valid};
}
