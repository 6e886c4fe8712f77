//! Change expressions.
//!
//! Each expression describes one requested DDL operation and wraps exactly one
//! definition. Expressions are plain immutable values: the authoring layer
//! builds them, a generator consumes them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::{
    ColumnDefinition, ConstraintDefinition, DefaultValue, ForeignKeyDefinition, IndexColumnDefinition,
    IndexDefinition, SequenceDefinition, TableDefinition,
};

/// Create a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTableExpression {
    /// Table definition.
    pub table: TableDefinition,
}

impl CreateTableExpression {
    /// Creates the expression.
    #[must_use]
    pub const fn new(table: TableDefinition) -> Self {
        Self { table }
    }

    /// Returns the inline foreign keys as standalone expressions marked
    /// already embedded, so later steps generate nothing for them.
    #[must_use]
    pub fn embedded_foreign_keys(&self) -> Vec<CreateForeignKeyExpression> {
        self.table
            .foreign_keys
            .iter()
            .cloned()
            .map(|fk| CreateForeignKeyExpression::new(fk.embedded()))
            .collect()
    }
}

/// Drop a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTableExpression {
    /// Table name.
    pub table_name: String,
    /// Schema.
    pub schema_name: Option<String>,
}

impl DeleteTableExpression {
    /// Creates the expression.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table_name: table.into(),
            schema_name: None,
        }
    }
}

/// Rename a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameTableExpression {
    /// Current name.
    pub old_name: String,
    /// New name.
    pub new_name: String,
    /// Schema.
    pub schema_name: Option<String>,
}

impl RenameTableExpression {
    /// Creates the expression.
    #[must_use]
    pub fn new(old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            old_name: old_name.into(),
            new_name: new_name.into(),
            schema_name: None,
        }
    }
}

/// Add a column to an existing table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateColumnExpression {
    /// Table name.
    pub table_name: String,
    /// Schema.
    pub schema_name: Option<String>,
    /// Column definition.
    pub column: ColumnDefinition,
}

impl CreateColumnExpression {
    /// Creates the expression.
    #[must_use]
    pub fn new(table: impl Into<String>, column: ColumnDefinition) -> Self {
        Self {
            table_name: table.into(),
            schema_name: None,
            column,
        }
    }
}

/// Drop a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteColumnExpression {
    /// Table name.
    pub table_name: String,
    /// Schema.
    pub schema_name: Option<String>,
    /// Column name.
    pub column_name: String,
}

impl DeleteColumnExpression {
    /// Creates the expression.
    #[must_use]
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table_name: table.into(),
            schema_name: None,
            column_name: column.into(),
        }
    }
}

/// Rename a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameColumnExpression {
    /// Table name.
    pub table_name: String,
    /// Schema.
    pub schema_name: Option<String>,
    /// Current column name.
    pub old_name: String,
    /// New column name.
    pub new_name: String,
}

impl RenameColumnExpression {
    /// Creates the expression.
    #[must_use]
    pub fn new(
        table: impl Into<String>,
        old_name: impl Into<String>,
        new_name: impl Into<String>,
    ) -> Self {
        Self {
            table_name: table.into(),
            schema_name: None,
            old_name: old_name.into(),
            new_name: new_name.into(),
        }
    }
}

/// Replace the definition of an existing column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterColumnExpression {
    /// Table name.
    pub table_name: String,
    /// Schema.
    pub schema_name: Option<String>,
    /// New column definition.
    pub column: ColumnDefinition,
}

impl AlterColumnExpression {
    /// Creates the expression.
    #[must_use]
    pub fn new(table: impl Into<String>, column: ColumnDefinition) -> Self {
        Self {
            table_name: table.into(),
            schema_name: None,
            column,
        }
    }
}

/// Change the default value of a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterDefaultConstraintExpression {
    /// Table name.
    pub table_name: String,
    /// Schema.
    pub schema_name: Option<String>,
    /// Column name.
    pub column_name: String,
    /// New default.
    pub default_value: DefaultValue,
}

impl AlterDefaultConstraintExpression {
    /// Creates the expression.
    #[must_use]
    pub fn new(table: impl Into<String>, column: impl Into<String>, default_value: DefaultValue) -> Self {
        Self {
            table_name: table.into(),
            schema_name: None,
            column_name: column.into(),
            default_value,
        }
    }
}

/// Remove the default value of a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteDefaultConstraintExpression {
    /// Table name.
    pub table_name: String,
    /// Schema.
    pub schema_name: Option<String>,
    /// Column name.
    pub column_name: String,
}

impl DeleteDefaultConstraintExpression {
    /// Creates the expression.
    #[must_use]
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table_name: table.into(),
            schema_name: None,
            column_name: column.into(),
        }
    }
}

/// Add a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateForeignKeyExpression {
    /// Foreign key definition.
    pub foreign_key: ForeignKeyDefinition,
}

impl CreateForeignKeyExpression {
    /// Creates the expression.
    #[must_use]
    pub const fn new(foreign_key: ForeignKeyDefinition) -> Self {
        Self { foreign_key }
    }
}

/// Drop a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteForeignKeyExpression {
    /// Foreign key definition. Only name and referencing table are required.
    pub foreign_key: ForeignKeyDefinition,
}

impl DeleteForeignKeyExpression {
    /// Creates the expression.
    #[must_use]
    pub const fn new(foreign_key: ForeignKeyDefinition) -> Self {
        Self { foreign_key }
    }
}

/// Create a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSequenceExpression {
    /// Sequence definition.
    pub sequence: SequenceDefinition,
}

impl CreateSequenceExpression {
    /// Creates the expression.
    #[must_use]
    pub const fn new(sequence: SequenceDefinition) -> Self {
        Self { sequence }
    }
}

/// Drop a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSequenceExpression {
    /// Sequence name.
    pub sequence_name: String,
    /// Schema.
    pub schema_name: Option<String>,
}

impl DeleteSequenceExpression {
    /// Creates the expression.
    #[must_use]
    pub fn new(sequence: impl Into<String>) -> Self {
        Self {
            sequence_name: sequence.into(),
            schema_name: None,
        }
    }
}

/// Add a table constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateConstraintExpression {
    /// Constraint definition.
    pub constraint: ConstraintDefinition,
}

impl CreateConstraintExpression {
    /// Creates the expression.
    #[must_use]
    pub const fn new(constraint: ConstraintDefinition) -> Self {
        Self { constraint }
    }

    /// Returns the unique index equivalent to this constraint.
    ///
    /// Columns keep their order and are all ascending.
    #[must_use]
    pub fn to_unique_index(&self) -> CreateIndexExpression {
        let c = &self.constraint;
        CreateIndexExpression::new(IndexDefinition {
            name: c.name.clone(),
            table_name: c.table_name.clone(),
            schema_name: c.schema_name.clone(),
            unique: true,
            columns: c.columns.iter().map(IndexColumnDefinition::new).collect(),
        })
    }
}

/// Drop a table constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConstraintExpression {
    /// Constraint definition. Only name, table and kind are required.
    pub constraint: ConstraintDefinition,
}

impl DeleteConstraintExpression {
    /// Creates the expression.
    #[must_use]
    pub const fn new(constraint: ConstraintDefinition) -> Self {
        Self { constraint }
    }

    /// Returns the index drop equivalent to dropping this unique constraint.
    #[must_use]
    pub fn to_index_drop(&self) -> DeleteIndexExpression {
        let c = &self.constraint;
        DeleteIndexExpression::new(IndexDefinition {
            name: c.name.clone(),
            table_name: c.table_name.clone(),
            schema_name: c.schema_name.clone(),
            unique: true,
            columns: Vec::new(),
        })
    }
}

/// Create an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateIndexExpression {
    /// Index definition.
    pub index: IndexDefinition,
}

impl CreateIndexExpression {
    /// Creates the expression.
    #[must_use]
    pub const fn new(index: IndexDefinition) -> Self {
        Self { index }
    }
}

/// Drop an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteIndexExpression {
    /// Index definition. Only name, table and schema are required.
    pub index: IndexDefinition,
}

impl DeleteIndexExpression {
    /// Creates the expression.
    #[must_use]
    pub const fn new(index: IndexDefinition) -> Self {
        Self { index }
    }
}

macro_rules! expressions {
    ($($kind:ident => $ty:ident),+ $(,)?) => {
        /// Any change expression.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub enum Expression {
            $(
                #[doc = concat!("See [`", stringify!($ty), "`].")]
                $kind($ty),
            )+
        }

        /// Discriminant of an [`Expression`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum ExpressionKind {
            $(
                #[doc = concat!("See [`", stringify!($ty), "`].")]
                $kind,
            )+
        }

        impl ExpressionKind {
            /// All expression kinds.
            pub const ALL: &'static [Self] = &[$(Self::$kind),+];

            /// Returns the kind's name.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$kind => stringify!($kind),)+
                }
            }
        }

        impl Expression {
            /// Returns the kind of this expression.
            #[must_use]
            pub const fn kind(&self) -> ExpressionKind {
                match self {
                    $(Self::$kind(_) => ExpressionKind::$kind,)+
                }
            }
        }

        $(
            impl From<$ty> for Expression {
                fn from(expr: $ty) -> Self {
                    Self::$kind(expr)
                }
            }
        )+
    };
}

expressions! {
    CreateTable => CreateTableExpression,
    DeleteTable => DeleteTableExpression,
    RenameTable => RenameTableExpression,
    CreateColumn => CreateColumnExpression,
    DeleteColumn => DeleteColumnExpression,
    RenameColumn => RenameColumnExpression,
    AlterColumn => AlterColumnExpression,
    AlterDefaultConstraint => AlterDefaultConstraintExpression,
    DeleteDefaultConstraint => DeleteDefaultConstraintExpression,
    CreateForeignKey => CreateForeignKeyExpression,
    DeleteForeignKey => DeleteForeignKeyExpression,
    CreateSequence => CreateSequenceExpression,
    DeleteSequence => DeleteSequenceExpression,
    CreateConstraint => CreateConstraintExpression,
    DeleteConstraint => DeleteConstraintExpression,
    CreateIndex => CreateIndexExpression,
    DeleteIndex => DeleteIndexExpression,
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
