//! Schema definition types.
//!
//! These are the read-only definitions wrapped by change expressions. The
//! authoring layer builds them; generators only read them.

use serde::{Deserialize, Serialize};

/// Name prefix that older authoring layers used to mark a foreign key as
/// already embedded in its `CREATE TABLE`.
pub const LEGACY_EMBEDDED_FK_PREFIX: &str = "$$IGNORE$$_";

/// SQL data types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqlType {
    /// Small integer (16-bit).
    SmallInt,
    /// Integer (32-bit).
    Integer,
    /// Big integer (64-bit).
    BigInt,
    /// Unbounded text.
    Text,
    /// Variable-length character string.
    Varchar(usize),
    /// Fixed-length character string.
    Char(usize),
    /// Boolean.
    Boolean,
    /// Date only.
    Date,
    /// Time only.
    Time,
    /// Date and time.
    Timestamp,
    /// Floating point (single precision).
    Real,
    /// Floating point (double precision).
    Double,
    /// Exact numeric with precision and scale.
    Decimal(u8, u8),
    /// Binary large object.
    Blob,
    /// JSON document.
    Json,
    /// UUID.
    Uuid,
    /// Type name passed through verbatim.
    Custom(String),
}

/// Default value for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DefaultValue {
    /// NULL default.
    Null,
    /// Boolean default.
    Bool(bool),
    /// Integer default.
    Integer(i64),
    /// Float default.
    Float(f64),
    /// String default.
    String(String),
    /// SQL expression (e.g., "CURRENT_TIMESTAMP").
    Expression(String),
}

impl DefaultValue {
    /// Returns the baseline SQL for this value.
    ///
    /// Booleans render as `1`/`0`; dialects with a boolean type override this
    /// in their column formatter.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Bool(b) => if *b { "1" } else { "0" }.to_string(),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::String(s) => format!("'{}'", s.replace('\'', "''")),
            Self::Expression(expr) => expr.clone(),
        }
    }
}

/// Referential action (ON DELETE, ON UPDATE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ForeignKeyRule {
    /// No action; the clause is omitted.
    #[default]
    None,
    /// Cascade the delete/update to referencing rows.
    Cascade,
    /// Set the referencing columns to NULL.
    SetNull,
    /// Set the referencing columns to their defaults.
    SetDefault,
    /// Reject the delete/update.
    Restrict,
}

impl ForeignKeyRule {
    /// Returns the SQL keyword, or `None` when no clause is emitted.
    #[must_use]
    pub const fn as_sql(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Cascade => Some("CASCADE"),
            Self::SetNull => Some("SET NULL"),
            Self::SetDefault => Some("SET DEFAULT"),
            Self::Restrict => Some("RESTRICT"),
        }
    }
}

/// Sort direction of an index column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Direction {
    /// Ascending order.
    #[default]
    Ascending,
    /// Descending order.
    Descending,
}

impl Direction {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// Definition of a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name.
    pub name: String,
    /// SQL data type.
    pub sql_type: SqlType,
    /// Whether the column allows NULL values.
    pub nullable: bool,
    /// Default value.
    pub default: Option<DefaultValue>,
    /// Whether the column is an identity / auto-increment column.
    pub identity: bool,
    /// Whether the column is (part of) the primary key.
    pub primary_key: bool,
    /// Whether the column has a UNIQUE constraint.
    pub unique: bool,
    /// Optional human-readable description.
    pub description: Option<String>,
}

impl ColumnDefinition {
    /// Creates a nullable column with no default.
    #[must_use]
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            nullable: true,
            default: None,
            identity: false,
            primary_key: false,
            unique: false,
            description: None,
        }
    }

    /// Sets the column as NOT NULL.
    #[must_use]
    pub const fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default(mut self, value: DefaultValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Marks the column as identity / auto-increment.
    #[must_use]
    pub const fn identity(mut self) -> Self {
        self.identity = true;
        self
    }

    /// Marks the column as primary key. Primary keys are never NULL.
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    /// Marks the column as unique.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One column of an index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexColumnDefinition {
    /// Column name.
    pub name: String,
    /// Sort direction.
    #[serde(default)]
    pub direction: Direction,
}

impl IndexColumnDefinition {
    /// Creates an ascending index column.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: Direction::Ascending,
        }
    }

    /// Creates a descending index column.
    #[must_use]
    pub fn descending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: Direction::Descending,
        }
    }
}

/// Definition of an index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexDefinition {
    /// Index name.
    pub name: String,
    /// Indexed table.
    pub table_name: String,
    /// Schema of the table.
    pub schema_name: Option<String>,
    /// Whether the index enforces uniqueness.
    pub unique: bool,
    /// Columns in index order.
    pub columns: Vec<IndexColumnDefinition>,
}

impl IndexDefinition {
    /// Creates an empty, non-unique index on `table`.
    #[must_use]
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: table.into(),
            ..Self::default()
        }
    }

    /// Sets the schema.
    #[must_use]
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema_name = Some(schema.into());
        self
    }

    /// Marks the index as unique.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Appends a column.
    #[must_use]
    pub fn column(mut self, column: IndexColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }
}

/// Kind of a table constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintKind {
    /// PRIMARY KEY constraint.
    PrimaryKey,
    /// UNIQUE constraint.
    Unique,
    /// CHECK constraint with its boolean expression.
    Check {
        /// The raw SQL expression.
        expression: String,
    },
}

/// Definition of a table constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstraintDefinition {
    /// Constraint name.
    pub name: String,
    /// Constrained table.
    pub table_name: String,
    /// Schema of the table.
    pub schema_name: Option<String>,
    /// Constraint kind.
    pub kind: ConstraintKind,
    /// Participating columns, in order.
    pub columns: Vec<String>,
}

impl ConstraintDefinition {
    /// Creates a constraint with no columns.
    #[must_use]
    pub fn new(name: impl Into<String>, table: impl Into<String>, kind: ConstraintKind) -> Self {
        Self {
            name: name.into(),
            table_name: table.into(),
            schema_name: None,
            kind,
            columns: Vec::new(),
        }
    }

    /// Creates a UNIQUE constraint over `columns`.
    #[must_use]
    pub fn unique<I, S>(name: impl Into<String>, table: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, table, ConstraintKind::Unique).columns(columns)
    }

    /// Creates a PRIMARY KEY constraint over `columns`.
    #[must_use]
    pub fn primary_key<I, S>(name: impl Into<String>, table: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, table, ConstraintKind::PrimaryKey).columns(columns)
    }

    /// Sets the schema.
    #[must_use]
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema_name = Some(schema.into());
        self
    }

    /// Appends columns.
    #[must_use]
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Returns true for UNIQUE constraints.
    #[must_use]
    pub const fn is_unique(&self) -> bool {
        matches!(self.kind, ConstraintKind::Unique)
    }

    /// Returns true for PRIMARY KEY constraints.
    #[must_use]
    pub const fn is_primary_key(&self) -> bool {
        matches!(self.kind, ConstraintKind::PrimaryKey)
    }
}

/// Definition of a foreign key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForeignKeyDefinition {
    /// Constraint name.
    pub name: String,
    /// Referencing table.
    pub foreign_table: String,
    /// Schema of the referencing table.
    pub foreign_table_schema: Option<String>,
    /// Referencing columns.
    pub foreign_columns: Vec<String>,
    /// Referenced table.
    pub primary_table: String,
    /// Schema of the referenced table.
    pub primary_table_schema: Option<String>,
    /// Referenced columns.
    pub primary_columns: Vec<String>,
    /// Action on delete.
    #[serde(default)]
    pub on_delete: ForeignKeyRule,
    /// Action on update.
    #[serde(default)]
    pub on_update: ForeignKeyRule,
    /// Set when the key was already emitted inline by `CREATE TABLE`.
    #[serde(default)]
    pub already_embedded: bool,
}

impl ForeignKeyDefinition {
    /// Creates a foreign key from `foreign_table` to `primary_table`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        foreign_table: impl Into<String>,
        primary_table: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            foreign_table: foreign_table.into(),
            primary_table: primary_table.into(),
            ..Self::default()
        }
    }

    /// Adds a referencing/referenced column pair.
    #[must_use]
    pub fn column(mut self, foreign: impl Into<String>, primary: impl Into<String>) -> Self {
        self.foreign_columns.push(foreign.into());
        self.primary_columns.push(primary.into());
        self
    }

    /// Sets the ON DELETE rule.
    #[must_use]
    pub const fn on_delete(mut self, rule: ForeignKeyRule) -> Self {
        self.on_delete = rule;
        self
    }

    /// Sets the ON UPDATE rule.
    #[must_use]
    pub const fn on_update(mut self, rule: ForeignKeyRule) -> Self {
        self.on_update = rule;
        self
    }

    /// Marks the key as already emitted by `CREATE TABLE`.
    #[must_use]
    pub const fn embedded(mut self) -> Self {
        self.already_embedded = true;
        self
    }

    /// Returns true if no separate statement must be generated for this key.
    ///
    /// Honors both the explicit flag and the legacy name prefix.
    #[must_use]
    pub fn is_already_embedded(&self) -> bool {
        self.already_embedded || self.name.starts_with(LEGACY_EMBEDDED_FK_PREFIX)
    }
}

/// Definition of a sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceDefinition {
    /// Sequence name.
    pub name: String,
    /// Schema.
    pub schema_name: Option<String>,
    /// Increment step.
    pub increment: Option<i64>,
    /// Minimum value.
    pub min_value: Option<i64>,
    /// Maximum value.
    pub max_value: Option<i64>,
    /// First value.
    pub start_with: Option<i64>,
    /// Number of values to preallocate.
    pub cache: Option<i64>,
    /// Whether the sequence wraps around.
    pub cycle: bool,
}

impl SequenceDefinition {
    /// Creates a sequence with engine defaults.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the schema.
    #[must_use]
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema_name = Some(schema.into());
        self
    }

    /// Sets the increment.
    #[must_use]
    pub const fn increment(mut self, step: i64) -> Self {
        self.increment = Some(step);
        self
    }

    /// Sets the start value.
    #[must_use]
    pub const fn start_with(mut self, value: i64) -> Self {
        self.start_with = Some(value);
        self
    }

    /// Sets the bounds.
    #[must_use]
    pub const fn bounds(mut self, min: i64, max: i64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    /// Sets the cache size.
    #[must_use]
    pub const fn cache(mut self, size: i64) -> Self {
        self.cache = Some(size);
        self
    }

    /// Makes the sequence cycle.
    #[must_use]
    pub const fn cycle(mut self) -> Self {
        self.cycle = true;
        self
    }
}

/// Definition of a table, as consumed by `CREATE TABLE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Table name.
    pub name: String,
    /// Schema.
    pub schema_name: Option<String>,
    /// Columns.
    pub columns: Vec<ColumnDefinition>,
    /// Foreign keys emitted inline.
    pub foreign_keys: Vec<ForeignKeyDefinition>,
    /// Optional description.
    pub description: Option<String>,
}

impl TableDefinition {
    /// Creates an empty table definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema_name: None,
            columns: Vec::new(),
            foreign_keys: Vec::new(),
            description: None,
        }
    }

    /// Sets the schema.
    #[must_use]
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema_name = Some(schema.into());
        self
    }

    /// Adds a column.
    #[must_use]
    pub fn column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    /// Adds an inline foreign key.
    #[must_use]
    pub fn foreign_key(mut self, fk: ForeignKeyDefinition) -> Self {
        self.foreign_keys.push(fk);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the names of primary key columns, in column order.
    pub fn primary_key_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|c| c.primary_key)
            .map(|c| c.name.as_str())
    }
}
