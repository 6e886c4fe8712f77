//! Structural validation of definitions and expressions.
//!
//! Validation is a capability: anything that can be checked implements
//! [`Validate`]. Generators never call it; the authoring layer or the runner
//! does before handing expressions over.

use crate::error::{DdlError, Result};
use crate::expressions::{
    AlterColumnExpression, AlterDefaultConstraintExpression, CreateColumnExpression,
    CreateConstraintExpression, CreateForeignKeyExpression, CreateIndexExpression,
    CreateSequenceExpression, CreateTableExpression, DeleteColumnExpression,
    DeleteConstraintExpression, DeleteDefaultConstraintExpression, DeleteForeignKeyExpression,
    DeleteIndexExpression, DeleteSequenceExpression, DeleteTableExpression, Expression,
    RenameColumnExpression, RenameTableExpression,
};
use crate::schema::{
    ColumnDefinition, ConstraintDefinition, ConstraintKind, ForeignKeyDefinition, IndexDefinition,
    SequenceDefinition, TableDefinition,
};

/// Trait for values that can report structural errors.
pub trait Validate {
    /// Returns one message per problem found; empty when valid.
    fn validate(&self) -> Vec<String>;

    /// Returns true when [`Validate::validate`] reports nothing.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Fails with every collected message if `value` is invalid.
///
/// # Errors
///
/// Returns [`DdlError::Validation`] when at least one problem is found.
pub fn ensure_valid<T: Validate + ?Sized>(value: &T) -> Result<()> {
    let errors = value.validate();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(DdlError::Validation(errors))
    }
}

fn require(errors: &mut Vec<String>, value: &str, what: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{what} cannot be empty"));
    }
}

impl Validate for ColumnDefinition {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.name, "Column name");
        if self.identity && self.nullable && !self.primary_key {
            errors.push(format!("Identity column '{}' cannot be nullable", self.name));
        }
        errors
    }
}

impl Validate for TableDefinition {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.name, "Table name");
        if self.columns.is_empty() {
            errors.push(format!("Table '{}' must have at least one column", self.name));
        }
        for column in &self.columns {
            errors.extend(column.validate());
        }
        for fk in &self.foreign_keys {
            errors.extend(fk.validate());
        }
        errors
    }
}

impl Validate for IndexDefinition {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.name, "Index name");
        require(&mut errors, &self.table_name, "Table name");
        if self.columns.is_empty() {
            errors.push(format!("Index '{}' must apply to at least one column", self.name));
        }
        for column in &self.columns {
            require(&mut errors, &column.name, "Index column name");
        }
        errors
    }
}

impl Validate for ConstraintDefinition {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.name, "Constraint name");
        require(&mut errors, &self.table_name, "Table name");
        match &self.kind {
            ConstraintKind::Check { expression } => {
                require(&mut errors, expression, "Check expression");
            }
            ConstraintKind::PrimaryKey | ConstraintKind::Unique => {
                if self.columns.is_empty() {
                    errors.push(format!(
                        "Constraint '{}' must apply to at least one column",
                        self.name
                    ));
                }
            }
        }
        errors
    }
}

impl Validate for ForeignKeyDefinition {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.name, "Foreign key name");
        require(&mut errors, &self.foreign_table, "Foreign table name");
        require(&mut errors, &self.primary_table, "Primary table name");
        if self.foreign_columns.is_empty() {
            errors.push(format!(
                "Foreign key '{}' must have at least one foreign column",
                self.name
            ));
        }
        if self.foreign_columns.len() != self.primary_columns.len() {
            errors.push(format!(
                "Foreign key '{}' must have the same number of foreign and primary columns",
                self.name
            ));
        }
        errors
    }
}

impl Validate for SequenceDefinition {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.name, "Sequence name");
        if self.increment == Some(0) {
            errors.push(format!("Sequence '{}' increment cannot be zero", self.name));
        }
        if let (Some(min), Some(max)) = (self.min_value, self.max_value) {
            if min > max {
                errors.push(format!(
                    "Sequence '{}' minimum value exceeds its maximum value",
                    self.name
                ));
            }
        }
        errors
    }
}

impl Validate for CreateTableExpression {
    fn validate(&self) -> Vec<String> {
        self.table.validate()
    }
}

impl Validate for DeleteTableExpression {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.table_name, "Table name");
        errors
    }
}

impl Validate for RenameTableExpression {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.old_name, "Old table name");
        require(&mut errors, &self.new_name, "New table name");
        errors
    }
}

impl Validate for CreateColumnExpression {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.table_name, "Table name");
        errors.extend(self.column.validate());
        errors
    }
}

impl Validate for DeleteColumnExpression {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.table_name, "Table name");
        require(&mut errors, &self.column_name, "Column name");
        errors
    }
}

impl Validate for RenameColumnExpression {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.table_name, "Table name");
        require(&mut errors, &self.old_name, "Old column name");
        require(&mut errors, &self.new_name, "New column name");
        errors
    }
}

impl Validate for AlterColumnExpression {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.table_name, "Table name");
        errors.extend(self.column.validate());
        errors
    }
}

impl Validate for AlterDefaultConstraintExpression {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.table_name, "Table name");
        require(&mut errors, &self.column_name, "Column name");
        errors
    }
}

impl Validate for DeleteDefaultConstraintExpression {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.table_name, "Table name");
        require(&mut errors, &self.column_name, "Column name");
        errors
    }
}

impl Validate for CreateForeignKeyExpression {
    fn validate(&self) -> Vec<String> {
        self.foreign_key.validate()
    }
}

impl Validate for DeleteForeignKeyExpression {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.foreign_key.name, "Foreign key name");
        require(&mut errors, &self.foreign_key.foreign_table, "Foreign table name");
        errors
    }
}

impl Validate for CreateSequenceExpression {
    fn validate(&self) -> Vec<String> {
        self.sequence.validate()
    }
}

impl Validate for DeleteSequenceExpression {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.sequence_name, "Sequence name");
        errors
    }
}

impl Validate for CreateConstraintExpression {
    fn validate(&self) -> Vec<String> {
        self.constraint.validate()
    }
}

impl Validate for DeleteConstraintExpression {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.constraint.name, "Constraint name");
        require(&mut errors, &self.constraint.table_name, "Table name");
        errors
    }
}

impl Validate for CreateIndexExpression {
    fn validate(&self) -> Vec<String> {
        self.index.validate()
    }
}

impl Validate for DeleteIndexExpression {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.index.name, "Index name");
        errors
    }
}

impl Validate for Expression {
    fn validate(&self) -> Vec<String> {
        match self {
            Self::CreateTable(e) => e.validate(),
            Self::DeleteTable(e) => e.validate(),
            Self::RenameTable(e) => e.validate(),
            Self::CreateColumn(e) => e.validate(),
            Self::DeleteColumn(e) => e.validate(),
            Self::RenameColumn(e) => e.validate(),
            Self::AlterColumn(e) => e.validate(),
            Self::AlterDefaultConstraint(e) => e.validate(),
            Self::DeleteDefaultConstraint(e) => e.validate(),
            Self::CreateForeignKey(e) => e.validate(),
            Self::DeleteForeignKey(e) => e.validate(),
            Self::CreateSequence(e) => e.validate(),
            Self::DeleteSequence(e) => e.validate(),
            Self::CreateConstraint(e) => e.validate(),
            Self::DeleteConstraint(e) => e.validate(),
            Self::CreateIndex(e) => e.validate(),
            Self::DeleteIndex(e) => e.validate(),
        }
    }
}
