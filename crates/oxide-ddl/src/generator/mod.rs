//! DDL generation.
//!
//! A [`Generator`] is a rule table plus the collaborators the rules need. The
//! table has one entry per expression kind, so every kind always resolves to
//! exactly one rule. Dialects start from [`Rules::GENERIC`] and replace only
//! the entries where they diverge:
//!
//! ```rust,ignore
//! const RULES: Rules = Rules {
//!     alter_column: alter_column,
//!     ..Rules::GENERIC
//! };
//! ```
//!
//! Rules receive the whole generator, so a rule can rewrite its expression
//! into another one and dispatch it through the same table.

pub mod generic;

use tracing::debug;

use crate::column::ColumnFormatter;
use crate::compatibility::CompatibilityPolicy;
use crate::description::DescriptionGenerator;
use crate::error::Result;
use crate::expressions::{
    AlterColumnExpression, AlterDefaultConstraintExpression, CreateColumnExpression,
    CreateConstraintExpression, CreateForeignKeyExpression, CreateIndexExpression,
    CreateSequenceExpression, CreateTableExpression, DeleteColumnExpression,
    DeleteConstraintExpression, DeleteDefaultConstraintExpression, DeleteForeignKeyExpression,
    DeleteIndexExpression, DeleteSequenceExpression, DeleteTableExpression, Expression,
    RenameColumnExpression, RenameTableExpression,
};
use crate::options::CompatibilityMode;
use crate::quoter::Quoter;

/// A generation rule for one expression kind.
pub type Rule<E> = fn(&Generator, &E) -> Result<String>;

/// A statement template with positional `{0}`, `{1}`, ... slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template(&'static str);

impl Template {
    /// Creates a template.
    #[must_use]
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    /// Returns the raw template text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Fills the slots with `args`.
    ///
    /// Slots without a matching argument are left as written.
    #[must_use]
    pub fn render(&self, args: &[&str]) -> String {
        let mut out = String::with_capacity(self.0.len() + args.iter().map(|a| a.len()).sum::<usize>());
        let mut rest = self.0;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let slot = after
                .find('}')
                .and_then(|close| after[..close].parse::<usize>().ok().map(|i| (i, close)))
                .and_then(|(i, close)| args.get(i).map(|arg| (*arg, close)));
            match slot {
                Some((arg, close)) => {
                    out.push_str(arg);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Statement templates a dialect may override without replacing a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Templates {
    /// `{0}` old table, `{1}` new table.
    pub rename_table: Template,
    /// `{0}` `"UNIQUE "` or empty, `{1}` index, `{2}` table, `{3}` columns.
    pub create_index: Template,
    /// `{0}` index, `{1}` table.
    pub drop_index: Template,
}

impl Templates {
    /// Baseline templates.
    pub const GENERIC: Self = Self {
        rename_table: Template::new("ALTER TABLE {0} RENAME TO {1}"),
        create_index: Template::new("CREATE {0}INDEX {1} ON {2} ({3})"),
        drop_index: Template::new("DROP INDEX {0} ON {1}"),
    };
}

impl Default for Templates {
    fn default() -> Self {
        Self::GENERIC
    }
}

macro_rules! rules {
    ($($field:ident: $expr:ty => $method:ident),+ $(,)?) => {
        /// One generation rule per expression kind.
        #[derive(Debug, Clone, Copy)]
        pub struct Rules {
            $(
                #[doc = concat!("Rule for [`", stringify!($expr), "`].")]
                pub $field: Rule<$expr>,
            )+
        }

        impl Rules {
            /// The baseline rule table.
            pub const GENERIC: Self = Self {
                $($field: generic::$field,)+
            };
        }

        impl Generator {
            $(
                #[doc = concat!("Generates SQL for [`", stringify!($expr), "`].")]
                ///
                /// # Errors
                ///
                /// Returns [`DdlError::Unsupported`](crate::error::DdlError::Unsupported)
                /// in strict mode when the dialect cannot express the operation.
                pub fn $method(&self, expression: &$expr) -> Result<String> {
                    (self.rules.$field)(self, expression)
                }
            )+
        }
    };
}

rules! {
    create_table: CreateTableExpression => generate_create_table,
    delete_table: DeleteTableExpression => generate_delete_table,
    rename_table: RenameTableExpression => generate_rename_table,
    create_column: CreateColumnExpression => generate_create_column,
    delete_column: DeleteColumnExpression => generate_delete_column,
    rename_column: RenameColumnExpression => generate_rename_column,
    alter_column: AlterColumnExpression => generate_alter_column,
    alter_default_constraint: AlterDefaultConstraintExpression => generate_alter_default_constraint,
    delete_default_constraint: DeleteDefaultConstraintExpression => generate_delete_default_constraint,
    create_foreign_key: CreateForeignKeyExpression => generate_create_foreign_key,
    delete_foreign_key: DeleteForeignKeyExpression => generate_delete_foreign_key,
    create_sequence: CreateSequenceExpression => generate_create_sequence,
    delete_sequence: DeleteSequenceExpression => generate_delete_sequence,
    create_constraint: CreateConstraintExpression => generate_create_constraint,
    delete_constraint: DeleteConstraintExpression => generate_delete_constraint,
    create_index: CreateIndexExpression => generate_create_index,
    delete_index: DeleteIndexExpression => generate_delete_index,
}

impl Default for Rules {
    fn default() -> Self {
        Self::GENERIC
    }
}

/// Generates SQL for change expressions in one dialect.
///
/// Immutable after construction and `Send + Sync`, so one instance can serve
/// any number of threads.
#[derive(Debug)]
pub struct Generator {
    name: &'static str,
    quoter: Box<dyn Quoter>,
    column: Box<dyn ColumnFormatter>,
    description: Box<dyn DescriptionGenerator>,
    compatibility: CompatibilityPolicy,
    templates: Templates,
    rules: Rules,
}

impl Generator {
    /// Creates a generator using the baseline templates and rules.
    #[must_use]
    pub fn new(
        name: &'static str,
        quoter: impl Quoter + 'static,
        column: impl ColumnFormatter + 'static,
        description: impl DescriptionGenerator + 'static,
        mode: CompatibilityMode,
    ) -> Self {
        Self {
            name,
            quoter: Box::new(quoter),
            column: Box::new(column),
            description: Box::new(description),
            compatibility: CompatibilityPolicy::new(mode, name),
            templates: Templates::GENERIC,
            rules: Rules::GENERIC,
        }
    }

    /// Replaces the statement templates.
    #[must_use]
    pub const fn with_templates(mut self, templates: Templates) -> Self {
        self.templates = templates;
        self
    }

    /// Replaces the rule table.
    #[must_use]
    pub const fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Returns the dialect name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the identifier quoter.
    #[must_use]
    pub fn quoter(&self) -> &dyn Quoter {
        self.quoter.as_ref()
    }

    /// Returns the column formatter.
    #[must_use]
    pub fn column(&self) -> &dyn ColumnFormatter {
        self.column.as_ref()
    }

    /// Returns the description strategy.
    #[must_use]
    pub fn description(&self) -> &dyn DescriptionGenerator {
        self.description.as_ref()
    }

    /// Returns the compatibility policy.
    #[must_use]
    pub const fn compatibility(&self) -> &CompatibilityPolicy {
        &self.compatibility
    }

    /// Returns the statement templates.
    #[must_use]
    pub const fn templates(&self) -> &Templates {
        &self.templates
    }

    /// Resolves an unsupported feature through the compatibility policy.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::Unsupported`](crate::error::DdlError::Unsupported)
    /// in strict mode.
    pub fn unsupported(&self, feature: &str) -> Result<String> {
        self.compatibility.resolve(feature)
    }

    /// Generates SQL for any expression, dispatching on its kind.
    ///
    /// An empty string means there is nothing to execute.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::Unsupported`](crate::error::DdlError::Unsupported)
    /// in strict mode when the dialect cannot express the operation.
    pub fn generate(&self, expression: &Expression) -> Result<String> {
        debug!(dialect = self.name, kind = %expression.kind(), "Generating DDL");
        match expression {
            Expression::CreateTable(e) => self.generate_create_table(e),
            Expression::DeleteTable(e) => self.generate_delete_table(e),
            Expression::RenameTable(e) => self.generate_rename_table(e),
            Expression::CreateColumn(e) => self.generate_create_column(e),
            Expression::DeleteColumn(e) => self.generate_delete_column(e),
            Expression::RenameColumn(e) => self.generate_rename_column(e),
            Expression::AlterColumn(e) => self.generate_alter_column(e),
            Expression::AlterDefaultConstraint(e) => self.generate_alter_default_constraint(e),
            Expression::DeleteDefaultConstraint(e) => self.generate_delete_default_constraint(e),
            Expression::CreateForeignKey(e) => self.generate_create_foreign_key(e),
            Expression::DeleteForeignKey(e) => self.generate_delete_foreign_key(e),
            Expression::CreateSequence(e) => self.generate_create_sequence(e),
            Expression::DeleteSequence(e) => self.generate_delete_sequence(e),
            Expression::CreateConstraint(e) => self.generate_create_constraint(e),
            Expression::DeleteConstraint(e) => self.generate_delete_constraint(e),
            Expression::CreateIndex(e) => self.generate_create_index(e),
            Expression::DeleteIndex(e) => self.generate_delete_index(e),
        }
    }

    /// Generates every expression in order, dropping empty statements.
    ///
    /// # Errors
    ///
    /// Stops at the first expression the dialect rejects.
    pub fn generate_all<'a, I>(&self, expressions: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = &'a Expression>,
    {
        let mut statements = Vec::new();
        for expression in expressions {
            let sql = self.generate(expression)?;
            if !sql.is_empty() {
                statements.push(sql);
            }
        }
        Ok(statements)
    }
}
