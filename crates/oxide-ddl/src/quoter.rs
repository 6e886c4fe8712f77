//! Identifier quoting.
//!
//! A quoter turns raw identifiers into dialect-safe SQL text. Quoting is not
//! idempotent: passing an already quoted name quotes it again, so every
//! identifier must be quoted exactly once per statement.

use std::fmt;

/// Trait for dialect-specific identifier quoting.
pub trait Quoter: Send + Sync + fmt::Debug {
    /// Returns the opening quote character.
    fn open_quote(&self) -> char {
        '"'
    }

    /// Returns the closing quote character.
    fn close_quote(&self) -> char {
        '"'
    }

    /// Quotes a bare identifier, doubling any embedded closing quote.
    fn quote(&self, name: &str) -> String {
        let close = self.close_quote();
        let mut out = String::with_capacity(name.len() + 2);
        out.push(self.open_quote());
        for c in name.chars() {
            if c == close {
                out.push(close);
            }
            out.push(c);
        }
        out.push(close);
        out
    }

    /// Quotes `name`, prefixed by `schema` when one is given.
    fn qualify(&self, name: &str, schema: Option<&str>) -> String {
        match schema {
            Some(schema) if !schema.is_empty() => {
                format!("{}.{}", self.quote_schema_name(schema), self.quote(name))
            }
            _ => self.quote(name),
        }
    }

    /// Quotes a column name.
    fn quote_column_name(&self, name: &str) -> String {
        self.quote(name)
    }

    /// Quotes a schema name.
    fn quote_schema_name(&self, schema: &str) -> String {
        self.quote(schema)
    }

    /// Quotes a table name, qualified by schema.
    fn quote_table_name(&self, name: &str, schema: Option<&str>) -> String {
        self.qualify(name, schema)
    }

    /// Quotes an index name.
    ///
    /// The baseline treats indexes as table-scoped and ignores the schema.
    fn quote_index_name(&self, name: &str, _schema: Option<&str>) -> String {
        self.quote(name)
    }

    /// Quotes a constraint name.
    fn quote_constraint_name(&self, name: &str) -> String {
        self.quote(name)
    }

    /// Quotes a sequence name, qualified by schema.
    fn quote_sequence_name(&self, name: &str, schema: Option<&str>) -> String {
        self.qualify(name, schema)
    }

    /// Renders a string literal.
    fn quote_value(&self, value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }
}

/// ANSI SQL quoter using double quotes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiQuoter;

impl AnsiQuoter {
    /// Creates a new ANSI quoter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Quoter for AnsiQuoter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_simple() {
        let q = AnsiQuoter::new();
        assert_eq!(q.quote_column_name("Email"), "\"Email\"");
        assert_eq!(q.quote_table_name("Users", None), "\"Users\"");
        assert_eq!(q.quote_table_name("Users", Some("")), "\"Users\"");
    }

    #[test]
    fn test_quote_with_schema() {
        let q = AnsiQuoter::new();
        assert_eq!(q.quote_table_name("Users", Some("app")), "\"app\".\"Users\"");
        assert_eq!(q.quote_index_name("IX_Users", Some("app")), "\"IX_Users\"");
        assert_eq!(
            q.quote_sequence_name("seq_orders", Some("app")),
            "\"app\".\"seq_orders\""
        );
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let q = AnsiQuoter::new();
        assert_eq!(q.quote_column_name("we\"ird"), "\"we\"\"ird\"");
        assert_eq!(q.quote_value("it's"), "'it''s'");
    }

    #[test]
    fn test_quoting_is_not_idempotent() {
        let q = AnsiQuoter::new();
        let once = q.quote_column_name("a");
        assert_eq!(q.quote_column_name(&once), "\"\"\"a\"\"\"");
    }
}
