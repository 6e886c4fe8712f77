//! Database dialects.
//!
//! Each dialect module assembles a [`Generator`] from its quoter, column
//! formatter, description strategy and the rules it overrides.

pub mod postgres;
pub mod sqlite;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::column::GenericColumn;
use crate::description::EmptyDescriptionGenerator;
use crate::error::{DdlError, Result};
use crate::generator::Generator;
use crate::options::{CompatibilityMode, GeneratorOptions};
use crate::quoter::AnsiQuoter;

/// Supported dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// The baseline generator with no overrides.
    Generic,
    /// SQLite.
    Sqlite,
    /// PostgreSQL.
    #[serde(alias = "postgresql")]
    Postgres,
}

impl Dialect {
    /// All dialects.
    pub const ALL: &'static [Self] = &[Self::Generic, Self::Sqlite, Self::Postgres];

    /// Returns the dialect name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Sqlite => sqlite::NAME,
            Self::Postgres => postgres::NAME,
        }
    }

    /// Builds a generator for this dialect.
    #[must_use]
    pub fn generator(self, options: &GeneratorOptions) -> Generator {
        match self {
            Self::Generic => generic_generator(options),
            Self::Sqlite => sqlite::generator(options),
            Self::Postgres => postgres::generator(options),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" => Ok(Self::Generic),
            "sqlite" => Ok(Self::Sqlite),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            _ => Err(DdlError::InvalidDialect(s.to_string())),
        }
    }
}

/// Creates the baseline generator.
#[must_use]
pub fn generic_generator(options: &GeneratorOptions) -> Generator {
    Generator::new(
        "generic",
        AnsiQuoter,
        GenericColumn,
        EmptyDescriptionGenerator,
        options.mode_or(CompatibilityMode::Strict),
    )
}
