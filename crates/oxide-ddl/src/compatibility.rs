//! Resolution of operations a dialect cannot express.

use tracing::{debug, warn};

use crate::error::{DdlError, Result};
use crate::options::CompatibilityMode;

/// Decides what an unsupported operation turns into for one dialect.
///
/// Every "this engine cannot do X" path in every dialect goes through
/// [`CompatibilityPolicy::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatibilityPolicy {
    mode: CompatibilityMode,
    dialect: &'static str,
}

impl CompatibilityPolicy {
    /// Creates a policy for `dialect` running in `mode`.
    #[must_use]
    pub const fn new(mode: CompatibilityMode, dialect: &'static str) -> Self {
        Self { mode, dialect }
    }

    /// Returns the configured mode.
    #[must_use]
    pub const fn mode(&self) -> CompatibilityMode {
        self.mode
    }

    /// Returns the dialect this policy speaks for.
    #[must_use]
    pub const fn dialect(&self) -> &'static str {
        self.dialect
    }

    /// Resolves an unsupported feature.
    ///
    /// Loose mode returns an empty statement.
    ///
    /// # Errors
    ///
    /// Strict mode returns [`DdlError::Unsupported`] carrying `feature`.
    pub fn resolve(&self, feature: &str) -> Result<String> {
        match self.mode {
            CompatibilityMode::Strict => {
                debug!(dialect = self.dialect, feature, "Rejecting unsupported operation");
                Err(DdlError::Unsupported {
                    dialect: self.dialect,
                    feature: feature.to_string(),
                })
            }
            CompatibilityMode::Loose => {
                warn!(dialect = self.dialect, feature, "Skipping unsupported operation");
                Ok(String::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_fails_with_feature() {
        let policy = CompatibilityPolicy::new(CompatibilityMode::Strict, "sqlite");
        let err = policy.resolve("Sequences are not supported in SQLite").unwrap_err();
        match err {
            DdlError::Unsupported { dialect, feature } => {
                assert_eq!(dialect, "sqlite");
                assert_eq!(feature, "Sequences are not supported in SQLite");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_loose_returns_empty() {
        let policy = CompatibilityPolicy::new(CompatibilityMode::Loose, "sqlite");
        assert_eq!(policy.resolve("anything").unwrap(), "");
        assert_eq!(policy.mode(), CompatibilityMode::Loose);
        assert_eq!(policy.dialect(), "sqlite");
    }
}
