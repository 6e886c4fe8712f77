//! Error types for DDL generation.

/// Errors that can occur while configuring or running a generator.
#[derive(Debug, thiserror::Error)]
pub enum DdlError {
    /// The requested operation has no representation in the target dialect.
    ///
    /// This is the only error `generate` can return, and only in strict mode.
    #[error("{feature} (dialect: {dialect})")]
    Unsupported {
        /// Dialect that rejected the operation.
        dialect: &'static str,
        /// Human-readable description of the missing feature.
        feature: String,
    },

    /// Unknown compatibility mode name.
    #[error("Invalid compatibility mode '{0}', expected 'strict' or 'loose'")]
    InvalidCompatibilityMode(String),

    /// Unknown dialect name.
    #[error("Unknown dialect '{0}'")]
    InvalidDialect(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A definition or expression failed validation.
    #[error("Validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

impl DdlError {
    /// Returns true if this is an unsupported-feature error.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

/// Result type for DDL operations.
pub type Result<T> = std::result::Result<T, DdlError>;
