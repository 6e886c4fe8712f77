//! Generator configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DdlError, Result};

/// How a generator reacts to an operation its dialect cannot express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityMode {
    /// Fail with [`DdlError::Unsupported`].
    #[default]
    Strict,
    /// Treat the operation as a no-op and return an empty statement.
    #[serde(alias = "permissive")]
    Loose,
}

impl CompatibilityMode {
    /// Returns the configuration name of this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Loose => "loose",
        }
    }
}

impl fmt::Display for CompatibilityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompatibilityMode {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "loose" | "permissive" => Ok(Self::Loose),
            _ => Err(DdlError::InvalidCompatibilityMode(s.to_string())),
        }
    }
}

/// Options consumed when a generator is constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Compatibility mode. `None` selects the dialect's default.
    pub compatibility_mode: Option<CompatibilityMode>,
}

impl GeneratorOptions {
    /// Creates options with no explicit mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compatibility mode.
    #[must_use]
    pub const fn compatibility_mode(mut self, mode: CompatibilityMode) -> Self {
        self.compatibility_mode = Some(mode);
        self
    }

    /// Parses options from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::Serialization`] if the document is malformed or
    /// names an unknown compatibility mode.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the configured mode, or `fallback` if none was set.
    #[must_use]
    pub fn mode_or(&self, fallback: CompatibilityMode) -> CompatibilityMode {
        self.compatibility_mode.unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!(
            "strict".parse::<CompatibilityMode>().unwrap(),
            CompatibilityMode::Strict
        );
        assert_eq!(
            "LOOSE".parse::<CompatibilityMode>().unwrap(),
            CompatibilityMode::Loose
        );
        assert_eq!(
            "permissive".parse::<CompatibilityMode>().unwrap(),
            CompatibilityMode::Loose
        );
        assert!(matches!(
            "lenient".parse::<CompatibilityMode>(),
            Err(DdlError::InvalidCompatibilityMode(_))
        ));
    }

    #[test]
    fn test_options_from_json() {
        let opts = GeneratorOptions::from_json(r#"{"compatibility_mode": "loose"}"#).unwrap();
        assert_eq!(opts.compatibility_mode, Some(CompatibilityMode::Loose));

        let opts = GeneratorOptions::from_json(r#"{"compatibility_mode": "permissive"}"#).unwrap();
        assert_eq!(opts.compatibility_mode, Some(CompatibilityMode::Loose));

        let opts = GeneratorOptions::from_json("{}").unwrap();
        assert_eq!(opts.mode_or(CompatibilityMode::Strict), CompatibilityMode::Strict);

        assert!(GeneratorOptions::from_json(r#"{"compatibility_mode": "maybe"}"#).is_err());
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(CompatibilityMode::Strict.to_string(), "strict");
        assert_eq!(CompatibilityMode::Loose.to_string(), "loose");
    }
}
