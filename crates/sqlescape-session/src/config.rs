//! Session configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SessionError};

/// Settings applied to a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Whether statements created by the session translate escape clauses.
    ///
    /// Prepared statements and `native_sql` always translate.
    pub escape_processing: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            escape_processing: true,
        }
    }
}

impl SessionConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default escape processing flag for new statements.
    #[must_use]
    pub const fn escape_processing(mut self, enabled: bool) -> Self {
        self.escape_processing = enabled;
        self
    }

    /// Loads a configuration from a JSON file. Missing keys keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] if the file cannot be read and
    /// [`SessionError::Config`] if it is not valid JSON for this type.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|source| SessionError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
