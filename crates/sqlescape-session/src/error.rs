//! Error types for the session facade.

use std::path::PathBuf;

use sqlescape_core::TranslateError;

/// Errors that can occur while preparing statements.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session was closed.
    #[error("Session is closed")]
    Closed,

    /// The statement text could not be translated.
    #[error("Failed to prepare statement: {source}")]
    Prepare {
        /// The statement as submitted.
        sql: String,
        /// The translation failure.
        #[source]
        source: TranslateError,
    },

    /// The query engine rejected the translated statement.
    #[error("Engine error: {0}")]
    Engine(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error (reading config files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a config file.
    #[error("Failed to parse config file '{path}': {source}")]
    Config {
        /// Path to the config file.
        path: PathBuf,
        /// The parse failure.
        #[source]
        source: serde_json::Error,
    },
}

impl SessionError {
    /// Returns the translation failure behind a preparation error.
    #[must_use]
    pub const fn translate_error(&self) -> Option<&TranslateError> {
        match self {
            Self::Prepare { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Renders the error, pointing at the offending character of the
    /// statement when there is one.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        let Self::Prepare { sql, source } = self else {
            return self.to_string();
        };
        let Some(at) = source.span().map(|span| span.start) else {
            return self.to_string();
        };
        let Some(before) = sql.get(..at) else {
            return self.to_string();
        };
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let line_end = sql[at..].find(['\n', '\r']).map_or(sql.len(), |i| at + i);
        let column = before[line_start..].chars().count();
        format!(
            "{self}\n{}\n{}^",
            &sql[line_start..line_end],
            " ".repeat(column)
        )
    }
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
