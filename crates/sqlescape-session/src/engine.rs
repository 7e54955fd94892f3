//! The query engine seam.

use std::convert::Infallible;

/// A backend that accepts already-translated SQL.
///
/// The session never hands an engine text that still contains escape
/// clauses, unless escape processing was switched off for the statement.
pub trait QueryEngine {
    /// The engine's compiled form of a statement.
    type Command;
    /// The engine's error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Prepares a statement for execution.
    ///
    /// # Errors
    ///
    /// Returns the engine's error when it rejects the statement.
    fn prepare(&self, sql: &str) -> Result<Self::Command, Self::Error>;
}

/// An engine whose command is the translated text itself.
///
/// Used to preview translations without a backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoEngine;

impl EchoEngine {
    /// Creates a new echo engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl QueryEngine for EchoEngine {
    type Command = String;
    type Error = Infallible;

    fn prepare(&self, sql: &str) -> Result<Self::Command, Self::Error> {
        Ok(sql.to_string())
    }
}
