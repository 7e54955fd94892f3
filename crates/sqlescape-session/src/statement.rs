//! Statements created by a session.

use crate::engine::QueryEngine;
use crate::error::Result;
use crate::session::Session;

/// A statement prepared by the engine from translated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedStatement<C> {
    sql: String,
    command: C,
    returns_value: bool,
}

impl<C> PreparedStatement<C> {
    pub(crate) const fn new(sql: String, command: C, returns_value: bool) -> Self {
        Self {
            sql,
            command,
            returns_value,
        }
    }

    /// Returns the text handed to the engine.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the engine's command.
    #[must_use]
    pub const fn command(&self) -> &C {
        &self.command
    }

    /// Consumes the statement, returning the engine's command.
    #[must_use]
    pub fn into_command(self) -> C {
        self.command
    }

    /// Returns true for `{? = call ...}` statements, whose first parameter
    /// receives the procedure's return value.
    #[must_use]
    pub const fn returns_value(&self) -> bool {
        self.returns_value
    }
}

/// A statement with its own escape processing setting.
pub struct Statement<'s, E> {
    session: &'s Session<E>,
    escape_processing: bool,
}

impl<'s, E: QueryEngine> Statement<'s, E> {
    pub(crate) const fn new(session: &'s Session<E>, escape_processing: bool) -> Self {
        Self {
            session,
            escape_processing,
        }
    }

    /// Returns whether escape clauses are translated.
    #[must_use]
    pub const fn escape_processing(&self) -> bool {
        self.escape_processing
    }

    /// Enables or disables escape clause translation.
    pub fn set_escape_processing(&mut self, enabled: bool) {
        self.escape_processing = enabled;
    }

    /// Translates `sql` according to this statement's setting and prepares
    /// it with the engine.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`](crate::SessionError::Closed) after the
    /// session is closed, [`SessionError::Prepare`](crate::SessionError::Prepare)
    /// for malformed escapes and
    /// [`SessionError::Engine`](crate::SessionError::Engine) when the engine
    /// rejects the text.
    pub fn prepare(&self, sql: &str) -> Result<PreparedStatement<E::Command>> {
        self.session.prepare_with(sql, self.escape_processing)
    }
}
