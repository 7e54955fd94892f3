//! The session facade.
//!
//! Every statement passes through the escape translator before the engine
//! sees it.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::config::SessionConfig;
use crate::engine::QueryEngine;
use crate::error::{Result, SessionError};
use crate::statement::{PreparedStatement, Statement};

/// A client session in front of a query engine.
pub struct Session<E> {
    engine: E,
    config: SessionConfig,
    closed: AtomicBool,
}

impl<E: QueryEngine> Session<E> {
    /// Creates a session with the default configuration.
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, SessionConfig::default())
    }

    /// Creates a session with the given configuration.
    pub const fn with_config(engine: E, config: SessionConfig) -> Self {
        Self {
            engine,
            config,
            closed: AtomicBool::new(false),
        }
    }

    /// Returns the engine.
    #[must_use]
    pub const fn engine(&self) -> &E {
        &self.engine
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the text the engine would receive for `sql`, without
    /// preparing it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] after [`close`](Self::close) and
    /// [`SessionError::Prepare`] for malformed escapes.
    pub fn native_sql(&self, sql: &str) -> Result<String> {
        self.check_closed()?;
        self.translate(sql, true)
    }

    /// Translates and prepares `sql`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] after [`close`](Self::close),
    /// [`SessionError::Prepare`] for malformed escapes and
    /// [`SessionError::Engine`] when the engine rejects the text.
    pub fn prepare_statement(&self, sql: &str) -> Result<PreparedStatement<E::Command>> {
        self.prepare_with(sql, true)
    }

    /// Translates and prepares a `{call ...}` or `{? = call ...}` statement.
    ///
    /// # Errors
    ///
    /// Same as [`prepare_statement`](Self::prepare_statement).
    pub fn prepare_call(&self, sql: &str) -> Result<PreparedStatement<E::Command>> {
        self.prepare_with(sql, true)
    }

    /// Creates a statement using the session's escape processing default.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] after [`close`](Self::close).
    pub fn create_statement(&self) -> Result<Statement<'_, E>> {
        self.check_closed()?;
        Ok(Statement::new(self, self.config.escape_processing))
    }

    /// Closes the session. Later calls fail with [`SessionError::Closed`].
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            debug!("Session closed");
        }
    }

    /// Returns whether the session is closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    pub(crate) fn prepare_with(
        &self,
        sql: &str,
        escape_processing: bool,
    ) -> Result<PreparedStatement<E::Command>> {
        self.check_closed()?;
        let translated = self.translate(sql, escape_processing)?;
        let command = self.engine.prepare(&translated).map_err(|e| {
            warn!(sql = %translated, error = %e, "Engine rejected statement");
            SessionError::Engine(Box::new(e))
        })?;
        let returns_value = escape_processing && binds_return_value(sql);
        Ok(PreparedStatement::new(translated, command, returns_value))
    }

    fn translate(&self, sql: &str, escape_processing: bool) -> Result<String> {
        match sqlescape_core::translate(sql, escape_processing) {
            Ok(translated) => {
                debug!(sql = %sql, translated = %translated, "Translated statement");
                Ok(translated.into_owned())
            }
            Err(source) => {
                warn!(sql = %sql, error = %source, "Statement preparation failed");
                Err(SessionError::Prepare {
                    sql: sql.to_string(),
                    source,
                })
            }
        }
    }

    fn check_closed(&self) -> Result<()> {
        if self.is_closed() {
            return Err(SessionError::Closed);
        }
        Ok(())
    }
}

/// Whether `sql` opens with a `{? = ...}` escape.
fn binds_return_value(sql: &str) -> bool {
    sql.trim_start()
        .strip_prefix('{')
        .is_some_and(|rest| rest.trim_start().starts_with('?'))
}
