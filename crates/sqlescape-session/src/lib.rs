//! Session facade over an escape-translating statement path.
//!
//! `sqlescape-session` sits between a client and a query engine. Statements
//! are run through [`sqlescape_core::translate`] before the engine sees them,
//! so the engine only ever deals with native SQL.
//!
//! # Example
//!
//! ```rust
//! use sqlescape_session::prelude::*;
//!
//! let session = Session::new(EchoEngine);
//!
//! // Preview the translation.
//! assert_eq!(session.native_sql("{call audit(?)}").unwrap(), " call audit(?) ");
//!
//! // Prepare a procedure call that binds a return value.
//! let call = session.prepare_call("{? = call next_id()}").unwrap();
//! assert!(call.returns_value());
//!
//! // Statements can opt out of translation.
//! let mut statement = session.create_statement().unwrap();
//! statement.set_escape_processing(false);
//! assert_eq!(statement.prepare("{call audit(?)}").unwrap().sql(), "{call audit(?)}");
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Translate a statement
//! sqlescape "SELECT {fn UCASE(name)} FROM users"
//!
//! # Translate a file, logging each step
//! sqlescape --file query.sql --verbose
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod session;
pub mod statement;

pub use config::SessionConfig;
pub use engine::{EchoEngine, QueryEngine};
pub use error::{Result, SessionError};
pub use session::Session;
pub use statement::{PreparedStatement, Statement};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::SessionConfig;
    pub use crate::engine::{EchoEngine, QueryEngine};
    pub use crate::error::{Result, SessionError};
    pub use crate::session::Session;
    pub use crate::statement::{PreparedStatement, Statement};
    pub use sqlescape_core::{TranslateError, translate};
}
