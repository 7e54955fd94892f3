//! # sqlescape-core
//!
//! Translation of brace-delimited SQL escape clauses into native SQL.
//!
//! Client APIs let statements carry a portable escape syntax:
//!
//! - `{fn UPPER(name)}` scalar function calls
//! - `{oj a LEFT OUTER JOIN b ON ...}` outer joins
//! - `{d '2024-01-31'}`, `{t '12:00:00'}`, `{ts '...'}` date/time literals
//! - `{call proc(?)}` and `{? = call proc(?)}` procedure calls
//! - `{escape '\'}` LIKE escape characters
//! - `{params ...}` parameter lists
//!
//! The backend understands the contents of these clauses but not the braces
//! around them, nor the `fn`, `oj` and `params` markers. [`translate`]
//! replaces those with spaces in a single pass, stepping over string
//! literals, quoted identifiers, `$$` blocks and comments so braces inside
//! them are left alone.
//!
//! ```rust
//! use sqlescape_core::translate;
//!
//! let sql = translate("{call audit(?)}", true).unwrap();
//! assert_eq!(sql, " call audit(?) ");
//!
//! // Nothing to rewrite: the input comes back borrowed.
//! let plain = "SELECT '{not an escape}' FROM t";
//! assert!(matches!(translate(plain, true).unwrap(), std::borrow::Cow::Borrowed(_)));
//! ```
//!
//! Malformed input is reported with its position:
//!
//! ```rust
//! use sqlescape_core::translate;
//!
//! let err = translate("SELECT 1 {", true).unwrap_err();
//! assert_eq!(err.offset(), Some(10));
//! ```

pub mod lexer;
pub mod translator;

pub use lexer::{EscapeKeyword, Span};
pub use translator::{TranslateError, translate, translate_optional};
