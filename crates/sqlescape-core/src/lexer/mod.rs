//! Character-level scanning of SQL text.
//!
//! The scanner does not tokenize SQL. It only knows enough to step over
//! string literals, quoted identifiers, dollar-quoted blocks and comments so
//! that braces inside them are never mistaken for escape delimiters.

mod keyword;
mod scanner;
mod span;

pub use keyword::EscapeKeyword;
pub use scanner::{Scanner, literal_end};
pub use span::Span;
