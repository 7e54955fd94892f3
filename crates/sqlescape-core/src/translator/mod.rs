//! Escape clause translation.
//!
//! A single forward pass over the statement that blanks out the escape
//! delimiters and keywords the backend does not understand.

mod error;
mod translate;

pub use error::TranslateError;
pub use translate::{translate, translate_optional};

/// Result type for translation.
pub type Result<T> = std::result::Result<T, TranslateError>;
