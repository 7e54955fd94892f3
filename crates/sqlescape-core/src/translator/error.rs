//! Translation error types.

use crate::lexer::Span;

/// An error raised while translating escape clauses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// The statement text was absent.
    #[error("Invalid value for {name}: no statement text")]
    InvalidArgument {
        /// Name of the missing argument.
        name: &'static str,
    },

    /// The statement text is malformed.
    #[error("{message} at position {offset}")]
    Syntax {
        /// The error message.
        message: String,
        /// Byte range of the error in the statement.
        span: Span,
        /// Zero-based character offset of the error.
        offset: usize,
        /// Expected token (if applicable).
        expected: Option<String>,
    },
}

impl TranslateError {
    /// Creates a syntax error at byte position `pos` of `sql`.
    #[must_use]
    pub fn syntax(message: impl Into<String>, sql: &str, pos: usize) -> Self {
        Self::Syntax {
            message: message.into(),
            span: Span::point(pos),
            offset: char_offset(sql, pos),
            expected: None,
        }
    }

    /// Creates an "expected token" error.
    #[must_use]
    pub fn expected(expected: impl Into<String>, sql: &str, pos: usize) -> Self {
        let expected: String = expected.into();
        Self::Syntax {
            message: format!("Syntax error: expected \"{expected}\""),
            span: Span::point(pos),
            offset: char_offset(sql, pos),
            expected: Some(expected),
        }
    }

    /// Creates an "unterminated construct" error starting at byte `pos`.
    #[must_use]
    pub fn unterminated(what: &str, sql: &str, pos: usize) -> Self {
        Self::syntax(format!("Unterminated {what}"), sql, pos)
    }

    /// Returns the byte range of a syntax error.
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::Syntax { span, .. } => Some(*span),
            Self::InvalidArgument { .. } => None,
        }
    }

    /// Returns the zero-based character offset of a syntax error.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::Syntax { offset, .. } => Some(*offset),
            Self::InvalidArgument { .. } => None,
        }
    }

    /// Returns the expected token, if the error names one.
    #[must_use]
    pub fn expected_token(&self) -> Option<&str> {
        match self {
            Self::Syntax { expected, .. } => expected.as_deref(),
            Self::InvalidArgument { .. } => None,
        }
    }

    /// Returns true for malformed-input errors.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }
}

/// Counts the characters before byte `pos`.
fn char_offset(sql: &str, pos: usize) -> usize {
    sql.get(..pos).map_or(pos, |prefix| prefix.chars().count())
}
