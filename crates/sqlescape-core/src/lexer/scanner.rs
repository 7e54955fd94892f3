//! Cursor over statement text with literal and comment skipping.

use crate::translator::TranslateError;

/// A forward-only cursor over SQL text.
///
/// Positions are byte offsets. Every character the scanner acts on is ASCII,
/// so jumps always land on character boundaries.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// The input source text.
    input: &'a str,
    /// The current byte position.
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the input text.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the current character without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advances to the next character and returns it.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advances over `count` ASCII bytes.
    pub fn advance_ascii(&mut self, count: usize) {
        self.pos = (self.pos + count).min(self.input.len());
    }

    /// Skips whitespace.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Returns the run of non-whitespace characters at the cursor without
    /// consuming it.
    #[must_use]
    pub fn token(&self) -> &'a str {
        let rest = &self.input[self.pos..];
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        &rest[..len]
    }

    /// Moves past the literal or comment opened at the cursor.
    ///
    /// Characters that only sometimes open a span (`$`, `/`, `-`) are
    /// consumed on their own when they do not.
    ///
    /// # Errors
    ///
    /// Returns a syntax error located at the opening character when a
    /// quote, dollar-quote or block comment is never closed.
    pub fn skip_literal(&mut self) -> Result<(), TranslateError> {
        self.pos = literal_end(self.input, self.pos)?;
        Ok(())
    }
}

/// Returns the byte offset just past the literal or comment starting at
/// `pos`, or `pos + 1` when the character there opens nothing.
///
/// Line comments end before their line terminator and never fail.
///
/// # Errors
///
/// Returns a syntax error at `pos` for an unterminated quote, dollar-quote
/// or block comment.
pub fn literal_end(sql: &str, pos: usize) -> Result<usize, TranslateError> {
    let bytes = sql.as_bytes();
    let next = bytes.get(pos + 1).copied();
    match bytes.get(pos).copied() {
        Some(b'\'') => find_from(sql, pos + 1, "'")
            .map(|end| end + 1)
            .ok_or_else(|| TranslateError::unterminated("string literal", sql, pos)),
        Some(b'"') => find_from(sql, pos + 1, "\"")
            .map(|end| end + 1)
            .ok_or_else(|| TranslateError::unterminated("quoted identifier", sql, pos)),
        Some(b'$') if next == Some(b'$') && opens_dollar_quote(sql, pos) => {
            find_from(sql, pos + 2, "$$")
                .map(|end| end + 2)
                .ok_or_else(|| TranslateError::unterminated("dollar-quoted string", sql, pos))
        }
        Some(b'/') if next == Some(b'*') => find_from(sql, pos + 2, "*/")
            .map(|end| end + 2)
            .ok_or_else(|| TranslateError::unterminated("block comment", sql, pos)),
        Some(b'/') if next == Some(b'/') => Ok(line_end(bytes, pos + 2)),
        Some(b'-') if next == Some(b'-') => Ok(line_end(bytes, pos + 2)),
        Some(_) => Ok(pos + 1),
        None => Ok(pos),
    }
}

/// `$$` only opens a block at the start of the text or after whitespace, so
/// identifiers such as `price$$` stay inert. Whitespace here is the same
/// Unicode whitespace the cursor skips.
fn opens_dollar_quote(sql: &str, pos: usize) -> bool {
    sql[..pos].chars().next_back().is_none_or(char::is_whitespace)
}

fn find_from(sql: &str, from: usize, needle: &str) -> Option<usize> {
    sql.get(from..)?.find(needle).map(|i| from + i)
}

fn line_end(bytes: &[u8], from: usize) -> usize {
    bytes
        .iter()
        .skip(from)
        .position(|&b| b == b'\n' || b == b'\r')
        .map_or(bytes.len(), |i| from + i)
}
