//! Escape translator implementation.

use std::borrow::Cow;

use super::{Result, TranslateError};
use crate::lexer::{EscapeKeyword, Scanner};

/// Translates the escape clauses in `sql` into native syntax.
///
/// When `escape_processing` is false, or the text has no `{` at all, the
/// input is returned borrowed without scanning it. Otherwise the result is a
/// new string of the same length in which escape braces and the `fn`, `oj`
/// and `params` keywords are replaced by spaces.
///
/// ```rust
/// use sqlescape_core::translate;
///
/// let sql = translate("SELECT {fn NOW()}", true).unwrap();
/// assert_eq!(sql, "SELECT     NOW() ");
/// ```
///
/// # Errors
///
/// Returns [`TranslateError::Syntax`] for unterminated literals, quoted
/// identifiers, dollar-quoted blocks or block comments, a `?` not followed by
/// `=`, and unbalanced braces.
pub fn translate(sql: &str, escape_processing: bool) -> Result<Cow<'_, str>> {
    if !escape_processing || !sql.contains('{') {
        return Ok(Cow::Borrowed(sql));
    }
    Translator::new(sql).run()
}

/// Like [`translate`], for callers whose statement text may be missing.
///
/// # Errors
///
/// Returns [`TranslateError::InvalidArgument`] when `sql` is `None`, and
/// otherwise whatever [`translate`] returns.
pub fn translate_optional(sql: Option<&str>, escape_processing: bool) -> Result<Cow<'_, str>> {
    let sql = sql.ok_or(TranslateError::InvalidArgument { name: "SQL" })?;
    translate(sql, escape_processing)
}

/// Single-use state for one translation.
struct Translator<'a> {
    scanner: Scanner<'a>,
    /// Rebuilt text, allocated at the first escape clause.
    output: Option<String>,
    /// Input bytes already copied into `output`.
    copied: usize,
    /// Unmatched `{` count.
    level: usize,
}

impl<'a> Translator<'a> {
    const fn new(sql: &'a str) -> Self {
        Self {
            scanner: Scanner::new(sql),
            output: None,
            copied: 0,
            level: 0,
        }
    }

    fn run(mut self) -> Result<Cow<'a, str>> {
        while let Some(c) = self.scanner.peek() {
            match c {
                '\'' | '"' | '$' | '/' | '-' => self.scanner.skip_literal()?,
                '{' => self.open_escape()?,
                '}' => self.close_escape()?,
                _ => {
                    self.scanner.advance();
                }
            }
        }
        if self.level != 0 {
            let input = self.scanner.input();
            return Err(TranslateError::unterminated("escape clause", input, input.len()));
        }
        Ok(self.finish())
    }

    fn open_escape(&mut self) -> Result<()> {
        let brace = self.scanner.pos();
        self.level += 1;
        self.materialize();
        self.scanner.advance();
        self.scanner.skip_whitespace();

        let first = self.peek_or_eof()?;
        if first.is_ascii_digit() {
            return self.pass_native_literal();
        }
        self.blank(brace, 1);

        if first == '?' {
            self.blank(self.scanner.pos(), 1);
            self.scanner.advance();
            self.scanner.skip_whitespace();
            if self.scanner.peek() != Some('=') {
                return Err(TranslateError::expected(
                    "=",
                    self.scanner.input(),
                    self.scanner.pos(),
                ));
            }
            self.blank(self.scanner.pos(), 1);
            self.scanner.advance();
            self.scanner.skip_whitespace();
        }

        let start = self.scanner.pos();
        if let Some(keyword) = EscapeKeyword::from_token(self.scanner.token()) {
            let len = keyword.blank_len();
            if len > 0 {
                self.blank(start, len);
                self.scanner.advance_ascii(len);
            }
        }
        Ok(())
    }

    /// Copies a `{2024-01-31 ...}` style literal through untouched, braces
    /// included.
    fn pass_native_literal(&mut self) -> Result<()> {
        loop {
            match self.peek_or_eof()? {
                '}' => {
                    self.scanner.advance();
                    break;
                }
                '\'' | '"' | '$' | '/' | '-' => self.scanner.skip_literal()?,
                _ => {
                    self.scanner.advance();
                }
            }
        }
        self.level -= 1;
        Ok(())
    }

    fn close_escape(&mut self) -> Result<()> {
        let pos = self.scanner.pos();
        if self.level == 0 {
            return Err(TranslateError::syntax(
                "Unbalanced closing brace",
                self.scanner.input(),
                pos,
            ));
        }
        self.level -= 1;
        self.blank(pos, 1);
        self.scanner.advance();
        Ok(())
    }

    fn peek_or_eof(&self) -> Result<char> {
        self.scanner.peek().ok_or_else(|| {
            let input = self.scanner.input();
            TranslateError::unterminated("escape clause", input, input.len())
        })
    }

    fn materialize(&mut self) {
        if self.output.is_none() {
            self.output = Some(String::with_capacity(self.scanner.input().len()));
        }
    }

    /// Replaces `len` ASCII bytes at `pos` with spaces. Calls must come in
    /// increasing position order.
    fn blank(&mut self, pos: usize, len: usize) {
        let input = self.scanner.input();
        let output = self.output.get_or_insert_with(|| String::with_capacity(input.len()));
        output.push_str(&input[self.copied..pos]);
        output.extend(std::iter::repeat_n(' ', len));
        self.copied = pos + len;
    }

    fn finish(self) -> Cow<'a, str> {
        let input = self.scanner.input();
        match self.output {
            Some(mut output) => {
                output.push_str(&input[self.copied..]);
                Cow::Owned(output)
            }
            None => Cow::Borrowed(input),
        }
    }
}
