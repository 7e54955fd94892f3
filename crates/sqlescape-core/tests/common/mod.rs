#![allow(dead_code)]

use std::borrow::Cow;

use sqlescape_core::{TranslateError, translate};

pub fn rewrite(sql: &str) -> String {
    translate(sql, true)
        .unwrap_or_else(|e| panic!("Failed to translate: {sql}\nError: {e}"))
        .into_owned()
}

pub fn rewrite_err(sql: &str) -> TranslateError {
    translate(sql, true).expect_err(&format!("Expected translate error for: {sql}"))
}

/// Returns the offset of the syntax error raised for `sql`.
pub fn err_offset(sql: &str) -> usize {
    let err = rewrite_err(sql);
    err.offset()
        .unwrap_or_else(|| panic!("Expected a located error for: {sql}, got {err:?}"))
}

pub fn assert_unchanged(sql: &str) {
    let translated = rewrite(sql);
    assert_eq!(translated, sql, "Expected no rewrite for: {sql}");
}

pub fn assert_borrowed(sql: &str) {
    match translate(sql, true) {
        Ok(Cow::Borrowed(s)) => assert_eq!(s, sql),
        other => panic!("Expected borrowed pass-through for: {sql}, got {other:?}"),
    }
}

/// Verifies that translation is a fixed point once the escapes are gone.
pub fn idempotent(sql: &str) {
    let first = rewrite(sql);
    if first.contains('{') {
        return;
    }
    let second = rewrite(&first);
    assert_eq!(
        first, second,
        "Second translation changed the text.\n  Input:  {sql}\n  First:  {first}\n  Second: {second}"
    );
}
