//! Tests for translator-wide properties.

mod common;
use common::*;

use std::borrow::Cow;

use sqlescape_core::translate;

const STATEMENTS: &[&str] = &[
    "SELECT {fn UPPER(name)} FROM t",
    "{call proc(?)}",
    "{? = call proc(?)}",
    "SELECT '{literal brace}' FROM t",
    "{oj t1 LEFT OUTER JOIN t2 ON t1.id=t2.id}",
    "SELECT {fn CONCAT({fn UCASE(a)}, b)} FROM t",
    "SELECT * FROM t WHERE d = {d '2024-01-31'}",
    "{params 1, 2, 3}",
    "SELECT {2024-01-31}, {fn NOW()}",
    "SELECT 'héllo', {fn upper('ü')} -- ñ",
];

#[test]
fn disabled_returns_input() {
    for sql in STATEMENTS {
        assert!(matches!(translate(sql, false), Ok(Cow::Borrowed(s)) if s == *sql));
    }
}

#[test]
fn text_without_brace_is_borrowed() {
    assert_borrowed("SELECT a, b FROM t WHERE c = 'x'");
    assert_borrowed("");
}

#[test]
fn translation_is_idempotent() {
    for sql in STATEMENTS {
        idempotent(sql);
    }
}

#[test]
fn translation_preserves_length() {
    for sql in STATEMENTS {
        assert_eq!(rewrite(sql).len(), sql.len(), "Length changed for: {sql}");
    }
}

#[test]
fn only_blanks_are_introduced() {
    for sql in STATEMENTS {
        let translated = rewrite(sql);
        for (before, after) in sql.chars().zip(translated.chars()) {
            assert!(
                before == after || after == ' ',
                "Unexpected change {before:?} -> {after:?} in: {sql}"
            );
        }
    }
}

#[test]
fn escapes_leave_no_braces_behind() {
    for sql in [
        "SELECT {fn UPPER(name)} FROM t",
        "{call proc(?)}",
        "{oj t1 LEFT OUTER JOIN t2 ON t1.id=t2.id}",
        "SELECT {fn CONCAT({fn UCASE(a)}, b)} FROM t",
    ] {
        let translated = rewrite(sql);
        assert!(!translated.contains('{') && !translated.contains('}'));
    }
}

#[test]
fn concurrent_callers_agree() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| STATEMENTS.iter().map(|sql| rewrite(sql)).collect::<Vec<_>>()))
        .collect();
    let expected: Vec<_> = STATEMENTS.iter().map(|sql| rewrite(sql)).collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
