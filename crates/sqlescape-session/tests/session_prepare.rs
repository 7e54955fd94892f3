//! Tests for the statement preparation path.

use sqlescape_session::prelude::*;

/// Rejects anything that still looks like an escape clause.
struct StrictEngine;

#[derive(Debug, thiserror::Error)]
#[error("unexpected escape syntax at {0}")]
struct EscapeLeaked(usize);

impl QueryEngine for StrictEngine {
    type Command = String;
    type Error = EscapeLeaked;

    fn prepare(&self, sql: &str) -> std::result::Result<String, EscapeLeaked> {
        match sql.find(['{', '}']) {
            Some(pos) => Err(EscapeLeaked(pos)),
            None => Ok(sql.trim().to_string()),
        }
    }
}

#[test]
fn engine_only_sees_native_sql() {
    let session = Session::new(StrictEngine);
    for (sql, native) in [
        ("SELECT {fn UCASE(name)} FROM users", "SELECT     UCASE(name)  FROM users"),
        ("{call refresh(?)}", "call refresh(?)"),
        ("{? = call next_id()}", "call next_id()"),
        (
            "SELECT * FROM {oj a LEFT OUTER JOIN b ON a.id = b.id}",
            "SELECT * FROM     a LEFT OUTER JOIN b ON a.id = b.id",
        ),
    ] {
        let prepared = session.prepare_statement(sql).unwrap();
        assert_eq!(prepared.command(), native, "for: {sql}");
    }
}

#[test]
fn disabled_escape_processing_reaches_engine_untouched() {
    let session = Session::new(StrictEngine);
    let mut statement = session.create_statement().unwrap();
    statement.set_escape_processing(false);
    let err = statement.prepare("{call refresh(?)}").unwrap_err();
    assert_eq!(err.to_string(), "Engine error: unexpected escape syntax at 0");
}

#[test]
fn preparation_failure_carries_position() {
    let session = Session::new(StrictEngine);
    let err = session.prepare_call("{? call refresh}").unwrap_err();
    let source = err.translate_error().unwrap();
    assert_eq!(source.offset(), Some(3));
    assert_eq!(source.expected_token(), Some("="));
    assert_eq!(
        err.to_string(),
        "Failed to prepare statement: Syntax error: expected \"=\" at position 3"
    );
}

#[test]
fn preparation_failure_position_counts_characters() {
    let session = Session::new(StrictEngine);
    let err = session.prepare_statement("SELECT 'é' {").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to prepare statement: Unterminated escape clause at position 12"
    );
}

#[test]
fn native_sql_matches_prepared_text() {
    let session = Session::new(EchoEngine);
    let sql = "SELECT {fn NOW()}, {d '2024-01-31'}";
    let prepared = session.prepare_statement(sql).unwrap();
    assert_eq!(session.native_sql(sql).unwrap(), prepared.sql());
    assert_eq!(translate(sql, true).unwrap(), prepared.sql());
}

#[test]
fn session_is_shareable_across_threads() {
    let session = std::sync::Arc::new(Session::new(EchoEngine));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let session = std::sync::Arc::clone(&session);
            std::thread::spawn(move || session.native_sql(&format!("{{call p({i})}}")).unwrap())
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!(" call p({i}) "));
    }
}
