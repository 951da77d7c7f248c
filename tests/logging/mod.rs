use std::io;

use chrono::{TimeZone, Utc};
use error_braid::{
    fields, log, log_debug, log_error, log_info, log_warn, Attr, FieldValue, StructuredError,
};
use log::Level;
use uuid::Uuid;

use crate::support::CapturingLog;

#[derive(Debug)]
struct Endpoint {
    host: &'static str,
    port: u16,
}

#[test]
fn structured_errors_log_message_and_fields() {
    let sink = CapturingLog::new();
    let id = Uuid::new_v4();
    let seen = Utc.with_ymd_and_hms(2024, 7, 1, 12, 30, 0).unwrap();

    let err = StructuredError::wrap("load profile", io::Error::other("socket closed"))
        .with_attr(Attr::string("region", "eu-west-1"))
        .with_attr(Attr::int("attempt", 2))
        .with_attr(Attr::uuid("user", id))
        .with_attr(Attr::time("seen", seen));

    log(&sink, Level::Error, &err);

    let records = sink.take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Error);
    assert_eq!(records[0].message, "load profile: socket closed");
    assert_eq!(
        records[0].fields,
        [
            ("region".to_owned(), "eu-west-1".to_owned()),
            ("attempt".to_owned(), "2".to_owned()),
            ("user".to_owned(), id.to_string()),
            ("seen".to_owned(), "2024-07-01T12:30:00+00:00".to_owned()),
        ],
    );
}

#[test]
fn error_attrs_become_text_fields() {
    let sink = CapturingLog::new();
    let err = StructuredError::new("retry budget exhausted")
        .with_attr(Attr::error("last", io::Error::other("socket closed")));

    log(&sink, Level::Warn, &err);

    let records = sink.take();
    assert_eq!(records[0].fields, [("last".to_owned(), "socket closed".to_owned())]);
}

#[test]
fn opaque_attrs_render_their_debug_form() {
    let expected = format!("{:?}", Endpoint { host: "db1", port: 5432 });

    let sink = CapturingLog::new();
    let err = StructuredError::new("dial failed")
        .with_attr(Attr::any("endpoint", Endpoint { host: "db1", port: 5432 }));

    log(&sink, Level::Error, &err);

    assert_eq!(sink.take()[0].fields, [("endpoint".to_owned(), expected)]);
}

#[test]
fn foreign_errors_log_flat_with_no_fields() {
    let sink = CapturingLog::new();
    let err = io::Error::other("socket closed");

    log(&sink, Level::Info, &err);

    let records = sink.take();
    assert_eq!(records[0].message, "socket closed");
    assert!(records[0].fields.is_empty());
}

#[test]
fn level_helpers_tag_their_level() {
    let sink = CapturingLog::new();
    let err = StructuredError::new("cache miss");

    log_debug(&sink, &err);
    log_info(&sink, &err);
    log_warn(&sink, &err);
    log_error(&sink, &err);

    let levels: Vec<Level> = sink.take().iter().map(|record| record.level).collect();
    assert_eq!(levels, [Level::Debug, Level::Info, Level::Warn, Level::Error]);
}

#[test]
fn fields_map_each_attr_kind() {
    let id = Uuid::new_v4();
    let attrs = [
        Attr::string("region", "eu-west-1"),
        Attr::int("attempt", 2),
        Attr::uuid("user", id),
        Attr::any("endpoint", Endpoint { host: "db1", port: 5432 }),
    ];

    let mapped = fields(&attrs);

    assert_eq!(mapped.len(), 4);
    assert_eq!(mapped[0].key(), "region");
    assert!(matches!(mapped[0].value(), FieldValue::Str("eu-west-1")));
    assert!(matches!(mapped[1].value(), FieldValue::Int(2)));
    match mapped[2].value() {
        FieldValue::Text(text) => assert_eq!(text, &id.to_string()),
        other => panic!("expected a text field, got {other:?}"),
    }
    match mapped[3].value() {
        FieldValue::Opaque(value) => assert_eq!(
            format!("{value:?}"),
            format!("{:?}", Endpoint { host: "db1", port: 5432 }),
        ),
        other => panic!("expected an opaque field, got {other:?}"),
    }
}
