use std::io;

use chrono::{TimeZone, Utc};
use error_braid::{Attr, AttrValue, Loggable};
use uuid::Uuid;

#[derive(Debug)]
struct Endpoint {
    host: &'static str,
    port: u16,
}

struct ApiKey;

impl Loggable for ApiKey {
    fn log_string(&self) -> String {
        "[redacted]".to_owned()
    }
}

#[test]
fn string_attr_renders_key_equals_value() {
    let attr = Attr::string("region", "eu-west-1");
    assert_eq!(attr.to_string(), "region=eu-west-1");
}

#[test]
fn int_attr_renders_decimal() {
    assert_eq!(Attr::int("offset", -3).to_string(), "offset=-3");
}

#[test]
fn uuid_attr_renders_canonical_form() {
    let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    assert_eq!(
        Attr::uuid("user", id).to_string(),
        "user=67e55044-10b1-426f-9247-bb680e5fe0c8",
    );
}

#[test]
fn time_attr_renders_chrono_display() {
    let seen = Utc.with_ymd_and_hms(2024, 7, 1, 12, 30, 0).unwrap();
    assert_eq!(
        Attr::time("seen", seen).to_string(),
        "seen=2024-07-01 12:30:00 UTC",
    );
}

#[test]
fn error_attr_renders_display_text() {
    let attr = Attr::error("cause", io::Error::other("socket closed"));
    assert_eq!(attr.to_string(), "cause=socket closed");
}

#[test]
fn opaque_attr_renders_debug() {
    let attr = Attr::any(
        "endpoint",
        Endpoint {
            host: "db1",
            port: 5432,
        },
    );
    assert_eq!(
        attr.to_string(),
        r#"endpoint=Endpoint { host: "db1", port: 5432 }"#,
    );
}

#[test]
fn loggable_attr_uses_log_string() {
    let attr = Attr::loggable("api_key", &ApiKey);
    assert_eq!(attr.to_string(), "api_key=[redacted]");
    assert!(matches!(attr.value(), AttrValue::Str(_)));
}

#[test]
fn owned_keys_and_values_work() {
    let attr = Attr::string(format!("shard_{}", 4), String::from("replica"));
    assert_eq!(attr.to_string(), "shard_4=replica");
}

#[test]
fn accessors_expose_key_and_value() {
    let attr = Attr::int("attempt", 3);
    assert_eq!(attr.key(), "attempt");
    assert!(matches!(attr.value(), AttrValue::Int(3)));
}

#[test]
fn equality_is_structural_for_plain_kinds() {
    assert_eq!(Attr::string("region", "eu-west-1"), Attr::string("region", "eu-west-1"));
    assert_ne!(Attr::string("region", "eu-west-1"), Attr::string("zone", "eu-west-1"));
    assert_ne!(Attr::int("attempt", 1), Attr::int("attempt", 2));
}

#[test]
fn cross_kind_values_never_compare_equal() {
    assert_ne!(Attr::string("n", "3"), Attr::int("n", 3));
}

#[test]
fn error_values_compare_by_rendered_text() {
    assert_eq!(
        Attr::error("cause", io::Error::other("boom")),
        Attr::error("cause", io::Error::other("boom")),
    );
    assert_ne!(
        Attr::error("cause", io::Error::other("boom")),
        Attr::error("cause", io::Error::other("bust")),
    );
}

#[test]
fn cloning_preserves_value() {
    let attr = Attr::error("cause", io::Error::other("socket closed"));
    assert_eq!(attr.clone(), attr);

    let opaque = Attr::any("endpoint", Endpoint { host: "db1", port: 5432 });
    assert_eq!(opaque.clone().to_string(), opaque.to_string());
}
