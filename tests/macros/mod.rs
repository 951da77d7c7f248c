use std::io;

use error_braid::{braid, wrap, wrap_multi, Attr};

#[test]
fn braid_macro_builds_message_and_attrs() {
    let err = braid!(
        "payment declined",
        Attr::string("card", "visa"),
        Attr::int("amount", 1200),
    );

    assert_eq!(err.to_string(), "payment declined card=visa amount=1200");
}

#[test]
fn braid_macro_accepts_a_bare_message() {
    assert_eq!(braid!("cache miss").to_string(), "cache miss");
    assert_eq!(braid!("cache miss",).to_string(), "cache miss");
}

#[test]
fn wrap_macro_layers_over_a_cause() {
    let err = wrap!(
        "load profile",
        io::Error::other("socket closed"),
        Attr::string("region", "eu-west-1"),
    );

    assert_eq!(err.to_string(), "load profile: socket closed region=eu-west-1");
}

#[test]
fn wrap_multi_macro_takes_a_bracket_list() {
    let err = wrap_multi!(
        "flush replicas",
        [
            io::Error::other("disk offline"),
            io::Error::other("quota exceeded"),
        ],
        Attr::string("stage", "final"),
    );

    assert_eq!(
        err.to_string(),
        "flush replicas: disk offline/quota exceeded stage=final",
    );
    assert_eq!(err.causes().len(), 2);
}

#[test]
fn wrap_multi_macro_mixes_cause_types() {
    let err = wrap_multi!(
        "apply changes",
        [
            error_braid::StructuredError::new("lease expired"),
            io::Error::other("disk offline"),
        ],
    );

    assert_eq!(err.to_string(), "apply changes: lease expired/disk offline");
}
