use std::io;

use error_braid::{chain, chain_contains, find_in_chain, NotPermitted, StructuredError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("tenant {0} suspended")]
struct Suspended(&'static str);

#[derive(Debug, Error)]
#[error("driver disconnected")]
struct Driver;

#[derive(Debug, Error)]
#[error("pool drained")]
struct Pool {
    #[from]
    source: Driver,
}

#[test]
fn chain_visits_wrap_layers_outside_in() {
    let inner = StructuredError::wrap("push", io::Error::other("socket closed"));
    let outer = StructuredError::wrap("sync", inner);

    let texts: Vec<String> = chain(&outer).map(|node| node.to_string()).collect();
    assert_eq!(
        texts,
        ["sync: push: socket closed", "push: socket closed", "socket closed"],
    );
}

#[test]
fn multi_causes_fan_out_depth_first() {
    let left = StructuredError::wrap("left", StructuredError::new("leaf"));
    let root = StructuredError::wrap_multi(
        "root",
        vec![left.into(), StructuredError::new("right").into()],
    );

    let texts: Vec<String> = chain(&root).map(|node| node.to_string()).collect();
    assert_eq!(texts, ["root: left: leaf/right", "left: leaf", "leaf", "right"]);
}

#[test]
fn membership_sees_through_empty_messages() {
    let err = StructuredError::wrap("", StructuredError::wrap("check tenant", Suspended("acme")));

    assert!(chain_contains(&err, &Suspended("acme")));
    assert!(!chain_contains(&err, &Suspended("globex")));
}

#[test]
fn membership_searches_every_branch() {
    let err = StructuredError::wrap_multi(
        "apply changes",
        vec![io::Error::other("disk offline").into(), Suspended("acme").into()],
    );

    assert!(chain_contains(&err, &Suspended("acme")));
}

#[test]
fn not_permitted_is_found_through_wraps() {
    let err = StructuredError::wrap("save report", StructuredError::wrap("check access", NotPermitted));
    assert!(chain_contains(&err, &NotPermitted));
}

#[test]
fn find_returns_the_typed_node() {
    let err = StructuredError::wrap("bill tenant", Suspended("acme"));

    assert_eq!(find_in_chain::<Suspended>(&err), Some(&Suspended("acme")));
    assert!(find_in_chain::<io::Error>(&err).is_none());
}

#[test]
fn plain_source_chains_traverse_too() {
    let err = Pool::from(Driver);

    let texts: Vec<String> = chain(&err).map(|node| node.to_string()).collect();
    assert_eq!(texts, ["pool drained", "driver disconnected"]);
}

#[test]
fn iteration_ends_cleanly_after_the_last_node() {
    let err = StructuredError::new("leaf");
    let mut nodes = chain(&err);

    assert!(nodes.next().is_some());
    assert!(nodes.next().is_none());
    assert!(nodes.next().is_none());
}
