//! Basic construction, rendering, and logging of structured errors.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example quick_start
//! ```

use std::error::Error as StdError;
use std::fmt::Write as _;
use std::io;

use error_braid::{braid, log_error, log_warn, wrap, wrap_multi, Attr};
use log::kv::{Key, Value, VisitSource};
use log::{Log, Metadata, Record};

/// Minimal `log::Log` sink printing message and fields to stdout.
struct StdoutLog;

struct AppendFields<'a>(&'a mut String);

impl<'kvs> VisitSource<'kvs> for AppendFields<'_> {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), log::kv::Error> {
        let _ = write!(self.0, " {key}={value}");
        Ok(())
    }
}

impl Log for StdoutLog {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let mut fields = String::new();
        let _ = record.key_values().visit(&mut AppendFields(&mut fields));
        println!("[{}] {}{}", record.level(), record.args(), fields);
    }

    fn flush(&self) {}
}

fn main() {
    let plain = braid!("cache miss", Attr::string("key", "user:42"));
    println!("flat: {plain}");

    let wrapped = wrap!(
        "load profile",
        io::Error::other("socket closed"),
        Attr::string("region", "eu-west-1"),
        Attr::int("attempt", 2),
    );
    println!("flat: {wrapped}");
    println!("message only: {}", wrapped.message());
    println!(
        "source: {:?}",
        wrapped.source().map(|cause| cause.to_string()),
    );

    let fanned = wrap_multi!(
        "flush replicas",
        [
            io::Error::other("disk offline"),
            io::Error::other("quota exceeded"),
        ],
    );
    println!("flat: {fanned}");

    let sink = StdoutLog;
    log_error(&sink, &wrapped);
    log_warn(&sink, &fanned);
}
