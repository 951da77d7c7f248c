//! Classifying failures into categories at an RPC boundary.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example rpc_boundary
//! ```

use error_braid::{
    classify, Attr, Category, NotPermitted, Result, ResultExt, StructuredError,
};
use uuid::Uuid;

const NO_ROWS: &str = "no rows returned by a query that expected to return at least one row";

/// gRPC-style status code for a category.
fn status_code(category: Category) -> u32 {
    match category {
        Category::Unauthenticated => 16,
        Category::NotFound => 5,
        Category::InvalidArgument => 3,
        _ => 13,
    }
}

fn authorize(role: &str) -> Result<()> {
    if role == "admin" {
        Ok(())
    } else {
        Err(StructuredError::wrap("check access", NotPermitted)
            .with_attr(Attr::string("role", role.to_owned())))
    }
}

fn load_account(raw_id: &str) -> Result<Uuid> {
    Uuid::parse_str(raw_id)
        .wrap_with("parse account id", || Attr::string("raw", raw_id.to_owned()))
}

fn fetch_quota(account: Uuid) -> Result<i64> {
    Err(std::io::Error::other(NO_ROWS))
        .wrap_with("fetch quota", || Attr::uuid("account", account))
}

fn handle(role: &str, raw_id: &str) -> Result<i64> {
    authorize(role)?;
    let account = load_account(raw_id)?;
    fetch_quota(account)
}

fn main() {
    let calls = [
        ("viewer", "67e55044-10b1-426f-9247-bb680e5fe0c8"),
        ("admin", "not-a-uuid"),
        ("admin", "67e55044-10b1-426f-9247-bb680e5fe0c8"),
    ];

    for (role, raw_id) in calls {
        match handle(role, raw_id) {
            Ok(quota) => println!("ok: quota={quota}"),
            Err(err) => {
                let category = classify(&err);
                println!("error: {err}");
                println!("  category={category} code={}", status_code(category));
            }
        }
    }
}
