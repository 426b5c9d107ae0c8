//! Basic flat TOON encoding of a struct.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use std::error::Error;
use toon_flat::{flatten, to_string, to_value};

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
        },
    ];

    let flat = to_string(&users)?;
    println!("Flat TOON:\n{}\n", flat);

    // Same document through the value tree
    let doc = flatten(&to_value(&users)?)?;
    assert_eq!(doc.to_string(), flat);

    println!("Tokens:");
    for token in &doc {
        println!("  {:<12} {}", token.path.to_string(), token.value);
    }

    Ok(())
}
