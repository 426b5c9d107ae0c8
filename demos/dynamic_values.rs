//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use chrono::{TimeZone, Utc};
use num_bigint::BigInt;
use serde::Serialize;
use std::error::Error;
use toon_flat::{flatten, to_value, toon, ToonMap, Value};

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Parsed JSON keeps its key order
    let parsed = Value::from_json(r#"{"zeta": 1, "alpha": {"beta": [true, null]}}"#)?;
    println!("From JSON:\n{}\n", flatten(&parsed)?);

    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };
    let mut user_value = to_value(&user)?;

    // Leaves serde cannot express directly
    if let Value::Object(obj) = &mut user_value {
        obj.insert(
            "joined".to_string(),
            Value::from(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).single().ok_or("bad date")?),
        );
        obj.insert("quota".to_string(), Value::from("98765432109876543210".parse::<BigInt>()?));
        obj.insert("nickname".to_string(), Value::Undefined);
    }
    println!("User:\n{}\n", flatten(&user_value)?);

    let mut counters = ToonMap::new();
    counters.insert("hits".to_string(), Value::from(f64::INFINITY));
    counters.insert("ratio".to_string(), Value::from(-0.0f64));
    counters.insert("empty".to_string(), toon!([]));
    println!("Special numbers:\n{}\n", flatten(&Value::Object(counters))?);

    println!("Type checks:");
    println!("  is_object: {}", user_value.is_object());
    println!("  is_array:  {}", user_value.is_array());
    println!("  is_falsy:  {}", user_value.is_falsy());

    Ok(())
}
