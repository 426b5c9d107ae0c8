//! Using the toon! macro for dynamic value construction.
//!
//! Run with: cargo run --example macro

use std::error::Error;
use toon_flat::{to_string, toon, Value};

fn main() -> Result<(), Box<dyn Error>> {
    println!("Primitives:");
    println!("  null:      {}", to_string(&toon!(null))?);
    println!("  undefined: {}", to_string(&toon!(undefined))?);
    println!("  bool:      {}", to_string(&toon!(true))?);
    println!("  number:    {}", to_string(&toon!(42))?);
    println!("  text:      {}\n", to_string(&toon!("Hello, TOON!"))?);

    println!("Arrays:");
    println!("  Numbers: {}", to_string(&toon!([1, 2, 3, 4, 5]))?);
    println!("  Mixed:   {}\n", to_string(&toon!([1, "two", true, null]))?);

    let config = toon!({
        "app": {
            "name": "MyApp",
            "version": "1.0.0"
        },
        "database": {
            "host": "localhost",
            "port": 5432
        },
        "features": ["auth", "logging"],
        "debug": true
    });

    println!("Nested structures:");
    println!("{}\n", to_string(&config)?);

    let items = vec![
        toon!({"id": 1, "status": "active"}),
        toon!({"id": 2, "status": "pending"}),
    ];
    let summary = toon!({
        "total": 2,
        "items": items
    });

    println!("Dynamic construction:");
    println!("{}\n", to_string(&summary)?);

    if let Value::Object(obj) = &config {
        if let Some(name) = obj
            .get("app")
            .and_then(|app| app.as_object())
            .and_then(|app| app.get("name"))
            .and_then(|v| v.as_str())
        {
            println!("App name: {}", name);
        }
    }

    Ok(())
}
