//! Embedding data in an LLM prompt.
//!
//! Run with: RUST_LOG=debug cargo run --example prompt

use std::error::Error;
use toon_flat::{DataFormat, PromptBuilder, Value};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let data = Value::from_json(
        r#"{"city": "Oslo", "forecast": [{"day": "mon", "temp": 4.5}, {"day": "tue", "temp": -1}]}"#,
    )?;

    for use_toon in [true, false] {
        let builder = PromptBuilder::new(DataFormat::from_use_toon(use_toon));
        let prompt = builder.build("Summarize the forecast.", Some(&data))?;
        println!("--- {} ({} chars) ---\n{}\n", builder.format(), prompt.len(), prompt);
    }

    // Falsy data adds no block
    let prompt = PromptBuilder::default().build("Just chat.", Some(&Value::Null))?;
    println!("--- no data ---\n{}", prompt);

    Ok(())
}
