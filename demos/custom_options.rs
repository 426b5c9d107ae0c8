//! Customizing the output with FlattenOptions.
//!
//! Run with: cargo run --example custom_options

use serde::Serialize;
use std::error::Error;
use toon_flat::{to_string, to_string_with_options, Delimiter, FlattenOptions};

#[derive(Debug, Serialize)]
struct Config {
    name: String,
    version: String,
    server: Server,
}

#[derive(Debug, Serialize)]
struct Server {
    host: String,
    ports: Vec<u16>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "MyApp".to_string(),
        version: "1.0.0".to_string(),
        server: Server {
            host: "localhost".to_string(),
            ports: vec![8080, 8443],
        },
    };

    println!("Default (semicolon):");
    println!("{}\n", to_string(&config)?);

    println!("Newline delimiter:");
    let options = FlattenOptions::new().with_delimiter(Delimiter::Newline);
    println!("{}\n", to_string_with_options(&config, &options)?);

    println!("Pipe delimiter, '/' paths:");
    let options = FlattenOptions::new()
        .with_delimiter(Delimiter::Pipe)
        .with_path_separator('/');
    println!("{}\n", to_string_with_options(&config, &options)?);

    println!("Depth limit of 2:");
    let options = FlattenOptions::new().with_max_depth(2);
    match to_string_with_options(&config, &options) {
        Ok(flat) => println!("{}", flat),
        Err(e) => println!("error: {}", e),
    }

    Ok(())
}
