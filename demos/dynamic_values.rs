//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use safeson::{decode, decode_with_options, encode, safeson, to_value, DecodeOptions, Value};
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = safeson!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    println!("Config: {}\n", config);

    if let Value::Object(obj) = &config {
        if let Some(Value::String(host)) = obj.get("host") {
            println!("Accessing field 'host': {}", host);
        }

        if let Some(port) = obj.get("port").and_then(|v| v.as_i64()) {
            println!("Accessing field 'port': {}", port);
        }

        if let Some(Value::Array(features)) = obj.get("features") {
            println!("Accessing field 'features': {} items\n", features.len());
        }
    }

    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };

    let user_value = to_value(&user)?;
    println!("User as Value: {}\n", user_value);

    println!("Type checks:");
    println!("  is_object: {}", user_value.is_object());
    println!("  is_array:  {}", user_value.is_array());
    println!("  is_string: {}", user_value.is_string());

    let wire = encode(&config);
    println!("\nEncoded config: {} bytes", wire.len());
    assert_eq!(decode(&wire)?, config);

    // The default depth limit can be tightened per call
    let options = DecodeOptions::new().with_max_depth(1);
    match decode_with_options(&wire, &options) {
        Ok(_) => println!("Decoded within depth 1"),
        Err(e) => println!("Rejected: {}", e),
    }

    Ok(())
}
