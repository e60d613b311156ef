//! Basic SafeSON serialization and deserialization.
//!
//! Run with: cargo run --example simple

use safeson::{from_slice, to_vec};
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
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

    let bytes = to_vec(&users)?;
    println!("SafeSON output ({} bytes):\n{:02x?}\n", bytes.len(), bytes);

    let json = serde_json::to_vec(&users)?;
    println!("Same data as JSON: {} bytes\n", json.len());

    let users_back: Vec<User> = from_slice(&bytes)?;
    assert_eq!(users, users_back);
    println!("✓ Round-trip successful");

    Ok(())
}
