//! Coercion between kinds, strict reads, and converting typed data.
//!
//! Run with: cargo run --example dynamic_values

use jsontree::{from_str, from_value, to_string_pretty, to_value, tree, Coercion};
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = tree!({
        "host": "localhost",
        "port": "8080",
        "ratio": 0.75,
        "debug": "TRUE"
    });

    // Every node reads as any scalar type
    println!("port as int:     {}", config["port"].as_int());
    println!("ratio as string: {}", config["ratio"].as_string());
    println!("ratio as int:    {}", config["ratio"].as_int());
    println!("debug as bool:   {}", config["debug"].as_bool());
    println!("host as int:     {}", config["host"].as_int());

    match config["host"].coerce_int(Coercion::Strict) {
        Ok(n) => println!("host is {}", n),
        Err(e) => println!("strict read failed: {}\n", e),
    }

    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };
    let value = to_value(&user)?;
    println!("User as a tree:\n{}\n", to_string_pretty(&value));

    let parsed: User = from_value(from_str("{ id: 7, name: 'Bo', roles: [guest] }")?)?;
    println!("Parsed back: {:?}", parsed);

    Ok(())
}
