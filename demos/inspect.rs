//! Reading values out of a document with single expressions.
//!
//! Run with: cargo run --example inspect

use jsontree::{from_str, to_string, to_string_pretty, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let data = r#"[ "first", { "aString": "Hello World", "aNumber": 42 } ]"#;
    println!("Given the document: {}\n", data);

    let mut json = from_str(data)?;

    // Lists index by position, maps by key; misses read as Empty
    println!("Get to the value quickly:");
    println!("  json[1][\"aNumber\"].as_int() = {}", json[1]["aNumber"].as_int());
    println!("  json[1][\"aString\"].as_string() = {}", json[1]["aString"].as_string());
    println!("  json[5][\"missing\"].as_int() = {}\n", json[5]["missing"].as_int());

    println!("Serialized again: {}\n", to_string(&json));
    println!("Serialized with formatting:\n{}\n", to_string_pretty(&json));

    if let Some(map) = json.get_mut(1).and_then(Value::as_map_mut) {
        map.insert("added".to_string(), Value::from("later"));
    }
    println!("After adding an entry: {}", json);

    Ok(())
}
