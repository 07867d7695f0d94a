//! The serializer presets and a hand-tuned option set side by side.
//!
//! Run with: cargo run --example formatting

use jsontree::{from_str, to_string_with_options, FormatOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let value = from_str("{ name: 'Ada', langs: ['en', 'fr'], meta: { born: 1815, note: \"it's\" } }")?;

    let presets = [
        ("compact", FormatOptions::compact()),
        ("formatted", FormatOptions::formatted()),
        ("readable", FormatOptions::readable()),
        ("formatted_wrapped", FormatOptions::formatted_wrapped()),
    ];

    for (name, options) in &presets {
        println!("{}:\n{}\n", name, to_string_with_options(&value, options));
    }

    // Tabs for indentation, bare keys, maps wrapped but lists kept inline
    let custom = FormatOptions {
        newline_after_map_entry: true,
        indent_map_body: true,
        ..FormatOptions::formatted()
    }
    .with_indent_unit("\t")
    .with_key_quote("");
    println!("custom:\n{}", to_string_with_options(&value, &custom));

    Ok(())
}
