//! Example: Using rowpack as a library
//!
//! This example demonstrates how to use rowpack in your own projects.
//!
//! Run with: cargo run --example library_usage

use rowpack::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== rowpack Library Usage Examples ===\n");

    // Example 1: Build records and serialize them
    println!("1. Serializing records:");
    let records = vec![
        DynRecord::new()
            .with_field("Name", "Alice")
            .with_field("Age", 30),
        DynRecord::new()
            .with_field("Name", "Bob")
            .with_field("Age", 25),
    ];

    let options = SerializeOptions::new().with_delimiter(",");
    print!("{}", generate(&records, &options));

    // Example 2: Explicit columns and a custom quote
    println!("\n2. Explicit columns, single-quote style:");
    let options = SerializeOptions::new()
        .with_delimiter(";")
        .with_quote("'")
        .with_columns(["Age", "Name"]);
    print!("{}", generate(&records, &options));

    // Example 3: Missing attributes surface in-band
    println!("\n3. Requesting a column the records don't have:");
    let options = SerializeOptions::new()
        .with_delimiter(",")
        .with_columns(["Name", "Email"]);
    print!("{}", generate(&records, &options));

    // Example 4: Null values drop their cell (lenient mode)
    println!("\n4. Null values in lenient vs strict mode:");
    let sparse = vec![
        DynRecord::new()
            .with_field("Name", "Alice")
            .with_null_field("Email")
            .with_field("Age", 30),
    ];
    let options = SerializeOptions::new().with_delimiter(",");
    print!("lenient:\n{}", generate(&sparse, &options));
    print!("strict:\n{}", generate_strict(&sparse, &options)?);

    // Example 5: Lazy per-line iteration
    println!("\n5. Iterating lines lazily:");
    for line in rows(&records, &options) {
        println!("   | {}", line);
    }

    // Example 6: JSON objects as records
    #[cfg(feature = "json")]
    {
        println!("\n6. JSON records:");
        let json_records = records_from_json(
            r#"[{"Item": "Widget", "Price": 9.99}, {"Item": "Gadget", "Price": 12.5}]"#,
        )?;
        print!("{}", generate(&json_records, &options));
    }

    // Example 7: Writing straight to a file
    println!("\n7. Writing to a file:");
    let dir = std::env::temp_dir().join("rowpack_example.csv");
    let path = dir.to_str().ok_or("temp path is not valid UTF-8")?;
    write_delimited(&records, path, &options)?;
    println!("   wrote {}", path);

    println!("\n=== Examples complete! ===");
    Ok(())
}
