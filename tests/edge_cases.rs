//! Edge case tests for rowpack.
//!
//! These cover boundary conditions that the regular unit and integration
//! tests don't reach: unusual delimiters and quote strings, unicode content,
//! very wide and very long inputs.

use rowpack::prelude::*;

fn comma() -> SerializeOptions {
    SerializeOptions::new().with_delimiter(",")
}

// =========================================================================
// Unicode and special character tests
// =========================================================================

#[test]
fn test_unicode_values_pass_through() {
    let records = vec![
        DynRecord::new()
            .with_field("Sender", "Иван")
            .with_field("Content", "Привет мир!"),
        DynRecord::new()
            .with_field("Sender", "田中太郎")
            .with_field("Content", "こんにちは世界！"),
        DynRecord::new()
            .with_field("Sender", "User 🎉")
            .with_field("Content", "Hello 👋 World 🌍"),
    ];

    let text = generate(&records, &comma());
    assert!(text.contains("\"Иван\",\"Привет мир!\""));
    assert!(text.contains("\"田中太郎\",\"こんにちは世界！\""));
    assert!(text.contains("\"User 🎉\",\"Hello 👋 World 🌍\""));
}

#[test]
fn test_unicode_column_names() {
    let records = vec![
        DynRecord::new()
            .with_field("Имя", "Alice")
            .with_field("名前", "Bob"),
    ];
    let text = generate(&records, &comma());
    assert!(text.starts_with("Имя,名前"));
}

#[test]
fn test_unicode_delimiter_and_quote() {
    let records = vec![
        DynRecord::new()
            .with_field("A", "x")
            .with_field("B", "y"),
    ];
    let options = SerializeOptions::new().with_delimiter("→").with_quote("«");
    let text = generate(&records, &options);
    assert!(text.starts_with("A→B"));
    assert!(text.contains("«x«→«y«"));
}

#[test]
fn test_newline_inside_value_is_not_escaped() {
    let records = vec![DynRecord::new().with_field("Note", "line one\nline two")];
    let text = generate(&records, &comma());
    // raw format: the embedded newline splits the physical line
    assert!(text.contains("\"line one\nline two\""));
}

// =========================================================================
// Delimiter and quote boundary tests
// =========================================================================

#[test]
fn test_empty_delimiter_concatenates_cells() {
    let records = vec![
        DynRecord::new()
            .with_field("A", "x")
            .with_field("B", "y"),
    ];
    let options = SerializeOptions::new().with_delimiter("").with_quote("");
    let text = generate(&records, &options);
    assert!(text.starts_with("AB"));
    assert!(text.contains(&format!("xy{}", LINE_ENDING)));
}

#[test]
fn test_delimiter_appearing_inside_value_is_not_escaped() {
    let records = vec![
        DynRecord::new()
            .with_field("A", "x,y")
            .with_field("B", "z"),
    ];
    let text = generate(&records, &comma().with_quote(""));
    // the embedded comma is indistinguishable from a cell boundary
    assert!(text.contains("x,y,z"));
}

#[test]
fn test_whitespace_only_quote_is_treated_as_no_quote() {
    let records = vec![DynRecord::new().with_field("Name", "Alice")];
    let text = generate(&records, &comma().with_quote("  "));
    assert!(text.contains(&format!("Alice{}", LINE_ENDING)));
}

#[test]
fn test_multi_character_quote() {
    let records = vec![DynRecord::new().with_field("Name", "Alice")];
    let text = generate(&records, &comma().with_quote("%%"));
    assert!(text.contains("%%Alice%%"));
}

// =========================================================================
// Shape and size boundaries
// =========================================================================

#[test]
fn test_single_column_single_record() {
    let records = vec![DynRecord::new().with_field("Only", "value")];
    let text = generate(&records, &comma());
    let expected = format!("Only{0}\"value\"{0}", LINE_ENDING);
    assert_eq!(text, expected);
}

#[test]
fn test_wide_record() {
    let mut record = DynRecord::new();
    for i in 0..200 {
        record = record.with_field(format!("col{i}"), i as i64);
    }
    let text = generate(&[record], &comma().with_header(false));
    let line = text.lines().next().unwrap();
    assert_eq!(line.split(',').count(), 200);
}

#[test]
fn test_many_records() {
    let records: Vec<DynRecord> = (0..1000)
        .map(|i| {
            DynRecord::new()
                .with_field("Index", i as i64)
                .with_field("Label", format!("row {i}"))
        })
        .collect();
    let text = generate(&records, &comma());
    assert_eq!(text.matches(LINE_ENDING).count(), 1001);
}

#[test]
fn test_very_long_value() {
    let long_value = "x".repeat(100 * 1024);
    let records = vec![DynRecord::new().with_field("Blob", long_value.as_str())];
    let text = generate(&records, &comma().with_quote(""));
    assert!(text.contains(&long_value));
}

#[test]
fn test_first_record_with_no_attributes() {
    // derivation finds nothing; every row is an empty line
    let records = vec![DynRecord::new(), DynRecord::new()];
    let text = generate(&records, &comma());
    let expected = format!("{0}{0}{0}", LINE_ENDING);
    assert_eq!(text, expected);
}

#[test]
fn test_empty_string_value_is_quoted_not_dropped() {
    let records = vec![
        DynRecord::new()
            .with_field("Name", "")
            .with_field("Age", 1),
    ];
    let text = generate(&records, &comma());
    // empty text is still a present value, unlike null
    assert!(text.contains("\"\",1"));
}
