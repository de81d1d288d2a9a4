//! Row serialization.
//!
//! This is the heart of the crate: a single linear pass that turns a slice
//! of records into delimited text. There is no state across calls and the
//! lenient entry points have no failure paths; malformed situations surface
//! in-band in the output instead of as errors.
//!
//! # Behavior
//!
//! - An empty record slice produces an empty string, header included.
//! - Columns come from the explicit list in
//!   [`SerializeOptions::columns`](crate::options::SerializeOptions) when one
//!   is set and non-empty; otherwise they are derived once from the first
//!   record's attribute names. Later records are never re-inspected for
//!   shape.
//! - A name the record's type does not have produces the literal cell
//!   `"No Field '<name>' found"`, wrapped in double quotes regardless of the
//!   configured quote string.
//! - An attribute that exists but holds no value produces *no* cell: that
//!   row ends up one column short relative to the header. This is a known
//!   quirk kept for compatibility; [`generate_strict`] is the opt-in mode
//!   that enforces alignment instead.
//! - Text cells are wrapped in the quote string when one is configured,
//!   with no escaping of quote characters inside the value. Decimal cells
//!   always render with an invariant representation. Everything else uses
//!   its natural conversion.
//! - Every line, header and rows alike, ends with [`LINE_ENDING`].
//!
//! # Example
//!
//! ```rust
//! use rowpack::prelude::*;
//!
//! let records = vec![
//!     DynRecord::new().with_field("Name", "Alice").with_field("Age", 30),
//!     DynRecord::new().with_field("Name", "Bob").with_field("Age", 25),
//! ];
//!
//! let options = SerializeOptions::new().with_delimiter(",");
//! let text = generate(&records, &options);
//!
//! assert!(text.starts_with("Name,Age"));
//! assert!(text.contains("\"Alice\",30"));
//! ```

use crate::error::{Result, RowpackError};
use crate::options::SerializeOptions;
use crate::record::{Lookup, Record};
use crate::value::CellValue;

/// Line terminator used between output lines, following the platform
/// convention.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// Line terminator used between output lines, following the platform
/// convention.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Serializes records into a single delimited string.
///
/// Pure function of its inputs: identical records and options always yield
/// byte-identical output. Never fails; see the module docs for how missing
/// attributes and null values are represented in-band.
pub fn generate<R: Record>(records: &[R], options: &SerializeOptions) -> String {
    let mut out = String::new();
    for line in rows(records, options) {
        out.push_str(&line);
        out.push_str(LINE_ENDING);
    }
    out
}

/// Serializes records, rejecting anything that would misalign the output.
///
/// This is the opt-in counterpart to [`generate`] for callers that need
/// every row to carry exactly one cell per column:
///
/// - a missing attribute is an error instead of a sentinel cell
/// - a null value becomes an empty cell instead of being dropped
///
/// # Errors
///
/// Returns [`RowpackError::MissingAttribute`] naming the offending column
/// and the zero-based row index.
pub fn generate_strict<R: Record>(records: &[R], options: &SerializeOptions) -> Result<String> {
    let Some(first) = records.first() else {
        return Ok(String::new());
    };

    let columns = resolve_columns(first, options);
    let mut out = String::new();

    if options.header {
        out.push_str(&columns.join(&options.delimiter));
        out.push_str(LINE_ENDING);
    }

    for (row, record) in records.iter().enumerate() {
        let mut cells = Vec::with_capacity(columns.len());
        for name in &columns {
            match record.resolve(name, options.access) {
                Lookup::Missing => {
                    return Err(RowpackError::missing_attribute(name, row));
                }
                Lookup::Null => cells.push(String::new()),
                Lookup::Value(value) => cells.push(format_cell(&value, options)),
            }
        }
        out.push_str(&cells.join(&options.delimiter));
        out.push_str(LINE_ENDING);
    }

    Ok(out)
}

/// Returns a lazy iterator over output lines.
///
/// Yields the header first when enabled, then one line per record, all
/// without trailing line terminators. [`generate`] is this iterator
/// accumulated with [`LINE_ENDING`] after every line. An empty record slice
/// yields nothing at all.
pub fn rows<'a, R: Record>(records: &'a [R], options: &'a SerializeOptions) -> Rows<'a, R> {
    let columns = match records.first() {
        Some(first) => resolve_columns(first, options),
        None => Vec::new(),
    };

    Rows {
        records,
        options,
        columns,
        header_pending: options.header && !records.is_empty(),
        next: 0,
    }
}

/// Iterator over formatted output lines. Created by [`rows`].
#[derive(Debug)]
pub struct Rows<'a, R> {
    records: &'a [R],
    options: &'a SerializeOptions,
    columns: Vec<String>,
    header_pending: bool,
    next: usize,
}

impl<R: Record> Iterator for Rows<'_, R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.header_pending {
            self.header_pending = false;
            return Some(self.columns.join(&self.options.delimiter));
        }

        let record = self.records.get(self.next)?;
        self.next += 1;
        Some(format_row(record, &self.columns, self.options))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len() - self.next + usize::from(self.header_pending);
        (remaining, Some(remaining))
    }
}

impl<R: Record> ExactSizeIterator for Rows<'_, R> {}

fn resolve_columns<R: Record>(first: &R, options: &SerializeOptions) -> Vec<String> {
    match &options.columns {
        Some(columns) if !columns.is_empty() => columns.clone(),
        _ => first.attribute_names(options.access),
    }
}

fn format_row<R: Record>(record: &R, columns: &[String], options: &SerializeOptions) -> String {
    let mut cells = Vec::with_capacity(columns.len());

    for name in columns {
        match record.resolve(name, options.access) {
            // Hard-coded double quotes, independent of the configured quote.
            Lookup::Missing => cells.push(format!("\"No Field '{}' found\"", name)),
            // No cell at all; the row comes out one column short.
            Lookup::Null => {}
            Lookup::Value(value) => cells.push(format_cell(&value, options)),
        }
    }

    cells.join(&options.delimiter)
}

fn format_cell(value: &CellValue, options: &SerializeOptions) -> String {
    match value {
        CellValue::Text(text) if options.quotes_text() => {
            format!("{0}{1}{0}", options.quote, text)
        }
        other => other.render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DynRecord;

    fn people() -> Vec<DynRecord> {
        vec![
            DynRecord::new()
                .with_field("Name", "Alice")
                .with_field("Age", 30),
            DynRecord::new()
                .with_field("Name", "Bob")
                .with_field("Age", 25),
        ]
    }

    fn comma() -> SerializeOptions {
        SerializeOptions::new().with_delimiter(",")
    }

    #[test]
    fn test_generate_empty_is_empty() {
        let records: Vec<DynRecord> = vec![];
        assert_eq!(generate(&records, &comma()), "");
        assert_eq!(generate(&records, &comma().with_header(false)), "");
    }

    #[test]
    fn test_generate_header_and_rows() {
        let text = generate(&people(), &comma());
        let expected = format!("Name,Age{0}\"Alice\",30{0}\"Bob\",25{0}", LINE_ENDING);
        assert_eq!(text, expected);
    }

    #[test]
    fn test_generate_without_header() {
        let text = generate(&people(), &comma().with_header(false));
        assert!(!text.contains("Name,Age"));
        assert!(text.starts_with("\"Alice\",30"));
    }

    #[test]
    fn test_generate_missing_attribute_sentinel() {
        let text = generate(&people(), &comma().with_columns(["Name", "Missing"]));
        assert!(text.contains("\"No Field 'Missing' found\""));
    }

    #[test]
    fn test_sentinel_uses_double_quotes_regardless_of_quote() {
        let options = comma().with_quote("'").with_columns(["Missing"]);
        let text = generate(&people(), &options);
        assert!(text.contains("\"No Field 'Missing' found\""));
        assert!(!text.contains("'No Field"));
    }

    #[test]
    fn test_generate_null_skips_cell() {
        let records = vec![
            DynRecord::new()
                .with_field("Name", "Alice")
                .with_null_field("Email")
                .with_field("Age", 30),
        ];
        let text = generate(&records, &comma());
        // Email contributes no cell: two cells on a three-column header.
        assert!(text.contains(&format!("\"Alice\",30{}", LINE_ENDING)));
    }

    #[test]
    fn test_generate_properties_strategy() {
        let records = vec![
            DynRecord::new()
                .with_field("Ignored", 1)
                .with_property("Name", "Alice"),
        ];
        let options = comma().with_properties();
        let text = generate(&records, &options);
        assert!(text.starts_with("Name"));
        assert!(text.contains("\"Alice\""));
        assert!(!text.contains("Ignored"));
    }

    #[test]
    fn test_generate_no_quote_leaves_text_bare() {
        let text = generate(&people(), &comma().with_quote(""));
        assert!(text.contains("Alice,30"));
        assert!(!text.contains("\"Alice\""));
    }

    #[test]
    fn test_generate_explicit_empty_columns_fall_back_to_derivation() {
        let empty: Vec<String> = vec![];
        let text = generate(&people(), &comma().with_columns(empty));
        assert!(text.starts_with("Name,Age"));
    }

    #[test]
    fn test_rows_iterator_matches_generate() {
        let options = comma();
        let records = people();
        let collected: Vec<String> = rows(&records, &options).collect();
        assert_eq!(collected.len(), 3);

        let joined: String = collected
            .iter()
            .map(|line| format!("{}{}", line, LINE_ENDING))
            .collect();
        assert_eq!(joined, generate(&records, &options));
    }

    #[test]
    fn test_rows_size_hint() {
        let options = comma();
        let records = people();
        let iter = rows(&records, &options);
        assert_eq!(iter.len(), 3);

        let no_header = comma().with_header(false);
        let iter = rows(&records, &no_header);
        assert_eq!(iter.len(), 2);

        let empty: Vec<DynRecord> = vec![];
        assert_eq!(rows(&empty, &options).count(), 0);
    }

    #[test]
    fn test_generate_strict_aligned_output() {
        let records = vec![
            DynRecord::new()
                .with_field("Name", "Alice")
                .with_null_field("Email"),
        ];
        let text = generate_strict(&records, &comma()).unwrap();
        // Null renders as an empty cell; the delimiter count is preserved.
        assert!(text.contains(&format!("\"Alice\",{}", LINE_ENDING)));
    }

    #[test]
    fn test_generate_strict_missing_attribute_is_error() {
        let err = generate_strict(&people(), &comma().with_columns(["Nope"])).unwrap_err();
        assert!(err.is_missing_attribute());
        assert!(err.to_string().contains("Nope"));
    }

    #[test]
    fn test_generate_strict_empty_input() {
        let records: Vec<DynRecord> = vec![];
        assert_eq!(generate_strict(&records, &comma()).unwrap(), "");
    }

    #[test]
    fn test_generate_idempotent() {
        let records = people();
        let options = comma();
        assert_eq!(generate(&records, &options), generate(&records, &options));
    }
}
