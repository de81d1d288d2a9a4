//! # Rowpack
//!
//! A Rust library for serializing in-memory lists of uniformly-shaped
//! records into delimited text (CSV-like) output for ad-hoc tabular export.
//!
//! ## Overview
//!
//! Rowpack does one thing: given an ordered sequence of records, an optional
//! explicit column list, and formatting options, it produces the full
//! delimited-text payload as a single string. Attribute names are discovered
//! at runtime from the first record, or supplied explicitly by the caller.
//!
//! The output format is deliberately raw: the delimiter and quote strings
//! are inserted verbatim with no escaping, which keeps the output predictable
//! and cheap but means values containing the delimiter are the caller's
//! responsibility. Parsing, streaming of large datasets, and RFC 4180
//! compliance are out of scope.
//!
//! ## Quick Start
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
//! ```
//!
//! ## JSON Records
//!
//! With the `json` feature (enabled by default), JSON objects work as
//! records directly:
//!
//! ```rust
//! # #[cfg(feature = "json")]
//! # fn main() -> rowpack::Result<()> {
//! use rowpack::prelude::*;
//!
//! let records = rowpack::json::records_from_json(
//!     r#"[{"Name": "Alice", "Age": 30}]"#,
//! )?;
//! let text = generate(&records, &SerializeOptions::new());
//! assert!(text.starts_with("Name;Age"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "json"))]
//! # fn main() {}
//! ```
//!
//! ## Lenient by Default
//!
//! The default [`generate`](serializer::generate) never fails. A requested
//! column the record's type does not have becomes the literal cell
//! `"No Field '<name>' found"`, and an attribute holding no value is dropped
//! from its row entirely, leaving that row a column short. Both behaviors
//! are kept for compatibility with the exports this crate reproduces;
//! [`generate_strict`](serializer::generate_strict) is the opt-in mode that
//! errors on missing columns and keeps rows aligned.
//!
//! ## Module Structure
//!
//! - [`serializer`] — [`generate`](serializer::generate),
//!   [`generate_strict`](serializer::generate_strict),
//!   [`rows`](serializer::rows)
//! - [`record`] — [`Record`](record::Record) trait,
//!   [`DynRecord`](record::DynRecord),
//!   [`AccessStrategy`](record::AccessStrategy), [`Lookup`](record::Lookup)
//! - [`value`] — [`CellValue`](value::CellValue)
//! - [`options`] — [`SerializeOptions`](options::SerializeOptions)
//! - [`json`] — [`JsonRecord`](json::JsonRecord),
//!   [`records_from_json`](json::records_from_json) (feature `json`)
//! - [`output`] — [`write_delimited`](output::write_delimited)
//! - [`error`] — [`RowpackError`], [`Result`]
//! - [`prelude`] — convenient re-exports

pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod options;
pub mod output;
pub mod record;
pub mod serializer;
pub mod value;

// Re-export the main types at the crate root for convenience
pub use error::{Result, RowpackError};
pub use options::SerializeOptions;
pub use record::{AccessStrategy, DynRecord, Record};
pub use serializer::{generate, generate_strict};
pub use value::CellValue;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use rowpack::prelude::*;
/// ```
pub mod prelude {
    // Core serialization entry points
    pub use crate::serializer::{LINE_ENDING, generate, generate_strict, rows};

    // Records and values
    pub use crate::record::{AccessStrategy, DynRecord, Lookup, Record};
    pub use crate::value::CellValue;

    // Options
    pub use crate::options::SerializeOptions;

    // Error types
    pub use crate::error::{Result, RowpackError};

    // File output
    pub use crate::output::write_delimited;

    // JSON integration
    #[cfg(feature = "json")]
    pub use crate::json::{JsonRecord, records_from_json};
}
