//! Serialization options.
//!
//! [`SerializeOptions`] collects everything that shapes the output: the
//! delimiter and quote strings, whether a header row is emitted, which
//! attribute-access strategy is used, and an optional explicit column list.
//!
//! # Example
//!
//! ```rust
//! use rowpack::options::SerializeOptions;
//!
//! let options = SerializeOptions::new()
//!     .with_delimiter(",")
//!     .with_quote("\"")
//!     .with_columns(["Name", "Age"]);
//! ```

use serde::{Deserialize, Serialize};

use crate::record::AccessStrategy;

/// Options controlling how records are serialized to delimited text.
///
/// The delimiter and quote are strings, not single characters: both are
/// inserted verbatim, and multi-character delimiters are legal. No escaping
/// is applied when a cell value happens to contain the delimiter or quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializeOptions {
    /// String inserted verbatim between cells (default: `;`).
    pub delimiter: String,

    /// String wrapped around text cells (default: `"`). Quoting is skipped
    /// entirely when this is empty or whitespace-only.
    pub quote: String,

    /// Emit a header row joining the column names (default: true).
    pub header: bool,

    /// Attribute-access strategy for name derivation and lookup
    /// (default: [`AccessStrategy::Fields`]).
    pub access: AccessStrategy,

    /// Explicit column list. When `None` or empty, columns are derived from
    /// the first record's attribute names (default: `None`).
    pub columns: Option<Vec<String>>,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            delimiter: ";".to_string(),
            quote: "\"".to_string(),
            header: true,
            access: AccessStrategy::Fields,
            columns: None,
        }
    }
}

impl SerializeOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cell delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Sets the quote string for text cells.
    #[must_use]
    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = quote.into();
        self
    }

    /// Enables or disables the header row.
    #[must_use]
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Sets the attribute-access strategy.
    #[must_use]
    pub fn with_access(mut self, access: AccessStrategy) -> Self {
        self.access = access;
        self
    }

    /// Resolves attributes through property accessors instead of fields.
    #[must_use]
    pub fn with_properties(self) -> Self {
        self.with_access(AccessStrategy::Properties)
    }

    /// Sets an explicit column list, overriding derivation from the first
    /// record. An empty list behaves like no list at all.
    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Returns `true` if text cells should be wrapped in the quote string.
    pub fn quotes_text(&self) -> bool {
        !self.quote.trim().is_empty()
    }
}
