//! Cell value model.
//!
//! Every cell that ends up in the output starts as a [`CellValue`]. The enum
//! keeps the formatting rules an exhaustive match instead of ad-hoc runtime
//! type inspection: text is the only kind a quote string applies to, decimals
//! always use an invariant representation, and everything else falls back to
//! its natural string conversion.
//!
//! # Example
//!
//! ```rust
//! use rowpack::value::CellValue;
//!
//! let name = CellValue::from("Alice");
//! let age = CellValue::from(30);
//!
//! assert!(name.is_text());
//! assert_eq!(age.render(), "30");
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Format used for [`CellValue::Timestamp`] cells.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single cell value extracted from a record attribute.
///
/// The variants split along the lines the serializer cares about:
///
/// | Variant | Quoted? | Rendering |
/// |---------|---------|-----------|
/// | `Text` | yes, when a quote string is configured | verbatim |
/// | `Decimal` | no | invariant decimal (`.` point, no grouping) |
/// | `Int`, `Float`, `Bool` | no | natural `Display` conversion |
/// | `Timestamp` | no | [`TIMESTAMP_FORMAT`] |
/// | `Raw` | no | emitted verbatim |
///
/// `Raw` carries values that were already rendered elsewhere (nested JSON
/// structures, preformatted numbers) and must never be re-quoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Textual value; the only kind subject to quoting.
    Text(String),
    /// Fixed-precision decimal value.
    Decimal(Decimal),
    /// Signed integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value, rendered as `true` / `false`.
    Bool(bool),
    /// UTC timestamp, rendered with [`TIMESTAMP_FORMAT`].
    Timestamp(DateTime<Utc>),
    /// Pre-rendered value, emitted verbatim and never quoted.
    Raw(String),
}

impl CellValue {
    /// Returns `true` if this is a [`Text`](CellValue::Text) value.
    pub fn is_text(&self) -> bool {
        matches!(self, CellValue::Text(_))
    }

    /// Converts the value to its unquoted string form.
    ///
    /// All numeric renderings are locale-independent: the decimal point is
    /// always `.` and no grouping separators are emitted.
    pub fn render(&self) -> String {
        match self {
            CellValue::Text(text) | CellValue::Raw(text) => text.clone(),
            CellValue::Decimal(decimal) => decimal.to_string(),
            CellValue::Int(int) => int.to_string(),
            CellValue::Float(float) => float.to_string(),
            CellValue::Bool(flag) => flag.to_string(),
            CellValue::Timestamp(ts) => ts.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        CellValue::Text(text)
    }
}

impl From<Decimal> for CellValue {
    fn from(decimal: Decimal) -> Self {
        CellValue::Decimal(decimal)
    }
}

impl From<i64> for CellValue {
    fn from(int: i64) -> Self {
        CellValue::Int(int)
    }
}

impl From<i32> for CellValue {
    fn from(int: i32) -> Self {
        CellValue::Int(i64::from(int))
    }
}

impl From<u32> for CellValue {
    fn from(int: u32) -> Self {
        CellValue::Int(i64::from(int))
    }
}

impl From<f64> for CellValue {
    fn from(float: f64) -> Self {
        CellValue::Float(float)
    }
}

impl From<f32> for CellValue {
    fn from(float: f32) -> Self {
        CellValue::Float(f64::from(float))
    }
}

impl From<bool> for CellValue {
    fn from(flag: bool) -> Self {
        CellValue::Bool(flag)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(ts: DateTime<Utc>) -> Self {
        CellValue::Timestamp(ts)
    }
}
