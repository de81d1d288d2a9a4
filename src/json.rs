//! serde_json integration.
//!
//! JSON objects are the practical runtime-shaped record in Rust: their keys
//! are only known at runtime, exactly the situation the serializer is built
//! for. [`JsonRecord`] adapts a JSON object to the [`Record`] trait, and
//! [`records_from_json`] parses a whole JSON array of objects in one call.
//!
//! Key order is document order (serde_json's `preserve_order` feature), so
//! derived columns come out in the order the attributes appear in the input.
//!
//! JSON has no field/property split, so both access strategies resolve
//! identically.
//!
//! # Example
//!
//! ```rust
//! use rowpack::json::records_from_json;
//! use rowpack::options::SerializeOptions;
//! use rowpack::serializer::generate;
//!
//! let records = records_from_json(
//!     r#"[{"Name": "Alice", "Age": 30}, {"Name": "Bob", "Age": 25}]"#,
//! )?;
//!
//! let text = generate(&records, &SerializeOptions::new().with_delimiter(","));
//! assert!(text.starts_with("Name,Age"));
//! # Ok::<(), rowpack::RowpackError>(())
//! ```

use serde_json::{Map, Value};

use crate::error::{Result, RowpackError};
use crate::record::{AccessStrategy, Lookup, Record};
use crate::value::CellValue;

/// A record backed by a JSON object.
///
/// Attribute values map onto [`CellValue`] as follows: strings become
/// `Text`, integers `Int`, other numbers `Float`, booleans `Bool`, and
/// nested arrays or objects become `Raw` compact JSON. A JSON `null` is a
/// present-but-null attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonRecord {
    attributes: Map<String, Value>,
}

impl JsonRecord {
    /// Creates a record from a JSON object map.
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self { attributes }
    }

    /// Creates a record from a JSON value, which must be an object.
    ///
    /// # Errors
    ///
    /// Returns [`RowpackError::InvalidRecord`] for any non-object value.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(attributes) => Ok(Self::new(attributes)),
            other => Err(RowpackError::invalid_record(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if the record has no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl From<Map<String, Value>> for JsonRecord {
    fn from(attributes: Map<String, Value>) -> Self {
        Self::new(attributes)
    }
}

impl TryFrom<Value> for JsonRecord {
    type Error = RowpackError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl Record for JsonRecord {
    fn attribute_names(&self, _strategy: AccessStrategy) -> Vec<String> {
        self.attributes.keys().cloned().collect()
    }

    fn resolve(&self, name: &str, _strategy: AccessStrategy) -> Lookup {
        match self.attributes.get(name).map(cell) {
            None => Lookup::Missing,
            Some(None) => Lookup::Null,
            Some(Some(value)) => Lookup::Value(value),
        }
    }
}

/// Parses a JSON array of objects into records.
///
/// # Errors
///
/// Returns [`RowpackError::Json`] when the input is not valid JSON, and
/// [`RowpackError::InvalidRecord`] when the top level is not an array or an
/// element is not an object.
pub fn records_from_json(json: &str) -> Result<Vec<JsonRecord>> {
    let value: Value = serde_json::from_str(json)?;

    match value {
        Value::Array(items) => items.into_iter().map(JsonRecord::try_from).collect(),
        other => Err(RowpackError::invalid_record(format!(
            "expected a JSON array of objects, got {}",
            json_kind(&other)
        ))),
    }
}

fn cell(value: &Value) -> Option<CellValue> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(CellValue::Text(text.clone())),
        Value::Number(number) => match number.as_i64() {
            Some(int) => Some(CellValue::Int(int)),
            None => match number.as_f64() {
                Some(float) => Some(CellValue::Float(float)),
                None => Some(CellValue::Raw(number.to_string())),
            },
        },
        Value::Bool(flag) => Some(CellValue::Bool(*flag)),
        // Nested structures are emitted verbatim as compact JSON.
        Value::Array(_) | Value::Object(_) => Some(CellValue::Raw(value.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
