//! Named-attribute access for records.
//!
//! The serializer never knows attribute names at compile time. Instead of
//! reflection, which Rust does not have, records expose their attributes
//! through the [`Record`] trait: a name list for column derivation and a
//! by-name [`resolve`](Record::resolve) lookup that distinguishes *missing*
//! attributes from attributes that are present but hold no value.
//!
//! Two implementations ship with the crate:
//!
//! - [`DynRecord`] — an ordered, builder-constructed runtime record
//! - `JsonRecord` — a `serde_json` object adapter (behind the `json` feature)
//!
//! Anything else can implement [`Record`] directly; the trait is object safe,
//! so heterogeneous sequences of `Box<dyn Record>` work too.
//!
//! # Example
//!
//! ```rust
//! use rowpack::record::{AccessStrategy, DynRecord, Lookup, Record};
//!
//! let record = DynRecord::new()
//!     .with_field("Name", "Alice")
//!     .with_field("Age", 30);
//!
//! let names = record.attribute_names(AccessStrategy::Fields);
//! assert_eq!(names, vec!["Name", "Age"]);
//!
//! assert!(matches!(record.resolve("Name", AccessStrategy::Fields), Lookup::Value(_)));
//! assert!(matches!(record.resolve("Email", AccessStrategy::Fields), Lookup::Missing));
//! ```

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// Selects how named attributes are looked up on a record.
///
/// The distinction matters for records that keep separate field storage and
/// accessor-style properties. Implementations without that split are free to
/// answer both strategies identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessStrategy {
    /// Resolve names against direct field storage (default).
    #[default]
    Fields,
    /// Resolve names against property-style accessors.
    Properties,
}

impl std::fmt::Display for AccessStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessStrategy::Fields => write!(f, "fields"),
            AccessStrategy::Properties => write!(f, "properties"),
        }
    }
}

/// The result of resolving an attribute name on a record.
///
/// The three-way split drives the serializer's per-cell behavior: `Missing`
/// produces the in-band sentinel cell, `Null` produces no cell at all, and
/// `Value` produces a formatted cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// The record's type has no attribute with this name.
    Missing,
    /// The attribute exists but holds no value for this record.
    Null,
    /// The attribute resolved to a value.
    Value(CellValue),
}

/// A structured value whose named attributes supply cell values.
///
/// `attribute_names` is consulted once per serialization, on the first record
/// of the sequence; `resolve` is consulted for every record and every column.
pub trait Record {
    /// Returns the attribute names for the given strategy, in the record's
    /// own enumeration order. The order is not required to be sorted.
    fn attribute_names(&self, strategy: AccessStrategy) -> Vec<String>;

    /// Resolves a single attribute by name.
    fn resolve(&self, name: &str, strategy: AccessStrategy) -> Lookup;
}

impl<R: Record + ?Sized> Record for &R {
    fn attribute_names(&self, strategy: AccessStrategy) -> Vec<String> {
        (**self).attribute_names(strategy)
    }

    fn resolve(&self, name: &str, strategy: AccessStrategy) -> Lookup {
        (**self).resolve(name, strategy)
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn attribute_names(&self, strategy: AccessStrategy) -> Vec<String> {
        (**self).attribute_names(strategy)
    }

    fn resolve(&self, name: &str, strategy: AccessStrategy) -> Lookup {
        (**self).resolve(name, strategy)
    }
}

/// An ordered runtime record built attribute by attribute.
///
/// Attributes live in two independent sets, fields and properties, mirroring
/// the two [`AccessStrategy`] variants. Insertion order is enumeration order.
/// Duplicate names are not rejected; a duplicate column name duplicates the
/// output column.
///
/// # Example
///
/// ```rust
/// use rowpack::record::DynRecord;
///
/// let record = DynRecord::new()
///     .with_field("Name", "Alice")
///     .with_field("Age", 30)
///     .with_null_field("Email");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynRecord {
    fields: Vec<(String, Option<CellValue>)>,
    properties: Vec<(String, Option<CellValue>)>,
}

impl DynRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to append a field with a value.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.push((name.into(), Some(value.into())));
        self
    }

    /// Builder method to append a field that holds no value.
    #[must_use]
    pub fn with_null_field(mut self, name: impl Into<String>) -> Self {
        self.fields.push((name.into(), None));
        self
    }

    /// Builder method to append a property with a value.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.properties.push((name.into(), Some(value.into())));
        self
    }

    /// Builder method to append a property that holds no value.
    #[must_use]
    pub fn with_null_property(mut self, name: impl Into<String>) -> Self {
        self.properties.push((name.into(), None));
        self
    }

    /// Returns the number of attributes in the given set.
    pub fn len(&self, strategy: AccessStrategy) -> usize {
        self.attributes(strategy).len()
    }

    /// Returns `true` if the given attribute set is empty.
    pub fn is_empty(&self, strategy: AccessStrategy) -> bool {
        self.attributes(strategy).is_empty()
    }

    fn attributes(&self, strategy: AccessStrategy) -> &[(String, Option<CellValue>)] {
        match strategy {
            AccessStrategy::Fields => &self.fields,
            AccessStrategy::Properties => &self.properties,
        }
    }
}

impl Record for DynRecord {
    fn attribute_names(&self, strategy: AccessStrategy) -> Vec<String> {
        self.attributes(strategy)
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    fn resolve(&self, name: &str, strategy: AccessStrategy) -> Lookup {
        // First match wins when a name was inserted twice.
        match self
            .attributes(strategy)
            .iter()
            .find(|(attr, _)| attr == name)
        {
            None => Lookup::Missing,
            Some((_, None)) => Lookup::Null,
            Some((_, Some(value))) => Lookup::Value(value.clone()),
        }
    }
}
