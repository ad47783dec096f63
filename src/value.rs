//! Cell values and their JSON-LD encoding
//!
//! `CellValue` is produced once at the loading boundary; the transformer only
//! inspects its variant and never re-infers a type from text.

use serde::Serialize;
use thiserror::Error;

/// A raw spreadsheet cell after type inference
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
    Text(String),
    /// Blank or missing cell
    Empty,
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Decimal(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Boolean(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

/// XSD datatype of a literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Datatype {
    #[serde(rename = "xsd:integer")]
    Integer,
    #[serde(rename = "xsd:decimal")]
    Decimal,
    #[serde(rename = "xsd:boolean")]
    Boolean,
    #[serde(rename = "xsd:string")]
    String,
}

/// Lexical payload of a literal's `@value`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

/// An encoded property value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    /// `{"@value": ..., "@type": ...}`
    Literal {
        #[serde(rename = "@value")]
        value: LiteralValue,
        #[serde(rename = "@type")]
        datatype: Datatype,
    },
    /// `{"@id": ...}`
    Reference {
        #[serde(rename = "@id")]
        id: String,
    },
}

impl TypedValue {
    pub fn literal(value: LiteralValue, datatype: Datatype) -> Self {
        TypedValue::Literal { value, datatype }
    }

    pub fn reference(id: impl Into<String>) -> Self {
        TypedValue::Reference { id: id.into() }
    }
}

/// Why a cell could not be encoded
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// NaN or infinity has no JSON representation
    #[error("number is not finite")]
    NonFinite,
}

/// Check if a text value should become a node reference
pub fn is_link(text: &str) -> bool {
    text.starts_with("http://") || text.starts_with("https://")
}

/// Encode a cell
///
/// Returns `Ok(None)` for empty cells, which contribute no property.
pub fn encode_value(cell: &CellValue) -> Result<Option<TypedValue>, EncodeError> {
    let encoded = match cell {
        CellValue::Empty => return Ok(None),
        CellValue::Integer(n) => TypedValue::literal(LiteralValue::Integer(*n), Datatype::Integer),
        CellValue::Decimal(x) => {
            if !x.is_finite() {
                return Err(EncodeError::NonFinite);
            }
            TypedValue::literal(LiteralValue::Decimal(*x), Datatype::Decimal)
        }
        CellValue::Boolean(b) => {
            TypedValue::literal(LiteralValue::Text(b.to_string()), Datatype::Boolean)
        }
        CellValue::Text(s) if is_link(s) => TypedValue::reference(s.clone()),
        CellValue::Text(s) => TypedValue::literal(LiteralValue::Text(s.clone()), Datatype::String),
    };
    Ok(Some(encoded))
}
