//! JSON-LD document model and serialization

use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

use crate::error::ConvertError;
use crate::value::TypedValue;
use crate::vocab::{base_term, Context, POSITION_PROPERTY, PRODUCT_TYPE, RECORD_ID_PREFIX};

/// One graph node, built from one retained row
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Local identifier, `record_<position>`
    pub id: String,
    pub node_type: &'static str,
    /// 1-based index among retained rows
    pub position: usize,
    /// Property URI -> value, in first-seen column order
    pub properties: IndexMap<String, TypedValue>,
}

impl Node {
    pub fn new(position: usize) -> Self {
        Self {
            id: format!("{}{}", RECORD_ID_PREFIX, position),
            node_type: PRODUCT_TYPE,
            position,
            properties: IndexMap::new(),
        }
    }

    /// Set a property; an existing value is replaced in place
    pub fn set(&mut self, property: String, value: TypedValue) -> Option<TypedValue> {
        self.properties.insert(property, value)
    }

    /// The `@id` as written to the document
    pub fn iri(&self) -> String {
        base_term(&self.id)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3 + self.properties.len()))?;
        map.serialize_entry("@id", &self.iri())?;
        map.serialize_entry("@type", self.node_type)?;
        map.serialize_entry(POSITION_PROPERTY, &self.position)?;
        for (property, value) in &self.properties {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

/// A complete JSON-LD document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    #[serde(rename = "@context")]
    pub context: Context,
    #[serde(rename = "@graph")]
    pub graph: Vec<Node>,
}

impl Document {
    /// An empty document whose `ex` prefix is bound to `base_uri`
    pub fn new(base_uri: &str) -> Self {
        Self {
            context: Context::new(base_uri),
            graph: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }
}

/// Build the document as a JSON value
pub fn to_jsonld(document: &Document) -> Result<Value, ConvertError> {
    Ok(serde_json::to_value(document)?)
}

/// Serialize a document to a JSON string
pub fn to_json_string(document: &Document, pretty: bool) -> Result<String, ConvertError> {
    if pretty {
        Ok(serde_json::to_string_pretty(document)?)
    } else {
        Ok(serde_json::to_string(document)?)
    }
}
