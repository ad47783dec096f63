//! Vocabulary definitions for the generated JSON-LD
//!
//! Defines the namespace prefixes, the node type and the fixed `@context`
//! every document carries.

use serde::Serialize;

/// Prefix of the target vocabulary
pub const SCHEMA_PREFIX: &str = "schema";

/// Namespace of the target vocabulary
pub const SCHEMA_NS: &str = "https://schema.org/";

/// Prefix bound to the caller-supplied base URI
pub const BASE_PREFIX: &str = "ex";

/// Default base URI used when the caller does not supply one
pub const DEFAULT_BASE_URI: &str = "http://example.org/data/";

pub const RDF_PREFIX: &str = "rdf";
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

pub const XSD_PREFIX: &str = "xsd";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

/// `@type` of every record node
pub const PRODUCT_TYPE: &str = "schema:Product";

/// Property holding the node's 1-based position in the graph
pub const POSITION_PROPERTY: &str = "schema:position";

/// Prefix of node identifiers, followed by the position
pub const RECORD_ID_PREFIX: &str = "record_";

/// The `@context` of a generated document
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Context {
    pub schema: String,
    pub ex: String,
    pub rdf: String,
    pub xsd: String,
}

impl Context {
    /// Build the fixed context, binding `ex` to `base_uri` verbatim
    pub fn new(base_uri: &str) -> Self {
        Self {
            schema: SCHEMA_NS.to_string(),
            ex: base_uri.to_string(),
            rdf: RDF_NS.to_string(),
            xsd: XSD_NS.to_string(),
        }
    }
}

/// Compact IRI in the base-URI namespace, e.g. `ex:warna_utama`
pub fn base_term(local: &str) -> String {
    format!("{}:{}", BASE_PREFIX, local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_keys() {
        let ctx = serde_json::to_value(Context::new("http://shop.example/")).unwrap();
        let obj = ctx.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["schema", "ex", "rdf", "xsd"]);
        assert_eq!(obj.get("ex"), Some(&serde_json::json!("http://shop.example/")));
    }

    #[test]
    fn test_base_uri_used_verbatim() {
        let ctx = Context::new("not a uri");
        assert_eq!(ctx.ex, "not a uri");
    }

    #[test]
    fn test_base_term() {
        assert_eq!(base_term("record_3"), "ex:record_3");
    }
}
