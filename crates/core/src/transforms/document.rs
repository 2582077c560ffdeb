//! Chain and link wire documents
//!
//! This module holds the JSON carrier structs for serialized transform
//! chains. A chain document declares the expected output shape (element
//! count and type, both optional) and lists one document per link; link
//! payloads are link-specific JSON objects with binary data embedded as
//! base64 text.

use serde::{Deserialize, Serialize};

use crate::data::ElementType;
use crate::error::{Error, Result};

/// Declared-count value meaning "not known yet"
pub const COUNT_UNSPECIFIED: i64 = -1;

/// Serialized form of a single transform link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkDocument {
    /// Registry tag of the link implementation
    pub link_type: String,

    /// Link-specific payload
    #[serde(default)]
    pub link_data: serde_json::Value,
}

/// Serialized form of a transform chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainDocument {
    /// Declared element count of the chain output, -1 when unknown
    #[serde(default = "default_buffer_count")]
    pub buffer_count: i64,

    /// Declared element type of the chain output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_type: Option<ElementType>,

    /// One document per link, in evaluation order
    pub links: Vec<LinkDocument>,
}

fn default_buffer_count() -> i64 {
    COUNT_UNSPECIFIED
}

impl ChainDocument {
    /// Parse a chain document from JSON text
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::Deserialization(format!("Failed to parse chain document: {}", e)))
    }

    /// Render the document as compact JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| Error::Format(format!("Failed to render chain document: {}", e)))
    }

    /// Render the document as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Format(format!("Failed to render chain document: {}", e)))
    }
}
