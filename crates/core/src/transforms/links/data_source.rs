//! DataSource link: fetch a buffer from a URI
//!
//! Loads raw bytes from a local file or an HTTP(S) endpoint and exposes them
//! as a typed buffer. Serialized documents carry only the URI and element
//! type; the payload is fetched again on every evaluation, which keeps
//! documents small when the data lives elsewhere.
//!
//! Supported URI forms:
//! - `file:///path/to/data` and `file://relative/path`
//! - bare filesystem paths (`./data.bin`, `/abs/data.bin`)
//! - `http://...` / `https://...`

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::data::{Buffer, ElementType};
use crate::error::{Error, Result};
use crate::transforms::document::LinkDocument;
use crate::transforms::link::TransformLink;
use crate::transforms::registry::LinkFactory;

/// Wire payload of a DataSource link
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DataSourcePayload {
    uri: String,
    buffer_type: ElementType,
}

/// A link that loads its buffer from a URI, ignoring its input
#[derive(Debug)]
pub struct DataSourceLink {
    uri: String,
    element_type: ElementType,
}

/// Convert a URI to a local path
///
/// Handles:
/// - `file:///path/to/file` → `/path/to/file`
/// - `file://path/to/file` → `path/to/file` (unusual but valid)
/// - bare paths, relative or absolute
fn uri_to_path(uri: &str) -> PathBuf {
    match uri.strip_prefix("file://") {
        Some(stripped) => PathBuf::from(stripped),
        None => PathBuf::from(uri),
    }
}

impl DataSourceLink {
    /// Create a data-source link for a URI and target element type
    pub fn new(uri: impl Into<String>, element_type: ElementType) -> Self {
        Self {
            uri: uri.into(),
            element_type,
        }
    }

    /// The source URI
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The element type the fetched bytes are interpreted as
    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    fn fetch(&self) -> Result<Vec<u8>> {
        if let Ok(parsed) = Url::parse(&self.uri) {
            match parsed.scheme() {
                "file" => Ok(std::fs::read(uri_to_path(&self.uri))?),
                "http" | "https" => {
                    tracing::debug!("Fetching data source: {}", self.uri);
                    let response = reqwest::blocking::get(&self.uri)?.error_for_status()?;
                    Ok(response.bytes()?.to_vec())
                }
                scheme => Err(Error::InvalidArgument(format!(
                    "Unsupported URI scheme: {} ({})",
                    scheme, self.uri
                ))),
            }
        } else {
            // No scheme, treat as a filesystem path
            Ok(std::fs::read(uri_to_path(&self.uri))?)
        }
    }
}

impl TransformLink for DataSourceLink {
    fn link_type(&self) -> &str {
        "DataSource"
    }

    fn apply(&self, _input: Option<Buffer>) -> Result<Buffer> {
        let bytes = self.fetch()?;
        tracing::debug!("DataSource loaded {} bytes from {}", bytes.len(), self.uri);

        let width = self.element_type.byte_width();
        if bytes.len() % width != 0 {
            return Err(Error::Format(format!(
                "Data from {} is {} bytes, not a multiple of element width {} ({})",
                self.uri,
                bytes.len(),
                width,
                self.element_type
            )));
        }
        Buffer::from_bytes(bytes, self.element_type)
    }

    fn serialize(&self) -> Result<LinkDocument> {
        let payload = DataSourcePayload {
            uri: self.uri.clone(),
            buffer_type: self.element_type,
        };
        Ok(LinkDocument {
            link_type: self.link_type().to_string(),
            link_data: serde_json::to_value(payload)
                .map_err(|e| Error::Format(format!("Failed to encode DataSource payload: {}", e)))?,
        })
    }
}

/// Factory reconstructing DataSource links from wire payloads
pub struct DataSourceLinkFactory;

impl LinkFactory for DataSourceLinkFactory {
    fn link_type(&self) -> &str {
        "DataSource"
    }

    fn create(&self, data: Value) -> Result<Box<dyn TransformLink>> {
        let payload: DataSourcePayload = serde_json::from_value(data)
            .map_err(|e| Error::Deserialization(format!("Invalid DataSource payload: {}", e)))?;
        Ok(Box::new(DataSourceLink::new(
            payload.uri,
            payload.buffer_type,
        )))
    }
}
