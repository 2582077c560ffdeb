//! Immediate link: a fixed payload buffer
//!
//! The simplest chain head. The buffer is fixed at construction time and
//! travels inside the wire document as base64 text, so a serialized chain
//! carries its data with it.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::{Buffer, ElementType};
use crate::error::{Error, Result};
use crate::transforms::document::LinkDocument;
use crate::transforms::link::TransformLink;
use crate::transforms::registry::LinkFactory;

/// Wire payload of an Immediate link
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ImmediatePayload {
    buffer_count: usize,
    buffer_type: ElementType,
    data_base64: String,
}

/// A link that returns a predefined buffer, ignoring its input
#[derive(Debug)]
pub struct ImmediateLink {
    buffer: Buffer,
}

impl ImmediateLink {
    /// Create an immediate link wrapping a payload buffer
    pub fn new(buffer: Buffer) -> Self {
        Self { buffer }
    }

    /// Borrow the wrapped payload buffer
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }
}

impl TransformLink for ImmediateLink {
    fn link_type(&self) -> &str {
        "Immediate"
    }

    fn apply(&self, _input: Option<Buffer>) -> Result<Buffer> {
        Ok(self.buffer.clone())
    }

    fn serialize(&self) -> Result<LinkDocument> {
        let payload = ImmediatePayload {
            buffer_count: self.buffer.count(),
            buffer_type: self.buffer.element_type(),
            data_base64: BASE64.encode(self.buffer.as_bytes()),
        };
        Ok(LinkDocument {
            link_type: self.link_type().to_string(),
            link_data: serde_json::to_value(payload)
                .map_err(|e| Error::Format(format!("Failed to encode Immediate payload: {}", e)))?,
        })
    }
}

/// Factory reconstructing Immediate links from wire payloads
pub struct ImmediateLinkFactory;

impl LinkFactory for ImmediateLinkFactory {
    fn link_type(&self) -> &str {
        "Immediate"
    }

    fn create(&self, data: Value) -> Result<Box<dyn TransformLink>> {
        let payload: ImmediatePayload = serde_json::from_value(data)
            .map_err(|e| Error::Deserialization(format!("Invalid Immediate payload: {}", e)))?;

        let bytes = BASE64
            .decode(payload.data_base64.as_bytes())
            .map_err(|e| Error::Deserialization(format!("Invalid Immediate base64: {}", e)))?;

        let expected = payload
            .buffer_count
            .checked_mul(payload.buffer_type.byte_width())
            .ok_or_else(|| {
                Error::Deserialization(format!(
                    "Immediate payload size overflows: {} x {}",
                    payload.buffer_count, payload.buffer_type
                ))
            })?;
        if bytes.len() != expected {
            return Err(Error::Deserialization(format!(
                "Immediate payload holds {} bytes, expected {} for {} x {}",
                bytes.len(),
                expected,
                payload.buffer_count,
                payload.buffer_type
            )));
        }

        let buffer = Buffer::from_bytes(bytes, payload.buffer_type)?;
        Ok(Box::new(ImmediateLink::new(buffer)))
    }
}
