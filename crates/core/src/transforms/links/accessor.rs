//! Accessor link: project one channel out of each element
//!
//! Narrows a vector-typed buffer to a single named channel. The output has
//! the same element count as the input and the scalar lane type of the
//! source (`vec3.y` yields `float32`, `rgba8.a` yields `uint8`). Field
//! names follow the conventional color/position aliases: `r`/`x` address
//! lane 0, `g`/`y` lane 1, `b`/`z` lane 2, `a`/`w` lane 3.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::Buffer;
use crate::error::{Error, Result};
use crate::transforms::document::LinkDocument;
use crate::transforms::link::TransformLink;
use crate::transforms::registry::LinkFactory;

/// Wire payload of an Accessor link
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccessorPayload {
    field: String,
}

/// A link that extracts one named channel from each element
#[derive(Debug)]
pub struct AccessorLink {
    field: String,
    index: usize,
}

fn field_index(field: &str) -> Option<usize> {
    match field {
        "r" | "x" => Some(0),
        "g" | "y" => Some(1),
        "b" | "z" => Some(2),
        "a" | "w" => Some(3),
        _ => None,
    }
}

impl AccessorLink {
    /// Create an accessor for a named field
    ///
    /// Accepts `r`, `g`, `b`, `a` and `x`, `y`, `z`, `w`.
    pub fn new(field: impl Into<String>) -> Result<Self> {
        let field = field.into();
        let index = field_index(&field).ok_or_else(|| {
            Error::InvalidArgument(format!("Unknown accessor field: {}", field))
        })?;
        Ok(Self { field, index })
    }

    /// The field name this accessor projects
    pub fn field(&self) -> &str {
        &self.field
    }
}

impl TransformLink for AccessorLink {
    fn link_type(&self) -> &str {
        "Accessor"
    }

    fn apply(&self, input: Option<Buffer>) -> Result<Buffer> {
        let input = input.ok_or_else(|| {
            Error::InvalidArgument("Accessor requires an upstream buffer".to_string())
        })?;

        let source_type = input.element_type();
        let lane_count = source_type.lane_count();
        if self.index >= lane_count {
            return Err(Error::OutOfRange(format!(
                "Field '{}' addresses lane {}, but {} has {} lane(s)",
                self.field, self.index, source_type, lane_count
            )));
        }

        let lane = source_type.lane();
        let lane_width = lane.byte_width();
        let start = self.index * lane_width;

        let mut bytes = Vec::with_capacity(input.count() * lane_width);
        for element in input.as_bytes().chunks_exact(source_type.byte_width()) {
            bytes.extend_from_slice(&element[start..start + lane_width]);
        }

        Buffer::from_bytes(bytes, lane.element_type())
    }

    fn serialize(&self) -> Result<LinkDocument> {
        let payload = AccessorPayload {
            field: self.field.clone(),
        };
        Ok(LinkDocument {
            link_type: self.link_type().to_string(),
            link_data: serde_json::to_value(payload)
                .map_err(|e| Error::Format(format!("Failed to encode Accessor payload: {}", e)))?,
        })
    }
}

/// Factory reconstructing Accessor links from wire payloads
pub struct AccessorLinkFactory;

impl LinkFactory for AccessorLinkFactory {
    fn link_type(&self) -> &str {
        "Accessor"
    }

    fn create(&self, data: Value) -> Result<Box<dyn TransformLink>> {
        let payload: AccessorPayload = serde_json::from_value(data)
            .map_err(|e| Error::Deserialization(format!("Invalid Accessor payload: {}", e)))?;
        Ok(Box::new(AccessorLink::new(payload.field)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ElementType;

    fn f32_buffer(values: &[f32], element_type: ElementType) -> Buffer {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        Buffer::from_bytes(bytes, element_type).unwrap()
    }

    fn f32_values(buffer: &Buffer) -> Vec<f32> {
        buffer
            .as_bytes()
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect()
    }

    #[test]
    fn test_project_vec3_channel() {
        let input = f32_buffer(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], ElementType::Vec3);
        assert_eq!(input.count(), 2);

        let link = AccessorLink::new("y").unwrap();
        let output = link.apply(Some(input)).unwrap();

        assert_eq!(output.element_type(), ElementType::Float32);
        assert_eq!(output.count(), 2);
        assert_eq!(f32_values(&output), vec![2.0, 5.0]);
    }

    #[test]
    fn test_project_rgba8_channel() {
        let input =
            Buffer::from_bytes(vec![10, 20, 30, 40, 50, 60, 70, 80], ElementType::Rgba8).unwrap();

        let link = AccessorLink::new("a").unwrap();
        let output = link.apply(Some(input)).unwrap();

        assert_eq!(output.element_type(), ElementType::Uint8);
        assert_eq!(output.to_bytes(), vec![40, 80]);
    }

    #[test]
    fn test_project_uvec4_channel() {
        let mut bytes = Vec::new();
        for value in [7u32, 8, 9, 10, 11, 12, 13, 14] {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        let input = Buffer::from_bytes(bytes, ElementType::Uvec4).unwrap();

        let link = AccessorLink::new("x").unwrap();
        let output = link.apply(Some(input)).unwrap();

        assert_eq!(output.element_type(), ElementType::Uint32);
        assert_eq!(output.count(), 2);
        assert_eq!(&output.to_bytes()[0..4], &7u32.to_le_bytes());
        assert_eq!(&output.to_bytes()[4..8], &11u32.to_le_bytes());
    }

    #[test]
    fn test_color_and_position_aliases_match() {
        let by_color = AccessorLink::new("g").unwrap();
        let by_position = AccessorLink::new("y").unwrap();

        let input = f32_buffer(&[1.0, 2.0, 3.0, 4.0], ElementType::Vec2);
        let a = by_color.apply(Some(input.clone())).unwrap();
        let b = by_position.apply(Some(input)).unwrap();
        assert_eq!(a.to_bytes(), b.to_bytes());
    }

    #[test]
    fn test_scalar_source_accepts_lane_zero() {
        let input = f32_buffer(&[1.5, 2.5], ElementType::Float32);
        let link = AccessorLink::new("x").unwrap();
        let output = link.apply(Some(input.clone())).unwrap();
        assert_eq!(output.to_bytes(), input.to_bytes());
    }

    #[test]
    fn test_requires_upstream_buffer() {
        let link = AccessorLink::new("x").unwrap();
        let result = link.apply(None);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_field_beyond_lane_count() {
        let input = f32_buffer(&[1.0, 2.0], ElementType::Vec2);
        let link = AccessorLink::new("z").unwrap();
        let result = link.apply(Some(input));
        assert!(matches!(result, Err(Error::OutOfRange(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = AccessorLink::new("q");
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_serialize_document() {
        let link = AccessorLink::new("b").unwrap();
        let document = link.serialize().unwrap();

        assert_eq!(
            serde_json::to_value(document).unwrap(),
            serde_json::json!({
                "link_type": "Accessor",
                "link_data": { "field": "b" }
            })
        );
    }

    #[test]
    fn test_factory_round_trip() {
        let link = AccessorLink::new("w").unwrap();
        let document = link.serialize().unwrap();

        let rebuilt = AccessorLinkFactory.create(document.link_data).unwrap();
        assert_eq!(rebuilt.link_type(), "Accessor");

        let input = f32_buffer(&[1.0, 2.0, 3.0, 4.0], ElementType::Vec4);
        let output = rebuilt.apply(Some(input)).unwrap();
        assert_eq!(f32_values(&output), vec![4.0]);
    }
}
