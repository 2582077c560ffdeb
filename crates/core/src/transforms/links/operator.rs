//! Operator link: elementwise scalar arithmetic
//!
//! Combines every f32 lane of the upstream buffer with a constant operand.
//! Works on any float-laned element type (float32, vec2, vec3, vec4, mat4)
//! and preserves the element type of its input. Arithmetic follows IEEE 754;
//! dividing by zero produces infinities or NaN rather than an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::{Buffer, Lane};
use crate::error::{Error, Result};
use crate::transforms::document::LinkDocument;
use crate::transforms::link::TransformLink;
use crate::transforms::registry::LinkFactory;

/// Arithmetic operation applied between a lane and the operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorKind {
    /// `lane + operand`
    Add,
    /// `lane - operand`
    Sub,
    /// `lane * operand`
    Mul,
    /// `lane / operand`
    Div,
}

impl OperatorKind {
    fn apply(&self, lane: f32, operand: f32) -> f32 {
        match self {
            OperatorKind::Add => lane + operand,
            OperatorKind::Sub => lane - operand,
            OperatorKind::Mul => lane * operand,
            OperatorKind::Div => lane / operand,
        }
    }
}

/// Wire payload of an Operator link
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OperatorPayload {
    operator: OperatorKind,
    operand: f64,
}

/// A link that applies scalar arithmetic to every lane of its input
#[derive(Debug)]
pub struct OperatorLink {
    kind: OperatorKind,
    operand: f64,
}

impl OperatorLink {
    /// Create an operator link
    pub fn new(kind: OperatorKind, operand: f64) -> Self {
        Self { kind, operand }
    }

    /// The arithmetic operation
    pub fn kind(&self) -> OperatorKind {
        self.kind
    }

    /// The constant operand
    pub fn operand(&self) -> f64 {
        self.operand
    }
}

impl TransformLink for OperatorLink {
    fn link_type(&self) -> &str {
        "Operator"
    }

    fn apply(&self, input: Option<Buffer>) -> Result<Buffer> {
        let input = input.ok_or_else(|| {
            Error::InvalidArgument("Operator requires an upstream buffer".to_string())
        })?;

        let element_type = input.element_type();
        if element_type.lane() != Lane::F32 {
            return Err(Error::InvalidArgument(format!(
                "Operator requires float lanes, got {}",
                element_type
            )));
        }

        let operand = self.operand as f32;
        let mut bytes = Vec::with_capacity(input.byte_len());
        for chunk in input.as_bytes().chunks_exact(4) {
            let lane = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            bytes.extend_from_slice(&self.kind.apply(lane, operand).to_le_bytes());
        }

        Buffer::from_bytes(bytes, element_type)
    }

    fn serialize(&self) -> Result<LinkDocument> {
        let payload = OperatorPayload {
            operator: self.kind,
            operand: self.operand,
        };
        Ok(LinkDocument {
            link_type: self.link_type().to_string(),
            link_data: serde_json::to_value(payload)
                .map_err(|e| Error::Format(format!("Failed to encode Operator payload: {}", e)))?,
        })
    }
}

/// Factory reconstructing Operator links from wire payloads
pub struct OperatorLinkFactory;

impl LinkFactory for OperatorLinkFactory {
    fn link_type(&self) -> &str {
        "Operator"
    }

    fn create(&self, data: Value) -> Result<Box<dyn TransformLink>> {
        let payload: OperatorPayload = serde_json::from_value(data)
            .map_err(|e| Error::Deserialization(format!("Invalid Operator payload: {}", e)))?;
        Ok(Box::new(OperatorLink::new(payload.operator, payload.operand)))
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
    fn test_add_on_scalars() {
        let input = f32_buffer(&[1.0, 2.5], ElementType::Float32);
        let link = OperatorLink::new(OperatorKind::Add, 1.5);

        let output = link.apply(Some(input)).unwrap();
        assert_eq!(output.element_type(), ElementType::Float32);
        assert_eq!(f32_values(&output), vec![2.5, 4.0]);
    }

    #[test]
    fn test_mul_preserves_vector_type() {
        let input = f32_buffer(&[1.0, 2.0, 3.0, 4.0], ElementType::Vec2);
        let link = OperatorLink::new(OperatorKind::Mul, 2.0);

        let output = link.apply(Some(input)).unwrap();
        assert_eq!(output.element_type(), ElementType::Vec2);
        assert_eq!(output.count(), 2);
        assert_eq!(f32_values(&output), vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_sub_and_div() {
        let input = f32_buffer(&[10.0, 20.0], ElementType::Float32);

        let sub = OperatorLink::new(OperatorKind::Sub, 5.0);
        assert_eq!(f32_values(&sub.apply(Some(input.clone())).unwrap()), vec![5.0, 15.0]);

        let div = OperatorLink::new(OperatorKind::Div, 4.0);
        assert_eq!(f32_values(&div.apply(Some(input)).unwrap()), vec![2.5, 5.0]);
    }

    #[test]
    fn test_div_by_zero_follows_ieee() {
        let input = f32_buffer(&[1.0, -1.0, 0.0], ElementType::Float32);
        let link = OperatorLink::new(OperatorKind::Div, 0.0);

        let values = f32_values(&link.apply(Some(input)).unwrap());
        assert_eq!(values[0], f32::INFINITY);
        assert_eq!(values[1], f32::NEG_INFINITY);
        assert!(values[2].is_nan());
    }

    #[test]
    fn test_requires_upstream_buffer() {
        let link = OperatorLink::new(OperatorKind::Add, 1.0);
        let result = link.apply(None);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_rejects_integer_lanes() {
        let link = OperatorLink::new(OperatorKind::Add, 1.0);

        let input = Buffer::from_bytes(vec![1, 2, 3, 4], ElementType::Uint8).unwrap();
        assert!(matches!(
            link.apply(Some(input)),
            Err(Error::InvalidArgument(_))
        ));

        let input = Buffer::new(1, ElementType::Uvec4);
        assert!(matches!(
            link.apply(Some(input)),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_serialize_document() {
        let link = OperatorLink::new(OperatorKind::Mul, 2.0);
        let document = link.serialize().unwrap();

        assert_eq!(
            serde_json::to_value(document).unwrap(),
            serde_json::json!({
                "link_type": "Operator",
                "link_data": { "operator": "mul", "operand": 2.0 }
            })
        );
    }

    #[test]
    fn test_factory_round_trip() {
        let link = OperatorLink::new(OperatorKind::Sub, 0.5);
        let document = link.serialize().unwrap();

        let rebuilt = OperatorLinkFactory.create(document.link_data).unwrap();
        assert_eq!(rebuilt.link_type(), "Operator");

        let input = f32_buffer(&[1.0], ElementType::Float32);
        assert_eq!(f32_values(&rebuilt.apply(Some(input)).unwrap()), vec![0.5]);
    }
}
