//! Element type registry for typed buffers
//!
//! Every buffer element is one of a fixed set of scalar, vector, or matrix
//! encodings. The byte width of an element is a pure function of its type:
//! each type decomposes into a scalar lane kind and a lane count, and the
//! width is `lane width * lane count`. Wire documents refer to element types
//! by their lowercase names (`"float32"`, `"vec3"`, ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Scalar lane kind underlying an element type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    /// 32-bit IEEE 754 float, little-endian
    F32,
    /// 32-bit unsigned integer, little-endian
    U32,
    /// 8-bit unsigned integer
    U8,
    /// 32-bit signed integer, little-endian
    I32,
    /// 8-bit signed integer
    I8,
}

impl Lane {
    /// Byte width of one lane
    pub fn byte_width(&self) -> usize {
        match self {
            Lane::F32 | Lane::U32 | Lane::I32 => 4,
            Lane::U8 | Lane::I8 => 1,
        }
    }

    /// The single-lane element type carrying this lane kind
    pub fn element_type(&self) -> ElementType {
        match self {
            Lane::F32 => ElementType::Float32,
            Lane::U32 => ElementType::Uint32,
            Lane::U8 => ElementType::Uint8,
            Lane::I32 => ElementType::Int32,
            Lane::I8 => ElementType::Int8,
        }
    }
}

/// Type of elements in a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// Scalar f32 (4 bytes)
    Float32,

    /// Scalar u32 (4 bytes)
    Uint32,

    /// Scalar u8 (1 byte)
    Uint8,

    /// Scalar i32 (4 bytes)
    Int32,

    /// Scalar i8 (1 byte)
    Int8,

    /// 2 f32 lanes (8 bytes)
    Vec2,

    /// 3 f32 lanes (12 bytes)
    Vec3,

    /// 4 f32 lanes (16 bytes)
    Vec4,

    /// 4 u32 lanes (16 bytes)
    Uvec4,

    /// 4x4 f32 matrix, 16 lanes in column-major order (64 bytes)
    Mat4,

    /// Packed RGBA color, 4 u8 lanes (4 bytes)
    Rgba8,
}

impl ElementType {
    /// Scalar lane kind of this element type
    pub fn lane(&self) -> Lane {
        match self {
            ElementType::Float32
            | ElementType::Vec2
            | ElementType::Vec3
            | ElementType::Vec4
            | ElementType::Mat4 => Lane::F32,
            ElementType::Uint32 | ElementType::Uvec4 => Lane::U32,
            ElementType::Uint8 | ElementType::Rgba8 => Lane::U8,
            ElementType::Int32 => Lane::I32,
            ElementType::Int8 => Lane::I8,
        }
    }

    /// Number of scalar lanes per element
    pub fn lane_count(&self) -> usize {
        match self {
            ElementType::Float32
            | ElementType::Uint32
            | ElementType::Uint8
            | ElementType::Int32
            | ElementType::Int8 => 1,
            ElementType::Vec2 => 2,
            ElementType::Vec3 => 3,
            ElementType::Vec4 | ElementType::Uvec4 | ElementType::Rgba8 => 4,
            ElementType::Mat4 => 16,
        }
    }

    /// Byte width of one element
    pub fn byte_width(&self) -> usize {
        self.lane().byte_width() * self.lane_count()
    }

    /// Lowercase wire name of this element type
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Float32 => "float32",
            ElementType::Uint32 => "uint32",
            ElementType::Uint8 => "uint8",
            ElementType::Int32 => "int32",
            ElementType::Int8 => "int8",
            ElementType::Vec2 => "vec2",
            ElementType::Vec3 => "vec3",
            ElementType::Vec4 => "vec4",
            ElementType::Uvec4 => "uvec4",
            ElementType::Mat4 => "mat4",
            ElementType::Rgba8 => "rgba8",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "float32" => Ok(ElementType::Float32),
            "uint32" => Ok(ElementType::Uint32),
            "uint8" => Ok(ElementType::Uint8),
            "int32" => Ok(ElementType::Int32),
            "int8" => Ok(ElementType::Int8),
            "vec2" => Ok(ElementType::Vec2),
            "vec3" => Ok(ElementType::Vec3),
            "vec4" => Ok(ElementType::Vec4),
            "uvec4" => Ok(ElementType::Uvec4),
            "mat4" => Ok(ElementType::Mat4),
            "rgba8" => Ok(ElementType::Rgba8),
            _ => Err(Error::Format(format!("Unknown element type: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_width_table() {
        assert_eq!(ElementType::Float32.byte_width(), 4);
        assert_eq!(ElementType::Uint32.byte_width(), 4);
        assert_eq!(ElementType::Uint8.byte_width(), 1);
        assert_eq!(ElementType::Int32.byte_width(), 4);
        assert_eq!(ElementType::Int8.byte_width(), 1);
        assert_eq!(ElementType::Vec2.byte_width(), 8);
        assert_eq!(ElementType::Vec3.byte_width(), 12);
        assert_eq!(ElementType::Vec4.byte_width(), 16);
        assert_eq!(ElementType::Uvec4.byte_width(), 16);
        assert_eq!(ElementType::Mat4.byte_width(), 64);
        assert_eq!(ElementType::Rgba8.byte_width(), 4);
    }

    #[test]
    fn test_lane_decomposition() {
        assert_eq!(ElementType::Vec3.lane(), Lane::F32);
        assert_eq!(ElementType::Vec3.lane_count(), 3);
        assert_eq!(ElementType::Rgba8.lane(), Lane::U8);
        assert_eq!(ElementType::Rgba8.lane_count(), 4);
        assert_eq!(ElementType::Uvec4.lane(), Lane::U32);
        assert_eq!(ElementType::Mat4.lane_count(), 16);

        // Single-lane types project onto themselves
        assert_eq!(Lane::F32.element_type(), ElementType::Float32);
        assert_eq!(ElementType::Int8.lane().element_type(), ElementType::Int8);
    }

    #[test]
    fn test_wire_name_round_trip() {
        let types = [
            ElementType::Float32,
            ElementType::Uint32,
            ElementType::Uint8,
            ElementType::Int32,
            ElementType::Int8,
            ElementType::Vec2,
            ElementType::Vec3,
            ElementType::Vec4,
            ElementType::Uvec4,
            ElementType::Mat4,
            ElementType::Rgba8,
        ];
        for ty in types {
            let parsed: ElementType = ty.as_str().parse().unwrap();
            assert_eq!(parsed, ty);
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        let result = "float64".parse::<ElementType>();
        assert!(result.is_err());

        // Wire names are lowercase; parsing is case-sensitive
        assert!("Float32".parse::<ElementType>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_value(ElementType::Vec3).unwrap();
        assert_eq!(json, serde_json::json!("vec3"));

        let ty: ElementType = serde_json::from_value(serde_json::json!("rgba8")).unwrap();
        assert_eq!(ty, ElementType::Rgba8);
    }
}
