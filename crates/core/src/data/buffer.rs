//! Typed binary buffers
//!
//! A [`Buffer`] is `count` elements of a single [`ElementType`] stored as one
//! contiguous little-endian byte vector. The store length always equals
//! `count * element_type.byte_width()`; every operation that touches the
//! bytes preserves that invariant. Offsets and counts are expressed in
//! elements, not bytes.

use crate::data::ElementType;
use crate::error::{Error, Result};

/// Typed array of a single dimension
#[derive(Clone, PartialEq)]
pub struct Buffer {
    count: usize,
    element_type: ElementType,
    bytes: Vec<u8>,
}

impl Buffer {
    /// Create a zero-filled buffer of `count` elements
    pub fn new(count: usize, element_type: ElementType) -> Self {
        Buffer {
            count,
            element_type,
            bytes: vec![0; count * element_type.byte_width()],
        }
    }

    /// Create a buffer that takes ownership of an existing byte store
    ///
    /// The store length must be a multiple of the element width; the element
    /// count is derived from it.
    pub fn from_bytes(bytes: Vec<u8>, element_type: ElementType) -> Result<Self> {
        let width = element_type.byte_width();
        if bytes.len() % width != 0 {
            return Err(Error::Format(format!(
                "Byte length {} is not a multiple of element width {} ({})",
                bytes.len(),
                width,
                element_type
            )));
        }
        Ok(Buffer {
            count: bytes.len() / width,
            element_type,
            bytes,
        })
    }

    /// Number of elements
    pub fn count(&self) -> usize {
        self.count
    }

    /// Element type of the buffer
    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Length of the byte store
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the buffer holds no elements
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Borrow the full byte store
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Copy of the full byte store
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Overwrite `count` elements starting at element `offset`
    ///
    /// `bytes` must hold exactly `count` elements worth of data.
    pub fn set_data(&mut self, bytes: &[u8], offset: usize, count: usize) -> Result<()> {
        let end = self.element_range_end(offset, count)?;
        let width = self.element_type.byte_width();
        if bytes.len() != count * width {
            return Err(Error::InvalidArgument(format!(
                "Expected {} bytes for {} elements of {}, got {}",
                count * width,
                count,
                self.element_type,
                bytes.len()
            )));
        }
        self.bytes[offset * width..end * width].copy_from_slice(bytes);
        Ok(())
    }

    /// Copy `count` elements starting at element `offset` into a new buffer
    pub fn get_data(&self, offset: usize, count: usize) -> Result<Buffer> {
        let end = self.element_range_end(offset, count)?;
        let width = self.element_type.byte_width();
        Ok(Buffer {
            count,
            element_type: self.element_type,
            bytes: self.bytes[offset * width..end * width].to_vec(),
        })
    }

    /// Validate an element range and return its exclusive end
    fn element_range_end(&self, offset: usize, count: usize) -> Result<usize> {
        let end = offset.checked_add(count).ok_or_else(|| {
            Error::OutOfRange(format!("Element range {}+{} overflows", offset, count))
        })?;
        if end > self.count {
            return Err(Error::OutOfRange(format!(
                "Element range {}..{} exceeds buffer of {} elements",
                offset, end, self.count
            )));
        }
        Ok(end)
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Buffer({} x {})", self.count, self.element_type)
    }
}
