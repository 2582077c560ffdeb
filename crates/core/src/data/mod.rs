//! Data types for transform evaluation
//!
//! This module contains the typed-buffer model that transform chains
//! operate on:
//! - ElementType: fixed registry of element encodings with pure byte widths
//! - Lane: scalar lane kinds underlying each element type
//! - Buffer: contiguous little-endian byte store with an element count

pub mod buffer;
pub mod element_type;

pub use buffer::Buffer;
pub use element_type::{ElementType, Lane};
