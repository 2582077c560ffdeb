//! Transform link trait
//!
//! This module defines the trait for links that participate in transform
//! chains. A link receives the upstream buffer (or nothing, at the head of
//! the chain), produces a new buffer, and knows how to serialize itself to
//! its wire document.

use std::fmt;

use crate::data::Buffer;
use crate::error::Result;
use crate::transforms::document::LinkDocument;

/// One step of a transform chain
pub trait TransformLink: Send + Sync + fmt::Debug {
    /// String type tag identifying the link implementation on the wire
    fn link_type(&self) -> &str;

    /// Apply the transformation to the upstream buffer
    ///
    /// `input` is `None` for the first link of a chain. Every link must
    /// produce a buffer; there is no pass-through-nothing result.
    fn apply(&self, input: Option<Buffer>) -> Result<Buffer>;

    /// Serialize the link to its wire document
    fn serialize(&self) -> Result<LinkDocument>;
}
