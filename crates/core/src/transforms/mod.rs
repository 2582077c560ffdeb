//! Transform chains over typed buffers
//!
//! This module contains the chain evaluation and serialization machinery:
//! - TransformLink: the trait each chain step implements
//! - TransformChain: ordered links plus declared output metadata
//! - LinkDocument / ChainDocument: JSON wire carriers
//! - LinkRegistry: tag-to-factory mapping for reconstruction
//! - links: the built-in link implementations

pub mod chain;
pub mod document;
pub mod link;
pub mod links;
pub mod registry;

pub use chain::TransformChain;
pub use document::{ChainDocument, LinkDocument, COUNT_UNSPECIFIED};
pub use link::TransformLink;
pub use registry::{LinkFactory, LinkRegistry};
