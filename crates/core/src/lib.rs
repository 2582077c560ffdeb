//! Vizwire core - transform chains over typed binary buffers
//!
//! This crate provides the synchronous core for building, evaluating, and
//! serializing chains of data transformations.
//!
//! # Architecture
//!
//! - `data`: typed buffers (`Buffer`) over a fixed element-type registry
//!   (`ElementType`), stored as contiguous little-endian bytes
//! - `transforms`: the `TransformLink` trait, the built-in links, the
//!   `TransformChain` that folds a buffer through them, and the JSON wire
//!   documents with base64-embedded payloads
//!
//! Chains serialize to plain JSON and are rebuilt through a `LinkRegistry`,
//! so applications can add their own link types next to the built-in ones.
//!
//! # Example
//!
//! ```
//! use vizwire_core::data::{Buffer, ElementType};
//! use vizwire_core::transforms::links::{register_builtin_links, ImmediateLink};
//! use vizwire_core::transforms::{ChainDocument, LinkRegistry, TransformChain};
//!
//! # fn main() -> vizwire_core::Result<()> {
//! let payload = Buffer::from_bytes(vec![1, 2, 3, 4], ElementType::Uint8)?;
//!
//! let mut chain = TransformChain::unspecified();
//! chain.append(Box::new(ImmediateLink::new(payload)));
//!
//! // Ship the chain as JSON...
//! let json = chain.serialize()?.to_json()?;
//!
//! // ...and rebuild it elsewhere
//! let mut registry = LinkRegistry::new();
//! register_builtin_links(&mut registry);
//! let document = ChainDocument::parse(&json)?;
//! let rebuilt = TransformChain::deserialize(&document, &registry)?;
//!
//! assert_eq!(rebuilt.run()?.to_bytes(), vec![1, 2, 3, 4]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod data;
pub mod error;
pub mod transforms;

pub use error::{Error, Result};

/// Initialize the vizwire core
///
/// This should be called once at startup to initialize logging.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Vizwire core initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        // Should not panic
        init().ok();
    }
}
