//! Transform chains
//!
//! A chain is an ordered list of links plus the declared shape of its
//! output. Evaluation folds a buffer through the links: the first link
//! receives nothing and produces a buffer, each later link receives its
//! predecessor's output. The declared count and element type exist so a
//! chain can be described before its data is known; they are advisory and
//! never block evaluation.

use crate::data::{Buffer, ElementType};
use crate::error::{Error, Result};
use crate::transforms::document::{ChainDocument, COUNT_UNSPECIFIED};
use crate::transforms::link::TransformLink;
use crate::transforms::registry::LinkRegistry;

/// Ordered list of transform links with declared output metadata
#[derive(Debug)]
pub struct TransformChain {
    links: Vec<Box<dyn TransformLink>>,
    declared_count: i64,
    declared_element_type: Option<ElementType>,
}

impl TransformChain {
    /// Create an empty chain with declared output metadata
    ///
    /// `declared_count` must be `-1` (unknown) or non-negative.
    pub fn new(declared_count: i64, declared_element_type: Option<ElementType>) -> Result<Self> {
        if declared_count < COUNT_UNSPECIFIED {
            return Err(Error::InvalidArgument(format!(
                "Declared count must be -1 or >= 0, got {}",
                declared_count
            )));
        }
        Ok(Self {
            links: Vec::new(),
            declared_count,
            declared_element_type,
        })
    }

    /// Create an empty chain with no declared output metadata
    pub fn unspecified() -> Self {
        Self {
            links: Vec::new(),
            declared_count: COUNT_UNSPECIFIED,
            declared_element_type: None,
        }
    }

    /// Declared element count of the output, -1 when unknown
    pub fn declared_count(&self) -> i64 {
        self.declared_count
    }

    /// Declared element type of the output
    pub fn declared_element_type(&self) -> Option<ElementType> {
        self.declared_element_type
    }

    /// Check if both declared count and element type are known
    pub fn is_fully_defined(&self) -> bool {
        self.declared_count >= 0 && self.declared_element_type.is_some()
    }

    /// Append a link to the end of the chain
    pub fn append(&mut self, link: Box<dyn TransformLink>) {
        self.links.push(link);
    }

    /// Remove and return the link at `index`
    pub fn remove(&mut self, index: usize) -> Result<Box<dyn TransformLink>> {
        if index >= self.links.len() {
            return Err(Error::OutOfRange(format!(
                "Link index {} exceeds chain of {} link(s)",
                index,
                self.links.len()
            )));
        }
        Ok(self.links.remove(index))
    }

    /// Number of links in the chain
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Check if the chain has no links
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Borrow the links in evaluation order
    pub fn links(&self) -> &[Box<dyn TransformLink>] {
        &self.links
    }

    /// Evaluate the chain and return the resulting buffer
    pub fn run(&self) -> Result<Buffer> {
        let mut current: Option<Buffer> = None;
        for link in &self.links {
            tracing::debug!("Applying link: {}", link.link_type());
            current = Some(link.apply(current.take())?);
        }
        let buffer = current.ok_or(Error::EmptyChain)?;

        if self.declared_count >= 0 && buffer.count() as i64 != self.declared_count {
            tracing::warn!(
                "Chain produced {} element(s), declared {}",
                buffer.count(),
                self.declared_count
            );
        }
        if let Some(declared) = self.declared_element_type {
            if buffer.element_type() != declared {
                tracing::warn!(
                    "Chain produced type {}, declared type {}",
                    buffer.element_type(),
                    declared
                );
            }
        }

        Ok(buffer)
    }

    /// Serialize the chain and all of its links to a wire document
    pub fn serialize(&self) -> Result<ChainDocument> {
        let links = self
            .links
            .iter()
            .map(|link| link.serialize())
            .collect::<Result<Vec<_>>>()?;

        Ok(ChainDocument {
            buffer_count: self.declared_count,
            buffer_type: self.declared_element_type,
            links,
        })
    }

    /// Rebuild a chain from a wire document, resolving links via the registry
    pub fn deserialize(document: &ChainDocument, registry: &LinkRegistry) -> Result<Self> {
        let mut chain = TransformChain::new(document.buffer_count, document.buffer_type)?;
        for link_document in &document.links {
            chain.append(registry.reconstruct(link_document)?);
        }
        tracing::debug!("Deserialized chain with {} link(s)", chain.len());
        Ok(chain)
    }
}
