//! Link registry for document-based link reconstruction
//!
//! The LinkRegistry maps link type tags to factories so that serialized
//! chains can be rebuilt without knowing concrete link types. Registration
//! is explicit; nothing registers itself at load time.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::transforms::document::LinkDocument;
use crate::transforms::link::TransformLink;

/// Factory trait for reconstructing links from wire payloads
pub trait LinkFactory: Send + Sync {
    /// Get the link type tag this factory handles
    fn link_type(&self) -> &str;

    /// Build a link from the `link_data` payload of a wire document
    fn create(&self, data: Value) -> Result<Box<dyn TransformLink>>;
}

/// Registry of link factories keyed by type tag
pub struct LinkRegistry {
    factories: HashMap<String, Arc<dyn LinkFactory>>,
}

impl LinkRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a link factory under its type tag
    ///
    /// Registering a second factory for the same tag replaces the first.
    pub fn register(&mut self, factory: Arc<dyn LinkFactory>) {
        let link_type = factory.link_type().to_string();
        if self.factories.insert(link_type.clone(), factory).is_some() {
            tracing::debug!("Replaced link factory for type: {}", link_type);
        } else {
            tracing::debug!("Registered link factory for type: {}", link_type);
        }
    }

    /// Rebuild a link from its wire document
    pub fn reconstruct(&self, document: &LinkDocument) -> Result<Box<dyn TransformLink>> {
        let factory = self
            .factories
            .get(&document.link_type)
            .ok_or_else(|| Error::UnknownLinkType(document.link_type.clone()))?;
        factory.create(document.link_data.clone())
    }

    /// Check if a factory is registered for a type tag
    pub fn contains(&self, link_type: &str) -> bool {
        self.factories.contains_key(link_type)
    }

    /// List all registered link types
    pub fn list_link_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.factories.keys().cloned().collect();
        types.sort();
        types
    }
}

impl Default for LinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}
