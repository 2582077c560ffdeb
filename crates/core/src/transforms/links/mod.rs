//! Built-in transform links
//!
//! Four link implementations ship with the crate:
//! - Immediate: a payload buffer embedded in the document as base64
//! - DataSource: a buffer fetched from a file or HTTP(S) URI
//! - Accessor: projection of one named channel out of each element
//! - Operator: elementwise scalar arithmetic over float lanes
//!
//! None of them register themselves. Call [`register_builtin_links`] on a
//! registry before deserializing chains that use them.

use std::sync::Arc;

use crate::transforms::registry::LinkRegistry;

pub mod accessor;
pub mod data_source;
pub mod immediate;
pub mod operator;

pub use accessor::{AccessorLink, AccessorLinkFactory};
pub use data_source::{DataSourceLink, DataSourceLinkFactory};
pub use immediate::{ImmediateLink, ImmediateLinkFactory};
pub use operator::{OperatorKind, OperatorLink, OperatorLinkFactory};

/// Register the built-in link factories on a registry
pub fn register_builtin_links(registry: &mut LinkRegistry) {
    registry.register(Arc::new(ImmediateLinkFactory));
    registry.register(Arc::new(DataSourceLinkFactory));
    registry.register(Arc::new(AccessorLinkFactory));
    registry.register(Arc::new(OperatorLinkFactory));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_builtin_links() {
        let mut registry = LinkRegistry::new();
        register_builtin_links(&mut registry);

        assert_eq!(
            registry.list_link_types(),
            vec!["Accessor", "DataSource", "Immediate", "Operator"]
        );
    }
}
