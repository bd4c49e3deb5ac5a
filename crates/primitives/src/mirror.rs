//! Mirror pair construction.
//!
//! For one property name, a mirror pair is a readable cell in the
//! destination namespace and a write proxy in the source namespace. The
//! proxy's updater is bound to that cell when the pair is built and is
//! never rebound.
//!
//! ## Ownership
//!
//! ```text
//! MirrorSource ──owns──▶ source Namespace ──owns──▶ WriteProxy ─┐
//!      │                                                        │ weak
//!      └──Arc──▶ destination Namespace ──owns──▶ Cell ◀──────────┘
//! ```
//!
//! The source shares ownership of the destination, so every cell a
//! proxy points at lives at least as long as the proxy's namespace.

use crate::namespace::Namespace;
use crate::node::Node;
use crate::proxy::WriteProxy;
use statemirror_core::{PropertyKey, PropertySpec, Result};
use std::sync::Arc;
use tracing::debug;

/// A cell and the proxy bound to it.
#[derive(Debug, Clone)]
pub struct MirrorPair {
    cell: Arc<Node>,
    proxy: Arc<Node>,
}

impl MirrorPair {
    /// Build the cell in `destination` and a proxy in `source` bound to it.
    pub fn new(source: &str, destination: &str, spec: &PropertySpec) -> Self {
        let key = PropertyKey::new(destination, spec.name.as_str());
        let (cell, update) = Node::cell(key, spec.kind, spec.default.as_bytes());
        let proxy = WriteProxy::new(PropertyKey::new(source, spec.name.as_str()), update);

        Self {
            cell: Arc::new(cell),
            proxy: Arc::new(Node::Writer(proxy)),
        }
    }

    /// Property name shared by both sides.
    pub fn name(&self) -> &str {
        self.cell.name()
    }

    /// Readable side.
    pub fn cell(&self) -> &Arc<Node> {
        &self.cell
    }

    /// Write-only side.
    pub fn proxy(&self) -> &Arc<Node> {
        &self.proxy
    }
}

/// Source namespace whose proxies write into a destination namespace.
#[derive(Debug)]
pub struct MirrorSource {
    namespace: Namespace,
    destination: Arc<Namespace>,
}

impl MirrorSource {
    /// Create an empty source bound to `destination`.
    pub fn new(name: impl Into<Arc<str>>, destination: Arc<Namespace>) -> Self {
        Self {
            namespace: Namespace::new(name),
            destination,
        }
    }

    /// Source namespace name.
    pub fn name(&self) -> &str {
        self.namespace.name()
    }

    /// Namespace holding the write proxies.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Namespace holding the cells.
    pub fn destination(&self) -> &Arc<Namespace> {
        &self.destination
    }

    /// Create a mirror pair and register both sides.
    ///
    /// If either namespace already has a node with this name, neither
    /// namespace is modified.
    pub fn insert(&self, spec: &PropertySpec) -> Result<MirrorPair> {
        let pair = MirrorPair::new(self.namespace.name(), self.destination.name(), spec);

        self.destination.insert(Arc::clone(&pair.cell))?;
        if let Err(e) = self.namespace.insert(Arc::clone(&pair.proxy)) {
            self.destination.remove(&spec.name);
            return Err(e);
        }

        debug!(
            source = %self.namespace.name(),
            destination = %self.destination.name(),
            property = %spec.name,
            kind = ?spec.kind,
            "Mirror pair created"
        );
        Ok(pair)
    }

    /// Insert every spec in order, stopping at the first failure.
    pub fn insert_all<'a>(
        &self,
        specs: impl IntoIterator<Item = &'a PropertySpec>,
    ) -> Result<Vec<MirrorPair>> {
        specs.into_iter().map(|spec| self.insert(spec)).collect()
    }
}
