//! Named node collections.
//!
//! A namespace owns its nodes. Lookups are concurrent via DashMap;
//! names are unique within one namespace.

use crate::node::Node;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use statemirror_core::{MirrorError, Property, PropertyKey, Result};
use std::sync::Arc;
use tracing::debug;

/// Collection of nodes keyed by name.
#[derive(Debug)]
pub struct Namespace {
    name: Arc<str>,
    nodes: DashMap<Arc<str>, Arc<Node>>,
}

impl Namespace {
    /// Create an empty namespace.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            nodes: DashMap::new(),
        }
    }

    /// Namespace name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key for a node named `name` in this namespace.
    pub fn key(&self, name: &str) -> PropertyKey {
        PropertyKey::new(Arc::clone(&self.name), name)
    }

    /// Register a node under its own name.
    ///
    /// Fails with [`MirrorError::DuplicateNode`] if the name is taken.
    pub fn insert(&self, node: Arc<Node>) -> Result<Arc<Node>> {
        let name: Arc<str> = node.name().into();
        match self.nodes.entry(name) {
            Entry::Occupied(entry) => Err(MirrorError::DuplicateNode {
                namespace: self.name.to_string(),
                name: entry.key().to_string(),
            }),
            Entry::Vacant(entry) => {
                debug!(
                    namespace = %self.name,
                    node = %entry.key(),
                    attr = %node.attr(),
                    "Node inserted"
                );
                entry.insert(Arc::clone(&node));
                Ok(node)
            }
        }
    }

    pub(crate) fn remove(&self, name: &str) -> Option<Arc<Node>> {
        self.nodes.remove(name).map(|(_, node)| node)
    }

    /// Look up a node by name.
    pub fn get(&self, name: &str) -> Option<Arc<Node>> {
        self.nodes.get(name).map(|node| Arc::clone(node.value()))
    }

    /// Look up a node by name, failing with [`MirrorError::NotFound`].
    pub fn node(&self, name: &str) -> Result<Arc<Node>> {
        self.get(name)
            .ok_or_else(|| MirrorError::NotFound(format!("{}/{}", self.name, name)))
    }

    /// Check if a node with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Node names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.nodes.iter().map(|e| e.key().to_string()).collect();
        names.sort();
        names
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the namespace has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
