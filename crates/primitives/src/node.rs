//! Closed set of node variants.
//!
//! Collections store `Node`s. Every operation dispatches by match to the
//! variant, which either handles it or rejects it as unsupported.

use crate::proxy::WriteProxy;
use statemirror_core::{
    Handle, NodeAttr, NodeKind, NotificationSlot, Property, PropertyKey, PropertyKind, Result,
    Updater,
};
use statemirror_storage::{ContinuousCell, DiscreteCell};
use std::sync::Arc;

/// A node registered in a namespace.
#[derive(Debug)]
pub enum Node {
    /// Poll-only readable cell.
    Continuous(ContinuousCell),
    /// Readable cell with change notification.
    Discrete(DiscreteCell),
    /// Write-only proxy.
    Writer(WriteProxy),
}

impl Node {
    /// Create the readable cell for a property of the given kind.
    ///
    /// Returns the updater bound to the new cell alongside it.
    pub fn cell(
        key: PropertyKey,
        kind: PropertyKind,
        default: impl Into<Vec<u8>>,
    ) -> (Self, Updater) {
        match kind {
            PropertyKind::Continuous => {
                let cell = ContinuousCell::new(key, default);
                let update = cell.updater();
                (Node::Continuous(cell), update)
            }
            PropertyKind::Discrete => {
                let cell = DiscreteCell::new(key, default);
                let update = cell.updater();
                (Node::Discrete(cell), update)
            }
        }
    }

    /// Updater bound to this node's cell, `None` for a proxy.
    pub fn updater(&self) -> Option<Updater> {
        match self {
            Node::Continuous(cell) => Some(cell.updater()),
            Node::Discrete(cell) => Some(cell.updater()),
            Node::Writer(_) => None,
        }
    }

    /// Copy of the cell value, `None` for a proxy.
    pub fn value(&self) -> Option<Vec<u8>> {
        match self {
            Node::Continuous(cell) => Some(cell.snapshot()),
            Node::Discrete(cell) => Some(cell.snapshot()),
            Node::Writer(_) => None,
        }
    }

    /// Node name within its namespace.
    pub fn name(&self) -> &str {
        self.key().name()
    }

    fn as_property(&self) -> &dyn Property {
        match self {
            Node::Continuous(cell) => cell,
            Node::Discrete(cell) => cell,
            Node::Writer(proxy) => proxy,
        }
    }
}

impl Property for Node {
    fn key(&self) -> &PropertyKey {
        self.as_property().key()
    }

    fn kind(&self) -> NodeKind {
        self.as_property().kind()
    }

    fn attr(&self) -> NodeAttr {
        self.as_property().attr()
    }

    fn size(&self) -> usize {
        self.as_property().size()
    }

    fn read(&self, handle: &mut Handle, dst: &mut [u8], offset: usize) -> Result<usize> {
        self.as_property().read(handle, dst, offset)
    }

    fn write(&self, handle: &mut Handle, src: &[u8], offset: usize) -> Result<usize> {
        self.as_property().write(handle, src, offset)
    }

    fn connect(&self, slot: &Arc<dyn NotificationSlot>) -> Result<()> {
        self.as_property().connect(slot)
    }

    fn disconnect(&self) {
        self.as_property().disconnect()
    }
}
