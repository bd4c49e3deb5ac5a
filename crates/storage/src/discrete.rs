//! Readable cell with edge-triggered notification.
//!
//! ## Design
//!
//! The slot is held weakly: the cell never owns its subscriber. At most
//! one slot is attached; `connect` replaces it, `disconnect` clears it.
//!
//! `update` stores the value first, then calls the slot on the writer's
//! thread with no lock held. It fires on every update, including one
//! that stores a byte-identical value.

use crate::cell::ValueCell;
use parking_lot::RwLock;
use statemirror_core::{
    Handle, MirrorError, NodeAttr, NodeKind, NotificationSlot, Property, PropertyKey, Result,
    Updater,
};
use std::sync::{Arc, Weak};
use tracing::debug;

#[derive(Debug)]
struct DiscreteInner {
    cell: ValueCell,
    slot: RwLock<Option<Weak<dyn NotificationSlot>>>,
}

impl DiscreteInner {
    fn update(&self, value: &[u8]) -> usize {
        let len = self.cell.update(value);
        // Clone out so the subscriber runs without the slot lock
        let slot = self.slot.read().clone();
        if let Some(slot) = slot {
            match slot.upgrade() {
                Some(slot) => {
                    debug!(key = %self.cell.key(), "Notifying slot");
                    slot.on_changed(self.cell.key());
                }
                None => debug!(key = %self.cell.key(), "Slot dropped, skipping notification"),
            }
        }
        len
    }
}

/// Mirrored value that notifies its subscriber on every update.
#[derive(Debug, Clone)]
pub struct DiscreteCell {
    inner: Arc<DiscreteInner>,
}

impl DiscreteCell {
    /// Create a cell holding `default` with no slot attached.
    pub fn new(key: PropertyKey, default: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: Arc::new(DiscreteInner {
                cell: ValueCell::new(key, default),
                slot: RwLock::new(None),
            }),
        }
    }

    /// Store the value, notify the slot, return the new length.
    pub fn update(&self, value: &[u8]) -> usize {
        self.inner.update(value)
    }

    /// Copy of the current value.
    pub fn snapshot(&self) -> Vec<u8> {
        self.inner.cell.snapshot()
    }

    /// Check if a live slot is attached.
    pub fn is_connected(&self) -> bool {
        self.inner
            .slot
            .read()
            .as_ref()
            .map_or(false, |slot| slot.strong_count() > 0)
    }

    /// Updater bound to this cell, notification included.
    ///
    /// Fails with [`MirrorError::Detached`] once the cell is dropped.
    pub fn updater(&self) -> Updater {
        let inner = Arc::downgrade(&self.inner);
        let key = self.inner.cell.key().clone();
        Arc::new(move |value: &[u8]| match inner.upgrade() {
            Some(inner) => Ok(inner.update(value)),
            None => Err(MirrorError::Detached { key: key.clone() }),
        })
    }
}

impl Property for DiscreteCell {
    fn key(&self) -> &PropertyKey {
        self.inner.cell.key()
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Discrete
    }

    fn attr(&self) -> NodeAttr {
        NodeAttr::READ | NodeAttr::DISCRETE
    }

    fn size(&self) -> usize {
        self.inner.cell.size()
    }

    fn read(&self, handle: &mut Handle, dst: &mut [u8], offset: usize) -> Result<usize> {
        Ok(self.inner.cell.read(handle, dst, offset))
    }

    fn connect(&self, slot: &Arc<dyn NotificationSlot>) -> Result<()> {
        *self.inner.slot.write() = Some(Arc::downgrade(slot));
        debug!(key = %self.key(), "Slot connected");
        Ok(())
    }

    fn disconnect(&self) {
        *self.inner.slot.write() = None;
        debug!(key = %self.key(), "Slot disconnected");
    }
}
