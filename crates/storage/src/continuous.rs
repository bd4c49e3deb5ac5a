//! Readable cell without change signaling.
//!
//! Hosts poll it. Its updater holds only a weak reference, so a proxy
//! bound to it never keeps the cell alive.

use crate::cell::ValueCell;
use statemirror_core::{
    Handle, MirrorError, NodeAttr, NodeKind, Property, PropertyKey, Result, Updater,
};
use std::sync::Arc;

/// Poll-only mirrored value.
#[derive(Debug, Clone)]
pub struct ContinuousCell {
    inner: Arc<ValueCell>,
}

impl ContinuousCell {
    /// Create a cell holding `default`.
    pub fn new(key: PropertyKey, default: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: Arc::new(ValueCell::new(key, default)),
        }
    }

    /// Replace the value and return its new length.
    pub fn update(&self, value: &[u8]) -> usize {
        self.inner.update(value)
    }

    /// Copy of the current value.
    pub fn snapshot(&self) -> Vec<u8> {
        self.inner.snapshot()
    }

    /// Updater bound to this cell.
    ///
    /// Fails with [`MirrorError::Detached`] once the cell is dropped.
    pub fn updater(&self) -> Updater {
        let cell = Arc::downgrade(&self.inner);
        let key = self.inner.key().clone();
        Arc::new(move |value: &[u8]| match cell.upgrade() {
            Some(cell) => Ok(cell.update(value)),
            None => Err(MirrorError::Detached { key: key.clone() }),
        })
    }
}

impl Property for ContinuousCell {
    fn key(&self) -> &PropertyKey {
        self.inner.key()
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Continuous
    }

    fn attr(&self) -> NodeAttr {
        NodeAttr::READ
    }

    fn size(&self) -> usize {
        self.inner.size()
    }

    fn read(&self, handle: &mut Handle, dst: &mut [u8], offset: usize) -> Result<usize> {
        Ok(self.inner.read(handle, dst, offset))
    }
}
