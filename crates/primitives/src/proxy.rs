//! Write side of a mirrored property.
//!
//! A host may deliver one logical value as several writes at increasing
//! offsets. The proxy assembles them in a scratch buffer and, after every
//! write, forwards the whole buffer to its updater, never just the
//! written chunk.
//!
//! ## Write Rules
//!
//! - Empty write: truncate. The scratch becomes empty and the empty value
//!   is forwarded, whatever the offset.
//! - Write ending past the scratch: the scratch grows to exactly
//!   `offset + len`. Bytes between the old end and `offset` are zero.
//! - The updater's result is the write's result. Failures propagate
//!   as-is; there is no retry.
//!
//! ## Thread Safety
//!
//! Writers from different threads are serialized by a reentrant lock, so
//! their values reach the cell in assembly order. The scratch borrow ends
//! before the forward: a subscriber running on the writing thread may
//! query [`WriteProxy::reported_size`] or write through the same proxy.
//! A nested write is assembled and forwarded before the outer write
//! returns, so the cell ends up holding the nested value.

use parking_lot::ReentrantMutex;
use statemirror_core::{
    Handle, MirrorError, NodeAttr, NodeKind, Property, PropertyKey, Result, Updater, SIZE_FLOOR,
};
use std::cell::RefCell;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::warn;

/// Write-only endpoint bound to an updater.
pub struct WriteProxy {
    key: PropertyKey,
    update: Updater,
    scratch: ReentrantMutex<RefCell<Vec<u8>>>,
    reported_size: AtomicUsize,
}

impl WriteProxy {
    /// Create a proxy that forwards assembled values to `update`.
    pub fn new(key: PropertyKey, update: Updater) -> Self {
        Self {
            key,
            update,
            scratch: ReentrantMutex::new(RefCell::new(Vec::new())),
            reported_size: AtomicUsize::new(SIZE_FLOOR),
        }
    }

    /// Property identity.
    pub fn key(&self) -> &PropertyKey {
        &self.key
    }

    /// Highest `offset + len` since the last truncation.
    ///
    /// [`SIZE_FLOOR`] before the first write. Never blocks.
    pub fn reported_size(&self) -> usize {
        self.reported_size.load(Ordering::Acquire)
    }

    /// Copy of the assembled value.
    pub fn scratch(&self) -> Vec<u8> {
        self.scratch.lock().borrow().clone()
    }

    /// Apply one write and forward the assembled value.
    ///
    /// Returns what the updater returns, normally the new value length.
    pub fn write(&self, src: &[u8], offset: usize) -> Result<usize> {
        let guard = self.scratch.lock();
        let value = {
            let mut scratch = guard.borrow_mut();
            if src.is_empty() {
                scratch.clear();
            } else {
                let end = offset
                    .checked_add(src.len())
                    .ok_or_else(|| MirrorError::OffsetOverflow {
                        key: self.key.clone(),
                        offset,
                        len: src.len(),
                    })?;
                if end > scratch.len() {
                    scratch.resize(end, 0);
                }
                scratch[offset..end].copy_from_slice(src);
            }
            self.reported_size.store(scratch.len(), Ordering::Release);
            scratch.clone()
        };

        // The guard stays held: other threads wait, this thread may re-enter.
        let result = (self.update)(&value);
        drop(guard);
        if let Err(e) = &result {
            warn!(key = %self.key, error = %e, "Forwarding write failed");
        }
        result
    }
}

impl fmt::Debug for WriteProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteProxy")
            .field("key", &self.key)
            .field("reported_size", &self.reported_size())
            .finish_non_exhaustive()
    }
}

impl Property for WriteProxy {
    fn key(&self) -> &PropertyKey {
        &self.key
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Writer
    }

    fn attr(&self) -> NodeAttr {
        NodeAttr::WRITE
    }

    fn size(&self) -> usize {
        self.reported_size()
    }

    fn write(&self, _handle: &mut Handle, src: &[u8], offset: usize) -> Result<usize> {
        WriteProxy::write(self, src, offset)
    }
}
