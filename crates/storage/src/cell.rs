//! Mutex-guarded value buffer.
//!
//! # Invariants
//!
//! - The buffer is mutated only while the lock is held.
//! - Readers never alias the buffer; they get a full copy taken under the lock.
//! - `update` replaces the whole value, there is no in-place partial mutation.

use parking_lot::Mutex;
use statemirror_core::{Handle, PropertyKey, SIZE_FLOOR};
use tracing::{debug, trace};

/// Byte value shared between one writer path and many readers.
#[derive(Debug)]
pub struct ValueCell {
    key: PropertyKey,
    value: Mutex<Vec<u8>>,
}

impl ValueCell {
    /// Create a cell holding `default`.
    pub fn new(key: PropertyKey, default: impl Into<Vec<u8>>) -> Self {
        Self {
            key,
            value: Mutex::new(default.into()),
        }
    }

    /// Property identity.
    pub fn key(&self) -> &PropertyKey {
        &self.key
    }

    /// Copy of the current value.
    pub fn snapshot(&self) -> Vec<u8> {
        self.value.lock().clone()
    }

    /// Current value length.
    pub fn len(&self) -> usize {
        self.value.lock().len()
    }

    /// Check if the current value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.lock().is_empty()
    }

    /// Allocation size reported to hosts: `max(SIZE_FLOOR, len)`.
    pub fn size(&self) -> usize {
        self.len().max(SIZE_FLOOR)
    }

    /// Serve one chunk of a read sequence.
    ///
    /// At offset 0 the current value is copied into `handle` under the
    /// lock. Every chunk, including the first, is then served from the
    /// handle, so one sequence never mixes two versions.
    pub fn read(&self, handle: &mut Handle, dst: &mut [u8], offset: usize) -> usize {
        if offset == 0 {
            let value = self.value.lock();
            handle.capture(&value);
            trace!(key = %self.key, len = value.len(), "Snapshot captured");
        }
        handle.read_at(dst, offset)
    }

    /// Replace the value and return its new length.
    pub fn update(&self, new_value: &[u8]) -> usize {
        let len = {
            let mut value = self.value.lock();
            value.clear();
            value.extend_from_slice(new_value);
            value.len()
        };
        debug!(key = %self.key, len, "Cell updated");
        len
    }
}
