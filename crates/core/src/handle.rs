//! Per-caller read state.
//!
//! A host opens a node once and then reads it in chunks at increasing
//! offsets. The `Handle` carries the copy of the value captured by the
//! first chunk (offset 0); later chunks are served from that copy so the
//! whole sequence observes one version of the value.

/// Caller-owned snapshot buffer for one read sequence.
#[derive(Debug, Default, Clone)]
pub struct Handle {
    snapshot: Vec<u8>,
}

impl Handle {
    /// Create an empty handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with `value`, reusing the allocation.
    pub fn capture(&mut self, value: &[u8]) {
        self.snapshot.clear();
        self.snapshot.extend_from_slice(value);
    }

    /// Captured bytes.
    pub fn snapshot(&self) -> &[u8] {
        &self.snapshot
    }

    /// Length of the captured value.
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    /// Check if the captured value is empty.
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Copy captured bytes starting at `offset` into `dst`.
    ///
    /// Returns the number of bytes copied. An offset at or past the end
    /// yields 0; a request running past the end is clamped. Neither is
    /// an error.
    pub fn read_at(&self, dst: &mut [u8], offset: usize) -> usize {
        let Some(remaining) = self.snapshot.get(offset..) else {
            return 0;
        };
        let n = dst.len().min(remaining.len());
        dst[..n].copy_from_slice(&remaining[..n]);
        n
    }
}
