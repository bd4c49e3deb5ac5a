//! The capability interface shared by every node.

use crate::attr::NodeAttr;
use crate::error::{MirrorError, Result};
use crate::handle::Handle;
use crate::slot::NotificationSlot;
use crate::types::{NodeKind, Operation, PropertyKey};
use std::sync::Arc;

/// Sink that receives a fully assembled value.
///
/// Returns the accepted length, or the reason the value was rejected.
pub type Updater = Arc<dyn Fn(&[u8]) -> Result<usize> + Send + Sync>;

/// Operations a host can perform on a node.
///
/// Each node kind overrides what it supports. The provided methods
/// reject the operation with [`MirrorError::Unsupported`].
pub trait Property: Send + Sync {
    /// Node identity.
    fn key(&self) -> &PropertyKey;

    /// Node variant.
    fn kind(&self) -> NodeKind;

    /// Capability bits.
    fn attr(&self) -> NodeAttr;

    /// Size a host should allocate for reads.
    fn size(&self) -> usize;

    /// Read up to `dst.len()` bytes at `offset`.
    ///
    /// Offset 0 starts a new read sequence and refreshes `handle`.
    fn read(&self, handle: &mut Handle, dst: &mut [u8], offset: usize) -> Result<usize> {
        let _ = (handle, dst, offset);
        Err(MirrorError::unsupported(Operation::Read, self.kind(), self.key()))
    }

    /// Write `src` at `offset`.
    fn write(&self, handle: &mut Handle, src: &[u8], offset: usize) -> Result<usize> {
        let _ = (handle, src, offset);
        Err(MirrorError::unsupported(Operation::Write, self.kind(), self.key()))
    }

    /// Attach a change subscriber, replacing any previous one.
    fn connect(&self, slot: &Arc<dyn NotificationSlot>) -> Result<()> {
        let _ = slot;
        Err(MirrorError::unsupported(Operation::Connect, self.kind(), self.key()))
    }

    /// Detach the change subscriber, if any.
    fn disconnect(&self) {}
}
