//! Subscriber side of discrete change notification.

use crate::types::PropertyKey;

/// Receives change notifications from a discrete cell.
///
/// Called synchronously on the writer's thread after the new value is
/// stored, once per update, identical values included. A slow
/// implementation blocks the writer.
pub trait NotificationSlot: Send + Sync {
    /// The property identified by `owner` was updated.
    fn on_changed(&self, owner: &PropertyKey);
}

impl<F> NotificationSlot for F
where
    F: Fn(&PropertyKey) + Send + Sync,
{
    fn on_changed(&self, owner: &PropertyKey) {
        self(owner)
    }
}
