//! Error types for statemirror.
//!
//! One enum covers every layer. Capability violations are ordinary
//! `Err` values: callers check the result, nothing unwinds.

use crate::types::{NodeKind, Operation, PropertyKey};
use thiserror::Error;

/// All statemirror errors.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// The node kind does not support the operation.
    #[error("{op} is not supported by {kind} node {key}")]
    Unsupported {
        /// Rejected operation.
        op: Operation,
        /// Kind of the node that rejected it.
        kind: NodeKind,
        /// Node identity.
        key: PropertyKey,
    },

    /// An updater rejected the forwarded value.
    #[error("update of {key} failed: {reason}")]
    UpdateFailed {
        /// Property being updated.
        key: PropertyKey,
        /// Failure description.
        reason: String,
    },

    /// The cell behind an updater is gone.
    #[error("{key} is no longer bound to a cell")]
    Detached {
        /// Property whose cell was dropped.
        key: PropertyKey,
    },

    /// A write would end past the addressable range.
    #[error("write of {len} bytes at offset {offset} overflows {key}")]
    OffsetOverflow {
        /// Written property.
        key: PropertyKey,
        /// Requested offset.
        offset: usize,
        /// Requested length.
        len: usize,
    },

    /// The process-wide provider was installed before.
    #[error("provider {name} is already installed")]
    AlreadyInstalled {
        /// Name of the provider that holds the slot.
        name: String,
    },

    /// A node with this name already exists in the namespace.
    #[error("duplicate node {name} in namespace {namespace}")]
    DuplicateNode {
        /// Target namespace.
        namespace: String,
        /// Conflicting node name.
        name: String,
    },

    /// Namespace or node lookup failed.
    #[error("not found: {0}")]
    NotFound(String),

    /// Provider configuration is malformed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for statemirror operations.
pub type Result<T> = std::result::Result<T, MirrorError>;

impl MirrorError {
    /// Shorthand for a capability violation.
    pub fn unsupported(op: Operation, kind: NodeKind, key: &PropertyKey) -> Self {
        MirrorError::Unsupported {
            op,
            kind,
            key: key.clone(),
        }
    }

    /// Check if this is a capability violation.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, MirrorError::Unsupported { .. })
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, MirrorError::NotFound(_))
    }

    /// Check if this error signals a host lifecycle bug.
    ///
    /// A second provider installation means the host wired the provider
    /// twice; it must abort rather than continue with shared state.
    pub fn is_fatal(&self) -> bool {
        matches!(self, MirrorError::AlreadyInstalled { .. })
    }
}
