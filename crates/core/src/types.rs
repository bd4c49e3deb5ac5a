//! Identity and kind types shared by cells, proxies and collections.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Minimum size reported by a readable cell.
///
/// Hosts that allocate fixed read buffers from `size()` always get at
/// least this many bytes, whatever the current content length. Writes
/// are not limited by it.
pub const SIZE_FLOOR: usize = 128;

/// Namespace-qualified property identity.
///
/// Cloning is cheap: both parts are reference counted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyKey {
    namespace: Arc<str>,
    name: Arc<str>,
}

impl PropertyKey {
    /// Create a key for `name` inside `namespace`.
    pub fn new(namespace: impl Into<Arc<str>>, name: impl Into<Arc<str>>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Owning namespace name.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Property name within the namespace.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// How a mirrored property signals change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// Stores state for polling reads, never notifies.
    Continuous,
    /// Notifies the attached slot on every update.
    #[default]
    Discrete,
}

/// The closed set of node variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Readable cell without notification.
    Continuous,
    /// Readable cell with notification.
    Discrete,
    /// Write-only proxy.
    Writer,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeKind::Continuous => "continuous",
            NodeKind::Discrete => "discrete",
            NodeKind::Writer => "writer",
        };
        f.write_str(s)
    }
}

impl From<PropertyKind> for NodeKind {
    fn from(kind: PropertyKind) -> Self {
        match kind {
            PropertyKind::Continuous => NodeKind::Continuous,
            PropertyKind::Discrete => NodeKind::Discrete,
        }
    }
}

/// Node operation, used to report capability violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `read`.
    Read,
    /// `write`.
    Write,
    /// `connect`.
    Connect,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Read => "read",
            Operation::Write => "write",
            Operation::Connect => "connect",
        };
        f.write_str(s)
    }
}

/// Definition of one mirrored property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySpec {
    /// Name shared by the cell and its write proxy.
    pub name: String,
    /// Initial cell content.
    #[serde(default)]
    pub default: String,
    /// Continuous or discrete.
    #[serde(default)]
    pub kind: PropertyKind,
}

impl PropertySpec {
    /// Discrete property with the given default.
    pub fn discrete(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            kind: PropertyKind::Discrete,
        }
    }

    /// Continuous property with the given default.
    pub fn continuous(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            kind: PropertyKind::Continuous,
        }
    }
}
