//! Capability bits reported by `getattr`.
//!
//! Every node advertises what it can do through a small bit set. Hosts
//! use the `DISCRETE` bit to decide whether to subscribe for change
//! notifications or to poll.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Capability bits of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NodeAttr(u32);

impl NodeAttr {
    /// No capabilities.
    pub const NONE: NodeAttr = NodeAttr(0);
    /// Node content can be read.
    pub const READ: NodeAttr = NodeAttr(1 << 0);
    /// Node accepts writes.
    pub const WRITE: NodeAttr = NodeAttr(1 << 1);
    /// Node emits a notification on every update.
    pub const DISCRETE: NodeAttr = NodeAttr(1 << 2);

    /// Raw bit representation.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True if every bit of `other` is set in `self`.
    pub const fn contains(self, other: NodeAttr) -> bool {
        self.bits() & other.bits() == other.bits()
    }

    /// Check the READ bit.
    pub const fn is_readable(self) -> bool {
        self.contains(Self::READ)
    }

    /// Check the WRITE bit.
    pub const fn is_writable(self) -> bool {
        self.contains(Self::WRITE)
    }

    /// Check the DISCRETE bit.
    pub const fn is_discrete(self) -> bool {
        self.contains(Self::DISCRETE)
    }
}

impl BitOr for NodeAttr {
    type Output = NodeAttr;

    fn bitor(self, rhs: NodeAttr) -> NodeAttr {
        NodeAttr(self.0 | rhs.0)
    }
}

impl BitOrAssign for NodeAttr {
    fn bitor_assign(&mut self, rhs: NodeAttr) {
        self.0 |= rhs.0;
    }
}

/// Renders as `rwd` with `-` for unset bits, e.g. `r-d`.
impl fmt::Display for NodeAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            flag(self.is_readable(), 'r'),
            flag(self.is_writable(), 'w'),
            flag(self.is_discrete(), 'd')
        )
    }
}
