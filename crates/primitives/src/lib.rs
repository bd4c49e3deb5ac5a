//! Primitives for statemirror.
//!
//! This crate builds mirrored properties out of storage cells:
//! - WriteProxy: write-only endpoint that assembles partial writes and forwards the full value.
//! - Node: closed set of node variants behind one capability interface.
//! - Namespace: named collection owning its nodes.
//! - MirrorSource / MirrorPair: binds a proxy in one namespace to a cell in another.
//!
//! ## Data Flow
//!
//! ```text
//! writer -> WriteProxy (scratch) -> Updater -> Cell (lock) -> [discrete] slot
//! reader -> Cell (snapshot at offset 0)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod mirror;
pub mod namespace;
pub mod node;
pub mod proxy;

pub use mirror::{MirrorPair, MirrorSource};
pub use namespace::Namespace;
pub use node::Node;
pub use proxy::WriteProxy;
