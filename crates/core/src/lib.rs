//! Core types for statemirror.
//!
//! This crate defines the vocabulary shared by every layer:
//! - `MirrorError` / `Result`: the single error type.
//! - `NodeAttr`: capability bits (readable, writable, discrete).
//! - `PropertyKey`: namespace-qualified property identity.
//! - `Handle`: per-caller snapshot buffer for chunked reads.
//! - `Updater`: the byte sink a write proxy forwards assembled values into.
//! - `NotificationSlot`: subscriber contract for discrete properties.
//! - `Property`: the capability interface every node implements.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attr;
pub mod error;
pub mod handle;
pub mod property;
pub mod slot;
pub mod types;

pub use attr::NodeAttr;
pub use error::{MirrorError, Result};
pub use handle::Handle;
pub use property::{Property, Updater};
pub use slot::NotificationSlot;
pub use types::{NodeKind, Operation, PropertyKey, PropertyKind, PropertySpec, SIZE_FLOOR};
