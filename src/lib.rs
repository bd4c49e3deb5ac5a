//! # statemirror
//!
//! Mirrored state properties: a value written through one node becomes
//! the readable content of a node with the same name in another
//! namespace, with optional change notification to a subscriber.
//!
//! ## Quick Start
//!
//! ```ignore
//! use statemirror::prelude::*;
//!
//! let provider = Provider::from_config(ProviderConfig::power_emu())?;
//!
//! // Subscribe to a discrete property
//! let slot: Arc<dyn NotificationSlot> = Arc::new(|key: &PropertyKey| {
//!     println!("{} changed", key);
//! });
//! provider.node("Battery", "ChargePercentage")?.connect(&slot)?;
//!
//! // Write through the proxy side
//! let mut handle = Handle::new();
//! provider.node("BatteryEmu", "ChargePercentage")?.write(&mut handle, b"95", 0)?;
//! ```
//!
//! ## Layers
//!
//! - [`statemirror_core`] - errors, capability bits, the `Property` interface.
//! - [`statemirror_storage`] - lock-guarded cells with snapshot reads.
//! - [`statemirror_primitives`] - write proxies, namespaces, mirror pairs.
//! - this crate - configuration and provider assembly.

#![warn(missing_docs)]

mod config;
mod provider;

pub mod prelude;

pub use config::{MirrorConfig, ProviderConfig};
pub use provider::{install, installed, Provider, ProviderBuilder};

pub use statemirror_core::{
    Handle, MirrorError as Error, NodeAttr, NodeKind, NotificationSlot, Operation, Property,
    PropertyKey, PropertyKind, PropertySpec, Result, Updater, SIZE_FLOOR,
};
pub use statemirror_primitives::{MirrorPair, MirrorSource, Namespace, Node, WriteProxy};
pub use statemirror_storage::{ContinuousCell, DiscreteCell, ValueCell};

pub use statemirror_core;
pub use statemirror_primitives;
pub use statemirror_storage;
