//! Convenient imports for statemirror.
//!
//! ```ignore
//! use statemirror::prelude::*;
//!
//! let provider = Provider::from_config(ProviderConfig::power_emu())?;
//! ```

// Assembly
pub use crate::config::{MirrorConfig, ProviderConfig};
pub use crate::provider::{install, installed, Provider, ProviderBuilder};

// Error handling
pub use crate::{Error, Result};

// Node interface
pub use statemirror_core::{
    Handle, NodeAttr, NodeKind, NotificationSlot, Property, PropertyKey, PropertyKind,
    PropertySpec,
};
pub use statemirror_primitives::{MirrorPair, MirrorSource, Namespace, Node, WriteProxy};

pub use std::sync::Arc;
