//! Provider assembly and process-wide installation.
//!
//! A `Provider` wires every mirror of a [`ProviderConfig`]: for each one it
//! creates the destination namespace, a [`MirrorSource`] sharing ownership
//! of it, and a mirror pair per property.
//!
//! `Provider::from_config` can be called any number of times. A host
//! that loads the provider as a plugin goes through [`install`] instead,
//! which succeeds exactly once per process.

use crate::config::{MirrorConfig, ProviderConfig};
use once_cell::sync::OnceCell;
use statemirror_core::{MirrorError, PropertySpec, Result};
use statemirror_primitives::{MirrorSource, Namespace, Node};
use std::sync::Arc;
use tracing::{error, info};

static INSTALLED: OnceCell<Provider> = OnceCell::new();

/// A set of mirrored namespaces.
///
/// # Example
///
/// ```ignore
/// use statemirror::prelude::*;
///
/// let provider = Provider::from_config(ProviderConfig::power_emu())?;
/// let mut handle = Handle::new();
///
/// provider.node("BatteryEmu", "ChargePercentage")?.write(&mut handle, b"95", 0)?;
///
/// let mut buf = [0u8; 8];
/// let n = provider.node("Battery", "ChargePercentage")?.read(&mut handle, &mut buf, 0)?;
/// assert_eq!(&buf[..n], b"95");
/// ```
#[derive(Debug)]
pub struct Provider {
    name: String,
    sources: Vec<MirrorSource>,
}

impl Provider {
    /// Validate `config` and build every mirror pair it describes.
    pub fn from_config(config: ProviderConfig) -> Result<Self> {
        config.validate()?;

        let mut sources = Vec::with_capacity(config.mirrors.len());
        for mirror in &config.mirrors {
            let destination = Arc::new(Namespace::new(mirror.destination.as_str()));
            let source = MirrorSource::new(mirror.source.as_str(), destination);
            source.insert_all(&mirror.properties)?;
            sources.push(source);
        }

        info!(
            provider = %config.name,
            mirrors = sources.len(),
            properties = sources.iter().map(|s| s.namespace().len()).sum::<usize>(),
            "Provider built"
        );
        Ok(Self {
            name: config.name,
            sources,
        })
    }

    /// Create a builder for an ad-hoc configuration.
    pub fn builder(name: impl Into<String>) -> ProviderBuilder {
        ProviderBuilder::new(name)
    }

    /// Provider name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a source or destination namespace by name.
    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.sources.iter().find_map(|source| {
            if source.name() == name {
                Some(source.namespace())
            } else if source.destination().name() == name {
                Some(source.destination().as_ref())
            } else {
                None
            }
        })
    }

    /// Look up a node, failing with [`MirrorError::NotFound`].
    pub fn node(&self, namespace: &str, name: &str) -> Result<Arc<Node>> {
        self.namespace(namespace)
            .ok_or_else(|| MirrorError::NotFound(format!("namespace {}", namespace)))?
            .node(name)
    }

    /// Namespace names, each destination followed by its source.
    pub fn namespace_names(&self) -> Vec<&str> {
        self.sources
            .iter()
            .flat_map(|source| [source.destination().name(), source.name()])
            .collect()
    }

    /// Source namespaces with their bound destinations.
    pub fn sources(&self) -> &[MirrorSource] {
        &self.sources
    }
}

/// Install the process-wide provider.
///
/// Succeeds once per process. Every later call, including one racing the
/// first, fails with [`MirrorError::AlreadyInstalled`]; the host must
/// treat that as fatal. Only the winning call builds a provider: racing
/// callers wait for it and never construct their own. A call whose
/// config fails validation leaves nothing installed.
pub fn install(config: ProviderConfig) -> Result<&'static Provider> {
    let mut built = false;
    let provider = INSTALLED.get_or_try_init(|| {
        built = true;
        Provider::from_config(config)
    })?;

    if built {
        info!(provider = %provider.name, "Provider installed");
        Ok(provider)
    } else {
        error!(provider = %provider.name, "Provider is already installed");
        Err(MirrorError::AlreadyInstalled {
            name: provider.name.clone(),
        })
    }
}

/// The installed provider, if [`install`] succeeded.
pub fn installed() -> Option<&'static Provider> {
    INSTALLED.get()
}

/// Builder for provider configuration.
///
/// # Example
///
/// ```ignore
/// let provider = Provider::builder("sensors")
///     .mirror("SensorsEmu", "Sensors", [
///         PropertySpec::discrete("Door", "closed"),
///         PropertySpec::continuous("Temperature", "21"),
///     ])
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct ProviderBuilder {
    config: ProviderConfig,
}

impl ProviderBuilder {
    /// Create a builder with no mirrors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: ProviderConfig::new(name),
        }
    }

    /// Add a mirror from `source` into `destination`.
    pub fn mirror(
        mut self,
        source: impl Into<String>,
        destination: impl Into<String>,
        properties: impl IntoIterator<Item = PropertySpec>,
    ) -> Self {
        self.config.mirrors.push(MirrorConfig {
            source: source.into(),
            destination: destination.into(),
            properties: properties.into_iter().collect(),
        });
        self
    }

    /// Validate and build the provider.
    pub fn build(self) -> Result<Provider> {
        Provider::from_config(self.config)
    }
}
