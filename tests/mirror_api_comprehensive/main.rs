//! Mirror API Comprehensive Tests
//!
//! End-to-end tests through the public statemirror API.
//!
//! ## Modules
//!
//! - `cells`: read protocol, size floor, capability bits.
//! - `proxy`: partial writes, truncation, failure propagation.
//! - `pairs`: proxy-to-cell wiring and notification.
//! - `provider`: assembled power-emu provider.
//! - `concurrency`: snapshot consistency under concurrent writers.
//! - `config`: configuration files.

pub use statemirror::prelude::*;
pub use statemirror::{ContinuousCell, DiscreteCell, Operation, SIZE_FLOOR};
pub use std::sync::atomic::{AtomicUsize, Ordering};

mod config;
mod proxy;

/// Route library logs to the test output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Slot that counts notifications.
pub fn counting_slot() -> (Arc<AtomicUsize>, Arc<dyn NotificationSlot>) {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let slot: Arc<dyn NotificationSlot> = Arc::new(move |_: &PropertyKey| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    (count, slot)
}

/// Read a node from offset 0 in chunks of `chunk` bytes.
pub fn read_chunked(node: &Node, chunk: usize) -> Vec<u8> {
    let mut handle = Handle::new();
    let mut out = Vec::new();
    let mut buf = vec![0u8; chunk];
    loop {
        let n = node.read(&mut handle, &mut buf, out.len()).unwrap();
        if n == 0 {
            break;
        }
        out.extend_from_slice(&buf[..n]);
    }
    out
}

/// Fresh power-emu provider.
pub fn power_emu() -> Provider {
    init_tracing();
    Provider::from_config(ProviderConfig::power_emu()).unwrap()
}

/// Single discrete pair `Src/Value` -> `Dst/Value`.
pub fn discrete_pair(default: &str) -> (MirrorSource, MirrorPair) {
    init_tracing();
    let source = MirrorSource::new("Src", Arc::new(Namespace::new("Dst")));
    let pair = source
        .insert(&PropertySpec::discrete("Value", default))
        .unwrap();
    (source, pair)
}
