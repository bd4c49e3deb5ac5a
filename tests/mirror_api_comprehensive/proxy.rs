//! Write Proxy Tests
//!
//! Partial write assembly, truncation and failure propagation.

use crate::*;
use proptest::prelude::*;

#[test]
fn test_contiguous_chunks_round_trip() {
    let (_source, pair) = discrete_pair("");
    let mut handle = Handle::new();
    let value = b"the quick brown fox";

    for (i, chunk) in value.chunks(4).enumerate() {
        pair.proxy().write(&mut handle, chunk, i * 4).unwrap();
    }

    assert_eq!(read_chunked(pair.cell(), 5), value);
}

#[test]
fn test_each_write_forwards_full_value() {
    let (_source, pair) = discrete_pair("");
    let mut handle = Handle::new();

    assert_eq!(pair.proxy().write(&mut handle, b"12", 0).unwrap(), 2);
    assert_eq!(pair.cell().value().unwrap(), b"12");
    assert_eq!(pair.proxy().write(&mut handle, b"34", 2).unwrap(), 4);
    assert_eq!(pair.cell().value().unwrap(), b"1234");
}

#[test]
fn test_empty_write_resets_at_any_offset() {
    for offset in [0, 1, 17, 4096] {
        let (_source, pair) = discrete_pair("100");
        let mut handle = Handle::new();
        pair.proxy().write(&mut handle, b"charging", 0).unwrap();

        assert_eq!(pair.proxy().write(&mut handle, b"", offset).unwrap(), 0);
        assert_eq!(read_chunked(pair.cell(), 8), b"");

        let mut dst = [0u8; 8];
        assert_eq!(pair.cell().read(&mut handle, &mut dst, 0).unwrap(), 0);
    }
}

#[test]
fn test_write_after_truncate_starts_fresh() {
    let (_source, pair) = discrete_pair("");
    let mut handle = Handle::new();
    pair.proxy().write(&mut handle, b"100000", 0).unwrap();
    pair.proxy().write(&mut handle, b"", 0).unwrap();
    pair.proxy().write(&mut handle, b"42", 0).unwrap();

    assert_eq!(pair.cell().value().unwrap(), b"42");
    assert_eq!(pair.proxy().size(), 2);
}

#[test]
fn test_non_contiguous_write_zero_fills_gap() {
    let (_source, pair) = discrete_pair("");
    let mut handle = Handle::new();
    pair.proxy().write(&mut handle, b"A", 0).unwrap();
    pair.proxy().write(&mut handle, b"B", 100).unwrap();

    let value = pair.cell().value().unwrap();
    assert_eq!(value.len(), 101);
    assert_eq!(value[0], b'A');
    assert!(value[1..100].iter().all(|&b| b == 0));
    assert_eq!(value[100], b'B');
}

#[test]
fn test_reported_size() {
    let (_source, pair) = discrete_pair("100");
    let mut handle = Handle::new();
    assert_eq!(pair.proxy().size(), SIZE_FLOOR);

    pair.proxy().write(&mut handle, b"95", 0).unwrap();
    assert_eq!(pair.proxy().size(), 2);
    pair.proxy().write(&mut handle, b"x", 9).unwrap();
    assert_eq!(pair.proxy().size(), 10);
    pair.proxy().write(&mut handle, b"", 0).unwrap();
    assert_eq!(pair.proxy().size(), 0);
}

#[test]
fn test_injected_updater_failure_propagates() {
    init_tracing();
    let key = PropertyKey::new("Src", "Strict");
    let cell = ContinuousCell::new(PropertyKey::new("Dst", "Strict"), "0");
    let forward = cell.updater();
    let update: statemirror::Updater = Arc::new(move |value: &[u8]| {
        if value.iter().all(u8::is_ascii_digit) {
            forward(value)
        } else {
            Err(Error::UpdateFailed {
                key: PropertyKey::new("Dst", "Strict"),
                reason: "not a number".to_string(),
            })
        }
    });
    let proxy = Node::Writer(WriteProxy::new(key, update));
    let mut handle = Handle::new();

    assert_eq!(proxy.write(&mut handle, b"12", 0).unwrap(), 2);
    let err = proxy.write(&mut handle, b"x", 2).unwrap_err();
    assert!(matches!(err, Error::UpdateFailed { .. }));
    assert_eq!(cell.snapshot(), b"12");
}

#[test]
fn test_detached_cell() {
    init_tracing();
    let cell = DiscreteCell::new(PropertyKey::new("Dst", "Gone"), "1");
    let proxy = WriteProxy::new(PropertyKey::new("Src", "Gone"), cell.updater());
    drop(cell);

    assert!(matches!(
        proxy.write(b"2", 0).unwrap_err(),
        Error::Detached { .. }
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any contiguous chunking of a value reads back verbatim.
    #[test]
    fn prop_chunked_write_round_trip(
        value in proptest::collection::vec(any::<u8>(), 1..600),
        write_chunk in 1usize..97,
        read_chunk in 1usize..97,
    ) {
        let source = MirrorSource::new("Src", Arc::new(Namespace::new("Dst")));
        let pair = source.insert(&PropertySpec::continuous("Value", "seed")).unwrap();
        let mut handle = Handle::new();

        for (i, chunk) in value.chunks(write_chunk).enumerate() {
            pair.proxy().write(&mut handle, chunk, i * write_chunk).unwrap();
        }

        prop_assert_eq!(read_chunked(pair.cell(), read_chunk), value.clone());
        prop_assert_eq!(pair.cell().size(), value.len().max(SIZE_FLOOR));
    }
}
