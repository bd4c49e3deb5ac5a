//! Configuration Tests
//!
//! Loading provider definitions from JSON files.

use crate::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_from_file() {
    init_tracing();
    let file = write_config(
        r#"{
            "name": "lights",
            "mirrors": [{
                "source": "LightsEmu",
                "destination": "Lights",
                "properties": [
                    {"name": "Kitchen", "default": "off"},
                    {"name": "Brightness", "default": "50", "kind": "continuous"}
                ]
            }]
        }"#,
    );

    let config = ProviderConfig::from_path(file.path()).unwrap();
    let provider = Provider::from_config(config).unwrap();

    let kitchen = provider.node("Lights", "Kitchen").unwrap();
    assert!(kitchen.attr().is_discrete());
    assert_eq!(read_chunked(&kitchen, 2), b"off");

    let brightness = provider.node("Lights", "Brightness").unwrap();
    assert_eq!(brightness.attr(), NodeAttr::READ);
}

#[test]
fn test_saved_power_emu_reloads() {
    let json = ProviderConfig::power_emu().to_json_string().unwrap();
    let file = write_config(&json);

    let config = ProviderConfig::from_path(file.path()).unwrap();
    assert_eq!(config, ProviderConfig::power_emu());
}

#[test]
fn test_invalid_file_is_rejected() {
    let file = write_config(r#"{"name": "x", "mirrors": [{"source": "A"}]}"#);
    let err = ProviderConfig::from_path(file.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn test_duplicate_namespace_in_file() {
    let file = write_config(
        r#"{
            "name": "dup",
            "mirrors": [
                {"source": "A", "destination": "B"},
                {"source": "B", "destination": "C"}
            ]
        }"#,
    );
    let err = ProviderConfig::from_path(file.path()).unwrap_err();
    assert!(err.to_string().contains("namespace B"));
}

#[test]
fn test_mirror_without_properties() {
    let file =
        write_config(r#"{"name": "empty", "mirrors": [{"source": "A", "destination": "B"}]}"#);
    let config = ProviderConfig::from_path(file.path()).unwrap();
    let provider = Provider::from_config(config).unwrap();
    assert!(provider.namespace("A").unwrap().is_empty());
    assert!(provider.namespace("B").unwrap().is_empty());
}
