//! End-to-end contract flows through the public dispatch surface.
//!
//! These drive the library the way a host runtime would: named invocations
//! with string arguments, one store per ledger, assertions on payload bytes
//! and on the literal error strings clients match against.

use coldchain_ledger::mem_store::MemStateStore;
use coldchain_ledger::state_store::{KvPair, StateStore};
use coldchain_ledger::{AssetRegistry, dispatch};

/// Helper to build string args
fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Helper to run an invocation that must succeed
fn invoke_ok(store: &mut MemStateStore, function: &str, arguments: &[&str]) -> Vec<u8> {
    dispatch(store, function, &args(arguments))
        .unwrap_or_else(|e| panic!("{} should succeed, got: {}", function, e))
}

/// Full key/value dump in scan order
fn dump(store: &MemStateStore) -> Vec<KvPair> {
    store
        .range_scan("", "")
        .unwrap()
        .map(|pair| pair.unwrap())
        .collect()
}

#[test]
fn init_ledger_seeds_exactly_three_sensors() {
    let mut store = MemStateStore::new();
    invoke_ok(&mut store, "InitLedger", &[]);

    let payload = invoke_ok(&mut store, "GetAllAssets", &[]);
    let assets: serde_json::Value = serde_json::from_slice(&payload).unwrap();
    let assets = assets.as_array().unwrap();

    assert_eq!(assets.len(), 3);
    let ids: Vec<&str> = assets.iter().map(|a| a["ID"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["Sensor1", "Sensor2", "Sensor3"]);
    assert_eq!(assets[0]["Temperature"], 25.5);
    assert_eq!(assets[1]["Temperature"], 28.0);
    assert_eq!(assets[2]["Temperature"], 24.8);
    assert_eq!(assets[0]["Timestamp"], "2024-04-26T10:00:00Z");
}

#[test]
fn duplicate_create_keeps_the_first_record() {
    let mut store = MemStateStore::new();
    invoke_ok(&mut store, "CreateAsset", &["A", "alpha"]);

    let err = dispatch(&mut store, "CreateAsset", &args(&["A", "beta"])).unwrap_err();
    assert_eq!(err.to_string(), "the asset A already exists");

    let payload = invoke_ok(&mut store, "ReadAsset", &["A"]);
    let asset: serde_json::Value = serde_json::from_slice(&payload).unwrap();
    assert_eq!(asset["Name"], "alpha");
}

#[test]
fn deleted_asset_reads_as_not_found() {
    let mut store = MemStateStore::new();
    invoke_ok(&mut store, "CreateAsset", &["B", "b"]);
    invoke_ok(&mut store, "DeleteAsset", &["B"]);

    let err = dispatch(&mut store, "ReadAsset", &args(&["B"])).unwrap_err();
    assert_eq!(err.to_string(), "the asset B does not exist");

    let exists = invoke_ok(&mut store, "AssetExists", &["B"]);
    assert_eq!(exists, b"false".to_vec());
}

#[test]
fn enumeration_is_lexicographic_with_unset_readings() {
    let mut store = MemStateStore::new();
    // Inserted out of order on purpose.
    invoke_ok(&mut store, "CreateAsset", &["X", "x"]);
    invoke_ok(&mut store, "CreateAsset", &["Z", "z"]);
    invoke_ok(&mut store, "CreateAsset", &["Y", "y"]);

    let payload = invoke_ok(&mut store, "GetAllAssets", &[]);
    let assets: serde_json::Value = serde_json::from_slice(&payload).unwrap();
    let assets = assets.as_array().unwrap();

    let ids: Vec<&str> = assets.iter().map(|a| a["ID"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["X", "Y", "Z"]);
    for asset in assets {
        assert_eq!(asset["Temperature"], 0.0);
        assert_eq!(asset["Timestamp"], "");
    }
}

#[test]
fn delete_all_after_seed_leaves_nothing() {
    let mut store = MemStateStore::new();
    invoke_ok(&mut store, "InitLedger", &[]);
    invoke_ok(&mut store, "DeleteAllAssets", &[]);

    let payload = invoke_ok(&mut store, "GetAllAssets", &[]);
    assert_eq!(payload, b"[]".to_vec());
    assert!(store.is_empty());
}

#[test]
fn delete_on_empty_store_is_not_found_and_harmless() {
    let mut store = MemStateStore::new();
    let err = dispatch(&mut store, "DeleteAsset", &args(&["absent"])).unwrap_err();
    assert_eq!(err.to_string(), "the asset absent does not exist");

    let payload = invoke_ok(&mut store, "GetAllAssets", &[]);
    assert_eq!(payload, b"[]".to_vec());
}

#[test]
fn reinitialization_overwrites_seed_keys_only() {
    let mut store = MemStateStore::new();
    invoke_ok(&mut store, "InitLedger", &[]);
    invoke_ok(&mut store, "CreateAsset", &["Crate42", "Crate 42"]);
    invoke_ok(&mut store, "DeleteAsset", &["Sensor3"]);

    // Second bootstrap restores Sensor3 and keeps Crate42.
    invoke_ok(&mut store, "InitLedger", &[]);
    let payload = invoke_ok(&mut store, "GetAllAssets", &[]);
    let assets: serde_json::Value = serde_json::from_slice(&payload).unwrap();
    let ids: Vec<&str> = assets
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["ID"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["Crate42", "Sensor1", "Sensor2", "Sensor3"]);
}

#[test]
fn replaying_one_invocation_log_on_two_ledgers_converges() {
    // The determinism the endorsement model depends on: the same
    // invocation sequence against two empty stores must leave
    // byte-identical world states.
    let log: Vec<(&str, Vec<String>)> = vec![
        ("InitLedger", args(&[])),
        ("CreateAsset", args(&["Crate7", "Crate 7"])),
        ("DeleteAsset", args(&["Sensor2"])),
        ("CreateAsset", args(&["Crate1", "Crate 1"])),
        ("DeleteAsset", args(&["missing"])), // fails on both, mutates neither
        ("InitLedger", args(&[])),
    ];

    let mut first = MemStateStore::new();
    let mut second = MemStateStore::new();
    for store in [&mut first, &mut second] {
        for (function, arguments) in &log {
            // Failures are part of the log; both replicas see the same ones.
            let _ = dispatch(store, function, arguments);
        }
    }

    let first_dump = dump(&first);
    assert_eq!(first_dump, dump(&second));
    assert!(!first_dump.is_empty());
}

#[test]
fn stored_bytes_are_the_read_payload() {
    // What ReadAsset returns is exactly what the world state holds.
    let mut store = MemStateStore::new();
    invoke_ok(&mut store, "CreateAsset", &["P", "pallet"]);

    let stored = store.get("P").unwrap().unwrap();
    let payload = invoke_ok(&mut store, "ReadAsset", &["P"]);
    assert_eq!(stored, payload);

    // And decoding then re-encoding reproduces them byte for byte.
    let asset = AssetRegistry::read_asset(&store, "P").unwrap();
    assert_eq!(asset.encode().unwrap(), stored);
}
