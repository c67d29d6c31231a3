//! Asset - the cold-chain record and its canonical byte form
//!
//! One asset is one monitored unit: an id, a human label, the last reported
//! temperature, and the RFC-3339 time of that report. The struct doubles as
//! the codec: its serde field order *is* the wire order, and the encoded
//! bytes are what sits in the world state.
//!
//! # Determinism
//!
//! Every endorsing replica re-executes a transaction and must produce the
//! same value bytes. `serde_json` emits fields in declaration order and
//! prints floats in their shortest round-trip form, so `encode` is
//! byte-stable across replicas and re-encoding a decoded asset reproduces
//! the stored bytes exactly.

use serde::{Deserialize, Serialize};

/// A registered cold-chain asset, keyed in the world state by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Primary key, unique across the registry.
    #[serde(rename = "ID", default)]
    pub id: String,
    /// Human label. May be empty.
    #[serde(rename = "Name", default)]
    pub name: String,
    /// Last reported temperature. 0 until a reading arrives.
    #[serde(rename = "Temperature", default)]
    pub temperature: f64,
    /// RFC-3339 UTC time of the last reading. Empty until one arrives.
    #[serde(rename = "Timestamp", default)]
    pub timestamp: String,
}

impl Asset {
    /// A freshly registered asset: identity only, no reading yet.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            temperature: 0.0,
            timestamp: String::new(),
        }
    }

    /// Canonical world-state encoding.
    ///
    /// Non-finite temperatures have no JSON form and serialize as `null`;
    /// such a record cannot be decoded back.
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Decode stored bytes. Missing fields default to zero/empty; a field
    /// of the wrong kind is an error.
    pub fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
