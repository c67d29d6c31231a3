//! Contract dispatcher - named invocations onto the registry
//!
//! The host runtime (or the devnet gateway standing in for it) delivers an
//! invocation as a function name plus string arguments. This module is the
//! thin shim that routes those to `AssetRegistry` operations and encodes
//! the result payload:
//!
//! | Function        | Args       | Payload            |
//! |-----------------|------------|--------------------|
//! | InitLedger      | ()         | empty              |
//! | CreateAsset     | (id, name) | empty              |
//! | ReadAsset       | (id)       | Asset JSON         |
//! | AssetExists     | (id)       | JSON boolean       |
//! | DeleteAsset     | (id)       | empty              |
//! | DeleteAllAssets | ()         | empty              |
//! | GetAllAssets    | ()         | JSON array of Asset|

use thiserror::Error;

use crate::error::RegistryError;
use crate::registry::AssetRegistry;
use crate::state_store::StateStore;

/// Dispatch error types
///
/// Routing failures (unknown name, wrong arity) are host-side problems and
/// never reach the registry; everything else is the registry's own error.
#[derive(Error, Debug)]
pub enum ContractError {
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("{function} expects {expected} argument(s), got {got}")]
    BadArity {
        function: &'static str,
        expected: usize,
        got: usize,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl ContractError {
    /// Stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            ContractError::UnknownFunction(_) => "UNKNOWN_FUNCTION",
            ContractError::BadArity { .. } => "BAD_ARITY",
            ContractError::Registry(e) => e.code(),
        }
    }

    /// HTTP status suggestion for the gateway
    pub fn http_status(&self) -> u16 {
        match self {
            ContractError::UnknownFunction(_) | ContractError::BadArity { .. } => 400,
            ContractError::Registry(e) => e.http_status(),
        }
    }
}

fn expect_args(
    function: &'static str,
    args: &[String],
    expected: usize,
) -> Result<(), ContractError> {
    if args.len() != expected {
        return Err(ContractError::BadArity {
            function,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// Execute one named invocation against the transaction's store.
///
/// Returns the operation's payload bytes; unit operations return an empty
/// payload. The payload for `ReadAsset` is the same canonical encoding the
/// world state holds.
pub fn dispatch(
    store: &mut dyn StateStore,
    function: &str,
    args: &[String],
) -> Result<Vec<u8>, ContractError> {
    match function {
        "InitLedger" => {
            expect_args("InitLedger", args, 0)?;
            AssetRegistry::init_ledger(store)?;
            Ok(Vec::new())
        }
        "CreateAsset" => {
            expect_args("CreateAsset", args, 2)?;
            AssetRegistry::create_asset(store, &args[0], &args[1])?;
            Ok(Vec::new())
        }
        "ReadAsset" => {
            expect_args("ReadAsset", args, 1)?;
            let asset = AssetRegistry::read_asset(&*store, &args[0])?;
            Ok(asset.encode().map_err(RegistryError::from)?)
        }
        "AssetExists" => {
            expect_args("AssetExists", args, 1)?;
            let exists = AssetRegistry::asset_exists(&*store, &args[0])?;
            Ok(serde_json::to_vec(&exists).map_err(RegistryError::from)?)
        }
        "DeleteAsset" => {
            expect_args("DeleteAsset", args, 1)?;
            AssetRegistry::delete_asset(store, &args[0])?;
            Ok(Vec::new())
        }
        "DeleteAllAssets" => {
            expect_args("DeleteAllAssets", args, 0)?;
            AssetRegistry::delete_all_assets(store)?;
            Ok(Vec::new())
        }
        "GetAllAssets" => {
            expect_args("GetAllAssets", args, 0)?;
            let assets = AssetRegistry::get_all_assets(&*store)?;
            Ok(serde_json::to_vec(&assets).map_err(RegistryError::from)?)
        }
        other => Err(ContractError::UnknownFunction(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mem_store::MemStateStore;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unit_operations_return_empty_payload() {
        let mut store = MemStateStore::new();
        assert!(dispatch(&mut store, "InitLedger", &[]).unwrap().is_empty());
        assert!(
            dispatch(&mut store, "CreateAsset", &args(&["A", "alpha"]))
                .unwrap()
                .is_empty()
        );
        assert!(
            dispatch(&mut store, "DeleteAsset", &args(&["A"]))
                .unwrap()
                .is_empty()
        );
        assert!(
            dispatch(&mut store, "DeleteAllAssets", &[])
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_read_asset_payload_is_canonical_json() {
        let mut store = MemStateStore::new();
        dispatch(&mut store, "CreateAsset", &args(&["A", "alpha"])).unwrap();

        let payload = dispatch(&mut store, "ReadAsset", &args(&["A"])).unwrap();
        assert_eq!(
            String::from_utf8(payload).unwrap(),
            r#"{"ID":"A","Name":"alpha","Temperature":0.0,"Timestamp":""}"#
        );
    }

    #[test]
    fn test_asset_exists_payload_is_json_boolean() {
        let mut store = MemStateStore::new();
        assert_eq!(
            dispatch(&mut store, "AssetExists", &args(&["A"])).unwrap(),
            b"false".to_vec()
        );
        dispatch(&mut store, "CreateAsset", &args(&["A", "a"])).unwrap();
        assert_eq!(
            dispatch(&mut store, "AssetExists", &args(&["A"])).unwrap(),
            b"true".to_vec()
        );
    }

    #[test]
    fn test_get_all_assets_payload_is_json_array() {
        let mut store = MemStateStore::new();
        assert_eq!(
            dispatch(&mut store, "GetAllAssets", &[]).unwrap(),
            b"[]".to_vec()
        );

        dispatch(&mut store, "CreateAsset", &args(&["A", "a"])).unwrap();
        let payload = dispatch(&mut store, "GetAllAssets", &[]).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&payload).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
        assert_eq!(parsed[0]["ID"], "A");
    }

    #[test]
    fn test_unknown_function_is_rejected() {
        let mut store = MemStateStore::new();
        let err = dispatch(&mut store, "TransferAsset", &[]).unwrap_err();
        assert_eq!(err.to_string(), "unknown function: TransferAsset");
        assert_eq!(err.code(), "UNKNOWN_FUNCTION");
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn test_bad_arity_is_rejected_before_touching_the_store() {
        let mut store = MemStateStore::new();
        let err = dispatch(&mut store, "CreateAsset", &args(&["only-id"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "CreateAsset expects 2 argument(s), got 1"
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_registry_errors_pass_through_with_codes() {
        let mut store = MemStateStore::new();
        dispatch(&mut store, "CreateAsset", &args(&["A", "a"])).unwrap();

        let err = dispatch(&mut store, "CreateAsset", &args(&["A", "b"])).unwrap_err();
        assert_eq!(err.to_string(), "the asset A already exists");
        assert_eq!(err.code(), "ASSET_ALREADY_EXISTS");
        assert_eq!(err.http_status(), 409);

        let err = dispatch(&mut store, "ReadAsset", &args(&["ghost"])).unwrap_err();
        assert_eq!(err.code(), "ASSET_NOT_FOUND");
        assert_eq!(err.http_status(), 404);
    }
}
