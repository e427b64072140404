// src/crypto/paths.rs
//
// Derivation Path Module - Fixed BIP-44 Account Path
// BIP-44 (Purpose), SLIP-44 coin type 223, account 0 — all hardened.

use crate::error::{DerivationError, KeyResult};
use bip32::DerivationPath;
use std::str::FromStr;
use std::sync::OnceLock;

/// Fixed account-level derivation path: purpose 44', coin type 223',
/// account 0'. Constant for the lifetime of the process; the change level
/// and address index below it are applied separately (non-hardened).
pub const ACCOUNT_PATH: &str = "m/44'/223'/0'";

/// Change level derived below the account key (external chain).
pub const CHANGE_INDEX: u32 = 0;

static PARSED_ACCOUNT_PATH: OnceLock<DerivationPath> = OnceLock::new();

/// Parsed form of [`ACCOUNT_PATH`], initialized on first use and immutable
/// afterwards. Parsing a compile-time constant is effectively infallible,
/// but the parse is a fallible operation and the error is surfaced rather
/// than unwrapped.
pub fn account_derivation_path() -> KeyResult<&'static DerivationPath> {
    if let Some(path) = PARSED_ACCOUNT_PATH.get() {
        return Ok(path);
    }

    let parsed = DerivationPath::from_str(ACCOUNT_PATH)
        .map_err(|e| DerivationError::InvalidPath(format!("'{}': {}", ACCOUNT_PATH, e)))?;

    // A concurrent initializer would have produced the identical value.
    Ok(PARSED_ACCOUNT_PATH.get_or_init(|| parsed))
}

// =============================================================================
// TESTS
// =============================================================================
