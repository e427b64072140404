// src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation — BIP-32 / BIP-44
//
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki
//
// Master derivation walks the fixed hardened account path m/44'/223'/0'.
// Below the account key, the change level (0) and the address index are
// derived NON-hardened, exactly as the reference implementation calls them.
// Raw child numbers are passed through unchanged, so an index with the high
// bit set selects hardened derivation per the BIP-32 encoding.

use crate::crypto::paths;
use crate::error::{DerivationError, KeyResult};
use bip32::{ChildNumber, XPrv};
use k256::ecdsa::{SigningKey, VerifyingKey};

/// secp256k1 Key Deriver — BIP-32 Standard
///
/// # Security
/// - `XPrv` and `SigningKey` zeroize their key material on drop
/// - Intermediate extended keys are dropped as soon as the child exists
/// - Pure functions of their inputs: no caching, no randomness
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Derive the account-level master extended private key from a seed.
    ///
    /// Builds the BIP-32 root from `seed`, then applies hardened derivation
    /// for every level of [`paths::ACCOUNT_PATH`] in path order. Seed length
    /// checks are delegated to the bip32 library, which rejects malformed
    /// lengths.
    ///
    /// Deterministic: the same seed always yields the same extended key.
    pub fn derive_master_xprv(seed: &[u8]) -> KeyResult<XPrv> {
        let path = paths::account_derivation_path()?;

        let master = XPrv::derive_from_path(seed, path).map_err(|e| {
            DerivationError::MasterKey(format!("'{}' from seed: {}", paths::ACCOUNT_PATH, e))
        })?;

        Ok(master)
    }

    /// Derive the `index`-th grandchild keypair below the account key.
    ///
    /// Applies the change level ([`paths::CHANGE_INDEX`], non-hardened),
    /// then `index` (non-hardened for values below 2^31; values with the
    /// high bit set are the caller opting into hardened derivation), and
    /// extracts the ECDSA keypair from the leaf. No index is rejected up
    /// front.
    ///
    /// Deterministic per `(master, index)`.
    pub fn derive_grandchild_keypair(
        master: &XPrv,
        index: u32,
    ) -> KeyResult<(SigningKey, VerifyingKey)> {
        // First apply the change level.
        let change_xprv = master
            .derive_child(ChildNumber(paths::CHANGE_INDEX))
            .map_err(|e| DerivationError::ChildKey(format!("change level: {}", e)))?;

        let grandchild_xprv = change_xprv
            .derive_child(ChildNumber(index))
            .map_err(|e| DerivationError::ChildKey(format!("index {}: {}", index, e)))?;

        let private_key = grandchild_xprv.private_key().clone();
        let public_key = VerifyingKey::from(&private_key);
        Ok((private_key, public_key))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bip32::DerivationPath;
    use std::str::FromStr;

    const TEST_SEED: &str = "16270f7b026afe7a3746efbfcf43e083500951db9e2699d1e4f372515dabcc80459b9181c3937b5faa4b8f7602f886553d2c32c5f12f3331cef40153aead4de6";

    // Account-level private keys under m/44'/223'/0', computed with an
    // independent BIP-32 implementation (HMAC-SHA512 + scalar addition mod
    // the secp256k1 group order, itself checked against the BIP-32 spec
    // test vector 1).
    const TEST_SEED_ACCOUNT_KEY: &str =
        "6bc3e1daf6a76a73a152ea2563d873ca22094fc73a7eae6abf99308241b9d22e";
    const ZERO_SEED_ACCOUNT_KEY: &str =
        "4fb9da7038dfd34adba6810c3ba7292808e33da86a476348ad6541e28dea9325";

    fn test_seed() -> Vec<u8> {
        hex::decode(TEST_SEED).unwrap()
    }

    #[test]
    fn test_master_derivation_deterministic() {
        let seed = test_seed();
        let m1 = Secp256k1Deriver::derive_master_xprv(&seed).unwrap();
        let m2 = Secp256k1Deriver::derive_master_xprv(&seed).unwrap();
        assert_eq!(
            m1.private_key().to_bytes(),
            m2.private_key().to_bytes()
        );
    }

    #[test]
    fn test_master_reference_vector() {
        // Pins the derivation math against an externally computed value for
        // m/44'/223'/0'; any deviation in path order or hardening changes
        // this key.
        let seed = test_seed();
        let master = Secp256k1Deriver::derive_master_xprv(&seed).unwrap();
        assert_eq!(
            hex::encode(master.private_key().to_bytes()),
            TEST_SEED_ACCOUNT_KEY
        );
    }

    #[test]
    fn test_master_matches_one_shot_path() {
        // The constant in paths.rs must spell exactly this literal path.
        let seed = test_seed();
        let master = Secp256k1Deriver::derive_master_xprv(&seed).unwrap();

        let path = DerivationPath::from_str("m/44'/223'/0'").unwrap();
        let reference = XPrv::derive_from_path(&seed, &path).unwrap();

        assert_eq!(
            master.private_key().to_bytes(),
            reference.private_key().to_bytes()
        );
    }

    #[test]
    fn test_grandchild_matches_full_path() {
        // Grandchild derivation is m/44'/223'/0'/0/{i} with the last two
        // levels non-hardened.
        let seed = test_seed();
        let master = Secp256k1Deriver::derive_master_xprv(&seed).unwrap();

        for index in [0u32, 1, 7] {
            let (private, _) = Secp256k1Deriver::derive_grandchild_keypair(&master, index).unwrap();

            let full = DerivationPath::from_str(&format!("m/44'/223'/0'/0/{}", index)).unwrap();
            let reference = XPrv::derive_from_path(&seed, &full).unwrap();

            assert_eq!(
                private.to_bytes(),
                reference.private_key().to_bytes(),
                "index {} diverged from one-shot path derivation",
                index
            );
        }
    }

    #[test]
    fn test_grandchild_deterministic() {
        let seed = test_seed();
        let master = Secp256k1Deriver::derive_master_xprv(&seed).unwrap();

        let (p1, pub1) = Secp256k1Deriver::derive_grandchild_keypair(&master, 3).unwrap();
        let (p2, pub2) = Secp256k1Deriver::derive_grandchild_keypair(&master, 3).unwrap();
        assert_eq!(p1.to_bytes(), p2.to_bytes());
        assert_eq!(pub1, pub2);
    }

    #[test]
    fn test_index_distinctness() {
        let seed = test_seed();
        let master = Secp256k1Deriver::derive_master_xprv(&seed).unwrap();

        let keys: Vec<_> = (0..5)
            .map(|i| {
                Secp256k1Deriver::derive_grandchild_keypair(&master, i)
                    .unwrap()
                    .0
                    .to_bytes()
            })
            .collect();

        for i in 0..keys.len() {
            for j in (i + 1)..keys.len() {
                assert_ne!(keys[i], keys[j], "indices {} and {} collided", i, j);
            }
        }
    }

    #[test]
    fn test_public_key_matches_private() {
        let seed = test_seed();
        let master = Secp256k1Deriver::derive_master_xprv(&seed).unwrap();
        let (private, public) = Secp256k1Deriver::derive_grandchild_keypair(&master, 0).unwrap();
        assert_eq!(VerifyingKey::from(&private), public);
    }

    #[test]
    fn test_zero_seed_scenario() {
        // An all-zero 64-byte seed is a valid BIP-32 seed; derivation must
        // succeed and distinct indices must yield distinct keys.
        let seed = [0u8; 64];
        let master = Secp256k1Deriver::derive_master_xprv(&seed).unwrap();
        assert_eq!(
            hex::encode(master.private_key().to_bytes()),
            ZERO_SEED_ACCOUNT_KEY
        );

        let again = Secp256k1Deriver::derive_master_xprv(&seed).unwrap();
        assert_eq!(
            master.private_key().to_bytes(),
            again.private_key().to_bytes()
        );

        let (k0, _) = Secp256k1Deriver::derive_grandchild_keypair(&master, 0).unwrap();
        let (k1, _) = Secp256k1Deriver::derive_grandchild_keypair(&master, 1).unwrap();
        assert_ne!(k0.to_bytes(), k1.to_bytes());
    }

    #[test]
    fn test_rejects_malformed_seed() {
        // Length validation is the bip32 library's job; an 8-byte seed is
        // below the BIP-32 minimum and must surface as a derivation error.
        let result = Secp256k1Deriver::derive_master_xprv(&[0u8; 8]);
        assert!(result.is_err());
    }
}
