// src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Key Derivation — Direct Seed Truncation
//
// This pipeline performs NO hierarchical derivation: the normalized phrase
// is stretched to a 64-byte BIP-39 seed with the empty passphrase, and the
// FIRST 32 BYTES become the ed25519 signing seed. Both the truncation and
// the whitespace normalization are behavior-defining; changing either
// changes every key derived from the same mnemonic.

use crate::crypto::mnemonic::SeedPhrase;
use crate::error::KeyResult;
use ed25519_dalek::{SigningKey, VerifyingKey};
use zeroize::Zeroize;

/// Ed25519 Key Deriver — direct seed-to-keypair scheme
///
/// # Security
/// - The intermediate 64-byte seed is held in a `Zeroizing` buffer
/// - The truncated 32-byte signing seed is zeroized after key construction
/// - `SigningKey` zeroizes on drop (dalek `zeroize` feature)
pub struct Ed25519Deriver;

impl Ed25519Deriver {
    /// Derive an ed25519 keypair from a mnemonic phrase.
    ///
    /// Whitespace runs in `phrase` are collapsed to single spaces, the
    /// BIP-39 library validates word list and checksum, and the resulting
    /// seed (empty passphrase) is truncated to its first 32 bytes to form
    /// the signing seed.
    ///
    /// Deterministic per distinct normalized phrase. Fails with
    /// [`crate::error::SeedError`] on an invalid mnemonic.
    pub fn generate(phrase: &str) -> KeyResult<(SigningKey, VerifyingKey)> {
        let seed = SeedPhrase::parse(phrase)?.to_seed(None);

        let mut signing_seed = [0u8; 32];
        signing_seed.copy_from_slice(&seed[..32]);

        let signing_key = SigningKey::from_bytes(&signing_seed);
        signing_seed.zeroize();

        let verifying_key = signing_key.verifying_key();
        Ok((signing_key, verifying_key))
    }
}

// =============================================================================
// TESTS
// =============================================================================
