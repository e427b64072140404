// src/lib.rs

//! # wallet-keys
//!
//! Deterministic key derivation from BIP-39 mnemonic phrases, under two
//! independent schemes:
//!
//! - **Hierarchical (secp256k1)**: seed → master extended key under the fixed
//!   account path `m/44'/223'/0'`, then change level `0` and a caller-chosen
//!   index → ECDSA keypair. See [`crypto::Secp256k1Deriver`].
//! - **Direct (ed25519)**: normalized phrase → BIP-39 seed (empty passphrase)
//!   → first 32 bytes → signing keypair. See [`crypto::Ed25519Deriver`].
//!
//! The ed25519 private key can be exported as a PKCS#8 `PRIVATE KEY` PEM
//! block written with owner-only permissions via [`crypto::export`].
//!
//! Everything here is a pure function of its inputs — the only randomness is
//! fresh-mnemonic generation in [`crypto::SeedPhrase`], and the only I/O is
//! the single file write in the export path.

pub mod crypto;
pub mod error;

pub use crypto::export::export_private_pem;
pub use crypto::{Ed25519Deriver, Secp256k1Deriver, SeedPhrase, WordCount};
pub use error::{DerivationError, KeyError, KeyResult, SeedError};
