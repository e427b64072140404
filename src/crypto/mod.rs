// src/crypto/mod.rs

//! Core Cryptography Module
//!
//! Implements the fundamental operations of the key-derivation core:
//!
//! - **Mnemonic Handling**: BIP-39 phrase normalization, validation and seed
//!   stretching via [`SeedPhrase`].
//! - **Key Derivation**: BIP-32/BIP-44 secp256k1 account keys via
//!   [`Secp256k1Deriver`], direct ed25519 keypairs via [`Ed25519Deriver`].
//! - **Derivation Path**: the fixed hardened account path via [`paths`].
//! - **Export**: PKCS#8 PEM serialization with 0600 permissions via [`export`].

pub mod export;
pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

// Re-exports for cleaner API access
pub use key_deriver::{Ed25519Deriver, Secp256k1Deriver};
pub use mnemonic::{SeedPhrase, WordCount};
