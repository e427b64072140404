// src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine - Two Independent Pipelines
//
// ┌────────────────────────────────────────────────────────────┐
// │  BIP-39 mnemonic phrase                                    │
// │        │                                                   │
// │        ├── 64-byte seed ──► secp256k1 (BIP-32/BIP-44)      │
// │        │                    m/44'/223'/0' + /0/{index}     │
// │        │                                                   │
// │        └── 64-byte seed, first 32 bytes ──► ed25519        │
// │                                             (no HD path)   │
// └────────────────────────────────────────────────────────────┘
//
// The two pipelines share nothing past the seed: the ed25519 side performs
// no hierarchical derivation at all.

pub mod ed25519;
pub mod secp256k1;

// Re-exports
pub use ed25519::Ed25519Deriver;
pub use secp256k1::Secp256k1Deriver;
