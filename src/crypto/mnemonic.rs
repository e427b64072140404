// src/crypto/mnemonic.rs
//
// Mnemonic Module - BIP-39 Phrase Handling
// Normalization, validation (delegated to the bip39 crate) and
// PBKDF2-HMAC-SHA512 seed stretching.

use crate::error::{KeyResult, SeedError};
use bip39::Mnemonic;
use rand::{rngs::OsRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Supported word counts for fresh mnemonic generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }
}

/// Collapse every whitespace run in `raw` to a single ASCII space and strip
/// leading/trailing whitespace.
///
/// This exact rule is behavior-defining for the direct ed25519 pipeline:
/// every distinct normalized phrase yields a distinct seed, so the rule must
/// not change.
pub fn normalize_phrase(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A validated, whitespace-normalized BIP-39 mnemonic phrase.
///
/// Word-list membership and checksum validation are delegated entirely to
/// the `bip39` crate; this type performs no validation of its own beyond
/// normalization.
///
/// # Security
/// - **ZeroizeOnDrop**: the phrase is overwritten when the value is dropped.
/// - **No Debug Leak**: the `Debug` impl never prints the phrase.
/// - **CSPRNG**: fresh phrases draw entropy from `OsRng` only.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SeedPhrase {
    phrase: String,
    word_count: usize,
}

impl std::fmt::Debug for SeedPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedPhrase")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl SeedPhrase {
    /// Generate a fresh 12-word mnemonic (128-bit entropy).
    pub fn new() -> Self {
        Self::generate(WordCount::Twelve)
    }

    /// Generate a fresh mnemonic with the given word count.
    pub fn generate(word_count: WordCount) -> Self {
        let entropy_size = word_count.entropy_bytes();

        // Stack-allocated entropy buffer (max 32 bytes)
        let mut entropy = [0u8; 32];
        OsRng.fill_bytes(&mut entropy[..entropy_size]);

        let mnemonic =
            Mnemonic::from_entropy(&entropy[..entropy_size]).expect("valid entropy size");
        entropy.zeroize();

        Self {
            phrase: mnemonic.to_string(),
            word_count: word_count as usize,
        }
    }

    /// Parse a caller-supplied phrase: normalize whitespace, then let the
    /// BIP-39 library check word-list membership and checksum.
    pub fn parse(raw: &str) -> KeyResult<Self> {
        let normalized = normalize_phrase(raw);
        let mnemonic = Mnemonic::parse(&normalized).map_err(SeedError::from)?;

        Ok(Self {
            phrase: normalized,
            word_count: mnemonic.word_count(),
        })
    }

    /// The normalized phrase.
    ///
    /// # Warning
    /// Treat as secret material — never log this value.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }

    /// Stretch the phrase into a 64-byte seed (PBKDF2-HMAC-SHA512).
    ///
    /// Both derivation pipelines in this crate call this with `None`
    /// (empty passphrase); the parameter exists for callers that carry a
    /// BIP-39 passphrase of their own.
    pub fn to_seed(&self, passphrase: Option<&str>) -> Zeroizing<[u8; 64]> {
        let password = passphrase.unwrap_or("");
        let mnemonic = Mnemonic::parse(&self.phrase).expect("internal phrase is valid");
        Zeroizing::new(mnemonic.to_seed(password))
    }

    /// Full validation of a raw phrase: normalization + word list + checksum.
    #[inline]
    pub fn validate(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }
}

impl Default for SeedPhrase {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
