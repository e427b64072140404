use thiserror::Error;

pub type KeyResult<T> = std::result::Result<T, KeyError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Seed Error: {0}")]
    Seed(#[from] SeedError),

    #[error("Derivation Error: {0}")]
    Derivation(#[from] DerivationError),

    #[error("Encoding Error: {0}")]
    Encoding(String),

    #[error("IO Error: {0}")]
    Io(String),
}

/// Mnemonic-to-seed failures, surfaced from the BIP-39 library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("Word at position {0} not found in the BIP-39 wordlist.")]
    UnknownWord(usize),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP-39 error: {0}")]
    Bip39(String),
}

impl From<bip39::Error> for SeedError {
    fn from(e: bip39::Error) -> Self {
        match e {
            bip39::Error::UnknownWord(index) => SeedError::UnknownWord(index),
            bip39::Error::InvalidChecksum => SeedError::ChecksumFailed,
            other => SeedError::Bip39(other.to_string()),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DerivationError {
    #[error("Invalid derivation path: {0}")]
    InvalidPath(String),

    #[error("Master key derivation failed: {0}")]
    MasterKey(String),

    #[error("Child key derivation failed: {0}")]
    ChildKey(String),
}
