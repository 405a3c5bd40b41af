// nfcdrv/src/error.rs

use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no NFC device found")]
    NoDeviceFound,

    #[error("device not connected")]
    NotConnected,

    #[error("invalid configuration option: {0:#04x}")]
    InvalidConfigOption(u8),

    #[error("unsupported MIFARE command: {0:#04x}")]
    UnsupportedCommand(u8),

    #[error("invalid block number: {0} (expected 0..=255)")]
    InvalidBlockNumber(i64),

    #[error("exchange failed: {0}")]
    ExchangeFailed(String),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("malformed MIFARE value block")]
    InvalidValueBlock,

    #[error("operation timed out")]
    Timeout,

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl Error {
    /// True for errors raised by argument validation, i.e. before any
    /// transport call was attempted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidConfigOption(_)
                | Error::UnsupportedCommand(_)
                | Error::InvalidBlockNumber(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
