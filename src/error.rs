use std::error::Error as StdError;
use thiserror::Error;

use crate::writer::CompressionKind;

pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{codec} compression failed: {source}")]
    Compression {
        codec: CompressionKind,
        #[source]
        source: BoxError,
    },

    #[error("{codec} decompression failed: {source}")]
    Decompression {
        codec: CompressionKind,
        #[source]
        source: BoxError,
    },

    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("decryption failed: {0}")]
    Decryption(String),

    /// The result does not fit in the caller's output region.
    #[error("output buffer overflow: {required} bytes required, {available} available")]
    BufferOverflow { required: usize, available: usize },

    #[error("{operation} is not supported by {component}")]
    Unsupported {
        operation: &'static str,
        component: &'static str,
    },

    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },
}

impl Error {
    pub(crate) fn compression<E>(codec: CompressionKind, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Error::Compression {
            codec,
            source: source.into(),
        }
    }

    pub(crate) fn decompression<E>(codec: CompressionKind, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Error::Decompression {
            codec,
            source: source.into(),
        }
    }

    pub(crate) fn check_capacity(required: usize, available: usize) -> Result<()> {
        if required > available {
            Err(Error::BufferOverflow {
                required,
                available,
            })
        } else {
            Ok(())
        }
    }
}
