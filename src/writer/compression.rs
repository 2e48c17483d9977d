use std::fmt;

use super::encrypting_compressor::EncryptingCompressor;
use super::encryptor::Encryptor;
pub use common::{CompressionTrait, Compressor};

pub use self::zstd::ZstdCompression;
pub use no_compression::NoCompression;
pub use snappy::SnappyCompression;

mod common;
mod no_compression;
mod snappy;
mod zstd;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompressionKind {
    None,
    Snappy,
    Zstd,
}

impl fmt::Display for CompressionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            CompressionKind::None => "none",
            CompressionKind::Snappy => "snappy",
            CompressionKind::Zstd => "zstd",
        })
    }
}

/// A configured block codec.
#[derive(Clone, Debug)]
pub struct Compression(CompressionEnum);

impl Compression {
    pub fn kind(&self) -> CompressionKind {
        self.0.kind()
    }

    pub fn compressor(&self) -> Box<dyn Compressor + Send + Sync> {
        self.0.compressor()
    }

    /// Composes this codec with `encryptor`: every block is compressed, then encrypted.
    pub fn encrypting<E: Encryptor>(
        &self,
        encryptor: E,
    ) -> EncryptingCompressor<Box<dyn Compressor + Send + Sync>, E> {
        EncryptingCompressor::new(self.compressor(), encryptor)
    }
}

#[derive(Clone, Debug)]
enum CompressionEnum {
    No(NoCompression),
    Snappy(SnappyCompression),
    Zstd(ZstdCompression),
}

impl CompressionTrait for CompressionEnum {
    fn kind(&self) -> CompressionKind {
        match self {
            CompressionEnum::No(x) => x.kind(),
            CompressionEnum::Snappy(x) => x.kind(),
            CompressionEnum::Zstd(x) => x.kind(),
        }
    }

    fn compressor(&self) -> Box<dyn Compressor + Send + Sync> {
        match self {
            CompressionEnum::No(x) => x.compressor(),
            CompressionEnum::Snappy(x) => x.compressor(),
            CompressionEnum::Zstd(x) => x.compressor(),
        }
    }
}

impl NoCompression {
    pub fn build(self) -> Compression {
        Compression(CompressionEnum::No(self))
    }
}

impl SnappyCompression {
    pub fn build(self) -> Compression {
        Compression(CompressionEnum::Snappy(self))
    }
}

impl ZstdCompression {
    pub fn build(self) -> Compression {
        Compression(CompressionEnum::Zstd(self))
    }
}

impl Default for Compression {
    fn default() -> Self {
        NoCompression::new().build()
    }
}
