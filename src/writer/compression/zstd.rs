use super::common::{CompressionTrait, Compressor};
use super::CompressionKind;
use crate::error::{Error, Result};

#[derive(Clone, Debug)]
pub struct ZstdCompression {
    compression_level: i32,
}

impl ZstdCompression {
    pub fn new() -> Self {
        Self {
            compression_level: 3,
        }
    }

    pub fn with_compression_level(mut self, compression_level: i32) -> Self {
        assert!(compression_level >= 1 && compression_level <= 22);
        self.compression_level = compression_level;
        self
    }

    pub fn compression_level(&self) -> i32 {
        self.compression_level
    }
}

impl CompressionTrait for ZstdCompression {
    fn kind(&self) -> CompressionKind {
        CompressionKind::Zstd
    }

    fn compressor(&self) -> Box<dyn Compressor + Send + Sync> {
        Box::new(ZstdCompressor {
            compression_level: self.compression_level,
        })
    }
}

struct ZstdCompressor {
    compression_level: i32,
}

impl Compressor for ZstdCompressor {
    fn max_compressed_length(&self, uncompressed_size: usize) -> usize {
        zstd_safe::compress_bound(uncompressed_size)
    }

    fn compress(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        ::zstd::bulk::compress_to_buffer(input, output, self.compression_level)
            .map_err(|e| Error::compression(CompressionKind::Zstd, e))
    }
}
