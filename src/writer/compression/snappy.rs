use super::common::{CompressionTrait, Compressor};
use super::CompressionKind;
use crate::error::{Error, Result};

#[derive(Clone, Debug)]
pub struct SnappyCompression {
    _dummy: (),
}

impl SnappyCompression {
    pub fn new() -> SnappyCompression {
        SnappyCompression { _dummy: () }
    }
}

impl CompressionTrait for SnappyCompression {
    fn kind(&self) -> CompressionKind {
        CompressionKind::Snappy
    }

    fn compressor(&self) -> Box<dyn Compressor + Send + Sync> {
        Box::new(SnappyCompressor)
    }
}

struct SnappyCompressor;

impl Compressor for SnappyCompressor {
    // snap reports 0 for inputs it cannot encode; `compress` rejects those anyway.
    fn max_compressed_length(&self, uncompressed_size: usize) -> usize {
        match snap::raw::max_compress_len(uncompressed_size) {
            0 if uncompressed_size > 0 => usize::MAX,
            len => len,
        }
    }

    fn compress(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        // Encoder::compress takes &mut self.
        snap::raw::Encoder::new()
            .compress(input, output)
            .map_err(|e| Error::compression(CompressionKind::Snappy, e))
    }
}
