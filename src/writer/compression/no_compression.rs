use super::common::{CompressionTrait, Compressor};
use super::CompressionKind;
use crate::buffer::Buffer;
use crate::error::{Error, Result};

// The private field keeps construction going through `new`.
#[derive(Clone, Debug)]
pub struct NoCompression {
    _dummy: (),
}

impl NoCompression {
    pub fn new() -> NoCompression {
        NoCompression { _dummy: () }
    }
}

impl CompressionTrait for NoCompression {
    fn kind(&self) -> CompressionKind {
        CompressionKind::None
    }

    fn compressor(&self) -> Box<dyn Compressor + Send + Sync> {
        Box::new(IdentityCompressor)
    }
}

/// Passes blocks through unchanged.
struct IdentityCompressor;

impl Compressor for IdentityCompressor {
    fn max_compressed_length(&self, uncompressed_size: usize) -> usize {
        uncompressed_size
    }

    fn compress(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        Error::check_capacity(input.len(), output.len())?;
        output[..input.len()].copy_from_slice(input);
        Ok(input.len())
    }

    fn compress_into_buffer(&self, input: &[u8], output: &mut Buffer) -> Result<()> {
        output.write_bytes(input);
        Ok(())
    }
}
