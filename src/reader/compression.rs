use std::sync::Arc;

use super::decrypting_decompressor::DecryptingDecompressor;
use super::decryptor::Decryptor;
use crate::error::{Error, Result};
use crate::writer::{Compression, CompressionKind};

/// Inverse of `Compressor`.
pub trait Decompressor {
    /// Decompresses `input` into the front of `output` and returns the number of bytes
    /// written. `output` must be large enough for the whole block.
    fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<usize>;
}

macro_rules! forward_decompressor {
    ($($ptr:ty),*) => {$(
        impl<T: Decompressor + ?Sized> Decompressor for $ptr {
            fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
                (**self).decompress(input, output)
            }
        }
    )*};
}

forward_decompressor!(&T, Box<T>, Arc<T>);

impl Compression {
    pub fn decompressor(&self) -> Box<dyn Decompressor + Send + Sync> {
        match self.kind() {
            CompressionKind::None => Box::new(IdentityDecompressor),
            CompressionKind::Snappy => Box::new(SnappyDecompressor),
            CompressionKind::Zstd => Box::new(ZstdDecompressor),
        }
    }

    /// Pairs with `Compression::encrypting`: every block is decrypted, then decompressed.
    pub fn decrypting<D: Decryptor>(
        &self,
        decryptor: D,
    ) -> DecryptingDecompressor<Box<dyn Decompressor + Send + Sync>, D> {
        DecryptingDecompressor::new(self.decompressor(), decryptor)
    }
}

struct IdentityDecompressor;

impl Decompressor for IdentityDecompressor {
    fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        Error::check_capacity(input.len(), output.len())?;
        output[..input.len()].copy_from_slice(input);
        Ok(input.len())
    }
}

struct SnappyDecompressor;

impl Decompressor for SnappyDecompressor {
    fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        snap::raw::Decoder::new()
            .decompress(input, output)
            .map_err(|e| Error::decompression(CompressionKind::Snappy, e))
    }
}

struct ZstdDecompressor;

impl Decompressor for ZstdDecompressor {
    fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        zstd::bulk::decompress_to_buffer(input, output)
            .map_err(|e| Error::decompression(CompressionKind::Zstd, e))
    }
}
