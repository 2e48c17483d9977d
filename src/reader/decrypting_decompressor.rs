use log::trace;

use super::compression::Decompressor;
use super::decryptor::Decryptor;
use crate::error::Result;

/// Reads blocks written by `EncryptingCompressor`: decrypt, then decompress.
#[derive(Debug)]
pub struct DecryptingDecompressor<X, D> {
    decompressor: X,
    decryptor: D,
}

impl<X: Decompressor, D: Decryptor> DecryptingDecompressor<X, D> {
    pub fn new(decompressor: X, decryptor: D) -> Self {
        DecryptingDecompressor {
            decompressor,
            decryptor,
        }
    }
}

impl<X: Decompressor, D: Decryptor> Decompressor for DecryptingDecompressor<X, D> {
    fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let decrypted = self.decryptor.decrypt(input)?;
        let written = self.decompressor.decompress(&decrypted, output)?;
        trace!(
            "block: {} encrypted, {} compressed, {} raw",
            input.len(),
            decrypted.len(),
            written
        );
        Ok(written)
    }
}
