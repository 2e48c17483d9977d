use log::{debug, trace};

use super::compression::Compressor;
use super::encryptor::Encryptor;
use crate::buffer::Buffer;
use crate::error::{Error, Result};

/// A `Compressor` that encrypts every compressed block before handing it back.
///
/// Both collaborators are fixed at construction. The transform keeps no state between
/// calls, so an instance is as thread-safe as its compressor and encryptor are.
#[derive(Debug)]
pub struct EncryptingCompressor<C, E> {
    compressor: C,
    encryptor: E,
}

impl<C: Compressor, E: Encryptor> EncryptingCompressor<C, E> {
    pub fn new(compressor: C, encryptor: E) -> Self {
        EncryptingCompressor {
            compressor,
            encryptor,
        }
    }

    pub fn compressor(&self) -> &C {
        &self.compressor
    }

    pub fn encryptor(&self) -> &E {
        &self.encryptor
    }
}

impl<C: Compressor, E: Encryptor> Compressor for EncryptingCompressor<C, E> {
    fn max_compressed_length(&self, uncompressed_size: usize) -> usize {
        self.encryptor
            .max_encrypted_length(self.compressor.max_compressed_length(uncompressed_size))
    }

    /// Compresses `input` into a scratch buffer, encrypts the result and copies it to the
    /// front of `output`.
    ///
    /// `output` must hold at least `max_compressed_length(input.len())` bytes; a shorter
    /// region fails with `Error::BufferOverflow` before any work is done.
    fn compress(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let required = self.max_compressed_length(input.len());
        if let Err(e) = Error::check_capacity(required, output.len()) {
            debug!(
                "rejecting {} byte block: output holds {} of {} bytes",
                input.len(),
                output.len(),
                required
            );
            return Err(e);
        }

        let mut scratch = Buffer::zeroed(self.compressor.max_compressed_length(input.len()));
        let compressed_size = self.compressor.compress(input, &mut scratch)?;
        Error::check_capacity(compressed_size, scratch.len())?;

        let encrypted = self.encryptor.encrypt(&scratch[..compressed_size])?;
        Error::check_capacity(encrypted.len(), output.len())?;
        output[..encrypted.len()].copy_from_slice(&encrypted);

        trace!(
            "block: {} raw, {} compressed, {} encrypted",
            input.len(),
            compressed_size,
            encrypted.len()
        );
        Ok(encrypted.len())
    }

    /// Always fails: the encryption stage needs a materialized intermediate block.
    fn compress_into_buffer(&self, _input: &[u8], _output: &mut Buffer) -> Result<()> {
        Err(Error::Unsupported {
            operation: "compress_into_buffer",
            component: "EncryptingCompressor",
        })
    }
}
