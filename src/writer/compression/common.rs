use std::sync::Arc;

use crate::buffer::Buffer;
use crate::error::{Error, Result};
use super::CompressionKind;

pub trait CompressionTrait {
    fn kind(&self) -> CompressionKind;
    fn compressor(&self) -> Box<dyn Compressor + Send + Sync>;
}

/// Block compressor writing into a caller-owned region.
pub trait Compressor {
    /// Upper bound on the output of `compress` for an input of `uncompressed_size` bytes.
    fn max_compressed_length(&self, uncompressed_size: usize) -> usize;

    /// Compresses `input` into the front of `output` and returns the number of bytes written.
    /// `output.len()` is the maximum output length.
    fn compress(&self, input: &[u8], output: &mut [u8]) -> Result<usize>;

    /// Appends the compressed form of `input` to `output`.
    fn compress_into_buffer(&self, input: &[u8], output: &mut Buffer) -> Result<()> {
        let current_len = output.len();
        let max_additional_len = self.max_compressed_length(input.len());
        let required = current_len
            .checked_add(max_additional_len)
            .ok_or(Error::BufferOverflow {
                required: usize::MAX,
                available: usize::MAX - current_len,
            })?;
        output.ensure_size(required);
        let additional_len = match self.compress(input, &mut output[current_len..]) {
            Ok(len) => len,
            Err(e) => {
                output.resize(current_len);
                return Err(e);
            }
        };
        if let Err(e) = Error::check_capacity(additional_len, required - current_len) {
            output.resize(current_len);
            return Err(e);
        }
        output.resize(current_len + additional_len);
        Ok(())
    }
}

macro_rules! forward_compressor {
    ($($ptr:ty),*) => {$(
        impl<T: Compressor + ?Sized> Compressor for $ptr {
            fn max_compressed_length(&self, uncompressed_size: usize) -> usize {
                (**self).max_compressed_length(uncompressed_size)
            }

            fn compress(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
                (**self).compress(input, output)
            }

            fn compress_into_buffer(&self, input: &[u8], output: &mut Buffer) -> Result<()> {
                (**self).compress_into_buffer(input, output)
            }
        }
    )*};
}

forward_compressor!(&T, Box<T>, Arc<T>);
