//! Compress-then-encrypt block transform for columnar file writers.
//!
//! ```
//! use orc_block_crypt::{AesGcmSivEncryption, Compressor, Decompressor, SnappyCompression};
//!
//! let compression = SnappyCompression::new().build();
//! let key = [0x42u8; 32];
//! let writer = compression.encrypting(AesGcmSivEncryption::new(&key)?);
//! let reader = compression.decrypting(AesGcmSivEncryption::new(&key)?);
//!
//! let block = b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
//! let mut encrypted = vec![0u8; writer.max_compressed_length(block.len())];
//! let len = writer.compress(block, &mut encrypted)?;
//!
//! let mut decoded = vec![0u8; block.len()];
//! reader.decompress(&encrypted[..len], &mut decoded)?;
//! assert_eq!(&decoded[..], &block[..]);
//! # Ok::<(), orc_block_crypt::Error>(())
//! ```

mod buffer;
mod encryption;
mod error;
pub mod reader;
pub mod writer;

pub use buffer::Buffer;
pub use encryption::{AesGcmSivEncryption, KEY_LEN, NONCE_LEN, TAG_LEN};
pub use error::{Error, Result};
pub use reader::{DecryptingDecompressor, Decompressor, Decryptor};
pub use writer::{
    Compression, CompressionKind, Compressor, EncryptingCompressor, Encryptor, NoCompression,
    SnappyCompression, ZstdCompression,
};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::sync::Arc;
    use std::thread;

    const KEY: [u8; KEY_LEN] = [0x11; KEY_LEN];

    fn codecs() -> Vec<Compression> {
        vec![
            NoCompression::new().build(),
            SnappyCompression::new().build(),
            ZstdCompression::new().build(),
            ZstdCompression::new().with_compression_level(12).build(),
        ]
    }

    fn encryption() -> AesGcmSivEncryption {
        AesGcmSivEncryption::new(&KEY).unwrap()
    }

    fn random_block<R: Rng>(rng: &mut R, len: usize) -> Vec<u8> {
        // Small alphabet so the compressors have something to do.
        (0..len).map(|_| rng.gen_range(b'a'..=b'h')).collect()
    }

    #[test]
    fn round_trip_all_codecs() {
        let mut rng = rand::thread_rng();
        for compression in codecs() {
            let writer = compression.encrypting(encryption());
            let reader = compression.decrypting(encryption());
            for _ in 0..20 {
                let len = rng.gen_range(0..70_000);
                let block = random_block(&mut rng, len);
                let mut encrypted = vec![0u8; writer.max_compressed_length(len)];
                let written = writer.compress(&block, &mut encrypted).unwrap();
                assert!(written <= writer.max_compressed_length(len));

                let mut decoded = vec![0u8; len];
                let read = reader.decompress(&encrypted[..written], &mut decoded).unwrap();
                assert_eq!(read, len);
                assert_eq!(decoded, block, "{} round trip of {} bytes", compression.kind(), len);
            }
        }
    }

    #[test]
    fn incompressible_input_stays_within_bound() {
        let mut rng = rand::thread_rng();
        for compression in codecs() {
            let writer = compression.encrypting(encryption());
            for &len in &[0usize, 1, 63, 1024, 262_144] {
                let mut block = vec![0u8; len];
                rng.fill(&mut block[..]);
                let mut encrypted = vec![0u8; writer.max_compressed_length(len)];
                let written = writer.compress(&block, &mut encrypted).unwrap();
                assert!(written <= encrypted.len());
            }
        }
    }

    #[test]
    fn max_compressed_length_is_monotonic() {
        for compression in codecs() {
            let writer = compression.encrypting(encryption());
            let mut prev = 0;
            for n in (0..1_000_000).step_by(997) {
                let bound = writer.max_compressed_length(n);
                assert!(bound >= prev);
                assert!(bound >= n + NONCE_LEN + TAG_LEN);
                prev = bound;
            }
        }
    }

    #[test]
    fn zero_block_with_aes() {
        let writer = SnappyCompression::new().build().encrypting(encryption());
        let mut compressed = vec![0u8; writer.compressor().max_compressed_length(100)];
        let compressed_len = writer.compressor().compress(&[0u8; 100], &mut compressed).unwrap();

        let mut output = vec![0u8; writer.max_compressed_length(100)];
        let written = writer.compress(&[0u8; 100], &mut output).unwrap();
        assert_eq!(written, compressed_len + NONCE_LEN + TAG_LEN);
    }

    #[test]
    fn deterministic_with_fixed_nonce() {
        let writer = ZstdCompression::new()
            .build()
            .encrypting(encryption().with_fixed_nonce([3; NONCE_LEN]));
        let block = random_block(&mut rand::thread_rng(), 5000);
        let mut a = vec![0u8; writer.max_compressed_length(block.len())];
        let mut b = a.clone();
        let len_a = writer.compress(&block, &mut a).unwrap();
        let len_b = writer.compress(&block, &mut b).unwrap();
        assert_eq!(&a[..len_a], &b[..len_b]);
    }

    #[test]
    fn undersized_output_overflows() {
        let writer = SnappyCompression::new().build().encrypting(encryption());
        let block = [0u8; 100];
        let mut exact = vec![0u8; writer.max_compressed_length(block.len())];
        let needed = writer.compress(&block, &mut exact).unwrap();

        let mut output = vec![0u8; needed - 1];
        match writer.compress(&block, &mut output) {
            Err(Error::BufferOverflow { available, .. }) => assert_eq!(available, needed - 1),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(output.iter().all(|&b| b == 0));
    }

    #[test]
    fn wrong_key_is_rejected_on_read() {
        let writer = SnappyCompression::new().build().encrypting(encryption());
        let reader = SnappyCompression::new()
            .build()
            .decrypting(AesGcmSivEncryption::new(&[0x22; KEY_LEN]).unwrap());
        let mut encrypted = vec![0u8; writer.max_compressed_length(10)];
        let len = writer.compress(b"0123456789", &mut encrypted).unwrap();
        let mut decoded = [0u8; 10];
        assert!(matches!(
            reader.decompress(&encrypted[..len], &mut decoded),
            Err(Error::Decryption(_))
        ));
    }

    #[test]
    fn shared_across_threads() {
        let writer = Arc::new(ZstdCompression::new().build().encrypting(encryption()));
        let reader = Arc::new(ZstdCompression::new().build().decrypting(encryption()));
        let handles: Vec<_> = (0..4u8)
            .map(|i| {
                let writer = Arc::clone(&writer);
                let reader = Arc::clone(&reader);
                thread::spawn(move || {
                    let block = vec![i; 10_000];
                    let mut encrypted = vec![0u8; writer.max_compressed_length(block.len())];
                    let len = writer.compress(&block, &mut encrypted).unwrap();
                    let mut decoded = vec![0u8; block.len()];
                    reader.decompress(&encrypted[..len], &mut decoded).unwrap();
                    assert_eq!(decoded, block);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn buffer_variant_is_unsupported() {
        for compression in codecs() {
            let writer: Box<dyn Compressor> = Box::new(compression.encrypting(encryption()));
            let mut out = Buffer::new();
            assert!(matches!(
                writer.compress_into_buffer(b"block", &mut out),
                Err(Error::Unsupported { .. })
            ));
        }
    }
}
