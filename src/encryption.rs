//! AES-256-GCM-SIV block encryption.
//!
//! Each encrypted block is laid out as `nonce || ciphertext || tag`, so a block can be
//! decrypted on its own with only the key.

use std::borrow::Cow;
use std::fmt;

use aes_gcm_siv::aead::rand_core::RngCore;
use aes_gcm_siv::aead::{AeadInPlace, KeyInit, OsRng};
use aes_gcm_siv::{Aes256GcmSiv, Nonce, Tag};
use log::debug;

use crate::error::{Error, Result};
use crate::reader::Decryptor;
use crate::writer::Encryptor;

/// Byte length of an AES-256 key.
pub const KEY_LEN: usize = 32;

/// Byte length of the nonce stored in front of each block.
pub const NONCE_LEN: usize = 12;

/// Byte length of the authentication tag stored after each block.
pub const TAG_LEN: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NonceSource {
    Random,
    Fixed([u8; NONCE_LEN]),
}

/// Encrypts and decrypts blocks with AES-256-GCM-SIV.
///
/// By default every block gets a fresh random nonce. GCM-SIV is nonce-misuse resistant,
/// so `with_fixed_nonce` is safe to use for reproducible output: it only reveals whether
/// two blocks are identical.
#[derive(Clone)]
pub struct AesGcmSivEncryption {
    cipher: Aes256GcmSiv,
    nonce: NonceSource,
}

impl AesGcmSivEncryption {
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyLength`] unless `key` is [`KEY_LEN`] bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        if key.len() != KEY_LEN {
            return Err(Error::InvalidKeyLength {
                expected: KEY_LEN,
                actual: key.len(),
            });
        }
        let cipher = Aes256GcmSiv::new_from_slice(key).map_err(|_| Error::InvalidKeyLength {
            expected: KEY_LEN,
            actual: key.len(),
        })?;
        debug!("initialized AES-256-GCM-SIV block encryption");
        Ok(AesGcmSivEncryption {
            cipher,
            nonce: NonceSource::Random,
        })
    }

    pub fn with_fixed_nonce(mut self, nonce: [u8; NONCE_LEN]) -> Self {
        self.nonce = NonceSource::Fixed(nonce);
        self
    }

    fn next_nonce(&self) -> [u8; NONCE_LEN] {
        match self.nonce {
            NonceSource::Random => {
                let mut nonce = [0u8; NONCE_LEN];
                OsRng.fill_bytes(&mut nonce);
                nonce
            }
            NonceSource::Fixed(nonce) => nonce,
        }
    }
}

// Never print key material.
impl fmt::Debug for AesGcmSivEncryption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AesGcmSivEncryption")
            .field("nonce", &self.nonce)
            .finish_non_exhaustive()
    }
}

impl Encryptor for AesGcmSivEncryption {
    fn max_encrypted_length(&self, size: usize) -> usize {
        size.saturating_add(NONCE_LEN + TAG_LEN)
    }

    fn encrypt<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        let nonce = self.next_nonce();
        let mut out = Vec::with_capacity(self.max_encrypted_length(input.len()));
        out.extend_from_slice(&nonce);
        out.extend_from_slice(input);
        let tag = self
            .cipher
            .encrypt_in_place_detached(Nonce::from_slice(&nonce), b"", &mut out[NONCE_LEN..])
            .map_err(|e| Error::Encryption(e.to_string()))?;
        out.extend_from_slice(&tag);
        Ok(Cow::Owned(out))
    }
}

impl Decryptor for AesGcmSivEncryption {
    fn decrypt<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        if input.len() < NONCE_LEN + TAG_LEN {
            return Err(Error::Decryption(format!(
                "block of {} bytes is shorter than nonce and tag",
                input.len()
            )));
        }
        let (nonce, rest) = input.split_at(NONCE_LEN);
        let (ciphertext, tag) = rest.split_at(rest.len() - TAG_LEN);
        let mut out = ciphertext.to_vec();
        self.cipher
            .decrypt_in_place_detached(Nonce::from_slice(nonce), b"", &mut out, Tag::from_slice(tag))
            .map_err(|e| Error::Decryption(e.to_string()))?;
        Ok(Cow::Owned(out))
    }
}
