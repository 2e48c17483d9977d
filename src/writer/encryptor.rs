use std::borrow::Cow;
use std::sync::Arc;

use crate::error::Result;

/// Block encryptor applied after compression.
pub trait Encryptor {
    /// Upper bound on the length of `encrypt`'s result for an input of `size` bytes.
    fn max_encrypted_length(&self, size: usize) -> usize;

    /// Encrypts `input`. The result may borrow from `input` when no new bytes are needed.
    fn encrypt<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, [u8]>>;
}

macro_rules! forward_encryptor {
    ($($ptr:ty),*) => {$(
        impl<T: Encryptor + ?Sized> Encryptor for $ptr {
            fn max_encrypted_length(&self, size: usize) -> usize {
                (**self).max_encrypted_length(size)
            }

            fn encrypt<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, [u8]>> {
                (**self).encrypt(input)
            }
        }
    )*};
}

forward_encryptor!(&T, Box<T>, Arc<T>);
