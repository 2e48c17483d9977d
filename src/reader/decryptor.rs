use std::borrow::Cow;
use std::sync::Arc;

use crate::error::Result;

/// Inverse of `Encryptor`.
pub trait Decryptor {
    fn decrypt<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, [u8]>>;
}

macro_rules! forward_decryptor {
    ($($ptr:ty),*) => {$(
        impl<T: Decryptor + ?Sized> Decryptor for $ptr {
            fn decrypt<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, [u8]>> {
                (**self).decrypt(input)
            }
        }
    )*};
}

forward_decryptor!(&T, Box<T>, Arc<T>);
