pub use compression::Decompressor;
pub use decrypting_decompressor::DecryptingDecompressor;
pub use decryptor::Decryptor;

mod compression;
mod decrypting_decompressor;
mod decryptor;
