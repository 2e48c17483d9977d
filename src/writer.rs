pub use compression::{
    Compression, CompressionKind, CompressionTrait, Compressor, NoCompression, SnappyCompression,
    ZstdCompression,
};
pub use encrypting_compressor::EncryptingCompressor;
pub use encryptor::Encryptor;

mod compression;
mod encrypting_compressor;
mod encryptor;
