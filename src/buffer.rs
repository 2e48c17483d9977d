use std::ops::{Deref, DerefMut};

/// Growable byte buffer used for compressed output and per-call scratch space.
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    pub fn new() -> Buffer {
        Buffer { data: Vec::new() }
    }

    /// A buffer of `len` zero bytes, ready to be written through `DerefMut`.
    pub fn zeroed(len: usize) -> Buffer {
        Buffer {
            data: vec![0; len],
        }
    }

    pub fn resize(&mut self, new_len: usize) {
        self.data.resize(new_len, 0);
    }

    pub fn ensure_size(&mut self, size: usize) {
        if self.data.len() < size {
            self.resize(size);
        }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(data: Vec<u8>) -> Self {
        Buffer { data }
    }
}

impl Deref for Buffer {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl DerefMut for Buffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_size_only_grows() {
        let mut buf = Buffer::from(vec![1, 2, 3]);
        buf.ensure_size(2);
        assert_eq!(&buf[..], &[1, 2, 3]);
        buf.ensure_size(5);
        assert_eq!(&buf[..], &[1, 2, 3, 0, 0]);
        buf.resize(1);
        buf.write_bytes(&[9]);
        assert_eq!(buf.into_inner(), vec![1, 9]);
    }
}
