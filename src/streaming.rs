use std::fmt::Write as _;
use std::io::{ErrorKind, Read};

use crate::error::Result;

pub mod adler32;
pub mod md5;

/// Incremental digest that can be fed in pieces and finalized exactly once
pub trait StreamingHash: Send {
    fn name(&self) -> &'static str;
    fn digest_len(&self) -> usize;

    fn update(&mut self, data: &[u8]) -> Result<()>;
    fn finalize(&mut self) -> Result<Vec<u8>>;
}

/// Feeds everything `reader` yields into `hasher`, `chunk_size` bytes at a time, and finalizes it
pub fn hash_reader<R>(hasher: &mut dyn StreamingHash, reader: &mut R, chunk_size: usize) -> Result<Vec<u8>>
where
    R: Read + ?Sized,
{
    let mut buff = vec![0; chunk_size.max(1)];
    loop {
        let read_bytes = match reader.read(&mut buff) {
            Ok(0) => break,
            Ok(read_bytes) => read_bytes,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        hasher.update(&buff[..read_bytes])?;
    }
    hasher.finalize()
}

pub fn to_hex(digest: &[u8]) -> String {
    digest.iter().fold(String::with_capacity(digest.len() * 2), |mut hex, byte| {
        let _ = write!(hex, "{:02x}", byte);
        hex
    })
}
