use std::io::{self, Write};

use crate::checksum::{self, Checksum, SEED};
use crate::error::{Error, Result};
use crate::streaming::StreamingHash;

pub const NAME: &str = "adler32";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HashState {
    Open(Checksum),
    Closed,
}

///
/// Adler-32 behind the [`StreamingHash`] interface
///
/// ```
/// use rolling_adler32::streaming::adler32::Adler32Hasher;
/// use rolling_adler32::streaming::StreamingHash;
///
/// let mut hasher = Adler32Hasher::new();
/// hasher.update(b"Wiki").unwrap();
/// hasher.update(b"pedia").unwrap();
/// assert_eq!(hasher.finalize().unwrap(), vec![0x11, 0xE6, 0x03, 0x98]);
/// assert!(hasher.finalize().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Adler32Hasher {
    state: HashState,
}

impl Adler32Hasher {
    pub fn new() -> Self {
        Self::from_checksum(SEED)
    }

    /// Picks up from a checksum computed earlier, e.g. by [`checksum::sum`]
    pub fn from_checksum(checksum: Checksum) -> Self {
        Adler32Hasher {
            state: HashState::Open(checksum),
        }
    }

    /// Current value, `None` once finalized
    pub fn checksum(&self) -> Option<Checksum> {
        match self.state {
            HashState::Open(checksum) => Some(checksum),
            HashState::Closed => None,
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.state == HashState::Closed
    }

    fn closed(operation: &'static str) -> Error {
        Error::InvalidState {
            algorithm: NAME,
            operation,
        }
    }
}

impl Default for Adler32Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamingHash for Adler32Hasher {
    fn name(&self) -> &'static str {
        NAME
    }

    fn digest_len(&self) -> usize {
        4
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        match &mut self.state {
            HashState::Open(current) => {
                *current = checksum::resume(*current, data);
                Ok(())
            }
            HashState::Closed => Err(Self::closed("update")),
        }
    }

    fn finalize(&mut self) -> Result<Vec<u8>> {
        match std::mem::replace(&mut self.state, HashState::Closed) {
            HashState::Open(current) => Ok(checksum::to_be_bytes(current).to_vec()),
            HashState::Closed => Err(Self::closed("finalize")),
        }
    }
}

impl Write for Adler32Hasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_hasher_digests_seed() {
        let mut hasher = Adler32Hasher::new();
        assert_eq!(hasher.checksum(), Some(SEED));
        assert_eq!(hasher.finalize().unwrap(), vec![0, 0, 0, 1]);
    }

    #[test]
    fn test_update_after_finalize() {
        let mut hasher = Adler32Hasher::new();
        hasher.update(b"Wikipedia").unwrap();
        hasher.finalize().unwrap();

        assert!(hasher.is_finalized());
        assert_eq!(hasher.checksum(), None);
        match hasher.update(b"more") {
            Err(Error::InvalidState { algorithm, operation }) => {
                assert_eq!(algorithm, NAME);
                assert_eq!(operation, "update");
            }
            other => panic!("expected InvalidState, got {:?}", other),
        }
    }

    #[test]
    fn test_double_finalize() {
        let mut hasher = Adler32Hasher::new();
        hasher.finalize().unwrap();
        assert!(matches!(
            hasher.finalize(),
            Err(Error::InvalidState { operation: "finalize", .. })
        ));
    }

    #[test]
    fn test_resume_from_checksum() {
        let mut hasher = Adler32Hasher::from_checksum(checksum::sum(b"Wiki"));
        hasher.update(b"pedia").unwrap();
        assert_eq!(hasher.checksum(), Some(0x11E60398));
    }

    #[test]
    fn test_io_copy() {
        let content: Vec<u8> = (0..50_000).map(|x| (x * 7) as u8).collect();
        let mut hasher = Adler32Hasher::new();
        let copied = io::copy(&mut content.as_slice(), &mut hasher).unwrap();

        assert_eq!(copied, content.len() as u64);
        assert_eq!(hasher.checksum(), Some(::adler32::adler32(content.as_slice()).unwrap()));
    }

    #[test]
    fn test_write_after_finalize() {
        let mut hasher = Adler32Hasher::new();
        hasher.finalize().unwrap();
        let err = hasher.write_all(b"late").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}
