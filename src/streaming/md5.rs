use crate::error::{Error, Result};
use crate::streaming::StreamingHash;

pub const NAME: &str = "md5";

/// MD5 digest, standing in for an algorithm the host already provides
pub struct Md5Hasher {
    context: Option<md5::Context>,
}

impl Md5Hasher {
    pub fn new() -> Self {
        Md5Hasher {
            context: Some(md5::Context::new()),
        }
    }
}

impl Default for Md5Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamingHash for Md5Hasher {
    fn name(&self) -> &'static str {
        NAME
    }

    fn digest_len(&self) -> usize {
        16
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        match self.context.as_mut() {
            Some(context) => {
                context.consume(data);
                Ok(())
            }
            None => Err(Error::InvalidState {
                algorithm: NAME,
                operation: "update",
            }),
        }
    }

    fn finalize(&mut self) -> Result<Vec<u8>> {
        match self.context.take() {
            Some(context) => {
                let digest: [u8; 16] = context.compute().into();
                Ok(digest.to_vec())
            }
            None => Err(Error::InvalidState {
                algorithm: NAME,
                operation: "finalize",
            }),
        }
    }
}
