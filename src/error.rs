use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The digest was already finalized, the hasher accepts nothing else
    #[error("cannot {operation} {algorithm} hash: digest already finalized")]
    InvalidState {
        algorithm: &'static str,
        operation: &'static str,
    },

    #[error("unknown hash algorithm: {algorithm}")]
    NotFound { algorithm: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::InvalidState {
            algorithm: "adler32",
            operation: "update",
        };
        assert_eq!(err.to_string(), "cannot update adler32 hash: digest already finalized");

        let err = Error::NotFound {
            algorithm: "sha3".to_string(),
        };
        assert!(err.to_string().contains("sha3"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
