//! Error types for ussgen operations.
//!
//! Building rules never fails; these errors only surface at the edges
//! (writing files, loading manifests).

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing or loading stylesheets.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("refusing to overwrite existing file {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("unknown property: {0}")]
    UnknownProperty(String),

    #[error("invalid manifest: {0}")]
    Manifest(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_display() {
        let err = Error::AlreadyExists {
            path: PathBuf::from("out/Card.uss"),
        };
        assert_eq!(
            err.to_string(),
            "refusing to overwrite existing file out/Card.uss"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
