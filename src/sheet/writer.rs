//! Persisting serialized stylesheets.
//!
//! The document hands its lines to a [`SheetWriter`]; [`FsWriter`] is the
//! filesystem implementation. Tests substitute their own writers.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Destination for serialized stylesheet lines.
pub trait SheetWriter {
    /// Write `lines` to `directory/base_name.extension`.
    ///
    /// Returns the path written. Implementations must not replace an existing
    /// file unless `overwrite` is set.
    fn write(
        &self,
        lines: &[String],
        base_name: &str,
        extension: &str,
        directory: &Path,
        overwrite: bool,
    ) -> Result<PathBuf>;
}

/// Writes stylesheets to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWriter;

impl FsWriter {
    pub fn new() -> Self {
        Self
    }
}

/// `directory/base_name.extension`, tolerating a leading dot on the extension.
pub fn target_path(directory: &Path, base_name: &str, extension: &str) -> PathBuf {
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        directory.join(base_name)
    } else {
        directory.join(format!("{}.{}", base_name, extension))
    }
}

impl SheetWriter for FsWriter {
    fn write(
        &self,
        lines: &[String],
        base_name: &str,
        extension: &str,
        directory: &Path,
        overwrite: bool,
    ) -> Result<PathBuf> {
        let path = target_path(directory, base_name, extension);
        if !overwrite && path.exists() {
            return Err(Error::AlreadyExists { path });
        }

        fs::create_dir_all(directory)?;

        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(&path, content)?;

        tracing::debug!(path = %path.display(), lines = lines.len(), "wrote stylesheet");
        Ok(path)
    }
}
