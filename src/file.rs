//! Reads resources from the local filesystem.

mod native;

use crate::reader::Transport;
use crate::Error;
use std::path::{Path, PathBuf};

/// Reads files with `smol::fs` when the `smol` feature is enabled, which works on any
/// executor. Otherwise reads go through `tokio::fs` and must be awaited inside a Tokio runtime.
#[derive(Debug, Clone, Default)]
pub struct Filesystem {
    root: Option<PathBuf>,
}

impl Filesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative identifiers will be read from below `root`. Absolute ones are unaffected.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path),
            None => PathBuf::from(path),
        }
    }
}

impl Transport for Filesystem {
    async fn read(&self, path: &str) -> Result<Vec<u8>, Error> {
        let resolved = self.resolve(path);
        log::debug!("reading {}", resolved.display());

        let bytes = native::read(&resolved).await.inspect_err(|e| {
            log::debug!("reading {} failed: {e}", resolved.display());
        })?;

        log::trace!("read {} bytes from {}", bytes.len(), resolved.display());
        Ok(bytes)
    }
}
