//! The read capability and the configured reader that dispatches it.

use crate::config::{Config, TransportKind};
use crate::marker::MaybeSend;
use crate::Error;
use std::future::Future;

#[cfg(any(target_arch = "wasm32", feature = "http"))]
use crate::http::Http;

#[cfg(all(not(target_arch = "wasm32"), any(feature = "tokio", feature = "smol")))]
use crate::file::Filesystem;

/// Something that can turn a resource identifier into the resource's bytes.
///
/// Every call performs exactly one read against the underlying medium. Nothing is cached
/// between calls, and a failed read is never retried.
pub trait Transport {
    /// Reads the complete resource named by `path`.
    ///
    /// On native platforms the returned future is [`Send`], so it may be spawned onto a
    /// multi-threaded runtime.
    fn read(&self, path: &str) -> impl Future<Output = Result<Vec<u8>, Error>> + MaybeSend;
}

/// A [`Transport`] chosen at configuration time.
#[derive(Debug, Clone)]
pub enum Reader {
    #[cfg(any(target_arch = "wasm32", feature = "http"))]
    Http(Http),

    #[cfg(all(not(target_arch = "wasm32"), any(feature = "tokio", feature = "smol")))]
    Filesystem(Filesystem),
}

impl Reader {
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        match config.transport {
            #[cfg(any(target_arch = "wasm32", feature = "http"))]
            TransportKind::Http => Ok(Self::Http(match &config.base_url {
                Some(base_url) => Http::with_base_url(base_url.clone()),
                None => Http::new(),
            })),

            #[cfg(all(not(target_arch = "wasm32"), any(feature = "tokio", feature = "smol")))]
            TransportKind::Filesystem => Ok(Self::Filesystem(match &config.root {
                Some(root) => Filesystem::with_root(root.clone()),
                None => Filesystem::new(),
            })),

            #[allow(unreachable_patterns)]
            kind => Err(Error::Unavailable(kind)),
        }
    }

    pub fn kind(&self) -> TransportKind {
        match self {
            #[cfg(any(target_arch = "wasm32", feature = "http"))]
            Self::Http(_) => TransportKind::Http,

            #[cfg(all(not(target_arch = "wasm32"), any(feature = "tokio", feature = "smol")))]
            Self::Filesystem(_) => TransportKind::Filesystem,
        }
    }
}

impl Default for Reader {
    /// Reads with [`TransportKind::platform_default`], with no base URL or root.
    fn default() -> Self {
        #[cfg(all(not(target_arch = "wasm32"), any(feature = "tokio", feature = "smol")))]
        {
            Self::Filesystem(Filesystem::new())
        }

        #[cfg(not(all(not(target_arch = "wasm32"), any(feature = "tokio", feature = "smol"))))]
        {
            Self::Http(Http::new())
        }
    }
}

#[cfg(any(target_arch = "wasm32", feature = "http"))]
impl From<Http> for Reader {
    fn from(value: Http) -> Self {
        Self::Http(value)
    }
}

#[cfg(all(not(target_arch = "wasm32"), any(feature = "tokio", feature = "smol")))]
impl From<Filesystem> for Reader {
    fn from(value: Filesystem) -> Self {
        Self::Filesystem(value)
    }
}

impl Transport for Reader {
    async fn read(&self, path: &str) -> Result<Vec<u8>, Error> {
        match self {
            #[cfg(any(target_arch = "wasm32", feature = "http"))]
            Self::Http(http) => http.read(path).await,

            #[cfg(all(not(target_arch = "wasm32"), any(feature = "tokio", feature = "smol")))]
            Self::Filesystem(fs) => fs.read(path).await,
        }
    }
}
