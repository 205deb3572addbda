//! Fetches resources over HTTP.
//!
//! Native builds go through `reqwest`, so native reads must be awaited inside a Tokio runtime.
//! WASM builds go through the browser's `fetch`.

#[cfg(not(target_arch = "wasm32"))]
mod native;

#[cfg(not(target_arch = "wasm32"))]
use native::Client;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
use web::Client;

#[cfg(target_arch = "wasm32")]
pub use web::WasmError;

use crate::reader::Transport;
use crate::Error;
use std::borrow::Cow;
use url::Url;

#[derive(Debug, Clone, Default)]
pub struct Http {
    base_url: Option<Url>,
    client: Client,
}

impl Http {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative identifiers will be resolved against `base_url`, the way a page resolves a
    /// relative `fetch`.
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url: Some(base_url),
            ..Default::default()
        }
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    pub fn resolve<'a>(&self, path: &'a str) -> Result<Cow<'a, str>, Error> {
        match &self.base_url {
            Some(base) => Ok(Cow::Owned(base.join(path).map_err(Error::transport)?.into())),
            None => Ok(Cow::Borrowed(path)),
        }
    }
}

impl Transport for Http {
    async fn read(&self, path: &str) -> Result<Vec<u8>, Error> {
        let url = self.resolve(path)?;
        log::debug!("fetching {url}");

        let bytes = self.client.get(&url).await.inspect_err(|e| {
            log::debug!("fetching {url} failed: {e}");
        })?;

        log::trace!("fetched {} bytes from {url}", bytes.len());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_identifier_through_without_base() {
        let http = Http::new();
        assert_eq!(http.resolve("https://example.test/data.bin").unwrap(), "https://example.test/data.bin");
        assert_eq!(http.resolve("not a url").unwrap(), "not a url");
    }

    #[test]
    fn resolves_relative_against_base() {
        let http = Http::with_base_url(Url::parse("https://example.test/assets/").unwrap());
        assert_eq!(http.resolve("maps/world.bin").unwrap(), "https://example.test/assets/maps/world.bin");
        assert_eq!(http.resolve("/root.bin").unwrap(), "https://example.test/root.bin");
    }

    #[test]
    fn absolute_url_replaces_base() {
        let http = Http::with_base_url(Url::parse("https://example.test/assets/").unwrap());
        assert_eq!(http.resolve("http://other.test/x").unwrap(), "http://other.test/x");
    }
}
