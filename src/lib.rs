//! Read the raw bytes of a resource, either over HTTP or from the local filesystem.
//!
//! ```no_run
//! # async fn demo() -> Result<(), resource_reader::Error> {
//! use resource_reader::{Config, Reader, Transport};
//!
//! let reader = Reader::from_config(&Config::http())?;
//! let bytes = reader.read("https://example.test/data.bin").await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
mod error;
#[cfg(all(not(target_arch = "wasm32"), any(feature = "tokio", feature = "smol")))]
pub mod file;
#[cfg(any(target_arch = "wasm32", feature = "http"))]
pub mod http;
pub mod marker;
pub mod reader;

pub use config::{Config, TransportKind};
pub use error::Error;
pub use reader::{Reader, Transport};

#[cfg(all(
    not(target_arch = "wasm32"),
    not(feature = "http"),
    not(feature = "tokio"),
    not(feature = "smol")
))]
compile_error!("at least one of the `http`, `tokio` or `smol` features must be enabled");

/// Reads the complete resource named by `path` with the platform's default transport.
///
/// - On WASM, `path` is fetched relative to the page.
/// - On native platforms, `path` is read from the filesystem. With the `smol` feature this
///   works on any executor; with only the `tokio` feature it must be awaited inside a Tokio
///   runtime.
pub async fn read(path: &str) -> Result<Vec<u8>, Error> {
    Reader::default().read(path).await
}

/// Installs a logger for the `log` records this crate emits.
///
/// - On native platforms, this is [`env_logger`], filtered by `RUST_LOG`. Does nothing if the
///   application already installed a logger.
/// - On WASM, this logs to the browser console and also routes panics there.
pub fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = env_logger::try_init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::default());
    }
}
