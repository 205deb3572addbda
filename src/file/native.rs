// An explicitly enabled `smol` wins over the default `tokio`.
#[cfg(feature = "smol")]
use smol::fs::read as read_impl;

#[cfg(all(feature = "tokio", not(feature = "smol")))]
use tokio::fs::read as read_impl;

use std::io::ErrorKind;
use std::path::Path;

use crate::Error;

fn convert_error(e: std::io::Error) -> Error {
    match e.kind() {
        ErrorKind::NotFound => Error::NotFound,
        _ => Error::transport(e),
    }
}

pub(super) async fn read(path: &Path) -> Result<Vec<u8>, Error> {
    read_impl(path).await.map_err(convert_error)
}
