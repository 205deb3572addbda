use crate::Error;
use gloo_net::http::Request;

/// A failure reported from the JavaScript side of `fetch`.
#[derive(thiserror::Error, Debug)]
#[error("{0}")]
pub struct WasmError(String);

impl From<gloo_net::Error> for WasmError {
    fn from(value: gloo_net::Error) -> Self {
        Self(value.to_string())
    }
}

fn convert_error(e: gloo_net::Error) -> Error {
    Error::transport(WasmError::from(e))
}

#[derive(Debug, Clone, Default)]
pub(super) struct Client;

impl Client {
    pub(super) async fn get(&self, url: &str) -> Result<Vec<u8>, Error> {
        let response = Request::get(url).send().await.map_err(convert_error)?;

        if !response.ok() {
            return Err(Error::HttpStatus(response.status()));
        }

        response.binary().await.map_err(convert_error)
    }
}
