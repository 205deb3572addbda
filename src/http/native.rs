use crate::Error;

#[derive(Debug, Clone, Default)]
pub(super) struct Client(reqwest::Client);

impl Client {
    pub(super) async fn get(&self, url: &str) -> Result<Vec<u8>, Error> {
        let response = self.0.get(url).send().await.map_err(Error::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus(status.as_u16()));
        }

        Ok(response.bytes().await.map_err(Error::transport)?.to_vec())
    }
}
