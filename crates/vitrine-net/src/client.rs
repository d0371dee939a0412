use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::{
    error::{NetError, NetResult},
    traits::Net,
    types::NetOptions,
};

#[derive(Clone, Debug)]
pub struct HttpClient {
    inner: Client,
    options: NetOptions,
}

impl HttpClient {
    /// # Errors
    ///
    /// Returns [`NetError::Http`] if the underlying client cannot be built.
    pub fn new(options: NetOptions) -> NetResult<Self> {
        let inner = Self::build_client(&options)?;
        Ok(Self { inner, options })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn build_client(options: &NetOptions) -> NetResult<Client> {
        Client::builder()
            .pool_max_idle_per_host(options.pool_max_idle_per_host)
            .build()
            .map_err(NetError::from)
    }

    #[cfg(target_arch = "wasm32")]
    fn build_client(_options: &NetOptions) -> NetResult<Client> {
        Client::builder().build().map_err(NetError::from)
    }

    pub fn options(&self) -> &NetOptions {
        &self.options
    }
}

#[async_trait(?Send)]
impl Net for HttpClient {
    async fn get_bytes(&self, url: Url) -> Result<Bytes, NetError> {
        let mut req = self.inner.get(url.clone());
        for (k, v) in self.options.request_headers().iter() {
            req = req.header(k, v);
        }

        let resp = req.send().await.map_err(NetError::from)?;
        let status = resp.status();
        debug!(%url, status = status.as_u16(), "response received");

        if !status.is_success() {
            return Err(NetError::http_status(status.as_u16(), url.as_str()));
        }

        resp.bytes().await.map_err(NetError::from)
    }
}
