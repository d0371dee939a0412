use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::error::NetError;

/// A source of whole response bodies.
///
/// Futures are not required to be `Send`: in the browser the request is a
/// `fetch` promise tied to the page's event loop.
#[async_trait(?Send)]
pub trait Net {
    /// Get all bytes from a URL. Non-2xx statuses are errors.
    async fn get_bytes(&self, url: Url) -> Result<Bytes, NetError>;
}
