use tracing::{debug, info};
use url::Url;
use vitrine_net::Net;

use crate::{error::PlaylistResult, playlist::Playlist};

/// Fetches and parses one playlist document.
pub struct PlaylistLoader<N> {
    net: N,
    url: Url,
    asset_dir: String,
}

impl<N: Net> PlaylistLoader<N> {
    pub fn new(net: N, url: Url, asset_dir: impl Into<String>) -> Self {
        Self {
            net,
            url,
            asset_dir: asset_dir.into(),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the document and normalize its entries.
    ///
    /// An empty result is not an error; the caller decides what to show.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses, and bodies that are not JSON.
    pub async fn load(&self) -> PlaylistResult<Playlist> {
        debug!(url = %self.url, "fetching playlist");
        let body = self.net.get_bytes(self.url.clone()).await?;
        let playlist = Playlist::parse(&body, &self.asset_dir)?;
        info!(url = %self.url, entries = playlist.len(), "playlist loaded");
        Ok(playlist)
    }
}

#[cfg(test)]
mod tests {
    use vitrine_net::{HttpClient, NetError, NetOptions};
    use vitrine_test_utils::{MemoryNet, TestHttpServer, fixtures};

    use super::*;
    use crate::{DEFAULT_ASSET_DIR, PlaylistConfig, PlaylistError};

    fn url() -> Url {
        Url::parse("https://shop.example.com/assets/videos/playlist.json").unwrap()
    }

    #[tokio::test]
    async fn loads_from_memory() {
        let loader = PlaylistLoader::new(MemoryNet::body(fixtures::TWO_FILES), url(), DEFAULT_ASSET_DIR);

        let playlist = loader.load().await.unwrap();

        assert_eq!(playlist.len(), 2);
        assert_eq!(loader.net.requested(), vec![url()]);
    }

    #[tokio::test]
    async fn http_status_surfaces_as_net_error() {
        let net = MemoryNet::failing(NetError::http_status(404, url().as_str()));
        let loader = PlaylistLoader::new(net, url(), DEFAULT_ASSET_DIR);

        let err = loader.load().await.unwrap_err();

        assert!(matches!(err, PlaylistError::Net(e) if e.status_code() == Some(404)));
    }

    #[tokio::test]
    async fn malformed_body_surfaces_as_parse_error() {
        let loader = PlaylistLoader::new(MemoryNet::body(fixtures::NOT_JSON), url(), DEFAULT_ASSET_DIR);

        let err = loader.load().await.unwrap_err();

        assert!(matches!(err, PlaylistError::Parse(_)));
    }

    #[tokio::test]
    async fn loads_over_http() {
        let server = TestHttpServer::json("/assets/videos/playlist.json", fixtures::MIXED_ARRAY).await;
        let config = PlaylistConfig::default();
        let url = config.resolve_url(server.base_url().as_str()).unwrap();
        let net = HttpClient::new(NetOptions::default()).unwrap();

        let playlist = PlaylistLoader::new(net, url, &config.asset_dir)
            .load()
            .await
            .unwrap();

        assert_eq!(playlist.len(), 4);
        assert_eq!(playlist.get(0).unwrap().src, "assets/videos/intro.m4v");
    }
}
