//! Where the playlist lives and how its entries resolve.

use derive_setters::Setters;
use url::Url;
use vitrine_net::NetOptions;

use crate::error::{PlaylistError, PlaylistResult};

/// Playlist document location, relative to the page.
pub const DEFAULT_PLAYLIST_PATH: &str = "assets/videos/playlist.json";

/// Directory prefix for relative video filenames.
pub const DEFAULT_ASSET_DIR: &str = "assets/videos/";

/// # Example
///
/// ```
/// use vitrine_playlist::PlaylistConfig;
///
/// let config = PlaylistConfig::default()
///     .with_playlist_path("media/loop.json")
///     .with_asset_dir("media/");
/// assert_eq!(config.asset_dir, "media/");
/// ```
#[derive(Clone, Debug, Setters)]
#[setters(prefix = "with_", into)]
pub struct PlaylistConfig {
    /// Playlist document location, resolved against the page base URL.
    pub playlist_path: String,
    /// Prefix for relative entries. Used verbatim, keep the trailing slash.
    pub asset_dir: String,
    /// Request options for the playlist fetch.
    pub net: NetOptions,
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            playlist_path: DEFAULT_PLAYLIST_PATH.to_string(),
            asset_dir: DEFAULT_ASSET_DIR.to_string(),
            net: NetOptions::default(),
        }
    }
}

impl PlaylistConfig {
    /// Resolve `playlist_path` against the document base URL.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::InvalidLocation`] when the base URL cannot be
    /// parsed or the join fails.
    pub fn resolve_url(&self, base: &str) -> PlaylistResult<Url> {
        let invalid = |reason: String| PlaylistError::InvalidLocation {
            path: self.playlist_path.clone(),
            base: base.to_string(),
            reason,
        };
        Url::parse(base)
            .and_then(|base| base.join(&self.playlist_path))
            .map_err(|e| invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("https://shop.example.com/", "https://shop.example.com/assets/videos/playlist.json")]
    #[case(
        "https://shop.example.com/window/index.html",
        "https://shop.example.com/window/assets/videos/playlist.json"
    )]
    #[case("http://127.0.0.1:8080/kiosk/", "http://127.0.0.1:8080/kiosk/assets/videos/playlist.json")]
    fn resolves_against_page(#[case] base: &str, #[case] expected: &str) {
        let url = PlaylistConfig::default().resolve_url(base).unwrap();
        assert_eq!(url.as_str(), expected);
    }

    #[test]
    fn rooted_path_ignores_page_directory() {
        let url = PlaylistConfig::default()
            .with_playlist_path("/shared/playlist.json")
            .resolve_url("https://shop.example.com/window/")
            .unwrap();
        assert_eq!(url.as_str(), "https://shop.example.com/shared/playlist.json");
    }

    #[test]
    fn unparsable_base_is_rejected() {
        let err = PlaylistConfig::default().resolve_url("not a url").unwrap_err();
        assert!(matches!(err, PlaylistError::InvalidLocation { .. }));
    }
}
