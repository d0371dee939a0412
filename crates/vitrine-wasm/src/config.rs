//! Element ids and texts the page binding works with.

use derive_setters::Setters;
use vitrine_play::FallbackMessages;
use vitrine_playlist::PlaylistConfig;

pub const VIDEO_ELEMENT_ID: &str = "adVideoPlayer";
pub const FALLBACK_ELEMENT_ID: &str = "videoPlaylistFallback";
pub const SOURCE_ELEMENT_ID: &str = "adVideoSource";
/// CSS class toggled on the fallback element.
pub const VISIBLE_CLASS: &str = "is-visible";

#[derive(Clone, Debug, Setters)]
#[setters(prefix = "with_", into)]
pub struct PlayerConfig {
    /// Media element to drive. Missing element means nothing is mounted.
    pub video_id: String,
    /// Optional text element for failures.
    pub fallback_id: String,
    /// Id given to the `<source>` child created at mount.
    pub source_id: String,
    pub visible_class: String,
    pub playlist: PlaylistConfig,
    pub messages: FallbackMessages,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            video_id: VIDEO_ELEMENT_ID.to_string(),
            fallback_id: FALLBACK_ELEMENT_ID.to_string(),
            source_id: SOURCE_ELEMENT_ID.to_string(),
            visible_class: VISIBLE_CLASS.to_string(),
            playlist: PlaylistConfig::default(),
            messages: FallbackMessages::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use vitrine_playlist::{DEFAULT_ASSET_DIR, DEFAULT_PLAYLIST_PATH};

    use super::*;

    #[test]
    fn defaults_match_page_markup() {
        let config = PlayerConfig::default();
        assert_eq!(config.video_id, "adVideoPlayer");
        assert_eq!(config.fallback_id, "videoPlaylistFallback");
        assert_eq!(config.source_id, "adVideoSource");
        assert_eq!(config.visible_class, "is-visible");
        assert_eq!(config.playlist.playlist_path, DEFAULT_PLAYLIST_PATH);
        assert_eq!(config.playlist.asset_dir, DEFAULT_ASSET_DIR);
    }

    #[rstest]
    #[case("promoVideo", "promoFallback")]
    #[case("kiosk-1", "kiosk-1-text")]
    fn ids_are_overridable(#[case] video: &str, #[case] fallback: &str) {
        let config = PlayerConfig::default()
            .with_video_id(video)
            .with_fallback_id(fallback);
        assert_eq!(config.video_id, video);
        assert_eq!(config.fallback_id, fallback);
        assert_eq!(config.source_id, SOURCE_ELEMENT_ID);
    }

    #[test]
    fn messages_are_overridable() {
        let config = PlayerConfig::default()
            .with_messages(FallbackMessages::default().with_empty("Keine Videos gefunden."));
        assert_eq!(config.messages.empty, "Keine Videos gefunden.");
        assert_eq!(
            config.messages.load_failed,
            FallbackMessages::default().load_failed
        );
    }
}
