use derive_setters::Setters;

/// User-visible fallback texts. Each failure kind has its own wording.
#[derive(Clone, Debug, PartialEq, Eq, Setters)]
#[setters(prefix = "with_", into)]
pub struct FallbackMessages {
    /// Playlist fetch failed, returned a non-2xx status, or was not JSON.
    pub load_failed: String,
    /// Playlist loaded but held no usable entry.
    pub empty: String,
    /// The platform refused to start playback.
    pub autoplay_blocked: String,
}

impl Default for FallbackMessages {
    fn default() -> Self {
        Self {
            load_failed: "Video playlist could not be loaded.".to_string(),
            empty: "No videos found. Please place files in assets/videos/.".to_string(),
            autoplay_blocked: "Autoplay blocked. Please interact with the page to allow playback."
                .to_string(),
        }
    }
}
