#![forbid(unsafe_code)]

//! # Vitrine
//!
//! Facade crate for driving one autoplaying video element from a JSON
//! playlist.
//!
//! ## Quick start
//!
//! ```ignore
//! use vitrine::prelude::*;
//!
//! let config = PlaylistConfig::default();
//! let url = config.resolve_url("https://shop.example.com/")?;
//! let loader = PlaylistLoader::new(HttpClient::new(config.net.clone())?, url, &config.asset_dir);
//!
//! let mut controller = PlaylistController::new(surface, Some(fallback), FallbackMessages::default());
//! if let Some(attempt) = controller.apply_load(loader.load().await) {
//!     spawn_local(attempt.settle());
//! }
//! ```

// ── Re-export sub-crates ────────────────────────────────────────────────

pub mod playlist {
    pub use vitrine_playlist::*;
}

pub mod play {
    pub use vitrine_play::*;
}

#[cfg(feature = "net")]
pub mod net {
    pub use vitrine_net::*;
}

// ── Prelude ─────────────────────────────────────────────────────────────

pub mod prelude {
    #[cfg(feature = "net")]
    pub use vitrine_net::{HttpClient, Net, NetError, NetOptions};
    pub use vitrine_play::{
        Fallback, FallbackMessages, MediaAttributes, MediaEvent, MediaSurface, PlayAttempt,
        PlayError, PlaylistController,
    };
    pub use vitrine_playlist::{
        NormalizedSource, Playlist, PlaylistConfig, PlaylistError, PlaylistLoader,
    };
}
