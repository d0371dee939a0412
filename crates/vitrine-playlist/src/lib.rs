#![forbid(unsafe_code)]

//! Playlist model for the vitrine video loop.
//!
//! A playlist document is fetched once, every entry is normalized into a
//! [`NormalizedSource`], and the result is frozen into a [`Playlist`].

mod config;
mod entry;
mod error;
mod loader;
mod playlist;
mod source;

pub use config::{DEFAULT_ASSET_DIR, DEFAULT_PLAYLIST_PATH, PlaylistConfig};
pub use entry::PlaylistEntry;
pub use error::{PlaylistError, PlaylistResult};
pub use loader::PlaylistLoader;
pub use playlist::Playlist;
pub use source::{NormalizedSource, guess_mime};
