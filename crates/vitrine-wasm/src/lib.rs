// Browser entry point for the vitrine video loop.

mod config;

pub use config::{
    FALLBACK_ELEMENT_ID, PlayerConfig, SOURCE_ELEMENT_ID, VIDEO_ELEMENT_ID, VISIBLE_CLASS,
};

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod player;

// Re-export for wasm-bindgen.
#[cfg(target_arch = "wasm32")]
pub use player::{current_index, mount, mount_with, playlist_len, start};
