//! Playback cursor over a [`Playlist`], bound to one media surface.

use tracing::{debug, error, info};
use vitrine_playlist::{NormalizedSource, Playlist, PlaylistResult};

use crate::{
    attempt::PlayAttempt,
    events::MediaEvent,
    messages::FallbackMessages,
    traits::{
        fallback::Fallback,
        surface::{MediaAttributes, MediaSurface},
    },
};

/// Owns the playlist and the cursor for a single media surface.
///
/// The playlist starts empty and is replaced once by [`apply_load`](Self::apply_load).
/// Every operation that would start a track returns the pending
/// [`PlayAttempt`]; `None` means nothing was touched.
pub struct PlaylistController<S, F> {
    surface: S,
    fallback: Option<F>,
    messages: FallbackMessages,
    playlist: Playlist,
    current_index: usize,
}

impl<S, F> PlaylistController<S, F>
where
    S: MediaSurface,
    F: Fallback + Clone,
{
    /// Bind to `surface` and apply the fixed autoplay attributes.
    pub fn new(surface: S, fallback: Option<F>, messages: FallbackMessages) -> Self {
        surface.configure(&MediaAttributes::default());
        Self {
            surface,
            fallback,
            messages,
            playlist: Playlist::default(),
            current_index: 0,
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Index of the track last requested. Meaningless while the playlist is empty.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_source(&self) -> Option<&NormalizedSource> {
        self.playlist.get(self.current_index)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Continuation of the playlist fetch.
    ///
    /// Exactly one of: show the load-failed text, show the empty-playlist
    /// text, or hide the fallback and start track 0.
    pub fn apply_load(&mut self, result: PlaylistResult<Playlist>) -> Option<PlayAttempt<F>> {
        let playlist = match result {
            Ok(playlist) => playlist,
            Err(err) => {
                error!(error = %err, "video playlist could not be loaded");
                self.show_fallback(&self.messages.load_failed);
                return None;
            }
        };

        self.playlist = playlist;
        self.current_index = 0;

        if self.playlist.is_empty() {
            info!("video playlist is empty");
            self.show_fallback(&self.messages.empty);
            return None;
        }

        if let Some(fallback) = &self.fallback {
            fallback.hide();
        }
        self.play_index(0)
    }

    /// Assign track `index` (wrapped into range) to the surface, reload it and
    /// request playback. No-op on an empty playlist.
    pub fn play_index(&mut self, index: isize) -> Option<PlayAttempt<F>> {
        let index = self.playlist.wrap_index(index)?;
        let source = self.playlist.get(index)?;
        self.current_index = index;

        debug!(index, src = %source.src, mime = %source.mime, "switching source");
        self.surface.set_source(source);
        self.surface.reload();

        Some(PlayAttempt::new(
            index,
            self.surface.start(),
            self.fallback.clone(),
            self.messages.autoplay_blocked.clone(),
        ))
    }

    /// Advance to the following track, wrapping after the last one.
    pub fn next_video(&mut self) -> Option<PlayAttempt<F>> {
        if self.playlist.is_empty() {
            return None;
        }
        let next = (self.current_index + 1) % self.playlist.len();
        self.play_index(isize::try_from(next).ok()?)
    }

    /// `ended` and `error` both move on to the next track.
    pub fn handle_event(&mut self, event: MediaEvent) -> Option<PlayAttempt<F>> {
        debug!(%event, index = self.current_index, "media event");
        match event {
            MediaEvent::Ended | MediaEvent::Error => self.next_video(),
        }
    }

    fn show_fallback(&self, message: &str) {
        if let Some(fallback) = &self.fallback {
            fallback.show(message);
        }
    }
}
