use tracing::{debug, error};

use crate::{error::PlayError, traits::fallback::Fallback, traits::surface::PlayFuture};

/// A pending start request for one track.
///
/// Dropping it discards the outcome; spawn [`settle`](Self::settle) on the
/// event loop to get the rejection handling.
#[must_use = "the start outcome is only handled when the attempt is settled"]
pub struct PlayAttempt<F> {
    index: usize,
    start: PlayFuture,
    fallback: Option<F>,
    blocked_message: String,
}

impl<F: Fallback> PlayAttempt<F> {
    pub(crate) fn new(
        index: usize,
        start: PlayFuture,
        fallback: Option<F>,
        blocked_message: String,
    ) -> Self {
        Self {
            index,
            start,
            fallback,
            blocked_message,
        }
    }

    /// Playlist index this attempt is for.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Wait for the platform's answer. A rejection is logged and shown on the
    /// fallback; it is never retried here.
    pub async fn settle(self) -> Result<(), PlayError> {
        let result = self.start.await;
        match &result {
            Ok(()) => debug!(index = self.index, "playback started"),
            Err(err) => {
                error!(index = self.index, error = %err, "autoplay failed, user interaction required?");
                if let Some(fallback) = &self.fallback {
                    fallback.show(&self.blocked_message);
                }
            }
        }
        result
    }
}

impl<F> std::fmt::Debug for PlayAttempt<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayAttempt")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
