use futures::future::LocalBoxFuture;
use vitrine_playlist::NormalizedSource;

use crate::error::PlayError;

/// Outcome of a start request, resolved by the platform's event loop.
pub type PlayFuture = LocalBoxFuture<'static, Result<(), PlayError>>;

/// Fixed element attributes applied once when the controller is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaAttributes {
    pub muted: bool,
    pub autoplay: bool,
    pub plays_inline: bool,
    /// Looping over the whole playlist is done by advancing on `ended`, so a
    /// single source never loops on its own.
    pub looping: bool,
    pub controls: bool,
}

impl Default for MediaAttributes {
    fn default() -> Self {
        Self {
            muted: true,
            autoplay: true,
            plays_inline: true,
            looping: false,
            controls: false,
        }
    }
}

/// One media element with a single, reused source slot.
pub trait MediaSurface {
    fn configure(&self, attributes: &MediaAttributes);

    /// Point the source slot at `source`. Takes effect on the next [`reload`](Self::reload).
    fn set_source(&self, source: &NormalizedSource);

    fn reload(&self);

    /// Ask the element to start playing. The returned future must not borrow
    /// the surface; it may outlive the call.
    fn start(&self) -> PlayFuture;
}
