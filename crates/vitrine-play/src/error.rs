#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PlayError {
    /// The platform refused to start playback, typically an autoplay policy.
    #[error("playback start rejected: {reason}")]
    Rejected { reason: String },

    #[error("media surface unavailable: {reason}")]
    SurfaceUnavailable { reason: String },
}
