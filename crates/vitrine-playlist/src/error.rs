use thiserror::Error;
use vitrine_net::NetError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlaylistError {
    #[error("playlist request failed: {0}")]
    Net(#[from] NetError),

    #[error("playlist is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot resolve playlist location {path:?} against {base}: {reason}")]
    InvalidLocation {
        path: String,
        base: String,
        reason: String,
    },
}

pub type PlaylistResult<T> = Result<T, PlaylistError>;
