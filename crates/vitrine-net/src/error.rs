use thiserror::Error;

/// Centralized error type for vitrine-net
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetError {
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("HTTP {status} for URL: {url}")]
    HttpStatus { status: u16, url: String },
}

impl NetError {
    /// Creates an HTTP status error
    pub fn http_status(status: u16, url: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            url: url.into(),
        }
    }

    /// Creates an HTTP error from a generic string
    pub fn http<S: Into<String>>(msg: S) -> Self {
        Self::Http(msg.into())
    }

    /// Gets the HTTP status code if this is an HTTP status error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            NetError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` for 4xx responses.
    pub fn is_client_error(&self) -> bool {
        matches!(self.status_code(), Some(400..=499))
    }
}

impl From<reqwest::Error> for NetError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.to_string())
    }
}

pub type NetResult<T> = Result<T, NetError>;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::not_found(NetError::http_status(404, "http://x/p.json"), Some(404), true)]
    #[case::server(NetError::http_status(503, "http://x/p.json"), Some(503), false)]
    #[case::transport(NetError::http("connection refused"), None, false)]
    fn status_classification(
        #[case] error: NetError,
        #[case] status: Option<u16>,
        #[case] client_error: bool,
    ) {
        assert_eq!(error.status_code(), status);
        assert_eq!(error.is_client_error(), client_error);
    }

    #[test]
    fn status_error_display_names_url() {
        let error = NetError::http_status(404, "http://host/assets/videos/playlist.json");
        assert_eq!(
            error.to_string(),
            "HTTP 404 for URL: http://host/assets/videos/playlist.json"
        );
    }
}
