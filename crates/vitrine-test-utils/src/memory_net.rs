//! In-memory [`Net`] that answers every request with a canned result.

use std::cell::RefCell;

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;
use vitrine_net::{Net, NetError};

/// Replays one canned response and records requested URLs.
#[derive(Debug)]
pub struct MemoryNet {
    response: Result<Bytes, NetError>,
    requested: RefCell<Vec<Url>>,
}

impl MemoryNet {
    #[must_use]
    pub fn body(body: &str) -> Self {
        Self {
            response: Ok(Bytes::copy_from_slice(body.as_bytes())),
            requested: RefCell::default(),
        }
    }

    #[must_use]
    pub fn failing(error: NetError) -> Self {
        Self {
            response: Err(error),
            requested: RefCell::default(),
        }
    }

    /// URLs requested so far, oldest first.
    #[must_use]
    pub fn requested(&self) -> Vec<Url> {
        self.requested.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Net for MemoryNet {
    async fn get_bytes(&self, url: Url) -> Result<Bytes, NetError> {
        self.requested.borrow_mut().push(url);
        self.response.clone()
    }
}
