#![forbid(unsafe_code)]
#![expect(
    clippy::missing_panics_doc,
    reason = "test utility crate — panic documentation not needed"
)]

//! Shared test utilities for the vitrine workspace.

pub mod fixtures;
pub mod http_server;
pub mod memory_net;

pub use axum::http::StatusCode;
pub use http_server::{RecordedRequest, TestHttpServer};
pub use memory_net::MemoryNet;
