#![forbid(unsafe_code)]
#![allow(clippy::missing_errors_doc)]

mod attempt;
mod controller;
mod error;
mod events;
mod messages;

pub mod traits;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use attempt::PlayAttempt;
pub use controller::PlaylistController;
pub use error::PlayError;
pub use events::MediaEvent;
pub use messages::FallbackMessages;
pub use traits::{
    fallback::Fallback,
    surface::{MediaAttributes, MediaSurface, PlayFuture},
};
