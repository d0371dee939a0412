//! Recording fakes for [`MediaSurface`] and [`Fallback`].
//!
//! Clones share their log, so a test keeps one handle and gives the other to
//! the controller.

use std::{cell::RefCell, rc::Rc};

use futures::FutureExt;
use vitrine_playlist::NormalizedSource;

use crate::{
    error::PlayError,
    traits::{
        fallback::Fallback,
        surface::{MediaAttributes, MediaSurface, PlayFuture},
    },
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceCall {
    Configure(MediaAttributes),
    SetSource(NormalizedSource),
    Reload,
    Start,
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    calls: Rc<RefCell<Vec<SurfaceCall>>>,
    reject_with: Rc<RefCell<Option<String>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following [`MediaSurface::start`] fail with `reason`.
    pub fn reject_starts(&self, reason: &str) {
        *self.reject_with.borrow_mut() = Some(reason.to_string());
    }

    pub fn accept_starts(&self) {
        *self.reject_with.borrow_mut() = None;
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.borrow().clone()
    }

    /// Sources assigned so far, oldest first.
    pub fn assigned(&self) -> Vec<NormalizedSource> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::SetSource(source) => Some(source.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl MediaSurface for RecordingSurface {
    fn configure(&self, attributes: &MediaAttributes) {
        self.calls
            .borrow_mut()
            .push(SurfaceCall::Configure(*attributes));
    }

    fn set_source(&self, source: &NormalizedSource) {
        self.calls
            .borrow_mut()
            .push(SurfaceCall::SetSource(source.clone()));
    }

    fn reload(&self) {
        self.calls.borrow_mut().push(SurfaceCall::Reload);
    }

    fn start(&self) -> PlayFuture {
        self.calls.borrow_mut().push(SurfaceCall::Start);
        let outcome = match self.reject_with.borrow().clone() {
            Some(reason) => Err(PlayError::Rejected { reason }),
            None => Ok(()),
        };
        futures::future::ready(outcome).boxed_local()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FallbackCall {
    Show(String),
    Hide,
}

#[derive(Clone, Debug, Default)]
pub struct RecordingFallback {
    calls: Rc<RefCell<Vec<FallbackCall>>>,
}

impl RecordingFallback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<FallbackCall> {
        self.calls.borrow().clone()
    }
}

impl Fallback for RecordingFallback {
    fn show(&self, message: &str) {
        self.calls
            .borrow_mut()
            .push(FallbackCall::Show(message.to_string()));
    }

    fn hide(&self) {
        self.calls.borrow_mut().push(FallbackCall::Hide);
    }
}
