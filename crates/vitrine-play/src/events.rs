/// Terminal media events that advance the playlist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaEvent {
    /// Natural end of media.
    Ended,
    /// The element failed to load or decode the current source.
    Error,
}

impl MediaEvent {
    pub const ALL: [MediaEvent; 2] = [MediaEvent::Ended, MediaEvent::Error];

    /// DOM event type name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ended => "ended",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for MediaEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
