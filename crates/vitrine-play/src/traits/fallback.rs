/// Text element shown when no video can currently play.
pub trait Fallback {
    /// Replace the text and make the element visible.
    fn show(&self, message: &str);

    fn hide(&self);
}
