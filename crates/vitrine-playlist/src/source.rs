//! Playable source descriptors.

use serde::{Deserialize, Serialize};

/// A resolved `{src, type}` pair ready to hand to a media element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSource {
    pub src: String,
    /// MIME type; empty when it could not be determined.
    #[serde(rename = "type")]
    pub mime: String,
}

impl NormalizedSource {
    pub fn new(src: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            mime: mime.into(),
        }
    }

    /// Build from a location alone, guessing the type from its extension.
    pub fn guessed(src: impl Into<String>) -> Self {
        let src = src.into();
        let mime = guess_mime(&src);
        Self::new(src, mime)
    }
}

/// Guess a video MIME type from the text after the last `.` of `location`.
///
/// Unknown or missing extensions yield `""`.
pub fn guess_mime(location: &str) -> &'static str {
    let ext = location.rsplit('.').next().unwrap_or_default();
    match ext.to_ascii_lowercase().as_str() {
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "ogg" | "ogv" => "video/ogg",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("a.mp4", "video/mp4")]
    #[case("clip.M4V", "video/mp4")]
    #[case("loop.webm", "video/webm")]
    #[case("old.ogg", "video/ogg")]
    #[case("old.OGV", "video/ogg")]
    #[case("https://cdn.example.com/v/intro.mp4", "video/mp4")]
    #[case("b.xyz", "")]
    #[case("noextension", "")]
    #[case("a.mp4?v=2", "")]
    #[case("", "")]
    fn guess_by_extension(#[case] location: &str, #[case] expected: &str) {
        assert_eq!(guess_mime(location), expected);
    }

    #[test]
    fn serializes_mime_as_type() {
        let source = NormalizedSource::guessed("assets/videos/a.mp4");
        let json = serde_json::to_value(&source).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"src": "assets/videos/a.mp4", "type": "video/mp4"})
        );
    }
}
