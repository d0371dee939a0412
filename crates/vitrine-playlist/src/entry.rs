//! Raw playlist entries and their normalization.

use serde_json::Value;

use crate::source::{NormalizedSource, guess_mime};

/// One element of a playlist document, after shape recognition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaylistEntry {
    /// Bare filename, always relative to the asset directory.
    File(String),
    /// `{src, type?}` object.
    Source { src: String, mime: Option<String> },
}

impl PlaylistEntry {
    /// Recognize an entry from a JSON value.
    ///
    /// Returns `None` for anything that is neither a non-empty string nor an
    /// object carrying a non-empty string `src`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) if !name.is_empty() => Some(Self::File(name.clone())),
            Value::Object(fields) => {
                let src = fields.get("src")?.as_str().filter(|s| !s.is_empty())?;
                let mime = fields
                    .get("type")
                    .and_then(Value::as_str)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string);
                Some(Self::Source {
                    src: src.to_string(),
                    mime,
                })
            }
            _ => None,
        }
    }

    /// Resolve against `asset_dir` and settle the MIME type.
    pub fn normalize(&self, asset_dir: &str) -> NormalizedSource {
        match self {
            Self::File(name) => NormalizedSource::new(format!("{asset_dir}{name}"), guess_mime(name)),
            Self::Source { src, mime } => {
                let resolved = if is_absolute(src) {
                    src.clone()
                } else {
                    format!("{asset_dir}{src}")
                };
                let mime = mime.clone().unwrap_or_else(|| guess_mime(src).to_string());
                NormalizedSource::new(resolved, mime)
            }
        }
    }

    /// Shape recognition and normalization in one step.
    pub fn normalize_value(value: &Value, asset_dir: &str) -> Option<NormalizedSource> {
        Self::from_value(value).map(|entry| entry.normalize(asset_dir))
    }
}

/// Absolute HTTP(S) URL (scheme matched case-insensitively) or rooted path.
fn is_absolute(src: &str) -> bool {
    let has_prefix = |prefix: &str| {
        src.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };
    has_prefix("http://") || has_prefix("https://") || src.starts_with('/')
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    const DIR: &str = "assets/videos/";

    #[rstest]
    #[case::bare_file(json!("a.mp4"), "assets/videos/a.mp4", "video/mp4")]
    #[case::bare_unknown(json!("promo.mov"), "assets/videos/promo.mov", "")]
    #[case::http_url(json!({"src": "http://x/y.webm"}), "http://x/y.webm", "video/webm")]
    #[case::https_upper(json!({"src": "HTTPS://x/y.mp4"}), "HTTPS://x/y.mp4", "video/mp4")]
    #[case::rooted(json!({"src": "/media/z.ogv"}), "/media/z.ogv", "video/ogg")]
    #[case::relative_object(json!({"src": "b.xyz"}), "assets/videos/b.xyz", "")]
    #[case::explicit_type(json!({"src": "c.bin", "type": "video/mp2t"}), "assets/videos/c.bin", "video/mp2t")]
    #[case::explicit_wins(json!({"src": "d.mp4", "type": "video/quicktime"}), "assets/videos/d.mp4", "video/quicktime")]
    #[case::empty_type(json!({"src": "e.webm", "type": ""}), "assets/videos/e.webm", "video/webm")]
    #[case::non_string_type(json!({"src": "f.mp4", "type": 7}), "assets/videos/f.mp4", "video/mp4")]
    #[case::ftp_is_relative(json!({"src": "ftp://x/y.mp4"}), "assets/videos/ftp://x/y.mp4", "video/mp4")]
    fn normalizes_valid_entries(#[case] value: Value, #[case] src: &str, #[case] mime: &str) {
        let source = PlaylistEntry::normalize_value(&value, DIR).expect("entry must be valid");
        assert_eq!(source, NormalizedSource::new(src, mime));
    }

    #[rstest]
    #[case::null(json!(null))]
    #[case::number(json!(42))]
    #[case::boolean(json!(true))]
    #[case::empty_string(json!(""))]
    #[case::empty_object(json!({}))]
    #[case::empty_src(json!({"src": ""}))]
    #[case::numeric_src(json!({"src": 5}))]
    #[case::array(json!(["a.mp4"]))]
    fn drops_invalid_entries(#[case] value: Value) {
        assert_eq!(PlaylistEntry::from_value(&value), None);
    }

    #[test]
    fn asset_dir_is_prefixed_verbatim() {
        let source = PlaylistEntry::File("a.mp4".into()).normalize("https://cdn.example.com/v/");
        assert_eq!(source.src, "https://cdn.example.com/v/a.mp4");
    }
}
