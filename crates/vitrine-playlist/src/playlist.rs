use serde_json::Value;

use crate::{entry::PlaylistEntry, error::PlaylistResult, source::NormalizedSource};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Ordered, read-only list of playable sources.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Playlist {
    sources: Vec<NormalizedSource>,
}

impl Playlist {
    pub fn new(sources: Vec<NormalizedSource>) -> Self {
        Self { sources }
    }

    /// Parse a playlist document body.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::Parse`](crate::PlaylistError::Parse) if the body is not JSON.
    /// JSON of an unexpected shape is not an error; it yields an empty playlist.
    ///
    /// The body is decoded like a browser decodes a JSON response: a leading
    /// UTF-8 BOM is stripped and invalid sequences become U+FFFD.
    pub fn parse(body: &[u8], asset_dir: &str) -> PlaylistResult<Self> {
        let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);
        let text = String::from_utf8_lossy(body);
        let document: Value = serde_json::from_str(&text)?;
        Ok(Self::from_document(&document, asset_dir))
    }

    /// Build from an already parsed document: `{"videos": [...]}` or `[...]`.
    ///
    /// Invalid entries are skipped, the rest keep their order.
    pub fn from_document(document: &Value, asset_dir: &str) -> Self {
        let entries = match document {
            Value::Object(fields) => fields.get("videos").and_then(Value::as_array),
            Value::Array(items) => Some(items),
            _ => None,
        };

        let sources = entries
            .into_iter()
            .flatten()
            .filter_map(|value| PlaylistEntry::normalize_value(value, asset_dir))
            .collect();
        Self { sources }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NormalizedSource> {
        self.sources.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NormalizedSource> {
        self.sources.iter()
    }

    /// Map any integer onto `[0, len)`; `None` for an empty playlist.
    pub fn wrap_index(&self, index: isize) -> Option<usize> {
        let len = isize::try_from(self.sources.len()).ok().filter(|&n| n > 0)?;
        usize::try_from(index.rem_euclid(len)).ok()
    }
}

impl FromIterator<NormalizedSource> for Playlist {
    fn from_iter<I: IntoIterator<Item = NormalizedSource>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
