//! Playlist documents used across the test suites.

/// Object-wrapped playlist with two bare filenames.
pub const TWO_FILES: &str = r#"{"videos": ["a.mp4", "b.webm"]}"#;

/// Bare-array playlist mixing every accepted entry shape with junk.
pub const MIXED_ARRAY: &str = r#"[
    "intro.m4v",
    {"src": "https://cdn.example.com/loop.webm"},
    {"src": "/media/promo.ogv", "type": "video/ogg; codecs=theora"},
    {"src": "clip.mov"},
    null,
    42,
    {},
    ""
]"#;

pub const EMPTY_OBJECT: &str = r#"{"videos": []}"#;

pub const EMPTY_ARRAY: &str = "[]";

/// Valid JSON with neither a `videos` array nor a top-level array.
pub const WRONG_SHAPE: &str = r#"{"items": ["a.mp4"]}"#;

pub const NOT_JSON: &str = "<html>not a playlist</html>";
