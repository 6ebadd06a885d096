use serde::{Deserialize, Serialize};

/// One glyph of a BDF font: metrics plus the decoded bitmap.
///
/// Serializes with camelCase keys; the bitmap goes out under the JSON key
/// `glyph`, matching the document shape downstream consumers expect.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Glyph {
    /// Identifier from the `STARTCHAR` marker.
    pub glyph_name: String,
    /// Character code point. Never negative in a finalized glyph.
    pub encoding: i32,
    /// Horizontal advance to the next glyph's origin (`DWIDTH` X component;
    /// the Y component is discarded).
    pub next_char: i32,
    /// Bounding-box width in pixels.
    pub width: i32,
    /// Bounding-box height in pixels.
    pub height: i32,
    /// Bounding-box X offset from the glyph origin.
    pub x_offset: i32,
    /// Bounding-box Y offset from the glyph origin.
    pub y_offset: i32,
    /// Row-major bitmap of 0/1 values, one entry per row of the `BITMAP`
    /// block. Row shape is documented on [`crate::bitmap::decode_row`].
    #[serde(rename = "glyph")]
    pub bitmap: Vec<Vec<u8>>,
}

impl Glyph {
    /// Starts an empty glyph named by the `STARTCHAR` value. All metrics
    /// default to 0 until the corresponding field line is seen.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            glyph_name: name.into(),
            ..Self::default()
        }
    }

    /// Returns whether the bit at column `x` of row `y` is set.
    /// Out-of-range coordinates read as unset.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.bitmap
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(0)
            == 1
    }
}

/// A glyph block dropped for an unsupported (negative) encoding.
///
/// Carries the glyph name and the raw `ENCODING` field text for the warning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedGlyph {
    pub glyph_name: String,
    pub encoding: String,
}
