use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{bdf::Scanner, Glyph, ParseSink, Result};

/// A parsed BDF font, shaped for direct JSON serialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BdfFont {
    /// Font identifier from the `FONT` line.
    pub font_name: String,
    /// Declared glyph count from the `CHARS` header. Used only for progress
    /// reporting, never validated against the actual count.
    pub char_count: i32,
    /// Glyphs in the order they appear in the source file.
    pub chars: Vec<Glyph>,
}

impl BdfFont {
    /// Parses BDF text, discarding parse events.
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_with(content, &mut Discard)
    }

    /// Parses BDF text, reporting progress and skipped glyphs to `sink`.
    pub fn parse_with(content: &str, sink: &mut dyn ParseSink) -> Result<Self> {
        let mut font = BdfFont::default();
        let mut scanner = Scanner::new();
        // One splitter for the whole file: CRLF if that sequence occurs
        // anywhere, else LF. CRLF and LF inputs parse identically.
        if content.contains("\r\n") {
            for line in content.split("\r\n") {
                scanner.feed(line, &mut font, sink)?;
            }
        } else {
            for line in content.split('\n') {
                scanner.feed(line, &mut font, sink)?;
            }
        }
        scanner.finish()?;
        Ok(font)
    }

    /// Decodes `bytes` as UTF-8 and parses.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_with(bytes, &mut Discard)
    }

    pub fn from_bytes_with(bytes: &[u8], sink: &mut dyn ParseSink) -> Result<Self> {
        let content = std::str::from_utf8(bytes)?;
        Self::parse_with(content, sink)
    }

    /// Reads and parses a BDF file.
    pub fn load_file(path: &Path) -> Result<Self> {
        Self::load_file_with(path, &mut Discard)
    }

    pub fn load_file_with(path: &Path, sink: &mut dyn ParseSink) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_bytes_with(&bytes, sink)
    }
}

/// Sink for the plain entry points; drops every event.
struct Discard;

impl ParseSink for Discard {}
