//! The BDF scanner: token table plus the parsing state machine.

use crate::{bitmap, BdfError, BdfFont, Glyph, ParseSink, Result, SkippedGlyph};

/// Field tags the scanner reads. Everything else in a BDF file is ignored.
pub mod token {
    pub const STARTFONT: &str = "STARTFONT ";
    pub const FONT: &str = "FONT ";
    pub const CHARS: &str = "CHARS ";
    pub const STARTCHAR: &str = "STARTCHAR ";
    pub const ENCODING: &str = "ENCODING ";
    pub const DWIDTH: &str = "DWIDTH ";
    pub const BBX: &str = "BBX ";
    pub const BITMAP: &str = "BITMAP";
    pub const ENDCHAR: &str = "ENDCHAR";
    pub const ENDFONT: &str = "ENDFONT";

    /// Substring containment, not an anchored prefix: a line carries a tag
    /// if the tag appears anywhere in it, and the field's raw value is the
    /// remainder of the line after the first occurrence. One consequence is
    /// that a `STARTFONT 2.1` header also matches [`FONT`], transiently
    /// setting the font name to the version until the real `FONT` line
    /// overwrites it.
    pub fn value_after<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
        line.find(tag).map(|at| &line[at + tag.len()..])
    }
}

enum State {
    TopLevel,
    InGlyph(Glyph),
    InBitmap(Glyph),
}

/// The explicit parsing state machine, fed one line at a time.
///
/// The glyph under construction is owned by the state and appended to the
/// font only when its block completes; a block dropped for a negative
/// encoding never touches the font.
pub struct Scanner {
    state: State,
    done: usize,
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            state: State::TopLevel,
            done: 0,
        }
    }

    pub fn feed(&mut self, line: &str, font: &mut BdfFont, sink: &mut dyn ParseSink) -> Result<()> {
        let state = std::mem::replace(&mut self.state, State::TopLevel);
        self.state = match state {
            State::TopLevel => self.top_level(line, font)?,
            State::InGlyph(glyph) => self.in_glyph(glyph, line, font, sink)?,
            State::InBitmap(glyph) => self.in_bitmap(glyph, line, font, sink)?,
        };
        Ok(())
    }

    /// Consumes the scanner once the line source is exhausted. Ending inside
    /// a glyph block means the input was cut short.
    pub fn finish(self) -> Result<()> {
        match self.state {
            State::TopLevel => Ok(()),
            State::InGlyph(glyph) | State::InBitmap(glyph) => {
                Err(BdfError::TruncatedGlyph(glyph.glyph_name))
            }
        }
    }

    // The checks below are independent per line, not mutually exclusive;
    // in practice each line carries at most one tag. ENDFONT needs no
    // transition: nothing after it matches a top-level tag.
    fn top_level(&mut self, line: &str, font: &mut BdfFont) -> Result<State> {
        if let Some(value) = token::value_after(line, token::FONT) {
            font.font_name = value.to_string();
        }
        if let Some(value) = token::value_after(line, token::CHARS) {
            font.char_count = parse_field("CHARS", value)?;
        }
        if let Some(value) = token::value_after(line, token::STARTCHAR) {
            return Ok(State::InGlyph(Glyph::new(value)));
        }
        Ok(State::TopLevel)
    }

    fn in_glyph(
        &mut self,
        mut glyph: Glyph,
        line: &str,
        font: &mut BdfFont,
        sink: &mut dyn ParseSink,
    ) -> Result<State> {
        if let Some(value) = token::value_after(line, token::ENCODING) {
            let encoding = parse_field("ENCODING", value)?;
            if encoding < 0 {
                // Expected-path outcome, not an error: warn through the sink
                // and drop the glyph. The rest of the block matches no
                // top-level tag, so scanning resumes at the next STARTCHAR.
                sink.glyph_skipped(&SkippedGlyph {
                    glyph_name: glyph.glyph_name,
                    encoding: value.trim().to_string(),
                });
                return Ok(State::TopLevel);
            }
            glyph.encoding = encoding;
            return Ok(State::InGlyph(glyph));
        }
        if let Some(value) = token::value_after(line, token::DWIDTH) {
            // X advance only; the Y component is discarded.
            let first = value.split_whitespace().next().unwrap_or(value);
            glyph.next_char = parse_field("DWIDTH", first)?;
            return Ok(State::InGlyph(glyph));
        }
        if let Some(value) = token::value_after(line, token::BBX) {
            let mut parts = value.split_whitespace();
            let mut next = |dst: &mut i32| -> Result<()> {
                *dst = parse_field("BBX", parts.next().unwrap_or(""))?;
                Ok(())
            };
            next(&mut glyph.width)?;
            next(&mut glyph.height)?;
            next(&mut glyph.x_offset)?;
            next(&mut glyph.y_offset)?;
            return Ok(State::InGlyph(glyph));
        }
        if line.contains(token::ENDCHAR) {
            // Glyph with no BITMAP section at all; an empty bitmap is valid.
            return Ok(self.complete(glyph, font, sink));
        }
        if line.contains(token::BITMAP) {
            return Ok(State::InBitmap(glyph));
        }
        Ok(State::InGlyph(glyph))
    }

    fn in_bitmap(
        &mut self,
        mut glyph: Glyph,
        line: &str,
        font: &mut BdfFont,
        sink: &mut dyn ParseSink,
    ) -> Result<State> {
        if line.contains(token::ENDCHAR) {
            return Ok(self.complete(glyph, font, sink));
        }
        let row = bitmap::decode_row(line, glyph.width)?;
        glyph.bitmap.push(row);
        Ok(State::InBitmap(glyph))
    }

    fn complete(&mut self, glyph: Glyph, font: &mut BdfFont, sink: &mut dyn ParseSink) -> State {
        font.chars.push(glyph);
        self.done += 1;
        sink.glyph_done(self.done, font.char_count);
        State::TopLevel
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<i32> {
    value.trim().parse().map_err(|_| BdfError::MalformedField {
        field,
        value: value.trim().to_string(),
    })
}
