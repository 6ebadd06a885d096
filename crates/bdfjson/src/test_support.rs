//! Test support utilities for bdfjson.
//!
//! This module provides helper types that are useful for testing the
//! parser's event reporting, but are not part of the conversion API.

use crate::{ParseSink, SkippedGlyph};

/// A sink that records parse events so tests can inspect them.
#[derive(Default)]
pub struct RecordingSink {
    /// One `(done, declared)` pair per completed glyph.
    pub done: Vec<(usize, i32)>,
    /// Glyphs dropped for a negative encoding, in order.
    pub skipped: Vec<SkippedGlyph>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ParseSink for RecordingSink {
    fn glyph_done(&mut self, done: usize, declared: i32) {
        self.done.push((done, declared));
    }

    fn glyph_skipped(&mut self, skipped: &SkippedGlyph) {
        self.skipped.push(skipped.clone());
    }
}
