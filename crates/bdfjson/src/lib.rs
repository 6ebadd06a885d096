//! bdfjson: convert BDF bitmap fonts into JSON glyph data.
//!
//! The library side of the converter: a line-by-line scanner over the
//! BDF text format that collects font metadata plus per-glyph metrics and
//! bitmap rows into a [`BdfFont`], which serializes straight to the JSON
//! document the CLI writes. Only the handful of fields listed in
//! [`bdf::token`] are read; every other BDF line is ignored.
//!
//! Glyphs with a negative `ENCODING` are dropped (reported through
//! [`ParseSink::glyph_skipped`]), never mapped. Everything else that goes
//! wrong is a fatal [`BdfError`].

pub mod bdf;
pub mod bitmap;
mod error;
mod font;
mod glyph;
pub use error::{BdfError, Result};
pub use font::BdfFont;
pub use glyph::{Glyph, SkippedGlyph};

// Test utilities
pub mod test_support;

/// Observer seam for parse events.
///
/// The library never prints; the CLI implements this with a console
/// reporter, tests with [`test_support::RecordingSink`]. Both methods
/// default to no-ops.
pub trait ParseSink {
    /// Called after each glyph is appended to the font. `done` counts the
    /// glyphs kept so far; `declared` is the `CHARS` header value, which is
    /// advisory only and may not match the real total.
    fn glyph_done(&mut self, _done: usize, _declared: i32) {}

    /// Called when a glyph block is dropped for a negative encoding.
    fn glyph_skipped(&mut self, _skipped: &SkippedGlyph) {}
}
