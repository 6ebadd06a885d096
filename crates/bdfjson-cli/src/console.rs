use bdfjson::{ParseSink, SkippedGlyph};

/// Console-side implementation of the parse-event seam: per-glyph progress
/// on stdout, dropped-glyph warnings on stderr.
pub struct ConsoleReport;

impl ParseSink for ConsoleReport {
    fn glyph_done(&mut self, done: usize, declared: i32) {
        if declared > 0 {
            let percent = done * 100 / declared as usize;
            println!("done {done} of {declared} glyphs ({percent}%)");
        } else {
            // The CHARS header is advisory; without one there is no total.
            println!("done {done} glyphs");
        }
    }

    fn glyph_skipped(&mut self, skipped: &SkippedGlyph) {
        eprintln!(
            "skipping glyph {:?}: encoding {} is not supported, only non-negative encodings are kept",
            skipped.glyph_name, skipped.encoding
        );
    }
}
