//! Benchmark for parsing synthetic many-glyph BDF fonts.
//!
//! Builds fonts in memory so the numbers measure the scanner and the
//! bitmap decoder, not disk I/O.

use bdfjson::BdfFont;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn synthetic_font(glyph_count: usize) -> String {
    let mut out = String::from(
        "STARTFONT 2.1\nFONT -bench-synthetic-medium-r-normal--16-160-75-75-c-80-iso10646-1\n",
    );
    out.push_str(&format!("CHARS {glyph_count}\n"));
    for i in 0..glyph_count {
        out.push_str(&format!(
            "STARTCHAR glyph{i}\nENCODING {i}\nDWIDTH 8 0\nBBX 8 16 0 0\nBITMAP\n"
        ));
        for row in 0..16 {
            out.push_str(if row % 2 == 0 { "A5\n" } else { "5A\n" });
        }
        out.push_str("ENDCHAR\n");
    }
    out.push_str("ENDFONT\n");
    out
}

fn bench_parse(c: &mut Criterion) {
    let ascii_sized = synthetic_font(96);
    let large = synthetic_font(512);

    c.bench_function("parse_96_glyphs", |b| {
        b.iter(|| BdfFont::parse(black_box(&ascii_sized)).expect("parse"))
    });
    c.bench_function("parse_512_glyphs", |b| {
        b.iter(|| BdfFont::parse(black_box(&large)).expect("parse"))
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
