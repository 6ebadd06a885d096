use bdfjson::BdfFont;
use pretty_assertions::assert_eq;
use serde_json::Value;

const SAMPLE: &str = include_str!("data/sample.bdf");

#[test]
fn json_document_shape_is_pinned() {
    let font = BdfFont::parse(SAMPLE).unwrap();
    let json: Value = serde_json::from_str(&serde_json::to_string(&font).unwrap()).unwrap();

    let top = json.as_object().unwrap();
    let mut keys: Vec<&str> = top.keys().map(|k| k.as_str()).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["charCount", "chars", "fontName"]);
    assert_eq!(top["charCount"], 1);
    assert!(top["fontName"].as_str().unwrap().contains("TestFont"));

    let glyph = json["chars"][0].as_object().unwrap();
    let mut keys: Vec<&str> = glyph.keys().map(|k| k.as_str()).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "encoding",
            "glyph",
            "glyphName",
            "height",
            "nextChar",
            "width",
            "xOffset",
            "yOffset"
        ]
    );
    assert_eq!(glyph["glyphName"], "A");
    assert_eq!(glyph["encoding"], 65);
    assert_eq!(glyph["nextChar"], 8);
}

#[test]
fn bitmap_serializes_under_the_glyph_key() {
    let font = BdfFont::parse(SAMPLE).unwrap();
    let json: Value = serde_json::from_str(&serde_json::to_string(&font).unwrap()).unwrap();

    let rows = json["chars"][0]["glyph"].as_array().unwrap();
    assert_eq!(rows.len(), 8);
    for row in rows {
        for bit in row.as_array().unwrap() {
            assert!(bit == 0 || bit == 1);
        }
    }
    let ff_row: Vec<u64> = rows[4]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_u64().unwrap())
        .collect();
    assert_eq!(ff_row, vec![0, 1, 1, 1, 1, 1, 1, 1, 1]);
}

#[test]
fn model_round_trips_through_json() {
    let font = BdfFont::parse(SAMPLE).unwrap();
    let json = serde_json::to_string(&font).unwrap();
    let back: BdfFont = serde_json::from_str(&json).unwrap();
    assert_eq!(font, back);
}
