//! Palette file loading tests.

mod common;

use common::{fixtures::palettes, TestWorkspace};
use pencel::error::PaletteFileError;
use pencel::services::load_palette;
use pencil_quantize::{PaletteError, Rgb};

#[test]
fn test_bundled_palette_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/pal_cp.txt");
    let palette = load_palette(&path).unwrap();

    assert!(palette.len() >= 2);
    assert_eq!(palette[0].name(), "graphite");
}

#[test]
fn test_bad_hex_names_file_and_line() {
    let ws = TestWorkspace::new();
    let path = ws.write_text("bad.txt", palettes::BAD_HEX);
    let err = load_palette(&path).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("bad.txt"), "{message}");
    assert!(message.contains("line 2"), "{message}");
    assert!(message.contains("c0c0cz"), "{message}");
}

#[test]
fn test_missing_field_is_syntax_error() {
    let ws = TestWorkspace::new();
    let path = ws.write_text("short.txt", palettes::MISSING_FIELD);

    match load_palette(&path).unwrap_err() {
        PaletteFileError::Parse {
            source: PaletteError::Syntax { line, .. },
            ..
        } => assert_eq!(line, 2),
        other => panic!("Expected syntax error, got {other:?}"),
    }
}

#[test]
fn test_entry_order_preserved() {
    let ws = TestWorkspace::new();
    let path = ws.write_text("primaries.txt", palettes::PRIMARIES);
    let palette = load_palette(&path).unwrap();

    let names: Vec<&str> = palette.entries().iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["black", "white", "red", "green", "grey"]);
    assert_eq!(palette[4].heavy(), Rgb::new(0x80, 0x80, 0x80));
}
