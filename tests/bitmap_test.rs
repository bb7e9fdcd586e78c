//! Unit tests for the boundary bitmap builder and its lookup guarantees.

use unicount::{BitmapError, BoundaryBitmap, MAX_CODE_POINT, TextCounter};
use unicount::scripts::SCRIPT_RANGES;

#[test]
fn test_boundary_chars_set_without_ranges() {
    let bitmap = BoundaryBitmap::build(&[]).expect("empty range table");

    for c in [' ', '\n', '\t', '*', '/', ':', ';', '.', ',', '?', '=', '\u{200b}'] {
        assert!(bitmap.is_boundary(c), "{c:?} should be a boundary");
    }
    for c in ['a', 'Z', '0', '\'', '-'] {
        assert!(!bitmap.is_boundary(c), "{c:?} should not be a boundary");
    }
}

#[test]
fn test_range_marks_whole_cells_dense() {
    let bitmap = BoundaryBitmap::build(&[(0x0E00, 0x0E7F)]).expect("thai range");

    for c in "สบายดีไหม".chars() {
        assert!(bitmap.is_boundary(c));
        assert!(bitmap.is_dense_cell(c));
        assert_eq!(bitmap.cell(c), 0xFF);
    }
    assert!(!bitmap.is_dense_cell('a'));
}

#[test]
fn test_punctuation_cells_are_not_dense() {
    let bitmap = BoundaryBitmap::build(SCRIPT_RANGES).expect("built-in table");
    for c in [' ', '.', ',', '?', ':'] {
        assert!(bitmap.is_boundary(c));
        assert!(!bitmap.is_dense_cell(c));
    }
}

#[test]
fn test_range_rounding_covers_whole_end_cells() {
    // 0x0E01..=0x0E5B occupies cells 0x1C0..0x1CC; the cell rounding pulls in
    // the rest of the first and last cells.
    let bitmap = BoundaryBitmap::build(&[(0x0E01, 0x0E5B)]).expect("range");
    assert!(bitmap.is_boundary('\u{0E00}'));
    assert!(bitmap.is_boundary('\u{0E5F}'));
    assert!(!bitmap.is_boundary('\u{0E60}'));
}

#[test]
fn test_out_of_range_lookup_is_safe() {
    let bitmap = BoundaryBitmap::build(SCRIPT_RANGES).expect("built-in table");
    let past_max = char::from_u32(MAX_CODE_POINT + 1).expect("valid scalar");
    assert!(!bitmap.is_boundary(past_max));
    assert!(!bitmap.is_dense_cell(past_max));
    assert_eq!(bitmap.cell(past_max), 0);
    assert!(!bitmap.is_boundary('\u{10FFFF}'));
}

#[test]
fn test_range_past_max_code_point_is_rejected() {
    let err = BoundaryBitmap::build(&[(0x4E00, MAX_CODE_POINT + 1)]).unwrap_err();
    assert!(matches!(err, BitmapError::RangeOutOfBounds { .. }));
}

#[test]
fn test_reversed_range_is_rejected() {
    let err = BoundaryBitmap::build(&[(0x9FFF, 0x4E00)]).unwrap_err();
    assert!(matches!(err, BitmapError::InvalidRange { .. }));
}

#[test]
fn test_built_in_table_is_valid() {
    assert!(TextCounter::with_ranges(SCRIPT_RANGES).is_ok());
    for &(from, to) in SCRIPT_RANGES {
        assert!(from <= to);
        assert!(to <= MAX_CODE_POINT);
    }
}

#[test]
fn test_custom_range_table_changes_counting() {
    // Without the Thai range, Thai text scans as one undelimited word.
    let no_thai = TextCounter::with_ranges(&[]).expect("empty table");
    assert_eq!(no_thai.count_words("สบายดีไหม"), 1);

    let with_thai = TextCounter::with_ranges(&[(0x0E00, 0x0E7F)]).expect("thai table");
    assert_eq!(with_thai.count_words("สบายดีไหม"), 9);
}
