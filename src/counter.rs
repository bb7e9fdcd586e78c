use crate::bitmap::{BitmapError, BoundaryBitmap};
use crate::cleanup::cleanup;
use crate::scripts::SCRIPT_RANGES;

/// Word and line counter over a boundary bitmap built once at construction.
/// Immutable after that; share it by reference across threads.
pub struct TextCounter {
    bitmap: BoundaryBitmap,
}

impl TextCounter {
    /// Counter over the built-in script range table.
    pub fn new() -> Self {
        Self::with_ranges(SCRIPT_RANGES)
            .expect("built-in script range table fits the bitmap")
    }

    /// Counter over a caller-supplied dense-script range table. Fails if a
    /// range is reversed or reaches past `bitmap::MAX_CODE_POINT`.
    pub fn with_ranges(ranges: &[(u32, u32)]) -> Result<Self, BitmapError> {
        Ok(TextCounter {
            bitmap: BoundaryBitmap::build(ranges)?,
        })
    }

    /// Counts words in one pass over the cleaned text, one code point at a
    /// time. A boundary character closes a word in progress; a boundary
    /// character sitting in a fully-set cell additionally counts as a word
    /// on its own, which is how dense scripts count one word per character.
    pub fn count_words(&self, text: &str) -> usize {
        let cleaned = cleanup(text);

        let mut count = 0;
        let mut in_word = false;
        for c in cleaned.chars() {
            let is_boundary = self.bitmap.is_boundary(c);
            if is_boundary && (in_word || self.bitmap.is_dense_cell(c)) {
                count += 1;
            }
            in_word = !is_boundary;
        }
        // Unterminated trailing word.
        if in_word {
            count += 1;
        }
        count
    }

    /// Lines are newline-delimited: 1 + number of `\n` bytes, so even empty
    /// input is one line.
    pub fn count_lines(text: &str) -> usize {
        bytecount::count(text.as_bytes(), b'\n') + 1
    }
}

impl Default for TextCounter {
    fn default() -> Self {
        Self::new()
    }
}
