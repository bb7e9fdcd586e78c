//! Unicode-aware word and line counting.
//!
//! Handles scripts without whitespace-delimited words (Chinese, Thai, Khmer,
//! Lao, ...) alongside whitespace/punctuation-delimited ones. Word boundaries
//! are answered by a compact bitmap over code points; scripts where every
//! character is its own word are marked via fully-set bitmap cells.

pub mod bitmap;
pub mod cleanup;
pub mod counter;
pub mod scripts;

pub use bitmap::{BitmapError, BoundaryBitmap, MAX_CODE_POINT};
pub use cleanup::cleanup;
pub use counter::TextCounter;

use once_cell::sync::Lazy;

static DEFAULT_COUNTER: Lazy<TextCounter> = Lazy::new(TextCounter::new);

/// Counts words using the shared counter over the built-in script table.
pub fn count_words(text: &str) -> usize {
    DEFAULT_COUNTER.count_words(text)
}

/// Counts newline-delimited lines; always at least 1.
pub fn count_lines(text: &str) -> usize {
    TextCounter::count_lines(text)
}
