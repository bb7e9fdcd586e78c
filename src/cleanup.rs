use crate::scripts::{is_emoji, is_han, is_symbol};

/// Pre-processing pass run before word scanning. In order: replaces emoji and
/// symbol code points with a space, appends a space after every Han ideograph,
/// collapses whitespace runs to a single ASCII space, and trims both ends.
///
/// The scanner's correctness depends on this pass: emoji would otherwise read
/// as word content, and adjacent Han ideographs need explicit separation to
/// compensate for the whole-cell range insertion. Idempotent on its own output.
pub fn cleanup(input: &str) -> String {
    let mut spaced = String::with_capacity(input.len() + input.len() / 2);
    for c in input.chars() {
        if is_emoji(c) || is_symbol(c) {
            spaced.push(' ');
        } else if is_han(c) {
            spaced.push(c);
            spaced.push(' ');
        } else {
            spaced.push(c);
        }
    }

    let mut out = String::with_capacity(spaced.len());
    // Starting "in a run" drops leading whitespace.
    let mut in_run = true;
    for c in spaced.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}
