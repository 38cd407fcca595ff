//! Padding and margin.
//!
//! Both insert whitespace around a block the same way: every line is widened
//! to the block width plus the left/right amounts, and full-width blank lines
//! are added above and below. Padding sits inside the border and uses
//! non-breaking spaces; margin sits outside it and uses regular spaces.

use crate::align::{NBSP, fill};
use crate::measure::{visible_width, width};
use crate::position::BoxDimensions;

/// Surround `text` with `sides` of `ch`, wrapping whitespace runs in `codes`.
///
/// Lines shorter than the block width are filled on the right so the result
/// is rectangular.
pub fn apply_sides(text: &str, sides: BoxDimensions, ch: char, codes: &[String]) -> String {
    if sides.is_zero() {
        return text.to_string();
    }

    let inner = width(text);
    let left = fill(ch, sides.left as usize, codes);
    let total = inner + sides.horizontal();
    let blank = fill(ch, total, codes);

    let mut out: Vec<String> = Vec::new();
    out.extend(std::iter::repeat_n(blank.clone(), sides.top as usize));
    for line in text.split('\n') {
        let gap = inner.saturating_sub(visible_width(line));
        let right = fill(ch, gap + sides.right as usize, codes);
        out.push(format!("{left}{line}{right}"));
    }
    out.extend(std::iter::repeat_n(blank, sides.bottom as usize));
    out.join("\n")
}

/// Apply padding with non-breaking spaces.
pub fn apply_padding(text: &str, padding: BoxDimensions, codes: &[String]) -> String {
    apply_sides(text, padding, NBSP, codes)
}

/// Apply margin with regular spaces.
pub fn apply_margin(text: &str, margin: BoxDimensions, codes: &[String]) -> String {
    apply_sides(text, margin, ' ', codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_uses_nbsp() {
        let out = apply_padding("hi", BoxDimensions::new(0, 1, 0, 2), &[]);
        assert_eq!(out, "\u{a0}\u{a0}hi\u{a0}");
    }

    #[test]
    fn test_padding_blank_lines_are_full_width() {
        let out = apply_padding("ab\nc", BoxDimensions::new(1, 1, 1, 1), &[]);
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| visible_width(l) == 4));
        assert_eq!(lines[2], "\u{a0}c\u{a0}\u{a0}");
    }

    #[test]
    fn test_margin_uses_regular_space() {
        let out = apply_margin("x", BoxDimensions::new(1, 0, 0, 1), &[]);
        assert_eq!(out, "  \n x");
    }

    #[test]
    fn test_zero_sides_is_noop() {
        assert_eq!(apply_margin("a\nbcd", BoxDimensions::default(), &[]), "a\nbcd");
    }

    #[test]
    fn test_margin_background_codes() {
        let codes = vec!["\x1b[41m".to_string()];
        let out = apply_margin("x", BoxDimensions::new(0, 0, 0, 1), &codes);
        assert_eq!(out, "\x1b[41m \x1b[0mx");
    }
}
