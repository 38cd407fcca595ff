//! Width-constrained wrapping and alignment.
//!
//! Lines wider than the target are word-wrapped; every resulting line is then
//! padded to exactly the target width with non-breaking spaces, so alignment
//! whitespace survives downstream trimming.

use tracing::debug;

use crate::ansi;
use crate::measure::{visible_width, width};
use crate::position::{Position, split_extra};

/// U+00A0, used for structural whitespace inside the box.
pub const NBSP: char = '\u{a0}';

/// Word-wrap a single line to `width` columns.
///
/// Breaks on ASCII spaces only, so hyphens and slashes stay inside their
/// words, and force-breaks words longer than `width`. Escape sequences do
/// not count toward the width.
pub fn wrap(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![line.to_string()];
    }
    let options = textwrap::Options::new(width)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .word_splitter(textwrap::WordSplitter::NoHyphenation);
    textwrap::wrap(line, options)
        .into_iter()
        .map(|l| l.into_owned())
        .collect()
}

/// Wrap every line of `text` that exceeds `width`.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in text.split('\n') {
        let w = visible_width(line);
        if width > 0 && w > width {
            debug!(line.width = w, wrap.width = width, "wrapping overlong line");
            out.extend(wrap(line, width));
        } else {
            out.push(line.to_string());
        }
    }
    out
}

/// A run of `n` copies of `ch`, wrapped in `codes` when there are any.
pub(crate) fn fill(ch: char, n: usize, codes: &[String]) -> String {
    if n == 0 {
        return String::new();
    }
    let run: String = std::iter::repeat_n(ch, n).collect();
    ansi::wrap(codes, &run)
}

/// Pad each line to `width` columns according to `pos`.
///
/// Left alignment appends the pad, right alignment prepends it, and center
/// splits it with the smaller half on the left. Lines already at or beyond
/// `width` are kept as they are.
pub fn align_lines(lines: &[String], width: usize, pos: Position, codes: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            let extra = width.saturating_sub(visible_width(line));
            if extra == 0 {
                return line.clone();
            }
            let (left, right) = split_extra(extra, pos);
            format!(
                "{}{}{}",
                fill(NBSP, left, codes),
                line,
                fill(NBSP, right, codes)
            )
        })
        .collect()
}

/// Wrap and align `text` to `target` columns.
///
/// With no target the block's own widest line is used, so only alignment
/// applies. Codes that span a wrap point are closed and reopened on each
/// line before the fill is added.
pub fn apply_width(text: &str, target: Option<usize>, pos: Position, codes: &[String]) -> String {
    let target = target.unwrap_or_else(|| width(text));
    let wrapped = ansi::close_lines(&wrap_lines(text, target).join("\n"));
    let lines: Vec<String> = wrapped.split('\n').map(str::to_string).collect();
    align_lines(&lines, target, pos, codes).join("\n")
}

/// Pad `text` with blank lines up to `height` rows according to `pos`.
pub fn apply_height(text: &str, height: usize, pos: Position, codes: &[String]) -> String {
    let current = text.split('\n').count();
    if current >= height {
        return text.to_string();
    }
    let blank = fill(NBSP, width(text), codes);
    let (top, bottom) = split_extra(height - current, pos);

    let mut out: Vec<&str> = Vec::with_capacity(height);
    out.extend(std::iter::repeat_n(blank.as_str(), top));
    out.extend(text.split('\n'));
    out.extend(std::iter::repeat_n(blank.as_str(), bottom));
    out.join("\n")
}
