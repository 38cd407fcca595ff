//! Composition of pre-rendered blocks.
//!
//! Everything here works on already-rendered strings and relies only on
//! escape-aware measurement, so styled blocks can be joined and placed
//! freely.

use std::collections::HashSet;

use tracing::debug;
use unicode_width::UnicodeWidthChar;

use crate::ansi;
use crate::config::RenderConfig;
use crate::measure::{truncate, visible_width, width};
use crate::position::{Position, split_extra};
use crate::style::Style;

/// Horizontally joins multi-line strings along a vertical axis.
///
/// `pos` places shorter blocks within the tallest one: `Position::Top`
/// (0.0), `Position::Center` (0.5), `Position::Bottom` (1.0), or any
/// fraction in between. Blocks are not widened; rows missing from a block
/// contribute nothing to that row.
///
/// # Example
///
/// ```rust
/// use stylebox::{join_horizontal, Position};
///
/// let out = join_horizontal(Position::Top, &["A\nB\nC", "X\nY"]);
/// assert_eq!(out, "AX\nBY\nC");
/// ```
pub fn join_horizontal(pos: Position, strs: &[&str]) -> String {
    match strs {
        [] => return String::new(),
        [only] => return (*only).to_string(),
        _ => {}
    }

    let blocks: Vec<Vec<&str>> = strs.iter().map(|s| s.split('\n').collect()).collect();
    let max_height = blocks.iter().map(Vec::len).max().unwrap_or(0);

    let offsets: Vec<usize> = blocks
        .iter()
        .map(|block| split_extra(max_height - block.len(), pos).0)
        .collect();

    let mut rows = vec![String::new(); max_height];
    for (block, top) in blocks.iter().zip(offsets) {
        for (i, line) in block.iter().enumerate() {
            rows[top + i].push_str(line);
        }
    }
    rows.join("\n")
}

/// Vertically joins multi-line strings along a horizontal axis.
///
/// Every line of every block is padded with spaces to the widest line
/// overall; `pos` decides how the pad is split (`Position::Left`,
/// `Position::Center`, `Position::Right` or a fraction). The leading share
/// is rounded down.
///
/// # Example
///
/// ```rust
/// use stylebox::{join_vertical, Position};
///
/// let out = join_vertical(Position::Center, &["ABCDE", "XY"]);
/// assert_eq!(out, "ABCDE\n XY  ");
/// ```
pub fn join_vertical(pos: Position, strs: &[&str]) -> String {
    match strs {
        [] => return String::new(),
        [only] => return (*only).to_string(),
        _ => {}
    }

    let max_width = strs
        .iter()
        .flat_map(|s| s.split('\n'))
        .map(visible_width)
        .max()
        .unwrap_or(0);

    let mut out: Vec<String> = Vec::new();
    for line in strs.iter().flat_map(|s| s.split('\n')) {
        let extra = max_width.saturating_sub(visible_width(line));
        let (left, right) = split_extra(extra, pos);
        out.push(format!("{}{}{}", " ".repeat(left), line, " ".repeat(right)));
    }
    out.join("\n")
}

/// How generated whitespace looks in [`place_with`].
#[derive(Debug, Clone)]
pub struct WhitespaceOptions {
    /// Fill pattern, cycled across each run of whitespace.
    pub chars: String,
    /// Formatting applied to every whitespace run.
    pub style: Option<Style>,
    /// Configuration used to encode the style's colors.
    pub config: RenderConfig,
}

impl Default for WhitespaceOptions {
    fn default() -> Self {
        Self {
            chars: " ".to_string(),
            style: None,
            config: RenderConfig::DEFAULT,
        }
    }
}

impl WhitespaceOptions {
    /// Set the fill pattern.
    pub fn with_chars(mut self, chars: impl Into<String>) -> Self {
        self.chars = chars.into();
        self
    }

    /// Set the whitespace style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the configuration used for the whitespace style.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// A run of exactly `n` columns of whitespace.
    fn render(&self, n: usize) -> String {
        if n == 0 {
            return String::new();
        }

        let pattern: Vec<char> = self
            .chars
            .chars()
            .filter(|c| c.width().unwrap_or(0) > 0)
            .collect();
        let mut run = String::with_capacity(n);
        let mut used = 0;
        if !pattern.is_empty() {
            for c in pattern.iter().cycle() {
                let w = c.width().unwrap_or(1);
                if used + w > n {
                    break;
                }
                run.push(*c);
                used += w;
            }
        }
        // Wide glyphs may leave a gap at the end.
        run.extend(std::iter::repeat_n(' ', n - used));

        match &self.style {
            Some(style) => ansi::format(style, &run, &self.config),
            None => run,
        }
    }
}

/// Place a string in an exact `width` x `height` box.
///
/// The result always has `height` lines of exactly `width` columns; content
/// that does not fit is truncated. A zero dimension yields an empty string.
///
/// # Example
///
/// ```rust
/// use stylebox::{place, Position};
///
/// let out = place(5, 3, Position::Center, Position::Center, "hi");
/// assert_eq!(out, "     \n hi  \n     ");
/// ```
pub fn place(width: usize, height: usize, h_pos: Position, v_pos: Position, s: &str) -> String {
    place_with(width, height, h_pos, v_pos, s, &WhitespaceOptions::default())
}

/// [`place`] with custom whitespace.
pub fn place_with(
    width: usize,
    height: usize,
    h_pos: Position,
    v_pos: Position,
    s: &str,
    ws: &WhitespaceOptions,
) -> String {
    if width == 0 || height == 0 {
        debug!(place.width = width, place.height = height, "degenerate placement");
        return String::new();
    }

    let lines: Vec<&str> = s.split('\n').take(height).collect();
    let (top, bottom) = split_extra(height - lines.len(), v_pos);
    let blank = ws.render(width);

    let mut out: Vec<String> = Vec::with_capacity(height);
    out.extend(std::iter::repeat_n(blank.clone(), top));
    for line in lines {
        let line = truncate(line, width);
        let (left, right) = split_extra(width - visible_width(&line), h_pos);
        out.push(format!("{}{}{}", ws.render(left), line, ws.render(right)));
    }
    out.extend(std::iter::repeat_n(blank, bottom));
    out.join("\n")
}

/// Pad every line of `s` to `width` columns. Content already at least that
/// wide is returned unchanged.
pub fn place_horizontal(width: usize, pos: Position, s: &str) -> String {
    place_horizontal_with(width, pos, s, &WhitespaceOptions::default())
}

/// [`place_horizontal`] with custom whitespace.
pub fn place_horizontal_with(width: usize, pos: Position, s: &str, ws: &WhitespaceOptions) -> String {
    let content_width = self::width(s);
    if content_width >= width {
        return s.to_string();
    }

    s.split('\n')
        .map(|line| {
            let (left, right) = split_extra(width - visible_width(line), pos);
            format!("{}{}{}", ws.render(left), line, ws.render(right))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Add blank lines around `s` until it is `height` lines tall. Content
/// already at least that tall is returned unchanged.
pub fn place_vertical(height: usize, pos: Position, s: &str) -> String {
    place_vertical_with(height, pos, s, &WhitespaceOptions::default())
}

/// [`place_vertical`] with custom whitespace.
pub fn place_vertical_with(height: usize, pos: Position, s: &str, ws: &WhitespaceOptions) -> String {
    let content_height = s.split('\n').count();
    if content_height >= height {
        return s.to_string();
    }

    let blank = ws.render(width(s));
    let (top, bottom) = split_extra(height - content_height, pos);
    let mut out: Vec<&str> = Vec::with_capacity(height);
    out.extend(std::iter::repeat_n(blank.as_str(), top));
    out.extend(s.split('\n'));
    out.extend(std::iter::repeat_n(blank.as_str(), bottom));
    out.join("\n")
}

// =============================================================================
// StyleRanges and Range
// =============================================================================

/// A byte range of text and the style to render it with.
#[derive(Debug, Clone)]
pub struct Range {
    /// The starting index (inclusive, in bytes).
    pub start: usize,
    /// The ending index (exclusive, in bytes).
    pub end: usize,
    /// The style applied to this range.
    pub style: Style,
}

impl Range {
    /// Creates a new Range.
    pub fn new(start: usize, end: usize, style: Style) -> Self {
        Self { start, end, style }
    }
}

/// Creates a new [`Range`] for [`style_ranges`].
pub fn new_range(start: usize, end: usize, style: Style) -> Range {
    Range::new(start, end, style)
}

/// Render each range of `s` with its style, leaving the rest untouched.
///
/// Ranges are applied in start order and should not overlap; indices are
/// clamped to the string. A range that does not fall on character
/// boundaries is left unstyled.
///
/// # Example
///
/// ```rust
/// use stylebox::{new_range, style_ranges, Style};
///
/// let out = style_ranges("Hello, World", &[new_range(0, 5, Style::new().bold(true))]);
/// assert_eq!(out, "\x1b[1mHello\x1b[0m, World");
/// ```
pub fn style_ranges(s: &str, ranges: &[Range]) -> String {
    if ranges.is_empty() {
        return s.to_string();
    }

    let mut sorted: Vec<&Range> = ranges.iter().collect();
    sorted.sort_by_key(|r| r.start);

    let mut out = String::with_capacity(s.len());
    let mut pos = 0;

    for range in sorted {
        let start = range.start.clamp(pos, s.len());
        let end = range.end.clamp(start, s.len());
        match (s.get(pos..start), s.get(start..end)) {
            (Some(before), Some(text)) => {
                out.push_str(before);
                out.push_str(&range.style.render(text));
                pos = end;
            }
            _ => {
                debug!(range.start = range.start, range.end = range.end, "range off char boundary");
            }
        }
    }

    if let Some(rest) = s.get(pos..) {
        out.push_str(rest);
    }
    out
}

/// Render the characters at `indices` with `matched` and all others with
/// `unmatched`. Out-of-range indices are ignored.
///
/// Consecutive characters with the same match state are rendered together.
///
/// # Example
///
/// ```rust
/// use stylebox::{style_runes, Style};
///
/// let out = style_runes("abc", &[0], &Style::new().bold(true), &Style::new());
/// assert_eq!(out, "\x1b[1ma\x1b[0mbc");
/// ```
pub fn style_runes(s: &str, indices: &[usize], matched: &Style, unmatched: &Style) -> String {
    let wanted: HashSet<usize> = indices.iter().copied().collect();

    let mut out = String::with_capacity(s.len());
    let mut run = String::new();
    let mut run_matched = false;

    for (i, c) in s.chars().enumerate() {
        let is_match = wanted.contains(&i);
        if is_match != run_matched && !run.is_empty() {
            let style = if run_matched { matched } else { unmatched };
            out.push_str(&style.render(&run));
            run.clear();
        }
        run_matched = is_match;
        run.push(c);
    }
    if !run.is_empty() {
        let style = if run_matched { matched } else { unmatched };
        out.push_str(&style.render(&run));
    }
    out
}
