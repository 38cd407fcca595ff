//! Border glyph sets and the border renderer.
//!
//! # Preset Borders
//!
//! - [`Border::normal()`] - Standard border (┌─┐)
//! - [`Border::rounded()`] - Rounded corners (╭─╮)
//! - [`Border::block()`] - Full block (█)
//! - [`Border::thick()`] - Thick lines (┏━┓)
//! - [`Border::double()`] - Double lines (╔═╗)
//! - [`Border::hidden()`] - Invisible (spaces)
//! - [`Border::ascii()`] - ASCII characters (+-|)
//!
//! # Example
//!
//! ```rust
//! use stylebox::border::{self, Border, BorderEdges, BorderOptions};
//!
//! let boxed = border::render(
//!     &Border::ascii(),
//!     BorderEdges::all(),
//!     "hi",
//!     &BorderOptions::default(),
//! );
//! assert_eq!(boxed, "+--+\n|hi|\n+--+");
//! ```

use unicode_width::UnicodeWidthChar;

use crate::ansi::RESET;
use crate::measure::visible_width;
use crate::position::BoxDimensions;

/// Border characters for all edges and corners.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Border {
    /// Top edge character(s).
    pub top: String,
    /// Bottom edge character(s).
    pub bottom: String,
    /// Left edge character(s).
    pub left: String,
    /// Right edge character(s).
    pub right: String,
    /// Top-left corner.
    pub top_left: String,
    /// Top-right corner.
    pub top_right: String,
    /// Bottom-left corner.
    pub bottom_left: String,
    /// Bottom-right corner.
    pub bottom_right: String,
}

impl Border {
    /// Creates an empty border (no characters).
    pub const fn none() -> Self {
        Self {
            top: String::new(),
            bottom: String::new(),
            left: String::new(),
            right: String::new(),
            top_left: String::new(),
            top_right: String::new(),
            bottom_left: String::new(),
            bottom_right: String::new(),
        }
    }

    /// Build a border from its eight glyphs, clockwise from the top edge:
    /// top, bottom, left, right, then the four corners.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        top: &str,
        bottom: &str,
        left: &str,
        right: &str,
        top_left: &str,
        top_right: &str,
        bottom_left: &str,
        bottom_right: &str,
    ) -> Self {
        Self {
            top: top.into(),
            bottom: bottom.into(),
            left: left.into(),
            right: right.into(),
            top_left: top_left.into(),
            top_right: top_right.into(),
            bottom_left: bottom_left.into(),
            bottom_right: bottom_right.into(),
        }
    }

    /// Standard border with 90-degree corners.
    ///
    /// ```text
    /// ┌───┐
    /// │   │
    /// └───┘
    /// ```
    pub fn normal() -> Self {
        Self::new("─", "─", "│", "│", "┌", "┐", "└", "┘")
    }

    /// Border with rounded corners.
    ///
    /// ```text
    /// ╭───╮
    /// │   │
    /// ╰───╯
    /// ```
    pub fn rounded() -> Self {
        Self::new("─", "─", "│", "│", "╭", "╮", "╰", "╯")
    }

    /// Full block border.
    pub fn block() -> Self {
        Self::new("█", "█", "█", "█", "█", "█", "█", "█")
    }

    /// Half-block border (outer).
    pub fn outer_half_block() -> Self {
        Self::new("▀", "▄", "▌", "▐", "▛", "▜", "▙", "▟")
    }

    /// Half-block border (inner).
    pub fn inner_half_block() -> Self {
        Self::new("▄", "▀", "▐", "▌", "▗", "▖", "▝", "▘")
    }

    /// Thick border.
    ///
    /// ```text
    /// ┏━━━┓
    /// ┃   ┃
    /// ┗━━━┛
    /// ```
    pub fn thick() -> Self {
        Self::new("━", "━", "┃", "┃", "┏", "┓", "┗", "┛")
    }

    /// Double-line border.
    ///
    /// ```text
    /// ╔═══╗
    /// ║   ║
    /// ╚═══╝
    /// ```
    pub fn double() -> Self {
        Self::new("═", "═", "║", "║", "╔", "╗", "╚", "╝")
    }

    /// Hidden border (spaces for layout without visible border).
    pub fn hidden() -> Self {
        Self::new(" ", " ", " ", " ", " ", " ", " ", " ")
    }

    /// ASCII-only border.
    ///
    /// ```text
    /// +---+
    /// |   |
    /// +---+
    /// ```
    pub fn ascii() -> Self {
        Self::new("-", "-", "|", "|", "+", "+", "+", "+")
    }

    /// Markdown table border style.
    pub fn markdown() -> Self {
        Self::new("-", "-", "|", "|", "|", "|", "|", "|")
    }

    /// Returns true if this border has no visible characters.
    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
            && self.bottom.is_empty()
            && self.left.is_empty()
            && self.right.is_empty()
            && self.top_left.is_empty()
            && self.top_right.is_empty()
            && self.bottom_left.is_empty()
            && self.bottom_right.is_empty()
    }

    /// Get the width of the top border edge.
    pub fn top_size(&self) -> usize {
        max_rune_width(&self.top_left)
            .max(max_rune_width(&self.top))
            .max(max_rune_width(&self.top_right))
    }

    /// Get the width of the right border edge.
    pub fn right_size(&self) -> usize {
        max_rune_width(&self.top_right)
            .max(max_rune_width(&self.right))
            .max(max_rune_width(&self.bottom_right))
    }

    /// Get the width of the bottom border edge.
    pub fn bottom_size(&self) -> usize {
        max_rune_width(&self.bottom_left)
            .max(max_rune_width(&self.bottom))
            .max(max_rune_width(&self.bottom_right))
    }

    /// Get the width of the left border edge.
    pub fn left_size(&self) -> usize {
        max_rune_width(&self.top_left)
            .max(max_rune_width(&self.left))
            .max(max_rune_width(&self.bottom_left))
    }
}

/// Get the maximum width of any character in a string.
fn max_rune_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).max().unwrap_or(0)
}

/// Which border edges should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderEdges {
    /// Draw the top edge, including its corners.
    pub top: bool,
    /// Draw the right edge.
    pub right: bool,
    /// Draw the bottom edge, including its corners.
    pub bottom: bool,
    /// Draw the left edge.
    pub left: bool,
}

impl BorderEdges {
    /// All edges enabled.
    pub const fn all() -> Self {
        Self {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }

    /// No edges enabled.
    pub const fn none() -> Self {
        Self {
            top: false,
            right: false,
            bottom: false,
            left: false,
        }
    }

    /// Returns true if any edge is enabled.
    pub const fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }

    /// Returns true if all edges are enabled.
    pub const fn is_all(&self) -> bool {
        self.top && self.right && self.bottom && self.left
    }
}

/// Pre-resolved escape codes per side, indexed top, right, bottom, left.
///
/// An empty string leaves that side uncolored.
///
/// ```rust
/// use stylebox::border::{self, Border, BorderColors, BorderEdges, BorderOptions};
///
/// let mut colors = BorderColors::default();
/// colors.fg[3] = "\x1b[31m".to_string();
/// let opts = BorderOptions { colors, ..BorderOptions::default() };
/// let edges = BorderEdges { left: true, ..BorderEdges::none() };
/// let out = border::render(&Border::ascii(), edges, "x", &opts);
/// assert_eq!(out, "\x1b[31m|\x1b[0mx");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BorderColors {
    /// Foreground codes for the top, right, bottom and left glyphs.
    pub fg: [String; 4],
    /// Background codes for the top, right, bottom and left glyphs.
    pub bg: [String; 4],
}

impl BorderColors {
    pub(crate) const TOP: usize = 0;
    pub(crate) const RIGHT: usize = 1;
    pub(crate) const BOTTOM: usize = 2;
    pub(crate) const LEFT: usize = 3;

    /// Returns true if no side carries a color.
    pub fn is_empty(&self) -> bool {
        self.fg.iter().chain(self.bg.iter()).all(String::is_empty)
    }

    fn paint(&self, side: usize, glyphs: &str) -> String {
        let fg = &self.fg[side];
        let bg = &self.bg[side];
        if glyphs.is_empty() || (fg.is_empty() && bg.is_empty()) {
            return glyphs.to_string();
        }
        format!("{fg}{bg}{glyphs}{RESET}")
    }
}

/// Options for [`render`].
#[derive(Debug, Clone, Default)]
pub struct BorderOptions {
    /// Minimum inner width in columns.
    pub min_width: usize,
    /// Minimum inner height in lines.
    pub min_height: usize,
    /// Space inserted between content and border.
    pub padding: BoxDimensions,
    /// Strip trailing spaces from every content line first.
    pub trim_content: bool,
    /// Glyph colors.
    pub colors: BorderColors,
}

/// Draw `border` around `content`, rendering only the visible edges.
///
/// The inner width is the widest content line (at least `min_width`) plus
/// horizontal padding; shorter lines are filled with spaces.
pub fn render(border: &Border, edges: BorderEdges, content: &str, opts: &BorderOptions) -> String {
    let mut lines: Vec<String> = content
        .split('\n')
        .map(|l| {
            if opts.trim_content {
                l.trim_end_matches(' ').to_string()
            } else {
                l.to_string()
            }
        })
        .collect();

    while lines.len() < opts.min_height {
        lines.push(String::new());
    }

    let content_width = lines
        .iter()
        .map(|l| visible_width(l))
        .max()
        .unwrap_or(0)
        .max(opts.min_width);
    let pad = &opts.padding;
    let inner_width = content_width + pad.horizontal();
    let colors = &opts.colors;

    let mut out: Vec<String> = Vec::with_capacity(lines.len() + pad.vertical() + 2);

    if edges.top {
        out.push(horizontal_edge(
            &border.top_left,
            &border.top,
            &border.top_right,
            inner_width,
            edges,
            |g| colors.paint(BorderColors::TOP, g),
        ));
    }

    let blank = " ".repeat(inner_width);
    let rows = std::iter::repeat_n(blank.clone(), pad.top as usize)
        .chain(lines.iter().map(|line| {
            let fill = content_width.saturating_sub(visible_width(line));
            format!(
                "{}{}{}{}",
                " ".repeat(pad.left as usize),
                line,
                " ".repeat(fill),
                " ".repeat(pad.right as usize)
            )
        }))
        .chain(std::iter::repeat_n(blank, pad.bottom as usize));

    for row in rows {
        let mut line = String::new();
        if edges.left {
            line.push_str(&colors.paint(BorderColors::LEFT, &border.left));
        }
        line.push_str(&row);
        if edges.right {
            line.push_str(&colors.paint(BorderColors::RIGHT, &border.right));
        }
        out.push(line);
    }

    if edges.bottom {
        out.push(horizontal_edge(
            &border.bottom_left,
            &border.bottom,
            &border.bottom_right,
            inner_width,
            edges,
            |g| colors.paint(BorderColors::BOTTOM, g),
        ));
    }

    out.join("\n")
}

/// Build a top or bottom edge; corners appear only when their side is visible.
fn horizontal_edge(
    left_corner: &str,
    fill: &str,
    right_corner: &str,
    width: usize,
    edges: BorderEdges,
    paint: impl Fn(&str) -> String,
) -> String {
    let mut glyphs = String::new();
    if edges.left {
        glyphs.push_str(left_corner);
    }
    glyphs.push_str(&repeat_to_width(fill, width));
    if edges.right {
        glyphs.push_str(right_corner);
    }
    paint(&glyphs)
}

/// Cycle the chars of `glyph` until exactly `width` columns are filled.
fn repeat_to_width(glyph: &str, width: usize) -> String {
    let chars: Vec<char> = glyph.chars().filter(|c| c.width().unwrap_or(0) > 0).collect();
    if chars.is_empty() {
        return " ".repeat(width);
    }

    let mut out = String::with_capacity(width * 3);
    let mut used = 0;
    for c in chars.iter().cycle() {
        let w = c.width().unwrap_or(1);
        if used + w > width {
            break;
        }
        out.push(*c);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}
