//! Style definition and builder.
//!
//! A [`Style`] is an immutable description of how text should look. Every
//! setter consumes the style and returns a new one, so a value that has been
//! cloned before a chain step never observes later changes:
//!
//! ```rust
//! use stylebox::Style;
//!
//! let base = Style::new().bold(true);
//! let red = base.clone().foreground("#ff0000");
//! assert_eq!(base.get_foreground(), None);
//! assert!(red.get_foreground().is_some());
//! ```
//!
//! Properties are either set or absent. `unset_*` methods remove a property
//! entirely, which is observably different from setting it to `false` or `0`.

use std::sync::Arc;

use bitflags::bitflags;

use crate::border::{Border, BorderEdges};
use crate::color::ColorValue;
use crate::position::{BoxDimensions, Position, Sides, clamp_dimension};

bitflags! {
    /// Flags indicating which style properties are explicitly set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Props: u64 {
        // Boolean attributes
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const REVERSE = 1 << 4;
        const BLINK = 1 << 5;
        const FAINT = 1 << 6;
        const UNDERLINE_SPACES = 1 << 7;
        const STRIKETHROUGH_SPACES = 1 << 8;
        const COLOR_WHITESPACE = 1 << 9;

        // Value properties
        const FOREGROUND = 1 << 10;
        const BACKGROUND = 1 << 11;
        const WIDTH = 1 << 12;
        const HEIGHT = 1 << 13;
        const ALIGN_HORIZONTAL = 1 << 14;
        const ALIGN_VERTICAL = 1 << 15;

        // Padding
        const PADDING_TOP = 1 << 16;
        const PADDING_RIGHT = 1 << 17;
        const PADDING_BOTTOM = 1 << 18;
        const PADDING_LEFT = 1 << 19;

        // Margin
        const MARGIN_TOP = 1 << 20;
        const MARGIN_RIGHT = 1 << 21;
        const MARGIN_BOTTOM = 1 << 22;
        const MARGIN_LEFT = 1 << 23;
        const MARGIN_BACKGROUND = 1 << 24;

        // Border
        const BORDER_STYLE = 1 << 25;
        const BORDER_TOP = 1 << 26;
        const BORDER_RIGHT = 1 << 27;
        const BORDER_BOTTOM = 1 << 28;
        const BORDER_LEFT = 1 << 29;

        const BORDER_FG = 1 << 30;
        const BORDER_TOP_FG = 1 << 31;
        const BORDER_RIGHT_FG = 1 << 32;
        const BORDER_BOTTOM_FG = 1 << 33;
        const BORDER_LEFT_FG = 1 << 34;

        const BORDER_BG = 1 << 35;
        const BORDER_TOP_BG = 1 << 36;
        const BORDER_RIGHT_BG = 1 << 37;
        const BORDER_BOTTOM_BG = 1 << 38;
        const BORDER_LEFT_BG = 1 << 39;

        // Other
        const INLINE = 1 << 40;
        const MAX_WIDTH = 1 << 41;
        const MAX_HEIGHT = 1 << 42;
        const TAB_WIDTH = 1 << 43;
        const TRANSFORM = 1 << 44;
        const STRING = 1 << 45;

        const PADDING = Self::PADDING_TOP.bits()
            | Self::PADDING_RIGHT.bits()
            | Self::PADDING_BOTTOM.bits()
            | Self::PADDING_LEFT.bits();
        const MARGIN = Self::MARGIN_TOP.bits()
            | Self::MARGIN_RIGHT.bits()
            | Self::MARGIN_BOTTOM.bits()
            | Self::MARGIN_LEFT.bits();
        const BORDER_EDGES = Self::BORDER_TOP.bits()
            | Self::BORDER_RIGHT.bits()
            | Self::BORDER_BOTTOM.bits()
            | Self::BORDER_LEFT.bits();
    }
}

bitflags! {
    /// Boolean attribute values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attrs: u16 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const REVERSE = 1 << 4;
        const BLINK = 1 << 5;
        const FAINT = 1 << 6;
        const UNDERLINE_SPACES = 1 << 7;
        const STRIKETHROUGH_SPACES = 1 << 8;
        const COLOR_WHITESPACE = 1 << 9;
        const INLINE = 1 << 10;
    }
}

/// Every boolean property paired with its value bit.
const BOOL_PROPS: [(Props, Attrs); 11] = [
    (Props::BOLD, Attrs::BOLD),
    (Props::ITALIC, Attrs::ITALIC),
    (Props::UNDERLINE, Attrs::UNDERLINE),
    (Props::STRIKETHROUGH, Attrs::STRIKETHROUGH),
    (Props::REVERSE, Attrs::REVERSE),
    (Props::BLINK, Attrs::BLINK),
    (Props::FAINT, Attrs::FAINT),
    (Props::UNDERLINE_SPACES, Attrs::UNDERLINE_SPACES),
    (Props::STRIKETHROUGH_SPACES, Attrs::STRIKETHROUGH_SPACES),
    (Props::COLOR_WHITESPACE, Attrs::COLOR_WHITESPACE),
    (Props::INLINE, Attrs::INLINE),
];

/// Per-side border color flags, indexed top, right, bottom, left.
const BORDER_SIDE_FG: [Props; 4] = [
    Props::BORDER_TOP_FG,
    Props::BORDER_RIGHT_FG,
    Props::BORDER_BOTTOM_FG,
    Props::BORDER_LEFT_FG,
];
const BORDER_SIDE_BG: [Props; 4] = [
    Props::BORDER_TOP_BG,
    Props::BORDER_RIGHT_BG,
    Props::BORDER_BOTTOM_BG,
    Props::BORDER_LEFT_BG,
];

/// Type alias for transform functions.
pub type TransformFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// A terminal style definition.
#[derive(Clone, Default)]
pub struct Style {
    /// Which properties are set.
    props: Props,
    /// Boolean attribute values.
    attrs: Attrs,

    fg_color: Option<ColorValue>,
    bg_color: Option<ColorValue>,

    width: u16,
    height: u16,
    max_width: u16,
    max_height: u16,

    align_horizontal: Position,
    align_vertical: Position,

    padding: BoxDimensions,
    margin: BoxDimensions,
    margin_bg_color: Option<ColorValue>,

    border_style: Border,
    border_edges: BorderEdges,
    /// General border colors.
    border_fg: Option<ColorValue>,
    border_bg: Option<ColorValue>,
    /// Per-side overrides, indexed top, right, bottom, left.
    border_side_fg: [Option<ColorValue>; 4],
    border_side_bg: [Option<ColorValue>; 4],

    tab_width: u16,

    /// Text transform function.
    transform: Option<TransformFn>,

    /// Pre-bound content.
    value: String,
}

impl std::fmt::Debug for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Style")
            .field("props", &self.props)
            .field("attrs", &self.attrs)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("padding", &self.padding)
            .field("margin", &self.margin)
            .finish()
    }
}

impl Style {
    /// Creates a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Internal helpers ====================

    fn set_bool(mut self, prop: Props, attr: Attrs, v: bool) -> Self {
        self.props |= prop;
        self.attrs.set(attr, v);
        self
    }

    fn unset_bool(mut self, prop: Props, attr: Attrs) -> Self {
        self.props.remove(prop);
        self.attrs.remove(attr);
        self
    }

    fn get_bool(&self, prop: Props, attr: Attrs) -> Option<bool> {
        self.props.contains(prop).then(|| self.attrs.contains(attr))
    }

    /// Attribute bits whose value is true.
    ///
    /// Setting a flag to false and unsetting it both clear its bit, so a
    /// bit here always implies the matching property is set.
    pub(crate) fn effective_attrs(&self) -> Attrs {
        self.attrs
    }

    // ==================== Content ====================

    /// Bind content to this style. It is rendered ahead of any text passed
    /// to [`Style::render`].
    pub fn set_string(mut self, s: impl Into<String>) -> Self {
        self.props |= Props::STRING;
        self.value = s.into();
        self
    }

    /// Remove the bound content.
    pub fn unset_string(mut self) -> Self {
        self.props.remove(Props::STRING);
        self.value.clear();
        self
    }

    /// Get the bound content.
    pub fn value(&self) -> Option<&str> {
        self.props.contains(Props::STRING).then_some(self.value.as_str())
    }

    /// Set text transform function, applied before any formatting.
    pub fn transform<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.props |= Props::TRANSFORM;
        self.transform = Some(Arc::new(f));
        self
    }

    /// Remove the text transform.
    pub fn unset_transform(mut self) -> Self {
        self.props.remove(Props::TRANSFORM);
        self.transform = None;
        self
    }

    /// Get the text transform.
    pub fn get_transform(&self) -> Option<&TransformFn> {
        self.transform.as_ref()
    }

    // ==================== Boolean Attributes ====================

    /// Set bold text.
    pub fn bold(self, v: bool) -> Self {
        self.set_bool(Props::BOLD, Attrs::BOLD, v)
    }

    /// Set italic text.
    pub fn italic(self, v: bool) -> Self {
        self.set_bool(Props::ITALIC, Attrs::ITALIC, v)
    }

    /// Set underlined text.
    pub fn underline(self, v: bool) -> Self {
        self.set_bool(Props::UNDERLINE, Attrs::UNDERLINE, v)
    }

    /// Set strikethrough text.
    pub fn strikethrough(self, v: bool) -> Self {
        self.set_bool(Props::STRIKETHROUGH, Attrs::STRIKETHROUGH, v)
    }

    /// Set reverse video (swap fg/bg).
    pub fn reverse(self, v: bool) -> Self {
        self.set_bool(Props::REVERSE, Attrs::REVERSE, v)
    }

    /// Set blinking text.
    pub fn blink(self, v: bool) -> Self {
        self.set_bool(Props::BLINK, Attrs::BLINK, v)
    }

    /// Set faint/dim text.
    pub fn faint(self, v: bool) -> Self {
        self.set_bool(Props::FAINT, Attrs::FAINT, v)
    }

    /// Set whether padding whitespace is underlined.
    pub fn underline_spaces(self, v: bool) -> Self {
        self.set_bool(Props::UNDERLINE_SPACES, Attrs::UNDERLINE_SPACES, v)
    }

    /// Set whether padding whitespace is struck through.
    pub fn strikethrough_spaces(self, v: bool) -> Self {
        self.set_bool(Props::STRIKETHROUGH_SPACES, Attrs::STRIKETHROUGH_SPACES, v)
    }

    /// Set whether the background color extends over padding whitespace.
    pub fn color_whitespace(self, v: bool) -> Self {
        self.set_bool(Props::COLOR_WHITESPACE, Attrs::COLOR_WHITESPACE, v)
    }

    /// Set inline mode (single line, no margins/padding/borders).
    pub fn inline(self, v: bool) -> Self {
        self.set_bool(Props::INLINE, Attrs::INLINE, v)
    }

    pub fn unset_bold(self) -> Self {
        self.unset_bool(Props::BOLD, Attrs::BOLD)
    }

    pub fn unset_italic(self) -> Self {
        self.unset_bool(Props::ITALIC, Attrs::ITALIC)
    }

    pub fn unset_underline(self) -> Self {
        self.unset_bool(Props::UNDERLINE, Attrs::UNDERLINE)
    }

    pub fn unset_strikethrough(self) -> Self {
        self.unset_bool(Props::STRIKETHROUGH, Attrs::STRIKETHROUGH)
    }

    pub fn unset_reverse(self) -> Self {
        self.unset_bool(Props::REVERSE, Attrs::REVERSE)
    }

    pub fn unset_blink(self) -> Self {
        self.unset_bool(Props::BLINK, Attrs::BLINK)
    }

    pub fn unset_faint(self) -> Self {
        self.unset_bool(Props::FAINT, Attrs::FAINT)
    }

    pub fn unset_underline_spaces(self) -> Self {
        self.unset_bool(Props::UNDERLINE_SPACES, Attrs::UNDERLINE_SPACES)
    }

    pub fn unset_strikethrough_spaces(self) -> Self {
        self.unset_bool(Props::STRIKETHROUGH_SPACES, Attrs::STRIKETHROUGH_SPACES)
    }

    pub fn unset_color_whitespace(self) -> Self {
        self.unset_bool(Props::COLOR_WHITESPACE, Attrs::COLOR_WHITESPACE)
    }

    pub fn unset_inline(self) -> Self {
        self.unset_bool(Props::INLINE, Attrs::INLINE)
    }

    pub fn get_bold(&self) -> Option<bool> {
        self.get_bool(Props::BOLD, Attrs::BOLD)
    }

    pub fn get_italic(&self) -> Option<bool> {
        self.get_bool(Props::ITALIC, Attrs::ITALIC)
    }

    pub fn get_underline(&self) -> Option<bool> {
        self.get_bool(Props::UNDERLINE, Attrs::UNDERLINE)
    }

    pub fn get_strikethrough(&self) -> Option<bool> {
        self.get_bool(Props::STRIKETHROUGH, Attrs::STRIKETHROUGH)
    }

    pub fn get_reverse(&self) -> Option<bool> {
        self.get_bool(Props::REVERSE, Attrs::REVERSE)
    }

    pub fn get_blink(&self) -> Option<bool> {
        self.get_bool(Props::BLINK, Attrs::BLINK)
    }

    pub fn get_faint(&self) -> Option<bool> {
        self.get_bool(Props::FAINT, Attrs::FAINT)
    }

    pub fn get_underline_spaces(&self) -> Option<bool> {
        self.get_bool(Props::UNDERLINE_SPACES, Attrs::UNDERLINE_SPACES)
    }

    pub fn get_strikethrough_spaces(&self) -> Option<bool> {
        self.get_bool(Props::STRIKETHROUGH_SPACES, Attrs::STRIKETHROUGH_SPACES)
    }

    pub fn get_color_whitespace(&self) -> Option<bool> {
        self.get_bool(Props::COLOR_WHITESPACE, Attrs::COLOR_WHITESPACE)
    }

    pub fn get_inline(&self) -> Option<bool> {
        self.get_bool(Props::INLINE, Attrs::INLINE)
    }

    // ==================== Colors ====================

    /// Set the foreground color.
    pub fn foreground(mut self, color: impl Into<ColorValue>) -> Self {
        self.props |= Props::FOREGROUND;
        self.fg_color = Some(color.into());
        self
    }

    /// Set the background color.
    pub fn background(mut self, color: impl Into<ColorValue>) -> Self {
        self.props |= Props::BACKGROUND;
        self.bg_color = Some(color.into());
        self
    }

    pub fn unset_foreground(mut self) -> Self {
        self.props.remove(Props::FOREGROUND);
        self.fg_color = None;
        self
    }

    pub fn unset_background(mut self) -> Self {
        self.props.remove(Props::BACKGROUND);
        self.bg_color = None;
        self
    }

    pub fn get_foreground(&self) -> Option<&ColorValue> {
        self.fg_color.as_ref()
    }

    pub fn get_background(&self) -> Option<&ColorValue> {
        self.bg_color.as_ref()
    }

    // ==================== Dimensions ====================

    /// Set the content width. Negative values clamp to 0.
    pub fn width(mut self, w: i32) -> Self {
        self.props |= Props::WIDTH;
        self.width = clamp_dimension(w);
        self
    }

    /// Set the minimum height. Negative values clamp to 0.
    pub fn height(mut self, h: i32) -> Self {
        self.props |= Props::HEIGHT;
        self.height = clamp_dimension(h);
        self
    }

    /// Set the maximum width of the final output.
    pub fn max_width(mut self, w: i32) -> Self {
        self.props |= Props::MAX_WIDTH;
        self.max_width = clamp_dimension(w);
        self
    }

    /// Set the maximum height of the final output.
    pub fn max_height(mut self, h: i32) -> Self {
        self.props |= Props::MAX_HEIGHT;
        self.max_height = clamp_dimension(h);
        self
    }

    /// Expand tabs to `n` spaces (0 = remove tabs). Without it tabs pass through.
    pub fn tab_width(mut self, n: i32) -> Self {
        self.props |= Props::TAB_WIDTH;
        self.tab_width = clamp_dimension(n);
        self
    }

    pub fn unset_width(mut self) -> Self {
        self.props.remove(Props::WIDTH);
        self.width = 0;
        self
    }

    pub fn unset_height(mut self) -> Self {
        self.props.remove(Props::HEIGHT);
        self.height = 0;
        self
    }

    pub fn unset_max_width(mut self) -> Self {
        self.props.remove(Props::MAX_WIDTH);
        self.max_width = 0;
        self
    }

    pub fn unset_max_height(mut self) -> Self {
        self.props.remove(Props::MAX_HEIGHT);
        self.max_height = 0;
        self
    }

    pub fn unset_tab_width(mut self) -> Self {
        self.props.remove(Props::TAB_WIDTH);
        self.tab_width = 0;
        self
    }

    pub fn get_width(&self) -> Option<u16> {
        self.props.contains(Props::WIDTH).then_some(self.width)
    }

    pub fn get_height(&self) -> Option<u16> {
        self.props.contains(Props::HEIGHT).then_some(self.height)
    }

    pub fn get_max_width(&self) -> Option<u16> {
        self.props.contains(Props::MAX_WIDTH).then_some(self.max_width)
    }

    pub fn get_max_height(&self) -> Option<u16> {
        self.props.contains(Props::MAX_HEIGHT).then_some(self.max_height)
    }

    pub fn get_tab_width(&self) -> Option<u16> {
        self.props.contains(Props::TAB_WIDTH).then_some(self.tab_width)
    }

    // ==================== Alignment ====================

    /// Set horizontal alignment.
    pub fn align(self, p: Position) -> Self {
        self.align_horizontal(p)
    }

    /// Set horizontal alignment.
    pub fn align_horizontal(mut self, p: Position) -> Self {
        self.props |= Props::ALIGN_HORIZONTAL;
        self.align_horizontal = p;
        self
    }

    /// Set vertical alignment.
    pub fn align_vertical(mut self, p: Position) -> Self {
        self.props |= Props::ALIGN_VERTICAL;
        self.align_vertical = p;
        self
    }

    pub fn unset_align_horizontal(mut self) -> Self {
        self.props.remove(Props::ALIGN_HORIZONTAL);
        self.align_horizontal = Position::default();
        self
    }

    pub fn unset_align_vertical(mut self) -> Self {
        self.props.remove(Props::ALIGN_VERTICAL);
        self.align_vertical = Position::default();
        self
    }

    pub fn get_align_horizontal(&self) -> Option<Position> {
        self.props
            .contains(Props::ALIGN_HORIZONTAL)
            .then_some(self.align_horizontal)
    }

    pub fn get_align_vertical(&self) -> Option<Position> {
        self.props
            .contains(Props::ALIGN_VERTICAL)
            .then_some(self.align_vertical)
    }

    // ==================== Padding ====================

    /// Set padding on all sides (CSS shorthand). Negative values clamp to 0.
    pub fn padding(mut self, sides: impl Into<Sides<i32>>) -> Self {
        self.props |= Props::PADDING;
        self.padding = sides.into().clamped();
        self
    }

    /// Set top padding.
    pub fn padding_top(mut self, n: i32) -> Self {
        self.props |= Props::PADDING_TOP;
        self.padding.top = clamp_dimension(n);
        self
    }

    /// Set right padding.
    pub fn padding_right(mut self, n: i32) -> Self {
        self.props |= Props::PADDING_RIGHT;
        self.padding.right = clamp_dimension(n);
        self
    }

    /// Set bottom padding.
    pub fn padding_bottom(mut self, n: i32) -> Self {
        self.props |= Props::PADDING_BOTTOM;
        self.padding.bottom = clamp_dimension(n);
        self
    }

    /// Set left padding.
    pub fn padding_left(mut self, n: i32) -> Self {
        self.props |= Props::PADDING_LEFT;
        self.padding.left = clamp_dimension(n);
        self
    }

    pub fn unset_padding(mut self) -> Self {
        self.props.remove(Props::PADDING);
        self.padding = BoxDimensions::default();
        self
    }

    pub fn unset_padding_top(mut self) -> Self {
        self.props.remove(Props::PADDING_TOP);
        self.padding.top = 0;
        self
    }

    pub fn unset_padding_right(mut self) -> Self {
        self.props.remove(Props::PADDING_RIGHT);
        self.padding.right = 0;
        self
    }

    pub fn unset_padding_bottom(mut self) -> Self {
        self.props.remove(Props::PADDING_BOTTOM);
        self.padding.bottom = 0;
        self
    }

    pub fn unset_padding_left(mut self) -> Self {
        self.props.remove(Props::PADDING_LEFT);
        self.padding.left = 0;
        self
    }

    /// Effective padding; unset sides are 0.
    pub fn get_padding(&self) -> BoxDimensions {
        self.padding
    }

    // ==================== Margin ====================

    /// Set margin on all sides (CSS shorthand). Negative values clamp to 0.
    pub fn margin(mut self, sides: impl Into<Sides<i32>>) -> Self {
        self.props |= Props::MARGIN;
        self.margin = sides.into().clamped();
        self
    }

    /// Set top margin.
    pub fn margin_top(mut self, n: i32) -> Self {
        self.props |= Props::MARGIN_TOP;
        self.margin.top = clamp_dimension(n);
        self
    }

    /// Set right margin.
    pub fn margin_right(mut self, n: i32) -> Self {
        self.props |= Props::MARGIN_RIGHT;
        self.margin.right = clamp_dimension(n);
        self
    }

    /// Set bottom margin.
    pub fn margin_bottom(mut self, n: i32) -> Self {
        self.props |= Props::MARGIN_BOTTOM;
        self.margin.bottom = clamp_dimension(n);
        self
    }

    /// Set left margin.
    pub fn margin_left(mut self, n: i32) -> Self {
        self.props |= Props::MARGIN_LEFT;
        self.margin.left = clamp_dimension(n);
        self
    }

    /// Set margin background color.
    pub fn margin_background(mut self, color: impl Into<ColorValue>) -> Self {
        self.props |= Props::MARGIN_BACKGROUND;
        self.margin_bg_color = Some(color.into());
        self
    }

    pub fn unset_margin(mut self) -> Self {
        self.props.remove(Props::MARGIN);
        self.margin = BoxDimensions::default();
        self
    }

    pub fn unset_margin_top(mut self) -> Self {
        self.props.remove(Props::MARGIN_TOP);
        self.margin.top = 0;
        self
    }

    pub fn unset_margin_right(mut self) -> Self {
        self.props.remove(Props::MARGIN_RIGHT);
        self.margin.right = 0;
        self
    }

    pub fn unset_margin_bottom(mut self) -> Self {
        self.props.remove(Props::MARGIN_BOTTOM);
        self.margin.bottom = 0;
        self
    }

    pub fn unset_margin_left(mut self) -> Self {
        self.props.remove(Props::MARGIN_LEFT);
        self.margin.left = 0;
        self
    }

    pub fn unset_margin_background(mut self) -> Self {
        self.props.remove(Props::MARGIN_BACKGROUND);
        self.margin_bg_color = None;
        self
    }

    /// Effective margin; unset sides are 0.
    pub fn get_margin(&self) -> BoxDimensions {
        self.margin
    }

    pub fn get_margin_background(&self) -> Option<&ColorValue> {
        self.margin_bg_color.as_ref()
    }

    // ==================== Border ====================

    /// Set the border glyphs. All edges are drawn unless edges are set
    /// explicitly.
    pub fn border(mut self, border: Border) -> Self {
        self.props |= Props::BORDER_STYLE;
        self.border_style = border;
        self
    }

    /// Set the border glyphs and which edges are visible.
    pub fn border_with_edges(self, border: Border, edges: BorderEdges) -> Self {
        self.border(border)
            .border_top(edges.top)
            .border_right(edges.right)
            .border_bottom(edges.bottom)
            .border_left(edges.left)
    }

    /// Enable or disable top border.
    pub fn border_top(mut self, v: bool) -> Self {
        self.props |= Props::BORDER_TOP;
        self.border_edges.top = v;
        self
    }

    /// Enable or disable right border.
    pub fn border_right(mut self, v: bool) -> Self {
        self.props |= Props::BORDER_RIGHT;
        self.border_edges.right = v;
        self
    }

    /// Enable or disable bottom border.
    pub fn border_bottom(mut self, v: bool) -> Self {
        self.props |= Props::BORDER_BOTTOM;
        self.border_edges.bottom = v;
        self
    }

    /// Enable or disable left border.
    pub fn border_left(mut self, v: bool) -> Self {
        self.props |= Props::BORDER_LEFT;
        self.border_edges.left = v;
        self
    }

    pub fn unset_border_style(mut self) -> Self {
        self.props.remove(Props::BORDER_STYLE);
        self.border_style = Border::none();
        self
    }

    pub fn unset_border_top(mut self) -> Self {
        self.props.remove(Props::BORDER_TOP);
        self.border_edges.top = false;
        self
    }

    pub fn unset_border_right(mut self) -> Self {
        self.props.remove(Props::BORDER_RIGHT);
        self.border_edges.right = false;
        self
    }

    pub fn unset_border_bottom(mut self) -> Self {
        self.props.remove(Props::BORDER_BOTTOM);
        self.border_edges.bottom = false;
        self
    }

    pub fn unset_border_left(mut self) -> Self {
        self.props.remove(Props::BORDER_LEFT);
        self.border_edges.left = false;
        self
    }

    pub fn get_border_style(&self) -> Option<&Border> {
        self.props
            .contains(Props::BORDER_STYLE)
            .then_some(&self.border_style)
    }

    /// Get the effective border edges (all if a border is set but no edges
    /// were specified).
    pub fn get_border_edges(&self) -> BorderEdges {
        if !self.props.contains(Props::BORDER_STYLE) {
            return BorderEdges::none();
        }
        if self.props.intersects(Props::BORDER_EDGES) {
            self.border_edges
        } else {
            BorderEdges::all()
        }
    }

    /// Set the border foreground color for every side without an override.
    pub fn border_foreground(mut self, color: impl Into<ColorValue>) -> Self {
        self.props |= Props::BORDER_FG;
        self.border_fg = Some(color.into());
        self
    }

    /// Set the border background color for every side without an override.
    pub fn border_background(mut self, color: impl Into<ColorValue>) -> Self {
        self.props |= Props::BORDER_BG;
        self.border_bg = Some(color.into());
        self
    }

    fn set_side_fg(mut self, side: usize, color: ColorValue) -> Self {
        self.props |= BORDER_SIDE_FG[side];
        self.border_side_fg[side] = Some(color);
        self
    }

    fn set_side_bg(mut self, side: usize, color: ColorValue) -> Self {
        self.props |= BORDER_SIDE_BG[side];
        self.border_side_bg[side] = Some(color);
        self
    }

    fn unset_side_fg(mut self, side: usize) -> Self {
        self.props.remove(BORDER_SIDE_FG[side]);
        self.border_side_fg[side] = None;
        self
    }

    fn unset_side_bg(mut self, side: usize) -> Self {
        self.props.remove(BORDER_SIDE_BG[side]);
        self.border_side_bg[side] = None;
        self
    }

    pub fn border_top_foreground(self, color: impl Into<ColorValue>) -> Self {
        self.set_side_fg(0, color.into())
    }

    pub fn border_right_foreground(self, color: impl Into<ColorValue>) -> Self {
        self.set_side_fg(1, color.into())
    }

    pub fn border_bottom_foreground(self, color: impl Into<ColorValue>) -> Self {
        self.set_side_fg(2, color.into())
    }

    pub fn border_left_foreground(self, color: impl Into<ColorValue>) -> Self {
        self.set_side_fg(3, color.into())
    }

    pub fn border_top_background(self, color: impl Into<ColorValue>) -> Self {
        self.set_side_bg(0, color.into())
    }

    pub fn border_right_background(self, color: impl Into<ColorValue>) -> Self {
        self.set_side_bg(1, color.into())
    }

    pub fn border_bottom_background(self, color: impl Into<ColorValue>) -> Self {
        self.set_side_bg(2, color.into())
    }

    pub fn border_left_background(self, color: impl Into<ColorValue>) -> Self {
        self.set_side_bg(3, color.into())
    }

    pub fn unset_border_foreground(mut self) -> Self {
        self.props.remove(Props::BORDER_FG);
        self.border_fg = None;
        self
    }

    pub fn unset_border_background(mut self) -> Self {
        self.props.remove(Props::BORDER_BG);
        self.border_bg = None;
        self
    }

    pub fn unset_border_top_foreground(self) -> Self {
        self.unset_side_fg(0)
    }

    pub fn unset_border_right_foreground(self) -> Self {
        self.unset_side_fg(1)
    }

    pub fn unset_border_bottom_foreground(self) -> Self {
        self.unset_side_fg(2)
    }

    pub fn unset_border_left_foreground(self) -> Self {
        self.unset_side_fg(3)
    }

    pub fn unset_border_top_background(self) -> Self {
        self.unset_side_bg(0)
    }

    pub fn unset_border_right_background(self) -> Self {
        self.unset_side_bg(1)
    }

    pub fn unset_border_bottom_background(self) -> Self {
        self.unset_side_bg(2)
    }

    pub fn unset_border_left_background(self) -> Self {
        self.unset_side_bg(3)
    }

    pub fn get_border_foreground(&self) -> Option<&ColorValue> {
        self.border_fg.as_ref()
    }

    pub fn get_border_background(&self) -> Option<&ColorValue> {
        self.border_bg.as_ref()
    }

    /// Foreground for one side (top, right, bottom, left = 0..4), falling
    /// back to the general border foreground.
    pub(crate) fn border_side_foreground(&self, side: usize) -> Option<&ColorValue> {
        self.border_side_fg[side].as_ref().or(self.border_fg.as_ref())
    }

    pub(crate) fn border_side_background(&self, side: usize) -> Option<&ColorValue> {
        self.border_side_bg[side].as_ref().or(self.border_bg.as_ref())
    }

    // ==================== Queries ====================

    /// Check if a property is set.
    pub fn is_set(&self, prop: Props) -> bool {
        self.props.contains(prop)
    }

    /// Returns true if nothing is set.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    // ==================== Inheritance ====================

    /// Fill every property absent from `self` with the parent's value.
    ///
    /// Properties set on `self` win; the parent is left untouched.
    pub fn inherit(self, parent: &Style) -> Style {
        let child = self;
        let mut out = parent.clone();

        for (prop, attr) in BOOL_PROPS {
            if child.props.contains(prop) {
                out.props |= prop;
                out.attrs.set(attr, child.attrs.contains(attr));
            }
        }

        let has = |p: Props| child.props.contains(p);

        if has(Props::FOREGROUND) {
            out.fg_color.clone_from(&child.fg_color);
        }
        if has(Props::BACKGROUND) {
            out.bg_color.clone_from(&child.bg_color);
        }
        if has(Props::WIDTH) {
            out.width = child.width;
        }
        if has(Props::HEIGHT) {
            out.height = child.height;
        }
        if has(Props::MAX_WIDTH) {
            out.max_width = child.max_width;
        }
        if has(Props::MAX_HEIGHT) {
            out.max_height = child.max_height;
        }
        if has(Props::TAB_WIDTH) {
            out.tab_width = child.tab_width;
        }
        if has(Props::ALIGN_HORIZONTAL) {
            out.align_horizontal = child.align_horizontal;
        }
        if has(Props::ALIGN_VERTICAL) {
            out.align_vertical = child.align_vertical;
        }

        if has(Props::PADDING_TOP) {
            out.padding.top = child.padding.top;
        }
        if has(Props::PADDING_RIGHT) {
            out.padding.right = child.padding.right;
        }
        if has(Props::PADDING_BOTTOM) {
            out.padding.bottom = child.padding.bottom;
        }
        if has(Props::PADDING_LEFT) {
            out.padding.left = child.padding.left;
        }
        if has(Props::MARGIN_TOP) {
            out.margin.top = child.margin.top;
        }
        if has(Props::MARGIN_RIGHT) {
            out.margin.right = child.margin.right;
        }
        if has(Props::MARGIN_BOTTOM) {
            out.margin.bottom = child.margin.bottom;
        }
        if has(Props::MARGIN_LEFT) {
            out.margin.left = child.margin.left;
        }
        if has(Props::MARGIN_BACKGROUND) {
            out.margin_bg_color.clone_from(&child.margin_bg_color);
        }

        if has(Props::BORDER_STYLE) {
            out.border_style.clone_from(&child.border_style);
        }
        if has(Props::BORDER_TOP) {
            out.border_edges.top = child.border_edges.top;
        }
        if has(Props::BORDER_RIGHT) {
            out.border_edges.right = child.border_edges.right;
        }
        if has(Props::BORDER_BOTTOM) {
            out.border_edges.bottom = child.border_edges.bottom;
        }
        if has(Props::BORDER_LEFT) {
            out.border_edges.left = child.border_edges.left;
        }
        if has(Props::BORDER_FG) {
            out.border_fg.clone_from(&child.border_fg);
        }
        if has(Props::BORDER_BG) {
            out.border_bg.clone_from(&child.border_bg);
        }
        for side in 0..4 {
            if has(BORDER_SIDE_FG[side]) {
                out.border_side_fg[side].clone_from(&child.border_side_fg[side]);
            }
            if has(BORDER_SIDE_BG[side]) {
                out.border_side_bg[side].clone_from(&child.border_side_bg[side]);
            }
        }

        if has(Props::TRANSFORM) {
            out.transform.clone_from(&child.transform);
        }
        if has(Props::STRING) {
            out.value.clone_from(&child.value);
        }

        out.props |= child.props;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_builder() {
        let s = Style::new().bold(true).foreground("#ff0000");
        assert!(s.attrs.contains(Attrs::BOLD));
        assert!(s.props.contains(Props::FOREGROUND));
    }

    #[test]
    fn test_effective_attrs_drop_false_and_unset_flags() {
        assert!(Style::new().bold(true).unset_bold().effective_attrs().is_empty());
        assert!(Style::new().italic(true).italic(false).effective_attrs().is_empty());
        assert_eq!(
            Style::new().bold(true).faint(true).unset_faint().effective_attrs(),
            Attrs::BOLD
        );
    }

    #[test]
    fn test_unset_differs_from_false() {
        let off = Style::new().bold(false);
        assert_eq!(off.get_bold(), Some(false));
        assert!(off.is_set(Props::BOLD));

        let unset = Style::new().bold(true).unset_bold();
        assert_eq!(unset.get_bold(), None);
        assert!(!unset.is_set(Props::BOLD));
        assert!(unset.is_empty());
    }

    #[test]
    fn test_zero_width_is_set() {
        let s = Style::new().width(0);
        assert_eq!(s.get_width(), Some(0));
        assert_eq!(s.unset_width().get_width(), None);
    }

    #[test]
    fn test_padding() {
        let s = Style::new().padding(2);
        assert_eq!(s.padding, Sides::new(2, 2, 2, 2));

        let s = Style::new().padding((1, 2));
        assert_eq!(s.padding, Sides::new(1, 2, 1, 2));
    }

    #[test]
    fn test_negative_numbers_clamp() {
        let s = Style::new().width(-5).padding((-1, 3)).margin_left(-2);
        assert_eq!(s.get_width(), Some(0));
        assert_eq!(s.get_padding(), Sides::new(0, 3, 0, 3));
        assert_eq!(s.get_margin().left, 0);
        assert!(s.is_set(Props::MARGIN_LEFT));
    }

    #[test]
    fn test_unset_single_padding_side() {
        let s = Style::new().padding(1).unset_padding_left();
        assert!(!s.is_set(Props::PADDING_LEFT));
        assert!(s.is_set(Props::PADDING_TOP));
        assert_eq!(s.get_padding(), Sides::new(1, 1, 1, 0));
    }

    #[test]
    fn test_previous_chain_steps_unaffected() {
        let a = Style::new().bold(true);
        let b = a.clone().italic(true);
        assert_eq!(a.get_italic(), None);
        assert_eq!(b.get_italic(), Some(true));
        assert_eq!(b.get_bold(), Some(true));
    }

    #[test]
    fn test_inherit_child_wins() {
        let parent = Style::new()
            .bold(true)
            .foreground("#ff0000")
            .padding(1)
            .width(10);
        let child = Style::new().bold(false).foreground("#00ff00").padding_left(4);
        let merged = child.inherit(&parent);

        assert_eq!(merged.get_bold(), Some(false));
        assert_eq!(merged.get_foreground(), Some(&ColorValue::from("#00ff00")));
        assert_eq!(merged.get_padding(), Sides::new(1, 1, 1, 4));
        assert_eq!(merged.get_width(), Some(10));
        // Parent untouched.
        assert_eq!(parent.get_bold(), Some(true));
    }

    #[test]
    fn test_inherit_absent_falls_through() {
        let parent = Style::new().italic(true).border(Border::rounded());
        let merged = Style::new().inherit(&parent);
        assert_eq!(merged.get_italic(), Some(true));
        assert_eq!(merged.get_border_style(), Some(&Border::rounded()));
    }

    #[test]
    fn test_border_edges_default_to_all() {
        let s = Style::new().border(Border::normal());
        assert!(s.get_border_edges().is_all());

        let s = s.border_bottom(false);
        let edges = s.get_border_edges();
        assert!(!edges.bottom);
        assert!(!edges.top);

        assert!(!Style::new().get_border_edges().any());
    }

    #[test]
    fn test_border_side_color_fallback() {
        let s = Style::new()
            .border_foreground("#ffffff")
            .border_left_foreground("#000000");
        assert_eq!(s.border_side_foreground(3), Some(&ColorValue::from("#000000")));
        assert_eq!(s.border_side_foreground(0), Some(&ColorValue::from("#ffffff")));
        assert_eq!(s.border_side_background(0), None);
    }

    #[test]
    fn test_bound_string() {
        let s = Style::new().set_string("hello");
        assert_eq!(s.value(), Some("hello"));
        assert_eq!(s.unset_string().value(), None);
    }
}
