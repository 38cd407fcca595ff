//! The render pipeline.
//!
//! Stages always run in the same order, and each is skipped when the
//! property that drives it is absent:
//!
//! 1. resolve content (bound string + argument) and apply the transform
//! 2. expand tabs when the style sets a tab width
//! 3. ANSI format, closing codes per line when box stages follow
//! 4. wrap and align to `width`, then pad to `height`
//! 5. padding
//! 6. border
//! 7. margin
//! 8. truncate to `max_width` / `max_height`

use std::fmt;

use tracing::trace;

use crate::align::{apply_height, apply_width};
use crate::ansi;
use crate::border::{self, BorderColors, BorderOptions};
use crate::boxmodel::{apply_margin, apply_padding};
use crate::color::{Channel, ColorResolver};
use crate::config::RenderConfig;
use crate::measure::truncate;
use crate::style::{Props, Style};

impl Style {
    /// Render `text` with the default configuration.
    ///
    /// ```rust
    /// use stylebox::Style;
    ///
    /// let out = Style::new().italic(true).bold(true).render("hello");
    /// assert_eq!(out, "\x1b[1m\x1b[3mhello\x1b[0m");
    /// ```
    pub fn render(&self, text: &str) -> String {
        self.render_with(text, &RenderConfig::DEFAULT)
    }

    /// Render `text` with an explicit configuration.
    pub fn render_with(&self, text: &str, config: &RenderConfig) -> String {
        let mut s = match self.value() {
            Some(bound) if text.is_empty() => bound.to_string(),
            Some(bound) => format!("{bound} {text}"),
            None => text.to_string(),
        };

        if let Some(transform) = self.get_transform() {
            trace!(style.stage = "transform", "render stage");
            s = transform(&s);
        }

        if let Some(tab_width) = self.get_tab_width() {
            s = expand_tabs(&s, tab_width);
        }

        if s.is_empty() && !self.has_box_properties() {
            return s;
        }

        let inline = self.get_inline() == Some(true);
        if inline {
            s = s.replace('\n', "");
        }

        trace!(style.stage = "format", "render stage");
        s = ansi::format(self, &s, config);
        if self.has_line_stages(inline) {
            s = ansi::close_lines(&s);
        }

        let ws = self.whitespace_codes(config);

        if self.is_set(Props::WIDTH) || self.is_set(Props::ALIGN_HORIZONTAL) {
            trace!(style.stage = "width", "render stage");
            let target = self.get_width().filter(|w| *w > 0).map(usize::from);
            let pos = self.get_align_horizontal().unwrap_or_default();
            s = apply_width(&s, target, pos, &ws);
        }

        if let Some(height) = self.get_height().filter(|h| *h > 0) {
            trace!(style.stage = "height", "render stage");
            let pos = self.get_align_vertical().unwrap_or_default();
            s = apply_height(&s, usize::from(height), pos, &ws);
        }

        if !inline {
            let padding = self.get_padding();
            if !padding.is_zero() {
                trace!(style.stage = "padding", "render stage");
                s = apply_padding(&s, padding, &ws);
            }

            let edges = self.get_border_edges();
            if let Some(glyphs) = self.get_border_style().filter(|_| edges.any()) {
                trace!(style.stage = "border", "render stage");
                let opts = BorderOptions {
                    colors: self.border_colors(config),
                    ..BorderOptions::default()
                };
                s = border::render(glyphs, edges, &s, &opts);
            }

            let margin = self.get_margin();
            if !margin.is_zero() {
                trace!(style.stage = "margin", "render stage");
                let codes: Vec<String> = self
                    .get_margin_background()
                    .map(|c| config.escape_code(c, Channel::Background))
                    .filter(|code| !code.is_empty())
                    .into_iter()
                    .collect();
                s = apply_margin(&s, margin, &codes);
            }
        }

        if let Some(max) = self.get_max_width().filter(|w| *w > 0) {
            trace!(style.stage = "max_width", "render stage");
            s = s
                .split('\n')
                .map(|line| truncate(line, usize::from(max)))
                .collect::<Vec<_>>()
                .join("\n");
        }

        if let Some(max) = self.get_max_height().filter(|h| *h > 0) {
            trace!(style.stage = "max_height", "render stage");
            s = s
                .split('\n')
                .take(usize::from(max))
                .collect::<Vec<_>>()
                .join("\n");
        }

        s
    }

    /// Whether empty content still produces a box.
    fn has_box_properties(&self) -> bool {
        self.get_border_edges().any()
            || !self.get_padding().is_zero()
            || !self.get_margin().is_zero()
            || self.is_set(Props::WIDTH)
            || self.is_set(Props::HEIGHT)
    }

    /// Whether any stage after formatting works on individual lines.
    fn has_line_stages(&self, inline: bool) -> bool {
        let boxed = !inline
            && (!self.get_padding().is_zero()
                || !self.get_margin().is_zero()
                || (self.get_border_style().is_some() && self.get_border_edges().any()));
        boxed
            || self.is_set(Props::WIDTH)
            || self.is_set(Props::ALIGN_HORIZONTAL)
            || self.get_height().is_some_and(|h| h > 0)
            || self.get_max_width().is_some_and(|w| w > 0)
            || self.get_max_height().is_some_and(|h| h > 0)
    }

    /// Codes applied to structural whitespace: underline, strikethrough,
    /// then background.
    fn whitespace_codes(&self, resolver: &dyn ColorResolver) -> Vec<String> {
        let mut codes = Vec::new();
        if self.get_underline_spaces() == Some(true) {
            codes.push(ansi::UNDERLINE.to_string());
        }
        if self.get_strikethrough_spaces() == Some(true) {
            codes.push(ansi::STRIKETHROUGH.to_string());
        }
        if self.get_color_whitespace() != Some(false) {
            if let Some(bg) = self.get_background() {
                let code = resolver.escape_code(bg, Channel::Background);
                if !code.is_empty() {
                    codes.push(code);
                }
            }
        }
        codes
    }

    fn border_colors(&self, resolver: &dyn ColorResolver) -> BorderColors {
        let mut colors = BorderColors::default();
        for side in 0..4 {
            if let Some(c) = self.border_side_foreground(side) {
                colors.fg[side] = resolver.escape_code(c, Channel::Foreground);
            }
            if let Some(c) = self.border_side_background(side) {
                colors.bg[side] = resolver.escape_code(c, Channel::Background);
            }
        }
        colors
    }
}

/// Renders the bound content with the default configuration.
impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(""))
    }
}

fn expand_tabs(s: &str, tab_width: u16) -> String {
    if !s.contains('\t') {
        return s.to_string();
    }
    s.replace('\t', &" ".repeat(usize::from(tab_width)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::NBSP;
    use crate::border::Border;
    use crate::color::ColorProfile;
    use crate::measure::{height, width};
    use crate::position::Position;

    fn nb(n: usize) -> String {
        std::iter::repeat_n(NBSP, n).collect()
    }

    #[test]
    fn test_plain_style_is_identity() {
        assert_eq!(Style::new().render("hello\nworld"), "hello\nworld");
    }

    #[test]
    fn test_transform_applies_before_format() {
        let s = Style::new()
            .bold(true)
            .transform(|t| t.to_uppercase());
        assert_eq!(s.render("hi"), "\x1b[1mHI\x1b[0m");
    }

    #[test]
    fn test_empty_content_short_circuits() {
        assert_eq!(Style::new().bold(true).render(""), "");
    }

    #[test]
    fn test_empty_content_with_padding_renders_box() {
        let out = Style::new().padding((0, 1)).render("");
        assert_eq!(out, nb(2));
    }

    #[test]
    fn test_bound_string_joined_with_space() {
        let s = Style::new().set_string("Hello");
        assert_eq!(s.render("world"), "Hello world");
        assert_eq!(s.to_string(), "Hello");
    }

    #[test]
    fn test_tabs_expand_only_with_tab_width() {
        assert_eq!(Style::new().render("a\tb"), "a\tb");
        assert_eq!(Style::new().tab_width(2).render("a\tb"), "a  b");
        assert_eq!(Style::new().tab_width(0).render("a\tb"), "ab");
        assert_eq!(Style::new().tab_width(2).unset_tab_width().render("a\tb"), "a\tb");
    }

    #[test]
    fn test_unstyled_render_keeps_tabs_and_crlf() {
        assert_eq!(Style::new().render("a\tb\r\nc"), "a\tb\r\nc");
        assert_eq!(Style::new().render("a\r\nb"), "a\r\nb");
    }

    #[test]
    fn test_padding_keeps_styling_on_every_line() {
        let red = "\x1b[48;2;255;0;0m";
        let out = Style::new()
            .bold(true)
            .background("#ff0000")
            .padding_left(1)
            .render("a\nb");
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines[0], format!("{red}\u{a0}\x1b[0m\x1b[1m{red}a\x1b[0m"));
        assert_eq!(lines[1], format!("{red}\u{a0}\x1b[0m\x1b[1m{red}b\x1b[0m"));
    }

    #[test]
    fn test_border_keeps_styling_on_every_line() {
        let red = "\x1b[31m";
        let out = Style::new()
            .bold(true)
            .border(Border::ascii())
            .border_foreground(1u8)
            .render_with("a\nb", &RenderConfig::new().with_color_profile(ColorProfile::Ansi));
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], format!("{red}|\x1b[0m\x1b[1ma\x1b[0m{red}|\x1b[0m"));
        assert_eq!(lines[2], format!("{red}|\x1b[0m\x1b[1mb\x1b[0m{red}|\x1b[0m"));
    }

    #[test]
    fn test_max_height_keeps_reset() {
        let out = Style::new().bold(true).max_height(1).render("a\nb");
        assert_eq!(out, "\x1b[1ma\x1b[0m");
    }

    #[test]
    fn test_width_wraps_and_pads() {
        let out = Style::new().width(5).render("hello world");
        assert_eq!(out, "hello\nworld");
        let out = Style::new().width(6).align(Position::Right).render("ab");
        assert_eq!(out, format!("{}ab", nb(4)));
    }

    #[test]
    fn test_height_pads_lines() {
        let out = Style::new().height(3).align_vertical(Position::Bottom).render("x");
        assert_eq!(out, format!("{}\n{}\nx", nb(1), nb(1)));
    }

    #[test]
    fn test_padding_then_border_then_margin() {
        let out = Style::new()
            .padding((0, 1))
            .border(Border::ascii())
            .margin_left(2)
            .render("x");
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "  +---+");
        assert_eq!(lines[1], format!("  |{}x{}|", nb(1), nb(1)));
        assert_eq!(lines[2], "  +---+");
    }

    #[test]
    fn test_inline_skips_box_model() {
        let out = Style::new()
            .inline(true)
            .padding(2)
            .border(Border::normal())
            .render("a\nb");
        assert_eq!(out, "ab");
    }

    #[test]
    fn test_max_width_and_height() {
        let out = Style::new()
            .max_width(2)
            .max_height(2)
            .render("abcd\nefgh\nijkl");
        assert_eq!(out, "ab\nef");
    }

    #[test]
    fn test_background_colors_padding() {
        let out = Style::new().background("#ff0000").padding_left(1).render("x");
        assert_eq!(
            out,
            "\x1b[48;2;255;0;0m\u{a0}\x1b[0m\x1b[48;2;255;0;0mx\x1b[0m"
        );

        let out = Style::new()
            .background("#ff0000")
            .color_whitespace(false)
            .padding_left(1)
            .render("x");
        assert_eq!(out, "\u{a0}\x1b[48;2;255;0;0mx\x1b[0m");
    }

    #[test]
    fn test_margin_background() {
        let out = Style::new()
            .margin_left(1)
            .margin_background(1u8)
            .render_with("x", &RenderConfig::new().with_color_profile(ColorProfile::Ansi));
        assert_eq!(out, "\x1b[41m \x1b[0mx");
    }

    #[test]
    fn test_border_side_colors() {
        let out = Style::new()
            .border_with_edges(Border::ascii(), crate::border::BorderEdges {
                top: false,
                right: false,
                bottom: false,
                left: true,
            })
            .border_left_foreground(1u8)
            .render_with("x", &RenderConfig::new().with_color_profile(ColorProfile::Ansi));
        assert_eq!(out, "\x1b[31m|\x1b[0mx");
    }

    #[test]
    fn test_rendered_size() {
        let out = Style::new()
            .width(4)
            .padding(1)
            .border(Border::rounded())
            .margin(1)
            .render("hi");
        assert_eq!(width(&out), 4 + 2 + 2 + 2);
        assert_eq!(height(&out), 1 + 2 + 2 + 2);
    }
}
