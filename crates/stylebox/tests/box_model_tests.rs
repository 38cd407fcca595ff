//! Integration tests for the box model: width, alignment, height, padding,
//! border and margin, and the order they are applied in.

use stylebox::{Border, BorderEdges, Position, Props, RenderConfig, Style, height, size, width};

const NBSP: char = '\u{a0}';

fn nb(n: usize) -> String {
    std::iter::repeat_n(NBSP, n).collect()
}

fn lines(s: &str) -> Vec<&str> {
    s.split('\n').collect()
}

// ===========================================================================
// Width and alignment
// ===========================================================================

#[test]
fn width_pads_with_nbsp() {
    let out = Style::new().width(6).render("abc");
    assert_eq!(out, format!("abc{}", nb(3)));
}

#[test]
fn width_wraps_on_words_and_force_breaks() {
    let out = Style::new().width(4).render("ab cd efghij");
    assert_eq!(lines(&out), vec![
        format!("ab{}", nb(2)).as_str(),
        format!("cd{}", nb(2)).as_str(),
        "efgh",
        format!("ij{}", nb(2)).as_str(),
    ]);
}

#[test]
fn center_alignment_puts_smaller_half_left() {
    let out = Style::new().width(7).align(Position::Center).render("ab");
    assert_eq!(out, format!("{}ab{}", nb(2), nb(3)));
}

#[test]
fn alignment_without_width_uses_block_width() {
    let out = Style::new().align(Position::Right).render("a\nabc");
    assert_eq!(out, format!("{}a\nabc", nb(2)));
}

#[test]
fn width_applies_after_formatting() {
    let out = Style::new().bold(true).width(4).render("hi");
    assert_eq!(out, format!("\x1b[1mhi\x1b[0m{}", nb(2)));
}

#[test]
fn negative_width_clamps_to_zero() {
    let style = Style::new().width(-3);
    assert_eq!(style.get_width(), Some(0));
    assert_eq!(style.render("hello world"), "hello world");
}

#[test]
fn wrapping_keeps_hyphens_and_slashes() {
    let out = Style::new().width(5).render("ab-cdefg");
    assert_eq!(out, format!("ab-cd\nefg{}", nb(2)));
    let out = Style::new().width(6).render("abc/defghi");
    assert_eq!(out, format!("abc/de\nfghi{}", nb(2)));
}

#[test]
fn alignment_keeps_styling_on_every_line() {
    let out = Style::new().bold(true).width(3).align(Position::Right).render("a\nbc");
    assert_eq!(lines(&out), vec![
        format!("{}\x1b[1ma\x1b[0m", nb(2)).as_str(),
        format!("{}\x1b[1mbc\x1b[0m", nb(1)).as_str(),
    ]);
}

#[test]
fn wrapped_lines_are_styled_independently() {
    let out = Style::new().bold(true).width(5).render("hello world");
    assert_eq!(out, "\x1b[1mhello\x1b[0m\n\x1b[1mworld\x1b[0m");
}

// ===========================================================================
// Height
// ===========================================================================

#[test]
fn height_centers_vertically() {
    let out = Style::new()
        .height(4)
        .align_vertical(Position::Middle)
        .render("ab");
    assert_eq!(lines(&out), vec![nb(2).as_str(), "ab", nb(2).as_str(), nb(2).as_str()]);
}

#[test]
fn height_is_a_minimum() {
    let out = Style::new().height(1).render("a\nb\nc");
    assert_eq!(out, "a\nb\nc");
}

// ===========================================================================
// Padding
// ===========================================================================

#[test]
fn padding_adds_to_width() {
    for text in ["x", "hello", "a\nlonger line"] {
        let out = Style::new().padding((0, 3, 0, 2)).render(text);
        assert_eq!(width(&out), width(text) + 5);
    }
}

#[test]
fn padding_shorthand_forms() {
    let (w, h) = size(&Style::new().padding(1).render("x"));
    assert_eq!((w, h), (3, 3));

    let (w, h) = size(&Style::new().padding((1, 2)).render("x"));
    assert_eq!((w, h), (5, 3));

    let (w, h) = size(&Style::new().padding((1, 2, 3)).render("x"));
    assert_eq!((w, h), (5, 5));

    let (w, h) = size(&Style::new().padding((1, 2, 3, 4)).render("x"));
    assert_eq!((w, h), (7, 5));
}

#[test]
fn padding_rectangularizes_ragged_lines() {
    let out = Style::new().padding_left(1).render("a\nabc");
    assert_eq!(out, format!("{nbsp}a{}\n{nbsp}abc", nb(2), nbsp = NBSP));
}

// ===========================================================================
// Border
// ===========================================================================

#[test]
fn normal_border_wraps_content() {
    let out = Style::new().border(Border::normal()).render("hi");
    assert_eq!(out, "┌──┐\n│hi│\n└──┘");
}

#[test]
fn rounded_border_with_padding() {
    let out = Style::new()
        .border(Border::rounded())
        .padding((0, 1))
        .render("ok");
    assert_eq!(out, format!("╭────╮\n│{n}ok{n}│\n╰────╯", n = NBSP));
}

#[test]
fn partial_border_edges() {
    let out = Style::new()
        .border(Border::ascii())
        .border_top(true)
        .border_bottom(true)
        .render("ab");
    assert_eq!(out, "--\nab\n--");
}

#[test]
fn border_with_all_edges_off_draws_nothing() {
    let out = Style::new()
        .border_with_edges(Border::double(), BorderEdges::none())
        .render("ab");
    assert_eq!(out, "ab");
}

#[test]
fn border_foreground_colors_only_glyphs() {
    let config = RenderConfig::new();
    let out = Style::new()
        .border(Border::ascii())
        .border_foreground("#ff0000")
        .render_with("x", &config);
    let red = "\x1b[38;2;255;0;0m";
    assert_eq!(
        out,
        format!("{red}+-+\x1b[0m\n{red}|\x1b[0mx{red}|\x1b[0m\n{red}+-+\x1b[0m")
    );
}

#[test]
fn per_side_border_colors_override_general() {
    let out = Style::new()
        .border(Border::ascii())
        .border_foreground(1u8)
        .border_bottom_foreground(2u8)
        .render("x");
    let last = lines(&out)[2];
    assert_eq!(last, "\x1b[38;5;2m+-+\x1b[0m");
    let first = lines(&out)[0];
    assert_eq!(first, "\x1b[38;5;1m+-+\x1b[0m");
}

#[test]
fn side_borders_leave_content_styling_intact() {
    let out = Style::new()
        .foreground("#00ff00")
        .border(Border::ascii())
        .border_foreground(1u8)
        .render("a\nb");
    let red = "\x1b[38;5;1m";
    let green = "\x1b[38;2;0;255;0m";
    assert_eq!(lines(&out)[1], format!("{red}|\x1b[0m{green}a\x1b[0m{red}|\x1b[0m"));
    assert_eq!(lines(&out)[2], format!("{red}|\x1b[0m{green}b\x1b[0m{red}|\x1b[0m"));
}

// ===========================================================================
// Margin and ordering
// ===========================================================================

#[test]
fn margin_uses_regular_spaces() {
    let out = Style::new().margin((1, 2)).render("x");
    assert_eq!(out, "     \n  x  \n     ");
}

#[test]
fn margin_sits_outside_border_padding_inside() {
    let out = Style::new()
        .padding_left(1)
        .border(Border::ascii())
        .margin_left(1)
        .render("x");
    assert_eq!(lines(&out)[1], format!(" |{NBSP}x|"));
}

#[test]
fn full_box_dimensions() {
    let out = Style::new()
        .width(10)
        .padding((1, 2))
        .border(Border::thick())
        .margin((2, 3))
        .render("content");
    assert_eq!(width(&out), 10 + 4 + 2 + 6);
    assert_eq!(height(&out), 1 + 2 + 2 + 4);
}

#[test]
fn max_width_truncates_after_margin() {
    let out = Style::new()
        .margin_left(2)
        .max_width(4)
        .render("abcdef");
    assert_eq!(out, "  ab");
}

#[test]
fn inline_collapses_lines_and_skips_box() {
    let out = Style::new()
        .inline(true)
        .margin(3)
        .render("one\ntwo");
    assert_eq!(out, "onetwo");
}

#[test]
fn empty_content_with_border_still_renders() {
    let out = Style::new().border(Border::ascii()).render("");
    assert_eq!(out, "++\n||\n++");
}

// ===========================================================================
// Style values
// ===========================================================================

#[test]
fn chain_steps_are_independent() {
    let base = Style::new().padding(1);
    let bordered = base.clone().border(Border::normal());
    assert!(!base.is_set(Props::BORDER_STYLE));
    assert_ne!(base.render("x"), bordered.render("x"));
}

#[test]
fn inherit_fills_absent_box_properties() {
    let parent = Style::new().padding(1).border(Border::ascii());
    let child = Style::new().padding_left(0).inherit(&parent);
    let out = child.render("x");
    assert_eq!(lines(&out)[2], format!("|x{NBSP}|"));
}
