#![allow(clippy::doc_markdown)]
#![allow(clippy::redundant_closure_for_method_calls)]

//! Property-based tests for measurement, rendering and layout invariants.

use proptest::prelude::*;
use stylebox::{
    Position, Style, height, join_horizontal, join_vertical, place, strip_ansi, visible_width,
    width,
};

fn position_strategy() -> impl Strategy<Value = Position> {
    prop_oneof![
        Just(Position::Top),
        Just(Position::Center),
        Just(Position::Bottom),
        Just(Position::Left),
        Just(Position::Right),
        Just(Position::Middle),
        (-2.0f64..3.0).prop_map(Position::Fraction),
    ]
}

fn ascii_block() -> impl Strategy<Value = String> {
    // 1-5 lines of 0-20 chars each
    prop::collection::vec("[a-zA-Z0-9 ]{0,20}", 1..=5).prop_map(|lines| lines.join("\n"))
}

fn sgr_code() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u8..=9).prop_map(|n| format!("\x1b[{n}m")),
        (0u8..=255).prop_map(|n| format!("\x1b[38;5;{n}m")),
        (any::<u8>(), any::<u8>(), any::<u8>())
            .prop_map(|(r, g, b)| format!("\x1b[48;2;{r};{g};{b}m")),
    ]
}

// =============================================================================
// Measurement
// =============================================================================

proptest! {
    #[test]
    fn width_ignores_escape_codes(text in "[a-z]{0,30}", code in sgr_code()) {
        let styled = format!("{code}{text}\x1b[0m");
        prop_assert_eq!(visible_width(&styled), text.len());
        prop_assert_eq!(strip_ansi(&styled), text);
    }

    #[test]
    fn height_is_line_count(block in ascii_block()) {
        prop_assert_eq!(height(&block), block.split('\n').count());
    }
}

// =============================================================================
// Rendering
// =============================================================================

proptest! {
    #[test]
    fn undecorated_render_is_identity(text in "[a-zA-Z0-9 \t\r\n]{0,40}") {
        prop_assert_eq!(Style::new().render(&text), text);
    }

    #[test]
    fn attribute_call_order_is_irrelevant(text in "[a-z]{1,10}") {
        let a = Style::new().underline(true).bold(true).faint(true).render(&text);
        let b = Style::new().faint(true).bold(true).underline(true).render(&text);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn padding_adds_exact_width(
        block in ascii_block(),
        left in 0i32..6,
        right in 0i32..6,
    ) {
        let out = Style::new().padding_left(left).padding_right(right).render(&block);
        prop_assert_eq!(width(&out), width(&block) + (left + right) as usize);
    }

    #[test]
    fn width_bounds_every_line(text in "[a-z ]{1,60}", w in 1i32..20) {
        let out = Style::new().width(w).render(&text);
        for line in out.split('\n') {
            prop_assert_eq!(visible_width(line), w as usize);
        }
    }
}

// =============================================================================
// Layout
// =============================================================================

proptest! {
    #[test]
    fn join_horizontal_height_is_max(
        pos in position_strategy(),
        a in ascii_block(),
        b in ascii_block(),
    ) {
        let out = join_horizontal(pos, &[&a, &b]);
        prop_assert_eq!(height(&out), height(&a).max(height(&b)));
    }

    #[test]
    fn join_vertical_lines_equal_width(
        pos in position_strategy(),
        a in ascii_block(),
        b in ascii_block(),
    ) {
        let out = join_vertical(pos, &[&a, &b]);
        let expected = width(&a).max(width(&b));
        for line in out.split('\n') {
            prop_assert_eq!(visible_width(line), expected);
        }
        prop_assert_eq!(height(&out), height(&a) + height(&b));
    }

    #[test]
    fn single_block_join_is_identity(pos in position_strategy(), block in ascii_block()) {
        prop_assert_eq!(join_horizontal(pos, &[&block]), block.clone());
        prop_assert_eq!(join_vertical(pos, &[&block]), block);
    }

    #[test]
    fn place_is_exact(
        w in 1usize..30,
        h in 1usize..10,
        hp in position_strategy(),
        vp in position_strategy(),
        block in ascii_block(),
    ) {
        let out = place(w, h, hp, vp, &block);
        prop_assert_eq!(out.split('\n').count(), h);
        for line in out.split('\n') {
            prop_assert_eq!(visible_width(line), w);
        }
    }
}
