//! Escape-sequence-aware measurement of rendered text.
//!
//! Decorated text measures exactly like its undecorated form:
//!
//! ```rust
//! use stylebox::measure;
//!
//! assert_eq!(measure::width("\x1b[31mRed\x1b[0m"), 3);
//! assert_eq!(measure::height(""), 1);
//! assert_eq!(measure::size("ab\ncde"), (3, 2));
//! ```

use unicode_width::UnicodeWidthChar;

/// Scanner state for skipping escape sequences.
#[derive(Clone, Copy, PartialEq)]
enum State {
    Normal,
    Esc,
    Csi,
    Osc,
}

impl State {
    /// Advance the scanner by one char. Returns true if `c` is visible text.
    fn step(&mut self, c: char) -> bool {
        match *self {
            State::Normal => {
                if c == '\x1b' {
                    *self = State::Esc;
                    false
                } else {
                    true
                }
            }
            State::Esc => {
                *self = match c {
                    '[' => State::Csi,
                    ']' => State::Osc,
                    // Single-char escapes like \x1b7 end here.
                    _ => State::Normal,
                };
                false
            }
            State::Csi => {
                // Final byte is 0x40-0x7E (@ to ~)
                if ('@'..='~').contains(&c) {
                    *self = State::Normal;
                }
                false
            }
            State::Osc => {
                if c == '\x07' {
                    *self = State::Normal;
                } else if c == '\x1b' {
                    // ST is ESC \, the backslash is consumed by the Esc state.
                    *self = State::Esc;
                }
                false
            }
        }
    }
}

/// Display width of a single line, ignoring escape sequences.
pub fn visible_width(s: &str) -> usize {
    let mut state = State::Normal;
    s.chars()
        .filter(|&c| state.step(c))
        .map(|c| c.width().unwrap_or(0))
        .sum()
}

/// Remove every escape sequence from `s`.
pub fn strip_ansi(s: &str) -> String {
    let mut state = State::Normal;
    s.chars().filter(|&c| state.step(c)).collect()
}

/// Width of the widest line, 0 for the empty string.
pub fn width(s: &str) -> usize {
    s.split('\n').map(visible_width).max().unwrap_or(0)
}

/// Number of lines. Always at least 1, even for the empty string.
pub fn height(s: &str) -> usize {
    s.split('\n').count()
}

/// `(width, height)` of a block.
pub fn size(s: &str) -> (usize, usize) {
    (width(s), height(s))
}

/// Truncate a single line to at most `max` display columns.
///
/// Escape sequences are kept intact. If any sequence was seen and text was
/// cut, a reset is appended so the styling does not leak.
pub fn truncate(line: &str, max: usize) -> String {
    if visible_width(line) <= max {
        return line.to_string();
    }

    let mut state = State::Normal;
    let mut out = String::with_capacity(line.len());
    let mut used = 0;
    let mut saw_escape = false;

    for c in line.chars() {
        if state.step(c) {
            let w = c.width().unwrap_or(0);
            if used + w > max {
                break;
            }
            used += w;
        } else {
            saw_escape = true;
        }
        out.push(c);
    }

    if saw_escape {
        out.push_str(crate::ansi::RESET);
    }
    out
}
