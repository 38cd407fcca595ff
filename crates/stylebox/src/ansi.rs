//! SGR escape-code formatting.
//!
//! Codes are emitted in a fixed order, independent of the order in which a
//! style's setters were called: bold, faint, italic, underline, blink,
//! reverse, strikethrough, then foreground and background color. Codes are
//! concatenated and closed by a single trailing reset.

use crate::color::{Channel, ColorResolver};
use crate::style::{Attrs, Style};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const FAINT: &str = "\x1b[2m";
pub const ITALIC: &str = "\x1b[3m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const BLINK: &str = "\x1b[5m";
pub const REVERSE: &str = "\x1b[7m";
pub const STRIKETHROUGH: &str = "\x1b[9m";

/// Text attributes in emission order.
const ATTR_ORDER: [(Attrs, &str); 7] = [
    (Attrs::BOLD, BOLD),
    (Attrs::FAINT, FAINT),
    (Attrs::ITALIC, ITALIC),
    (Attrs::UNDERLINE, UNDERLINE),
    (Attrs::BLINK, BLINK),
    (Attrs::REVERSE, REVERSE),
    (Attrs::STRIKETHROUGH, STRIKETHROUGH),
];

/// Ordered escape codes for a style's decorations and colors.
pub fn codes(style: &Style, resolver: &dyn ColorResolver) -> Vec<String> {
    let attrs = style.effective_attrs();
    let mut out: Vec<String> = ATTR_ORDER
        .iter()
        .filter(|(flag, _)| attrs.contains(*flag))
        .map(|(_, code)| (*code).to_string())
        .collect();

    if let Some(fg) = style.get_foreground() {
        let code = resolver.escape_code(fg, Channel::Foreground);
        if !code.is_empty() {
            out.push(code);
        }
    }
    if let Some(bg) = style.get_background() {
        let code = resolver.escape_code(bg, Channel::Background);
        if !code.is_empty() {
            out.push(code);
        }
    }
    out
}

/// Wrap `text` in the style's escape codes.
///
/// Empty text and styles without decorations are returned unchanged.
pub fn format(style: &Style, text: &str, resolver: &dyn ColorResolver) -> String {
    if text.is_empty() {
        return String::new();
    }
    let codes = codes(style, resolver);
    wrap(&codes, text)
}

/// Prefix `text` with `codes` and close with one reset.
pub fn wrap(codes: &[String], text: &str) -> String {
    if codes.is_empty() {
        return text.to_string();
    }
    let prefix_len: usize = codes.iter().map(String::len).sum();
    let mut out = String::with_capacity(prefix_len + text.len() + RESET.len());
    for code in codes {
        out.push_str(code);
    }
    out.push_str(text);
    out.push_str(RESET);
    out
}

/// Make every line of `text` carry its own codes.
///
/// SGR codes still active at a line break are reset before the break and
/// re-emitted after it, so lines can be padded, bordered or truncated
/// independently without losing their styling. Empty lines stay empty.
///
/// ```rust
/// use stylebox::ansi::close_lines;
///
/// let out = close_lines("\x1b[1ma\nb\x1b[0m");
/// assert_eq!(out, "\x1b[1ma\x1b[0m\n\x1b[1mb\x1b[0m");
/// ```
pub fn close_lines(text: &str) -> String {
    if !text.contains('\x1b') || !text.contains('\n') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() * 2);
    let mut active = String::new();
    let mut lines = text.split('\n').peekable();
    while let Some(line) = lines.next() {
        if !line.is_empty() {
            out.push_str(&active);
        }

        let mut rest = line;
        while let Some(start) = rest.find('\x1b') {
            out.push_str(&rest[..start]);
            let seq_len = sgr_len(&rest[start..]);
            let seq = &rest[start..start + seq_len];
            track_sgr(&mut active, seq);
            out.push_str(seq);
            rest = &rest[start + seq_len..];
        }
        out.push_str(rest);

        if lines.peek().is_some() {
            if !active.is_empty() && !line.is_empty() {
                out.push_str(RESET);
            }
            out.push('\n');
        }
    }
    out
}

/// Byte length of the escape sequence at the start of `s`.
fn sgr_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    if bytes.get(1) != Some(&b'[') {
        return 1;
    }
    bytes[2..]
        .iter()
        .position(|b| (0x40..=0x7e).contains(b))
        .map_or(s.len(), |i| i + 3)
}

/// Fold one escape sequence into the set of codes in effect.
fn track_sgr(active: &mut String, seq: &str) {
    let Some(params) = seq
        .strip_prefix("\x1b[")
        .and_then(|p| p.strip_suffix('m'))
    else {
        return;
    };
    if params.is_empty() || params == "0" {
        active.clear();
    } else if params.starts_with("0;") {
        active.clear();
        active.push_str(seq);
    } else {
        active.push_str(seq);
    }
}
