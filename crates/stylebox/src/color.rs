//! Color values and their resolution into escape codes.
//!
//! A [`ColorValue`] is a closed union of every way a color can be written:
//!
//! - [`ColorValue::Hex`] - `#RRGGBB` (or `#RGB`)
//! - [`ColorValue::Ansi256`] - an index into the 256-color palette
//! - [`ColorValue::Complete`] - explicit values per terminal capability
//! - [`ColorValue::Adaptive`] - separate values for light and dark backgrounds
//! - [`ColorValue::Transparent`] - no color at all
//!
//! Resolution goes through the [`ColorResolver`] trait. Rendering uses
//! [`RenderConfig`](crate::RenderConfig), which resolves against its color
//! profile and background darkness.
//!
//! # Example
//!
//! ```rust
//! use stylebox::{Channel, ColorResolver, ColorValue, RenderConfig};
//!
//! let config = RenderConfig::default();
//! let red = ColorValue::from("#ff0000");
//! assert_eq!(config.escape_code(&red, Channel::Foreground), "\x1b[38;2;255;0;0m");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ColorParseError;

/// Color profile indicating terminal color capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorProfile {
    /// No color support (1-bit).
    Ascii,
    /// 16 ANSI colors (4-bit).
    Ansi,
    /// 256 colors (8-bit).
    Ansi256,
    /// True color / 16 million colors (24-bit).
    #[default]
    #[serde(alias = "true_color")]
    TrueColor,
}

impl ColorProfile {
    /// Returns true if this profile supports the given color depth.
    pub fn supports(&self, other: ColorProfile) -> bool {
        use ColorProfile::*;
        match (self, other) {
            (TrueColor, _) => true,
            (Ansi256, Ansi256 | Ansi | Ascii) => true,
            (Ansi, Ansi | Ascii) => true,
            (Ascii, Ascii) => true,
            _ => false,
        }
    }
}

/// Which side of the cell a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Foreground,
    Background,
}

/// A terminal color in any of its supported notations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorValue {
    /// `#RRGGBB` or `#RGB`.
    Hex(String),
    /// ANSI 256-color palette index.
    Ansi256(u8),
    /// Explicit values per color profile.
    Complete(CompleteColor),
    /// Separate values for light and dark backgrounds.
    Adaptive(AdaptiveColor),
    /// No color.
    Transparent,
}

impl ColorValue {
    /// Create a hex color.
    pub fn hex(s: impl Into<String>) -> Self {
        ColorValue::Hex(s.into())
    }

    /// Returns true for [`ColorValue::Transparent`].
    pub fn is_transparent(&self) -> bool {
        matches!(self, ColorValue::Transparent)
    }
}

impl From<&str> for ColorValue {
    /// Lenient conversion. Decimal strings become palette indices and
    /// `transparent` becomes [`ColorValue::Transparent`]; anything else is
    /// kept as a hex string and validated when it is resolved.
    fn from(s: &str) -> Self {
        let raw = s.trim();
        if raw.eq_ignore_ascii_case("transparent") {
            return ColorValue::Transparent;
        }
        if let Ok(n) = raw.parse::<u8>() {
            return ColorValue::Ansi256(n);
        }
        ColorValue::Hex(raw.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(s: String) -> Self {
        ColorValue::from(s.as_str())
    }
}

impl From<u8> for ColorValue {
    fn from(n: u8) -> Self {
        ColorValue::Ansi256(n)
    }
}

impl From<CompleteColor> for ColorValue {
    fn from(c: CompleteColor) -> Self {
        ColorValue::Complete(c)
    }
}

impl From<AdaptiveColor> for ColorValue {
    fn from(c: AdaptiveColor) -> Self {
        ColorValue::Adaptive(c)
    }
}

impl FromStr for ColorValue {
    type Err = ColorParseError;

    /// Strict parsing: rejects malformed hex and out-of-range indices.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if raw.eq_ignore_ascii_case("transparent") {
            return Ok(ColorValue::Transparent);
        }

        let has_hash = raw.starts_with('#');
        let has_hex_alpha = raw.chars().any(|c| matches!(c, 'a'..='f' | 'A'..='F'));

        if has_hash || has_hex_alpha {
            let hex = raw.trim_start_matches('#');
            let is_hex = hex.chars().all(|c| c.is_ascii_hexdigit());
            if !is_hex || !(hex.len() == 3 || hex.len() == 6) {
                return Err(ColorParseError::InvalidHex(raw.to_string()));
            }
            return Ok(ColorValue::Hex(format!("#{hex}")));
        }

        if raw.chars().all(|c| c.is_ascii_digit()) {
            return raw
                .parse::<u8>()
                .map(ColorValue::Ansi256)
                .map_err(|_| ColorParseError::AnsiOutOfRange(raw.to_string()));
        }

        Err(ColorParseError::Invalid(raw.to_string()))
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Hex(s) => write!(f, "{s}"),
            ColorValue::Ansi256(n) => write!(f, "{n}"),
            ColorValue::Complete(c) => write!(f, "{c:?}"),
            ColorValue::Adaptive(c) => write!(f, "{c:?}"),
            ColorValue::Transparent => write!(f, "transparent"),
        }
    }
}

/// A color with explicit values for each color profile.
///
/// When the active profile's value is missing, the next most capable
/// value is downsampled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompleteColor {
    /// True color (24-bit) hex value.
    pub truecolor: Option<String>,
    /// ANSI 256 (8-bit) value.
    pub ansi256: Option<u8>,
    /// ANSI 16 (4-bit) value.
    pub ansi: Option<u8>,
}

/// A color that adapts based on terminal background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptiveColor {
    /// Color to use on light backgrounds.
    pub light: Box<ColorValue>,
    /// Color to use on dark backgrounds.
    pub dark: Box<ColorValue>,
}

impl AdaptiveColor {
    pub fn new(light: impl Into<ColorValue>, dark: impl Into<ColorValue>) -> Self {
        Self {
            light: Box::new(light.into()),
            dark: Box::new(dark.into()),
        }
    }
}

/// A color resolved into every representation it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedColor {
    /// 24-bit value.
    pub hex: Option<(u8, u8, u8)>,
    /// 256-color palette index.
    pub ansi256: Option<u8>,
    /// 16-color index (0-15).
    pub ansi: Option<u8>,
}

impl ResolvedColor {
    /// Returns true if nothing was resolved.
    pub fn is_empty(&self) -> bool {
        self.hex.is_none() && self.ansi256.is_none() && self.ansi.is_none()
    }
}

/// Resolves [`ColorValue`]s and turns them into escape codes.
pub trait ColorResolver {
    /// Resolve a color into its available representations.
    fn resolve(&self, color: &ColorValue) -> ResolvedColor;

    /// Produce the escape code for a resolved color, or an empty string.
    fn to_escape_code(&self, resolved: &ResolvedColor, channel: Channel) -> String;

    /// Resolve and encode in one step.
    fn escape_code(&self, color: &ColorValue, channel: Channel) -> String {
        self.to_escape_code(&self.resolve(color), channel)
    }
}

/// Resolve a color for the given background darkness.
pub fn resolve_color(color: &ColorValue, dark_background: bool) -> ResolvedColor {
    match color {
        ColorValue::Transparent => ResolvedColor::default(),
        ColorValue::Hex(s) => match parse_hex(s) {
            Some((r, g, b)) => ResolvedColor {
                hex: Some((r, g, b)),
                ansi256: Some(rgb_to_ansi256(r, g, b)),
                ansi: Some(rgb_to_ansi16(r, g, b)),
            },
            None => {
                warn!(color = %s, "unparseable color resolves to no code");
                ResolvedColor::default()
            }
        },
        ColorValue::Ansi256(n) => ResolvedColor {
            hex: None,
            ansi256: Some(*n),
            ansi: Some(ansi256_to_ansi16(*n)),
        },
        ColorValue::Complete(c) => ResolvedColor {
            hex: c.truecolor.as_deref().and_then(parse_hex),
            ansi256: c.ansi256,
            ansi: c.ansi.map(|n| n.min(15)),
        },
        ColorValue::Adaptive(c) => {
            if dark_background {
                resolve_color(&c.dark, dark_background)
            } else {
                resolve_color(&c.light, dark_background)
            }
        }
    }
}

/// Encode a resolved color for a profile, downsampling as needed.
pub fn escape_code(profile: ColorProfile, resolved: &ResolvedColor, channel: Channel) -> String {
    let (rgb_prefix, base, bright) = match channel {
        Channel::Foreground => (38, 30, 90),
        Channel::Background => (48, 40, 100),
    };

    let ansi16 = |n: u8| {
        if n < 8 {
            format!("\x1b[{}m", base + n)
        } else {
            format!("\x1b[{}m", bright + n - 8)
        }
    };

    match profile {
        ColorProfile::Ascii => String::new(),
        ColorProfile::TrueColor => {
            if let Some((r, g, b)) = resolved.hex {
                format!("\x1b[{rgb_prefix};2;{r};{g};{b}m")
            } else if let Some(n) = resolved.ansi256 {
                format!("\x1b[{rgb_prefix};5;{n}m")
            } else {
                resolved.ansi.map(ansi16).unwrap_or_default()
            }
        }
        ColorProfile::Ansi256 => {
            if let Some(n) = resolved.ansi256 {
                format!("\x1b[{rgb_prefix};5;{n}m")
            } else if let Some((r, g, b)) = resolved.hex {
                format!("\x1b[{rgb_prefix};5;{}m", rgb_to_ansi256(r, g, b))
            } else {
                resolved.ansi.map(ansi16).unwrap_or_default()
            }
        }
        ColorProfile::Ansi => {
            if let Some(n) = resolved.ansi {
                ansi16(n)
            } else if let Some(n) = resolved.ansi256 {
                ansi16(ansi256_to_ansi16(n))
            } else if let Some((r, g, b)) = resolved.hex {
                ansi16(rgb_to_ansi16(r, g, b))
            } else {
                String::new()
            }
        }
    }
}

/// Parse `#RRGGBB` or `#RGB` (hash optional).
pub fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim().trim_start_matches('#');
    if !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some((r, g, b))
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
        let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
        let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
        Some((r, g, b))
    } else {
        None
    }
}

// Color conversion helpers

/// Convert RGB to ANSI 256 color.
pub fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    // Check for grayscale
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return ((r as f64 - 8.0) / 247.0 * 24.0).round() as u8 + 232;
    }

    // Convert to 6x6x6 color cube
    let r_idx = (r as f64 / 255.0 * 5.0).round() as u8;
    let g_idx = (g as f64 / 255.0 * 5.0).round() as u8;
    let b_idx = (b as f64 / 255.0 * 5.0).round() as u8;

    16 + 36 * r_idx + 6 * g_idx + b_idx
}

/// Convert ANSI 256 to RGB.
pub fn ansi256_to_rgb(n: u8) -> (u8, u8, u8) {
    if n < 16 {
        return ANSI_COLORS[n as usize];
    }

    if n >= 232 {
        let gray = (n - 232) * 10 + 8;
        return (gray, gray, gray);
    }

    // 6x6x6 color cube
    let n = n - 16;
    let r = (n / 36) * 51;
    let g = ((n % 36) / 6) * 51;
    let b = (n % 6) * 51;

    (r, g, b)
}

/// Map a 256-color index onto the 16-color palette.
pub fn ansi256_to_ansi16(n: u8) -> u8 {
    if n < 16 {
        return n;
    }
    let (r, g, b) = ansi256_to_rgb(n);
    rgb_to_ansi16(r, g, b)
}

/// Convert RGB to ANSI 16 color by nearest distance.
pub fn rgb_to_ansi16(r: u8, g: u8, b: u8) -> u8 {
    let mut best = 0u8;
    let mut best_dist = u32::MAX;

    for (i, &(ar, ag, ab)) in ANSI_COLORS.iter().enumerate() {
        let dr = (r as i32 - ar as i32).unsigned_abs();
        let dg = (g as i32 - ag as i32).unsigned_abs();
        let db = (b as i32 - ab as i32).unsigned_abs();
        let dist = dr * dr + dg * dg + db * db;

        if dist < best_dist {
            best_dist = dist;
            best = i as u8;
        }
    }

    best
}

/// Standard ANSI 16 colors as RGB.
const ANSI_COLORS: [(u8, u8, u8); 16] = [
    (0, 0, 0),       // Black
    (128, 0, 0),     // Red
    (0, 128, 0),     // Green
    (128, 128, 0),   // Yellow
    (0, 0, 128),     // Blue
    (128, 0, 128),   // Magenta
    (0, 128, 128),   // Cyan
    (192, 192, 192), // White
    (128, 128, 128), // Bright Black
    (255, 0, 0),     // Bright Red
    (0, 255, 0),     // Bright Green
    (255, 255, 0),   // Bright Yellow
    (0, 0, 255),     // Bright Blue
    (255, 0, 255),   // Bright Magenta
    (0, 255, 255),   // Bright Cyan
    (255, 255, 255), // Bright White
];
