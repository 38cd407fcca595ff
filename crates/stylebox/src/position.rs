//! Position, fractional alignment, and CSS-like box dimensions.

use tracing::debug;

/// Alignment position along one axis.
///
/// Named positions map to fixed fractions (`0.0`, `0.5`, `1.0`).
/// [`Position::Fraction`] carries an arbitrary fraction that is normalized
/// into `[0, 1]` by [`normalize_fraction`] whenever it is used.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    /// Align to the top or left.
    #[default]
    Top,
    /// Align to the bottom or right.
    Bottom,
    /// Align to the center.
    Center,
    /// Alias for Center on the vertical axis.
    Middle,
    /// Alias for Top.
    Left,
    /// Alias for Bottom.
    Right,
    /// Fractional position: 0 = start, 0.5 = center, 1 = end.
    Fraction(f64),
}

impl Position {
    /// Convert position to a factor in `[0, 1]`.
    pub fn factor(&self) -> f64 {
        match self {
            Position::Top | Position::Left => 0.0,
            Position::Center | Position::Middle => 0.5,
            Position::Bottom | Position::Right => 1.0,
            Position::Fraction(f) => normalize_fraction(*f),
        }
    }
}

impl From<f64> for Position {
    fn from(f: f64) -> Self {
        Position::Fraction(f)
    }
}

/// Normalizes an alignment fraction into `[0, 1]`.
///
/// NaN and negative infinity become `0.0`, positive infinity becomes `1.0`,
/// and finite values are clamped.
pub fn normalize_fraction(f: f64) -> f64 {
    if f.is_nan() {
        debug!(alignment.fraction = f, "NaN alignment normalized to 0");
        return 0.0;
    }
    if !(0.0..=1.0).contains(&f) {
        debug!(alignment.fraction = f, "alignment fraction clamped");
    }
    f.clamp(0.0, 1.0)
}

/// Splits `extra` columns or rows into a leading and trailing share.
///
/// The leading share is `floor(extra * factor)`.
pub(crate) fn split_extra(extra: usize, pos: Position) -> (usize, usize) {
    let lead = ((extra as f64) * pos.factor()).floor() as usize;
    let lead = lead.min(extra);
    (lead, extra - lead)
}

/// CSS-like sides specification for padding, margin, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

/// Four non-negative integers used for padding and margin.
pub type BoxDimensions = Sides<u16>;

impl<T: Copy> Sides<T> {
    /// Create sides with all values the same.
    pub const fn all(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create sides from individual values.
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Sides<i32> {
    /// Clamp every side to a non-negative `u16`.
    pub fn clamped(self) -> BoxDimensions {
        Sides {
            top: clamp_dimension(self.top),
            right: clamp_dimension(self.right),
            bottom: clamp_dimension(self.bottom),
            left: clamp_dimension(self.left),
        }
    }
}

impl BoxDimensions {
    /// Total horizontal extent (left + right).
    pub fn horizontal(&self) -> usize {
        self.left as usize + self.right as usize
    }

    /// Total vertical extent (top + bottom).
    pub fn vertical(&self) -> usize {
        self.top as usize + self.bottom as usize
    }

    /// Returns true if every side is zero.
    pub fn is_zero(&self) -> bool {
        self.top == 0 && self.right == 0 && self.bottom == 0 && self.left == 0
    }
}

/// Clamp a possibly negative dimension into `0..=u16::MAX`.
pub(crate) fn clamp_dimension(n: i32) -> u16 {
    if n < 0 {
        debug!(dimension = n, "negative dimension clamped to 0");
        return 0;
    }
    u16::try_from(n).unwrap_or(u16::MAX)
}

// From implementations for CSS-like shorthand

impl<T: Copy> From<T> for Sides<T> {
    /// Single value: all sides.
    fn from(all: T) -> Self {
        Self::all(all)
    }
}

impl<T: Copy> From<(T, T)> for Sides<T> {
    /// Two values: (vertical, horizontal).
    fn from((vertical, horizontal): (T, T)) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl<T: Copy> From<(T, T, T)> for Sides<T> {
    /// Three values: (top, horizontal, bottom).
    fn from((top, horizontal, bottom): (T, T, T)) -> Self {
        Self {
            top,
            right: horizontal,
            bottom,
            left: horizontal,
        }
    }
}

impl<T: Copy> From<(T, T, T, T)> for Sides<T> {
    /// Four values: (top, right, bottom, left) - clockwise.
    fn from((top, right, bottom, left): (T, T, T, T)) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}
