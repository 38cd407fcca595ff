#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::new_without_default)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::uninlined_format_args)]

//! # Stylebox
//!
//! A pure, immutable engine for turning plain text into terminal-ready
//! output.
//!
//! Stylebox provides:
//! - **Formatting**: bold, italic, underline and friends, emitted in a fixed
//!   order with a single trailing reset
//! - **Colors**: hex, ANSI 256, complete and adaptive colors, downsampled to
//!   the configured profile
//! - **Box model**: width, alignment, padding, border and margin, always
//!   applied in that order
//! - **Layout**: horizontal/vertical joining and placement inside a fixed box
//!
//! Nothing here touches the terminal. Every function maps strings to strings.
//!
//! ## Quick Start
//!
//! ```rust
//! use stylebox::{Border, Position, Style};
//!
//! let style = Style::new()
//!     .bold(true)
//!     .foreground("#ff00ff")
//!     .padding((1, 2))
//!     .border(Border::rounded())
//!     .align(Position::Center);
//!
//! println!("{}", style.render("Hello, Stylebox!"));
//! ```
//!
//! ## Configuration
//!
//! Rendering takes an explicit [`RenderConfig`] instead of probing the
//! environment:
//!
//! ```rust
//! use stylebox::{ColorProfile, RenderConfig, Style};
//!
//! let config = RenderConfig::new().with_color_profile(ColorProfile::Ascii);
//! let out = Style::new().foreground("#ff0000").render_with("plain", &config);
//! assert_eq!(out, "plain");
//! ```
//!
//! ## Layout
//!
//! CSS-like padding and margin with shorthand notation:
//!
//! ```rust
//! use stylebox::Style;
//!
//! // All sides
//! let style = Style::new().padding(2);
//!
//! // Vertical, horizontal
//! let style = Style::new().padding((1, 2));
//!
//! // Top, right, bottom, left (clockwise)
//! let style = Style::new().padding((1, 2, 3, 4));
//! ```

pub mod align;
pub mod ansi;
pub mod border;
pub mod boxmodel;
pub mod color;
pub mod config;
pub mod error;
pub mod layout;
pub mod measure;
pub mod position;
mod render;
pub mod style;

pub use border::{Border, BorderEdges};
pub use color::{
    AdaptiveColor, Channel, ColorProfile, ColorResolver, ColorValue, CompleteColor, ResolvedColor,
};
pub use config::RenderConfig;
pub use error::{ColorParseError, ConfigError};
pub use layout::{
    Range, WhitespaceOptions, join_horizontal, join_vertical, new_range, place,
    place_horizontal, place_horizontal_with, place_vertical, place_vertical_with, place_with,
    style_ranges, style_runes,
};
pub use measure::{height, size, strip_ansi, truncate, visible_width, width};
pub use position::{BoxDimensions, Position, Sides, normalize_fraction};
pub use style::{Props, Style};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::border::{Border, BorderEdges};
    pub use crate::color::{AdaptiveColor, ColorProfile, ColorValue, CompleteColor};
    pub use crate::config::RenderConfig;
    pub use crate::layout::{join_horizontal, join_vertical, place};
    pub use crate::position::{Position, Sides};
    pub use crate::style::Style;
}

/// Create a new empty style.
///
/// This is equivalent to `Style::new()`.
pub fn new_style() -> Style {
    Style::new()
}
