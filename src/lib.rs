//! Theme-aware presentational styling: a light/dark color palette, a
//! typographic scale, and themed text/link/hover components.
//!
//! Everything is plain data plus pure resolution functions. A resolved
//! style is always a cascade — an ordered merge of [`StyleRecord`]s where
//! later entries win per field — parameterized by an explicit [`Theme`]
//! and per-instance interaction state. There is no hidden global style
//! state; the only process-wide knob is the color-mode detector override.
//!
//! # Example
//!
//! ```rust
//! use styleguide::components::text;
//! use styleguide::{Link, LinkKind, TextRole, Theme, DARK, LIGHT};
//!
//! // Text resolution: the theme only swaps the text color.
//! let style = text::resolve(TextRole::H1, &Theme::dark(), None);
//! assert_eq!(style.color, Some(LIGHT.white));
//! assert_eq!(style.font_size, Some(57.25));
//!
//! // Links classify into routed vs plain and theme their backgrounds.
//! let link = Link::new("https://example.com");
//! assert_eq!(link.kind(), LinkKind::Routed);
//! assert_eq!(
//!     link.resolved_style(&Theme::dark()).background_color,
//!     Some(DARK.powder)
//! );
//! ```

pub mod components;
pub mod layout;
pub mod palette;
pub mod preview;
pub mod style;
pub mod theme;
pub mod typography;
pub mod util;

pub use components::{HoverEffect, Link, LinkElement, LinkKind, Text, TextElement, TextProps};
pub use layout::{Layout, MAX_WIDTH};
pub use palette::{Color, ColorParseError, DarkPalette, Palette, DARK, LIGHT};
pub use style::{merge_styles, FontWeight, StyleRecord, TextDecorationLine};
pub use theme::{set_color_mode_detector, Appearance, ColorMode, SubscriptionId, Theme};
pub use typography::{base_style, RoleParseError, TextRole};
