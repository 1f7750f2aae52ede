//! The render-mode value handed to every resolution call.

use super::adaptive::{detect_color_mode, ColorMode};
use crate::palette::{Color, LIGHT};

/// Whether rendering happens in dark mode.
///
/// A `Theme` is passed explicitly into each component's resolve call; this
/// crate never reads ambient state during resolution.
///
/// # Example
///
/// ```rust
/// use styleguide::{Theme, LIGHT};
///
/// assert_eq!(Theme::light().text_color(), LIGHT.black);
/// assert_eq!(Theme::dark().text_color(), LIGHT.white);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub is_dark: bool,
}

impl Theme {
    /// The light theme.
    pub const fn light() -> Self {
        Self { is_dark: false }
    }

    /// The dark theme.
    pub const fn dark() -> Self {
        Self { is_dark: true }
    }

    /// Creates a theme for the given color mode.
    pub const fn from_mode(mode: ColorMode) -> Self {
        Self {
            is_dark: mode.is_dark(),
        }
    }

    /// Creates a theme from the detected OS color mode.
    ///
    /// Honors [`set_color_mode_detector`](super::set_color_mode_detector)
    /// overrides.
    pub fn detect() -> Self {
        Self::from_mode(detect_color_mode())
    }

    /// Returns this theme's color mode.
    pub const fn mode(self) -> ColorMode {
        if self.is_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    /// Default text color: white on dark, black on light.
    pub const fn text_color(self) -> Color {
        if self.is_dark {
            LIGHT.white
        } else {
            LIGHT.black
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
