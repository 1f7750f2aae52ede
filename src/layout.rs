//! Responsive layout breakpoints.
//!
//! The viewport width itself comes from the host; this module only derives
//! the two booleans the styling layer cares about.

/// Maximum content width in logical pixels.
pub const MAX_WIDTH: f32 = 1200.0;

/// Widths below this are treated as a small screen.
pub const SMALL_SCREEN_WIDTH: f32 = 800.0;

/// Breakpoint flags derived from the current viewport width.
///
/// # Example
///
/// ```rust
/// use styleguide::Layout;
///
/// let layout = Layout::of_width(640.0);
/// assert!(layout.is_small_screen);
/// assert!(layout.is_below_max_width);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub is_small_screen: bool,
    pub is_below_max_width: bool,
}

impl Layout {
    /// Derives breakpoint flags from a viewport width.
    pub fn of_width(width: f32) -> Self {
        Self {
            is_small_screen: width < SMALL_SCREEN_WIDTH,
            is_below_max_width: width < MAX_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_screen_boundary() {
        assert!(Layout::of_width(799.0).is_small_screen);
        assert!(!Layout::of_width(800.0).is_small_screen);
    }

    #[test]
    fn test_max_width_boundary() {
        assert!(Layout::of_width(1199.0).is_below_max_width);
        assert!(!Layout::of_width(1200.0).is_below_max_width);
    }

    #[test]
    fn test_wide_viewport_clears_both_flags() {
        let layout = Layout::of_width(1920.0);
        assert!(!layout.is_small_screen);
        assert!(!layout.is_below_max_width);
    }
}
