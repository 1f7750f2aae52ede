//! Opacity-on-hover/press wrapper.

use crate::style::{merge_styles, StyleRecord};

const HOVERED_OPACITY: f32 = 0.8;
const ACTIVE_OPACITY: f32 = 0.5;

/// A generic hover/press wrapper with no theme dependency.
///
/// Tracks two independent booleans via four pointer events. The active
/// opacity wins over the hovered one because its style entry merges later.
/// The wrapper is a purely visual affordance and is excluded from
/// assistive-technology traversal.
///
/// # Example
///
/// ```rust
/// use styleguide::HoverEffect;
///
/// let mut effect = HoverEffect::new();
/// assert_eq!(effect.opacity(), 1.0);
///
/// effect.pointer_enter();
/// assert_eq!(effect.opacity(), 0.8);
///
/// effect.pointer_down();
/// assert_eq!(effect.opacity(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverEffect {
    hovered: bool,
    active: bool,
}

impl HoverEffect {
    /// Creates a wrapper in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    pub fn pointer_down(&mut self) {
        self.active = true;
    }

    pub fn pointer_up(&mut self) {
        self.active = false;
    }

    /// The effective opacity for the current state.
    pub fn opacity(&self) -> f32 {
        self.style().opacity.unwrap_or(1.0)
    }

    /// The style contribution for the current state.
    ///
    /// Empty while idle; the active entry merges after the hovered one.
    pub fn style(&self) -> StyleRecord {
        let hovered = StyleRecord::new().opacity(HOVERED_OPACITY);
        let active = StyleRecord::new().opacity(ACTIVE_OPACITY);

        let mut parts: Vec<&StyleRecord> = Vec::with_capacity(2);
        if self.hovered {
            parts.push(&hovered);
        }
        if self.active {
            parts.push(&active);
        }
        merge_styles(parts)
    }

    /// Always false: the wrapper is invisible to assistive technology.
    pub const fn accessible(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        let effect = HoverEffect::new();
        assert!(!effect.is_hovered());
        assert!(!effect.is_active());
        assert_eq!(effect.opacity(), 1.0);
        assert!(effect.style().is_empty());
    }

    #[test]
    fn test_enter_down_up_leave_sequence() {
        let mut effect = HoverEffect::new();
        let mut opacities = vec![effect.opacity()];

        effect.pointer_enter();
        assert!(effect.is_hovered() && !effect.is_active());
        opacities.push(effect.opacity());

        effect.pointer_down();
        assert!(effect.is_hovered() && effect.is_active());
        opacities.push(effect.opacity());

        effect.pointer_up();
        assert!(effect.is_hovered() && !effect.is_active());
        opacities.push(effect.opacity());

        effect.pointer_leave();
        assert!(!effect.is_hovered() && !effect.is_active());
        opacities.push(effect.opacity());

        assert_eq!(opacities, vec![1.0, 0.8, 0.5, 0.8, 1.0]);
    }

    #[test]
    fn test_active_wins_while_both_are_set() {
        let mut effect = HoverEffect::new();
        effect.pointer_enter();
        effect.pointer_down();

        assert_eq!(effect.style().opacity, Some(0.5));
    }

    #[test]
    fn test_press_without_hover() {
        // Touch input can press without a preceding enter.
        let mut effect = HoverEffect::new();
        effect.pointer_down();

        assert!(!effect.is_hovered());
        assert_eq!(effect.opacity(), 0.5);

        effect.pointer_up();
        assert_eq!(effect.opacity(), 1.0);
    }

    #[test]
    fn test_no_automatic_reset() {
        let mut effect = HoverEffect::new();
        effect.pointer_enter();
        effect.pointer_enter();
        assert_eq!(effect.opacity(), 0.8);
    }

    #[test]
    fn test_never_accessible() {
        assert!(!HoverEffect::new().accessible());
    }
}
