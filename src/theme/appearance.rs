//! Change notification for the ambient color mode.

use std::fmt;

use super::adaptive::{detect_color_mode, ColorMode};
use super::theme::Theme;

/// Handle returned by [`Appearance::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(ColorMode) + Send>;

/// Holds the current color mode and notifies subscribers when it changes.
///
/// This is the seam to the host's dark-mode provider: the host owns the
/// store and calls [`set_mode`](Appearance::set_mode); themed components
/// take [`Theme`] snapshots and re-resolve when notified. This crate never
/// changes the mode on its own.
///
/// # Example
///
/// ```rust
/// use styleguide::{Appearance, ColorMode};
///
/// let mut appearance = Appearance::new(ColorMode::Light);
/// assert!(!appearance.theme().is_dark);
///
/// appearance.set_mode(ColorMode::Dark);
/// assert!(appearance.theme().is_dark);
/// ```
pub struct Appearance {
    mode: ColorMode,
    next_id: u64,
    subscribers: Vec<(u64, Subscriber)>,
}

impl Appearance {
    /// Creates a store with an explicit initial mode.
    pub fn new(mode: ColorMode) -> Self {
        Self {
            mode,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Creates a store seeded from the detected OS color mode.
    pub fn detect() -> Self {
        Self::new(detect_color_mode())
    }

    /// The current color mode.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// A theme snapshot for the current mode.
    pub fn theme(&self) -> Theme {
        Theme::from_mode(self.mode)
    }

    /// Sets the mode, notifying every subscriber if it actually changed.
    pub fn set_mode(&mut self, mode: ColorMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(mode);
        }
    }

    /// Registers a callback invoked on every mode change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(ColorMode) + Send + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        SubscriptionId(id)
    }

    /// Removes a subscription; returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id.0);
        self.subscribers.len() != before
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl fmt::Debug for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Appearance")
            .field("mode", &self.mode)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_store() -> (Appearance, Arc<Mutex<Vec<ColorMode>>>) {
        let mut appearance = Appearance::new(ColorMode::Light);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        appearance.subscribe(move |mode| sink.lock().unwrap().push(mode));
        (appearance, seen)
    }

    #[test]
    fn test_set_mode_notifies_subscribers() {
        let (mut appearance, seen) = recording_store();

        appearance.set_mode(ColorMode::Dark);
        appearance.set_mode(ColorMode::Light);

        assert_eq!(*seen.lock().unwrap(), vec![ColorMode::Dark, ColorMode::Light]);
    }

    #[test]
    fn test_set_same_mode_is_silent() {
        let (mut appearance, seen) = recording_store();

        appearance.set_mode(ColorMode::Light);

        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut appearance = Appearance::new(ColorMode::Light);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let id = appearance.subscribe(move |mode| sink.lock().unwrap().push(mode));

        assert!(appearance.unsubscribe(id));
        assert!(!appearance.unsubscribe(id));

        appearance.set_mode(ColorMode::Dark);
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(appearance.subscriber_count(), 0);
    }

    #[test]
    fn test_theme_tracks_mode() {
        let mut appearance = Appearance::new(ColorMode::Light);
        assert!(!appearance.theme().is_dark);

        appearance.set_mode(ColorMode::Dark);
        assert!(appearance.theme().is_dark);
        assert_eq!(appearance.mode(), ColorMode::Dark);
    }
}
