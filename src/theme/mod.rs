//! Color mode, theme values, and change notification.
//!
//! This module provides:
//!
//! - [`ColorMode`]: Light or dark color mode enum
//! - [`Theme`]: The explicit render-mode value passed into resolution calls
//! - [`Appearance`]: A subscription store that notifies on mode changes
//! - [`set_color_mode_detector`]: Override for OS color-mode detection
//!
//! Components never read a hidden global at resolve time; the host hands
//! them a [`Theme`] (usually a snapshot from an [`Appearance`]).

mod adaptive;
mod appearance;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{set_color_mode_detector, ColorMode};
pub use appearance::{Appearance, SubscriptionId};
pub use theme::Theme;
