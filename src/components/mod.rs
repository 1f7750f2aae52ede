//! Themed components: text, link, and the hover/press wrapper.
//!
//! Components here are thin: they hold props and per-instance interaction
//! state, and resolve a final [`StyleRecord`](crate::StyleRecord) from an
//! explicit [`Theme`](crate::Theme). Actual drawing belongs to the host's
//! element renderers, which consume the resolved elements.

pub mod hover;
pub mod link;
pub mod text;

pub use hover::HoverEffect;
pub use link::{Link, LinkElement, LinkKind, DEFAULT_TARGET};
pub use text::{caption, h1, h2, h3, h4, h5, headline, label, p, Text, TextElement, TextProps};
