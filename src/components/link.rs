//! Themed link component.
//!
//! A link renders through the client-side router only for same-tab,
//! non-fragment targets; everything else (external links, new-tab links,
//! same-page fragments) goes through a plain anchor so the router never
//! intercepts it. Hover state drives the style merge identically in both
//! branches.

use serde::Serialize;

use crate::palette::{DARK, LIGHT};
use crate::style::{merge_styles, StyleRecord, TextDecorationLine};
use crate::theme::Theme;

/// Target used when the caller does not supply one.
pub const DEFAULT_TARGET: &str = "_self";

/// Which primitive a link renders through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// The client-side router link primitive.
    Routed,
    /// A plain anchor with the target forwarded as an attribute.
    Plain,
}

impl LinkKind {
    /// Classifies a link: routed only for same-tab, non-fragment hrefs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use styleguide::LinkKind;
    ///
    /// assert_eq!(LinkKind::classify("/docs", "_self"), LinkKind::Routed);
    /// assert_eq!(LinkKind::classify("/docs", "_blank"), LinkKind::Plain);
    /// assert_eq!(LinkKind::classify("#install", "_self"), LinkKind::Plain);
    /// ```
    pub fn classify(href: &str, target: &str) -> Self {
        if target == DEFAULT_TARGET && !href.starts_with('#') {
            LinkKind::Routed
        } else {
            LinkKind::Plain
        }
    }
}

/// A resolved link element, ready for an external renderer.
///
/// Only the plain branch carries a hover-detecting wrapper in the host;
/// the routed primitive reports hover itself. The style cascade is the
/// same either way.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LinkElement {
    Routed {
        href: String,
        style: StyleRecord,
        children: String,
    },
    Plain {
        href: String,
        target: String,
        style: StyleRecord,
        children: String,
    },
}

impl LinkElement {
    pub fn kind(&self) -> LinkKind {
        match self {
            LinkElement::Routed { .. } => LinkKind::Routed,
            LinkElement::Plain { .. } => LinkKind::Plain,
        }
    }

    pub fn style(&self) -> &StyleRecord {
        match self {
            LinkElement::Routed { style, .. } | LinkElement::Plain { style, .. } => style,
        }
    }
}

/// A themed link with per-instance hover state.
///
/// The href is passed through unvalidated; malformed values are the
/// underlying renderer's problem.
///
/// # Example
///
/// ```rust
/// use styleguide::{Link, LinkKind, Theme, LIGHT};
///
/// let mut link = Link::new("https://example.com");
/// assert_eq!(link.kind(), LinkKind::Routed);
///
/// link.pointer_enter();
/// let style = link.resolved_style(&Theme::light());
/// assert_eq!(style.background_color, Some(LIGHT.sky));
/// ```
#[derive(Debug, Clone)]
pub struct Link {
    href: String,
    target: String,
    style: Option<StyleRecord>,
    hover_style: Option<StyleRecord>,
    hovered: bool,
}

impl Link {
    /// Creates a link with the default (same-tab) target.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            target: DEFAULT_TARGET.to_string(),
            style: None,
            hover_style: None,
            hovered: false,
        }
    }

    /// Sets the target (`"_blank"`, `"_self"`, ...).
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Caller style, merged after the themed base (and hover base).
    pub fn style(mut self, style: StyleRecord) -> Self {
        self.style = Some(style);
        self
    }

    /// Caller hover style, merged last and only while hovered.
    pub fn hover_style(mut self, style: StyleRecord) -> Self {
        self.hover_style = Some(style);
        self
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn kind(&self) -> LinkKind {
        LinkKind::classify(&self.href, &self.target)
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    /// Resolves the cascade: themed base, hover base while hovered, caller
    /// style, caller hover style while hovered.
    pub fn resolved_style(&self, theme: &Theme) -> StyleRecord {
        let base = base_link_style(theme);
        let hover = hover_link_style(theme);

        let mut parts: Vec<&StyleRecord> = Vec::with_capacity(4);
        parts.push(&base);
        if self.hovered {
            parts.push(&hover);
        }
        if let Some(style) = &self.style {
            parts.push(style);
        }
        if self.hovered {
            if let Some(style) = &self.hover_style {
                parts.push(style);
            }
        }
        merge_styles(parts)
    }

    /// Produces the element an external renderer consumes.
    pub fn render(&self, theme: &Theme, children: impl Into<String>) -> LinkElement {
        let style = self.resolved_style(theme);
        match self.kind() {
            LinkKind::Routed => LinkElement::Routed {
                href: self.href.clone(),
                style,
                children: children.into(),
            },
            LinkKind::Plain => LinkElement::Plain {
                href: self.href.clone(),
                target: self.target.clone(),
                style,
                children: children.into(),
            },
        }
    }
}

fn base_link_style(theme: &Theme) -> StyleRecord {
    StyleRecord::new()
        .color(theme.text_color())
        .background_color(if theme.is_dark { DARK.powder } else { LIGHT.powder })
        .text_decoration_color(if theme.is_dark { LIGHT.gray5 } else { LIGHT.pewter })
        .text_decoration_line(TextDecorationLine::Underline)
        .font_family("inherit")
}

fn hover_link_style(theme: &Theme) -> StyleRecord {
    StyleRecord::new()
        .background_color(if theme.is_dark { LIGHT.primary_dark } else { LIGHT.sky })
        .color(if theme.is_dark { DARK.dark } else { LIGHT.black })
        .text_decoration_color(if theme.is_dark { DARK.powder } else { LIGHT.gray4 })
}
