//! Theme-aware text components built from the typographic scale.
//!
//! A [`Text`] binds a role, and optionally an extra style, at construction.
//! Resolution is the ordered cascade: role base style, bound extra style,
//! the theme's text color, then the caller's style.

use serde::Serialize;

use crate::style::{merge_styles, StyleRecord};
use crate::theme::Theme;
use crate::typography::{base_style, TextRole};

/// Optional per-render text props. Absent fields are no-ops.
#[derive(Debug, Clone, Default)]
pub struct TextProps {
    pub id: Option<String>,
    pub number_of_lines: Option<u32>,
    pub style: Option<StyleRecord>,
}

impl TextProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn number_of_lines(mut self, lines: u32) -> Self {
        self.number_of_lines = Some(lines);
        self
    }

    pub fn style(mut self, style: StyleRecord) -> Self {
        self.style = Some(style);
        self
    }
}

/// A resolved text element, ready for an external renderer.
///
/// `id` and `number_of_lines` pass through from the props unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextElement {
    pub role: TextRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_lines: Option<u32>,
    pub style: StyleRecord,
    pub children: String,
}

/// Resolves a role's final style for a theme and optional caller style.
///
/// Pure function of its inputs; toggling the theme changes only the color
/// between black and white.
///
/// # Example
///
/// ```rust
/// use styleguide::components::text;
/// use styleguide::{TextRole, Theme, LIGHT};
///
/// let style = text::resolve(TextRole::H1, &Theme::dark(), None);
/// assert_eq!(style.color, Some(LIGHT.white));
/// assert_eq!(style.font_size, Some(57.25));
/// ```
pub fn resolve(role: TextRole, theme: &Theme, style: Option<&StyleRecord>) -> StyleRecord {
    resolve_with(role, None, theme, style)
}

fn resolve_with(
    role: TextRole,
    extra: Option<&StyleRecord>,
    theme: &Theme,
    caller: Option<&StyleRecord>,
) -> StyleRecord {
    let mode_color = StyleRecord::new().color(theme.text_color());

    let mut parts: Vec<&StyleRecord> = Vec::with_capacity(4);
    parts.push(base_style(role));
    if let Some(extra) = extra {
        parts.push(extra);
    }
    parts.push(&mode_color);
    if let Some(caller) = caller {
        parts.push(caller);
    }
    merge_styles(parts)
}

/// A text component bound to a role, and optionally to an extra style
/// merged between the role base and the theme color.
#[derive(Debug, Clone)]
pub struct Text {
    role: TextRole,
    style: Option<StyleRecord>,
}

impl Text {
    /// Binds a component to a role.
    pub fn new(role: TextRole) -> Self {
        Self { role, style: None }
    }

    /// Binds a component to a role with an extra style.
    pub fn styled(role: TextRole, style: StyleRecord) -> Self {
        Self {
            role,
            style: Some(style),
        }
    }

    pub fn role(&self) -> TextRole {
        self.role
    }

    /// Resolves the final style for this component.
    pub fn resolved_style(&self, theme: &Theme, props: &TextProps) -> StyleRecord {
        resolve_with(self.role, self.style.as_ref(), theme, props.style.as_ref())
    }

    /// Produces the element an external renderer consumes.
    pub fn render(&self, theme: &Theme, props: TextProps, children: impl Into<String>) -> TextElement {
        let style = self.resolved_style(theme, &props);
        TextElement {
            role: self.role,
            id: props.id,
            number_of_lines: props.number_of_lines,
            style,
            children: children.into(),
        }
    }
}

pub fn h1() -> Text {
    Text::new(TextRole::H1)
}

pub fn h2() -> Text {
    Text::new(TextRole::H2)
}

pub fn h3() -> Text {
    Text::new(TextRole::H3)
}

pub fn h4() -> Text {
    Text::new(TextRole::H4)
}

pub fn h5() -> Text {
    Text::new(TextRole::H5)
}

pub fn p() -> Text {
    Text::new(TextRole::Paragraph)
}

pub fn headline() -> Text {
    Text::new(TextRole::Headline)
}

pub fn caption() -> Text {
    Text::new(TextRole::Caption)
}

pub fn label() -> Text {
    Text::new(TextRole::Label)
}
