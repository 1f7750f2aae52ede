//! The typographic scale: semantic text roles and their base styles.
//!
//! Base records are built once at module load and never mutated. Final
//! colors come from the theme at resolve time (see
//! [`components::text`](crate::components::text)); the scale itself always
//! carries the light-mode text color.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::palette::LIGHT;
use crate::style::{FontWeight, StyleRecord};

/// Semantic text roles, from page title down to form label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TextRole {
    #[serde(rename = "h1")]
    H1,
    #[serde(rename = "h2")]
    H2,
    #[serde(rename = "h3")]
    H3,
    #[serde(rename = "h4")]
    H4,
    #[serde(rename = "h5")]
    H5,
    #[serde(rename = "h6")]
    H6,
    #[serde(rename = "headline")]
    Headline,
    #[serde(rename = "p")]
    Paragraph,
    #[serde(rename = "caption")]
    Caption,
    #[serde(rename = "label")]
    Label,
}

impl TextRole {
    /// Every role, largest first.
    pub const ALL: [TextRole; 10] = [
        TextRole::H1,
        TextRole::H2,
        TextRole::H3,
        TextRole::H4,
        TextRole::H5,
        TextRole::H6,
        TextRole::Headline,
        TextRole::Paragraph,
        TextRole::Caption,
        TextRole::Label,
    ];

    /// Returns the role's short name (`"h1"`, `"p"`, `"caption"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            TextRole::H1 => "h1",
            TextRole::H2 => "h2",
            TextRole::H3 => "h3",
            TextRole::H4 => "h4",
            TextRole::H5 => "h5",
            TextRole::H6 => "h6",
            TextRole::Headline => "headline",
            TextRole::Paragraph => "p",
            TextRole::Caption => "caption",
            TextRole::Label => "label",
        }
    }
}

impl fmt::Display for TextRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextRole {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextRole::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| RoleParseError {
                name: s.to_string(),
            })
    }
}

/// Error returned when a role name is not part of the scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleParseError {
    /// The name that was requested
    pub name: String,
}

impl fmt::Display for RoleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown text role: \"{}\"", self.name)
    }
}

impl std::error::Error for RoleParseError {}

fn base() -> StyleRecord {
    StyleRecord::new()
        .color(LIGHT.black)
        .margin_vertical(0.0)
        .font_weight(FontWeight::Regular)
        .font_family("inherit")
}

static TEXT_STYLES: Lazy<BTreeMap<TextRole, StyleRecord>> = Lazy::new(|| {
    use TextRole::*;

    BTreeMap::from([
        (H1, base().font_size(57.25).font_weight(FontWeight::SemiBold)),
        (H2, base().font_size(35.5).font_weight(FontWeight::SemiBold)),
        (H3, base().font_size(26.5).font_weight(FontWeight::SemiBold)),
        (H4, base().font_size(22.0)),
        (H5, base().font_size(20.0)),
        (H6, base().font_size(18.0)),
        (Headline, base().font_size(16.0).font_weight(FontWeight::Medium)),
        (Paragraph, base().font_size(16.0)),
        (Caption, base().font_size(15.0).line_height(22.0)),
        (Label, base().font_size(12.0).font_weight(FontWeight::Medium)),
    ])
});

/// Returns the base style for a role.
///
/// # Example
///
/// ```rust
/// use styleguide::{base_style, FontWeight, TextRole};
///
/// let h1 = base_style(TextRole::H1);
/// assert_eq!(h1.font_size, Some(57.25));
/// assert_eq!(h1.font_weight, Some(FontWeight::SemiBold));
/// ```
pub fn base_style(role: TextRole) -> &'static StyleRecord {
    TEXT_STYLES
        .get(&role)
        .expect("every text role has a base style")
}
