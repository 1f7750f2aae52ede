//! The flat style record and its cascade merge.

use std::fmt;

use serde::Serialize;

use crate::palette::Color;

/// CSS-style font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FontWeight {
    #[serde(rename = "400")]
    Regular,
    #[serde(rename = "500")]
    Medium,
    #[serde(rename = "600")]
    SemiBold,
}

impl FontWeight {
    /// Returns the CSS numeric string for this weight.
    pub const fn as_css(self) -> &'static str {
        match self {
            FontWeight::Regular => "400",
            FontWeight::Medium => "500",
            FontWeight::SemiBold => "600",
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Text decoration applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDecorationLine {
    None,
    Underline,
}

/// A flat record of optional style fields.
///
/// Every field is optional; an absent field is a no-op contribution in a
/// cascade. Records are built with a fluent API:
///
/// ```rust
/// use styleguide::{StyleRecord, FontWeight, LIGHT};
///
/// let style = StyleRecord::new()
///     .color(LIGHT.black)
///     .font_size(16.0)
///     .font_weight(FontWeight::Medium);
/// assert_eq!(style.font_size, Some(16.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_vertical: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration_line: Option<TextDecorationLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

impl StyleRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn margin_vertical(mut self, margin: f32) -> Self {
        self.margin_vertical = Some(margin);
        self
    }

    pub fn line_height(mut self, height: f32) -> Self {
        self.line_height = Some(height);
        self
    }

    pub fn text_decoration_line(mut self, line: TextDecorationLine) -> Self {
        self.text_decoration_line = Some(line);
        self
    }

    pub fn text_decoration_color(mut self, color: Color) -> Self {
        self.text_decoration_color = Some(color);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Returns true when every field is absent.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Overwrites each field of `self` that `later` sets.
    fn apply(&mut self, later: &StyleRecord) {
        if let Some(color) = later.color {
            self.color = Some(color);
        }
        if let Some(color) = later.background_color {
            self.background_color = Some(color);
        }
        if let Some(size) = later.font_size {
            self.font_size = Some(size);
        }
        if let Some(weight) = later.font_weight {
            self.font_weight = Some(weight);
        }
        if let Some(family) = &later.font_family {
            self.font_family = Some(family.clone());
        }
        if let Some(margin) = later.margin_vertical {
            self.margin_vertical = Some(margin);
        }
        if let Some(height) = later.line_height {
            self.line_height = Some(height);
        }
        if let Some(line) = later.text_decoration_line {
            self.text_decoration_line = Some(line);
        }
        if let Some(color) = later.text_decoration_color {
            self.text_decoration_color = Some(color);
        }
        if let Some(opacity) = later.opacity {
            self.opacity = Some(opacity);
        }
    }

    /// Merges `later` over `self`, consuming `self`.
    pub fn over(mut self, later: &StyleRecord) -> Self {
        self.apply(later);
        self
    }
}

/// Merges an ordered list of records, later entries winning per field.
///
/// An empty list yields the empty record. Absent fields never erase a
/// value set by an earlier entry.
///
/// # Example
///
/// ```rust
/// use styleguide::{merge_styles, StyleRecord};
///
/// let base = StyleRecord::new().font_size(16.0);
/// let override_ = StyleRecord::new().font_size(12.0);
/// let merged = merge_styles([&base, &override_]);
/// assert_eq!(merged.font_size, Some(12.0));
/// ```
pub fn merge_styles<'a, I>(parts: I) -> StyleRecord
where
    I: IntoIterator<Item = &'a StyleRecord>,
{
    let mut merged = StyleRecord::new();
    for part in parts {
        merged.apply(part);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::LIGHT;
    use proptest::prelude::*;

    #[test]
    fn test_merge_empty_list_is_empty_record() {
        let parts: [&StyleRecord; 0] = [];
        let merged = merge_styles(parts);
        assert!(merged.is_empty());
    }

    #[test]
    fn test_merge_later_wins() {
        let first = StyleRecord::new().color(LIGHT.black).font_size(16.0);
        let second = StyleRecord::new().color(LIGHT.white);

        let merged = merge_styles([&first, &second]);
        assert_eq!(merged.color, Some(LIGHT.white));
        assert_eq!(merged.font_size, Some(16.0));
    }

    #[test]
    fn test_merge_absent_field_keeps_earlier_value() {
        let first = StyleRecord::new().font_weight(FontWeight::SemiBold);
        let second = StyleRecord::new().font_size(12.0);

        let merged = merge_styles([&first, &second]);
        assert_eq!(merged.font_weight, Some(FontWeight::SemiBold));
        assert_eq!(merged.font_size, Some(12.0));
    }

    #[test]
    fn test_over_matches_merge() {
        let base = StyleRecord::new().font_size(16.0).color(LIGHT.black);
        let patch = StyleRecord::new().color(LIGHT.primary);

        assert_eq!(base.clone().over(&patch), merge_styles([&base, &patch]));
    }

    #[test]
    fn test_font_weight_css_strings() {
        assert_eq!(FontWeight::Regular.as_css(), "400");
        assert_eq!(FontWeight::Medium.as_css(), "500");
        assert_eq!(FontWeight::SemiBold.as_css(), "600");
    }

    #[test]
    fn test_serializes_camel_case_and_skips_none() {
        let style = StyleRecord::new()
            .color(LIGHT.black)
            .text_decoration_line(TextDecorationLine::Underline)
            .font_family("inherit");

        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["color"], "#242424");
        assert_eq!(json["textDecorationLine"], "underline");
        assert_eq!(json["fontFamily"], "inherit");
        assert!(json.get("fontSize").is_none());
    }

    proptest! {
        #[test]
        fn prop_merge_font_size_takes_last_present(
            sizes in proptest::collection::vec(proptest::option::of(1.0f32..200.0), 0..8)
        ) {
            let parts: Vec<StyleRecord> = sizes
                .iter()
                .map(|size| match size {
                    Some(value) => StyleRecord::new().font_size(*value),
                    None => StyleRecord::new(),
                })
                .collect();

            let merged = merge_styles(&parts);
            let expected = sizes.iter().rev().find_map(|size| *size);
            prop_assert_eq!(merged.font_size, expected);
        }

        #[test]
        fn prop_merge_is_associative_over_concatenation(
            a in proptest::option::of(1.0f32..100.0),
            b in proptest::option::of(1.0f32..100.0),
            c in proptest::option::of(1.0f32..100.0),
        ) {
            let make = |size: Option<f32>| match size {
                Some(value) => StyleRecord::new().font_size(value),
                None => StyleRecord::new(),
            };
            let (ra, rb, rc) = (make(a), make(b), make(c));

            let all_at_once = merge_styles([&ra, &rb, &rc]);
            let left_first = merge_styles([&ra, &rb]).over(&rc);
            prop_assert_eq!(all_at_once, left_first);
        }
    }
}
