//! Terminal preview of the styleguide.
//!
//! Renders the palettes and the type scale as styled terminal text, with
//! swatches approximated in the 256-color cube. Whether escape codes are
//! actually emitted follows `console`'s own terminal detection. Both
//! functions return strings; nothing is written to stdout here.

use console::Style;
use unicode_width::UnicodeWidthStr;

use crate::palette::{Color, DARK, LIGHT};
use crate::theme::ColorMode;
use crate::typography::{base_style, TextRole};
use crate::util::{pad_to_width, rgb_to_ansi256};

/// Renders one line per token: padded name, hex value, color swatch.
///
/// Dark mode lists only the tokens that have a dark variant.
pub fn palette_preview(mode: ColorMode) -> String {
    match mode {
        ColorMode::Light => render_swatch_rows(&LIGHT.entries()),
        ColorMode::Dark => render_swatch_rows(&DARK.entries()),
    }
}

fn render_swatch_rows(entries: &[(&str, Color)]) -> String {
    let name_width = entries
        .iter()
        .map(|(name, _)| name.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (name, color) in entries {
        let swatch = Style::new()
            .on_color256(rgb_to_ansi256(color.rgb()))
            .apply_to("      ");
        out.push_str(&format!(
            "{}  {}  {}\n",
            pad_to_width(name, name_width),
            color.to_hex(),
            swatch
        ));
    }
    out
}

/// Renders one line per text role: padded name, font size, weight.
///
/// Semibold roles get a bold label so the scale's hierarchy reads at a
/// glance even without color support.
pub fn type_scale_preview() -> String {
    let name_width = TextRole::ALL
        .iter()
        .map(|role| role.name().width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for role in TextRole::ALL {
        let style = base_style(role);
        let size = style.font_size.unwrap_or(0.0);
        let weight = style.font_weight.map_or("400", |w| w.as_css());

        let label = pad_to_width(role.name(), name_width);
        let label = if weight == "600" {
            Style::new().bold().apply_to(label).to_string()
        } else {
            label
        };
        out.push_str(&format!("{}  {:>6.2}px  {}\n", label, size, weight));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_palette_preview_lists_every_token() {
        let preview = palette_preview(ColorMode::Light);
        assert_eq!(preview.lines().count(), LIGHT.entries().len());
        assert!(preview.contains("primary"));
        assert!(preview.contains("#61dafb"));
        assert!(preview.contains("#242424"));
    }

    #[test]
    fn test_dark_palette_preview_lists_only_dark_tokens() {
        let preview = palette_preview(ColorMode::Dark);
        assert_eq!(preview.lines().count(), DARK.entries().len());
        assert!(preview.contains("#262a36"));
        assert!(!preview.contains("success"));
    }

    #[test]
    fn test_type_scale_preview_shows_sizes_and_weights() {
        let preview = type_scale_preview();
        assert_eq!(preview.lines().count(), TextRole::ALL.len());
        assert!(preview.contains("57.25px"));
        assert!(preview.contains("600"));
        assert!(preview.contains("caption"));
    }
}
