//! End-to-end behavior: appearance changes driving component resolution.

use std::sync::{Arc, Mutex};

use styleguide::components::text;
use styleguide::{
    Appearance, ColorMode, HoverEffect, Link, StyleRecord, TextProps, TextRole, Theme, DARK, LIGHT,
};

#[test]
fn appearance_change_reresolves_text() {
    let mut appearance = Appearance::new(ColorMode::Light);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    appearance.subscribe(move |mode| sink.lock().unwrap().push(mode));

    let style = text::resolve(TextRole::Paragraph, &appearance.theme(), None);
    assert_eq!(style.color, Some(LIGHT.black));

    appearance.set_mode(ColorMode::Dark);
    let style = text::resolve(TextRole::Paragraph, &appearance.theme(), None);
    assert_eq!(style.color, Some(LIGHT.white));

    assert_eq!(*seen.lock().unwrap(), vec![ColorMode::Dark]);
}

#[test]
fn dark_mode_fans_out_to_every_mounted_component() {
    let mut appearance = Appearance::new(ColorMode::Light);

    let notified = Arc::new(Mutex::new(0usize));
    for _ in 0..3 {
        let counter = Arc::clone(&notified);
        appearance.subscribe(move |_| *counter.lock().unwrap() += 1);
    }

    appearance.set_mode(ColorMode::Dark);
    assert_eq!(*notified.lock().unwrap(), 3);

    // Unchanged mode does not fan out again.
    appearance.set_mode(ColorMode::Dark);
    assert_eq!(*notified.lock().unwrap(), 3);
}

#[test]
fn hovered_link_under_dark_appearance() {
    let mut appearance = Appearance::new(ColorMode::Dark);
    let mut link = Link::new("https://example.com");

    let rested = link.resolved_style(&appearance.theme());
    assert_eq!(rested.background_color, Some(DARK.powder));

    link.pointer_enter();
    let hovered = link.resolved_style(&appearance.theme());
    assert_eq!(hovered.background_color, Some(LIGHT.primary_dark));
    assert_eq!(hovered.color, Some(DARK.dark));

    // Flipping the appearance while hovered swaps to the light hover set.
    appearance.set_mode(ColorMode::Light);
    let hovered = link.resolved_style(&appearance.theme());
    assert_eq!(hovered.background_color, Some(LIGHT.sky));
}

#[test]
fn hover_effect_state_is_per_instance() {
    let mut first = HoverEffect::new();
    let second = HoverEffect::new();

    first.pointer_enter();
    first.pointer_down();

    assert_eq!(first.opacity(), 0.5);
    assert_eq!(second.opacity(), 1.0);
}

#[test]
fn resolved_h1_serializes_like_the_original_record() {
    let style = text::resolve(TextRole::H1, &Theme::light(), None);
    let json = serde_json::to_value(&style).unwrap();

    assert_eq!(json["fontSize"], 57.25);
    assert_eq!(json["fontWeight"], "600");
    assert_eq!(json["color"], "#242424");
    assert_eq!(json["fontFamily"], "inherit");
    assert_eq!(json["marginVertical"], 0.0);
}

#[test]
fn caller_override_survives_theme_toggle() {
    let caller = StyleRecord::new().color(LIGHT.error);

    for theme in [Theme::light(), Theme::dark()] {
        let style = text::resolve(TextRole::Caption, &theme, Some(&caller));
        assert_eq!(style.color, Some(LIGHT.error));
        assert_eq!(style.line_height, Some(22.0));
    }
}

#[test]
fn rendered_element_keeps_passthrough_props() {
    let element = text::h4().render(
        &Theme::light(),
        TextProps::new().id("faq").number_of_lines(3),
        "Questions",
    );

    assert_eq!(element.id.as_deref(), Some("faq"));
    assert_eq!(element.number_of_lines, Some(3));
    assert_eq!(element.style.font_size, Some(22.0));
}
