use super::*;
use crate::consts::THEME_STORAGE_KEY;

fn persisted(effects: &[Effect]) -> Option<String> {
    effects.iter().find_map(|effect| match effect {
        Effect::Persist { value, .. } => Some(value.clone()),
        _ => None,
    })
}

// =============================================================
// Theme
// =============================================================

#[test]
fn from_stored_defaults_to_dark() {
    assert_eq!(Theme::from_stored(None), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("LIGHT")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("true")), Theme::Dark);
}

#[test]
fn from_stored_reads_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
}

#[test]
fn icon_matches_mode() {
    assert_eq!(Theme::Light.icon(), "☀️");
    assert_eq!(Theme::Dark.icon(), "🌙");
}

// =============================================================
// ThemeToggle
// =============================================================

#[test]
fn init_dark_emits_nothing() {
    let toggle = ThemeToggle::new(None, THEME_STORAGE_KEY);
    assert_eq!(toggle.theme(), Theme::Dark);
    assert!(toggle.init().is_empty());
}

#[test]
fn init_light_applies_class_and_sun() {
    let toggle = ThemeToggle::new(Some("light"), THEME_STORAGE_KEY);
    assert_eq!(
        toggle.init(),
        vec![
            Effect::AddClass { target: Target::Root, class: "light-mode" },
            Effect::text(Target::ThemeIcon, "☀️"),
        ]
    );
}

#[test]
fn toggle_from_dark_goes_light_and_persists() {
    let mut toggle = ThemeToggle::new(None, THEME_STORAGE_KEY);
    let effects = toggle.toggle();
    assert_eq!(toggle.theme(), Theme::Light);
    assert_eq!(effects[0], Effect::AddClass { target: Target::Root, class: "light-mode" });
    assert_eq!(
        effects[1],
        Effect::Persist { key: "theme".to_owned(), value: "light".to_owned() }
    );
    assert_eq!(effects[2], Effect::text(Target::ThemeIcon, "☀️"));
}

#[test]
fn toggle_twice_restores_mode_and_persisted_value() {
    let mut toggle = ThemeToggle::new(Some("dark"), THEME_STORAGE_KEY);
    toggle.toggle();
    let effects = toggle.toggle();
    assert_eq!(toggle.theme(), Theme::Dark);
    assert_eq!(persisted(&effects).as_deref(), Some("dark"));
    assert_eq!(effects[0], Effect::RemoveClass { target: Target::Root, class: "light-mode" });
    assert_eq!(effects[2], Effect::text(Target::ThemeIcon, "🌙"));
}

#[test]
fn toggle_uses_configured_key() {
    let mut toggle = ThemeToggle::new(None, "site-theme");
    let effects = toggle.toggle();
    assert!(effects.contains(&Effect::Persist { key: "site-theme".to_owned(), value: "light".to_owned() }));
}
