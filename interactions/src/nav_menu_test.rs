use super::*;

fn aria(effects: &[Effect]) -> Option<&str> {
    effects.iter().find_map(|effect| match effect {
        Effect::SetAttribute { name: "aria-expanded", value, .. } => Some(value.as_str()),
        _ => None,
    })
}

#[test]
fn starts_closed() {
    assert!(!NavMenu::new().is_open());
}

#[test]
fn toggle_opens_then_closes() {
    let mut menu = NavMenu::new();
    let opened = menu.toggle();
    assert!(menu.is_open());
    assert_eq!(
        opened,
        vec![
            Effect::AddClass { target: Target::Nav, class: "nav-open" },
            Effect::AddClass { target: Target::Hamburger, class: "is-active" },
            Effect::SetAttribute { target: Target::Hamburger, name: "aria-expanded", value: "true".to_owned() },
        ]
    );

    let closed = menu.toggle();
    assert!(!menu.is_open());
    assert_eq!(aria(&closed), Some("false"));
}

#[test]
fn link_click_closes_open_menu() {
    let mut menu = NavMenu::new();
    menu.toggle();
    let effects = menu.link_clicked();
    assert!(!menu.is_open());
    assert!(effects.contains(&Effect::RemoveClass { target: Target::Nav, class: "nav-open" }));
    assert!(effects.contains(&Effect::RemoveClass { target: Target::Hamburger, class: "is-active" }));
    assert_eq!(aria(&effects), Some("false"));
}

#[test]
fn outside_click_closes_open_menu() {
    let mut menu = NavMenu::new();
    menu.toggle();
    let effects = menu.document_clicked(false, false);
    assert!(!menu.is_open());
    assert_eq!(effects.len(), 3);
}

#[test]
fn outside_click_on_closed_menu_is_noop() {
    let mut menu = NavMenu::new();
    assert!(menu.document_clicked(false, false).is_empty());
    assert!(!menu.is_open());
}

#[test]
fn clicks_inside_menu_or_hamburger_are_ignored() {
    let mut menu = NavMenu::new();
    menu.toggle();
    assert!(menu.document_clicked(true, false).is_empty());
    assert!(menu.document_clicked(false, true).is_empty());
    assert!(menu.is_open());
}
