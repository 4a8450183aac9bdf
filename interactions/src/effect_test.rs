use super::*;

#[test]
fn class_if_picks_add_or_remove() {
    assert_eq!(
        Effect::class_if(Target::BackToTop, "visible", true),
        Effect::AddClass { target: Target::BackToTop, class: "visible" }
    );
    assert_eq!(
        Effect::class_if(Target::BackToTop, "visible", false),
        Effect::RemoveClass { target: Target::BackToTop, class: "visible" }
    );
}

#[test]
fn text_accepts_str_and_string() {
    assert_eq!(Effect::text(Target::Year, "2026"), Effect::text(Target::Year, String::from("2026")));
}

#[test]
fn target_reports_dom_writes() {
    assert_eq!(Effect::text(Target::HeroRole, "x").target(), Some(Target::HeroRole));
    assert_eq!(Effect::ResetForm.target(), Some(Target::Form));
    assert_eq!(Effect::Unobserve(3).target(), Some(Target::Reveal(3)));
}

#[test]
fn target_is_none_for_window_level_effects() {
    assert_eq!(Effect::ScrollTo { top: 0.0 }.target(), None);
    assert_eq!(Effect::Navigate("mailto:a@b.co".to_owned()).target(), None);
    assert_eq!(Effect::Persist { key: "theme".to_owned(), value: "dark".to_owned() }.target(), None);
    assert_eq!(Effect::Schedule { delay_ms: 5, timer: Timer::TypeTick }.target(), None);
}
