#![allow(clippy::float_cmp)]

use super::*;

fn spy() -> ScrollSpy {
    ScrollSpy::new(vec!["#about".to_owned(), "#projects".to_owned(), "#contact".to_owned()])
}

fn sections() -> Vec<Section> {
    vec![
        Section::new("about", 600.0, 500.0),
        Section::new("projects", 1100.0, 800.0),
        Section::new("contact", 1900.0, 400.0),
    ]
}

fn active_links(effects: &[Effect]) -> Vec<usize> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::AddClass { target: Target::NavLink(index), class: "active" } => Some(*index),
            _ => None,
        })
        .collect()
}

// =============================================================
// anchor_id / Section
// =============================================================

#[test]
fn anchor_id_strips_hash() {
    assert_eq!(anchor_id("#about"), Some("about"));
    assert_eq!(anchor_id("/blog"), None);
    assert_eq!(anchor_id("#"), Some(""));
}

#[test]
fn section_band_excludes_lower_edge_includes_upper() {
    let section = Section::new("about", 600.0, 500.0);
    assert!(!section.contains(500.0));
    assert!(section.contains(500.5));
    assert!(section.contains(1000.0));
    assert!(!section.contains(1000.5));
}

// =============================================================
// link_clicked / pulse_expired
// =============================================================

#[test]
fn click_highlights_scrolls_and_schedules_pulse() {
    let effects = spy().link_clicked(1, 1100.0);
    assert_eq!(active_links(&effects), vec![1]);
    assert!(effects.contains(&Effect::ScrollTo { top: 1020.0 }));
    assert!(effects.contains(&Effect::Schedule { delay_ms: 1000, timer: Timer::ClearPulse(1) }));
    let removed = effects
        .iter()
        .filter(|effect| matches!(effect, Effect::RemoveClass { class: "active", .. }))
        .count();
    assert_eq!(removed, 3);
}

#[test]
fn click_clears_before_highlighting() {
    let effects = spy().link_clicked(0, 600.0);
    let add = effects.iter().position(|e| matches!(e, Effect::AddClass { .. }));
    let last_remove = effects.iter().rposition(|e| matches!(e, Effect::RemoveClass { .. }));
    assert!(last_remove < add);
}

#[test]
fn click_out_of_range_is_ignored() {
    assert!(spy().link_clicked(9, 0.0).is_empty());
    assert!(spy().pulse_expired(9).is_empty());
}

#[test]
fn pulse_expiry_removes_only_that_link() {
    assert_eq!(
        spy().pulse_expired(2),
        vec![Effect::RemoveClass { target: Target::NavLink(2), class: "active" }]
    );
}

#[test]
fn target_id_reads_href() {
    let spy = ScrollSpy::new(vec!["#top".to_owned(), "resume.pdf".to_owned()]);
    assert_eq!(spy.target_id(0), Some("top"));
    assert_eq!(spy.target_id(1), None);
    assert_eq!(spy.target_id(2), None);
}

// =============================================================
// scrolled
// =============================================================

#[test]
fn scroll_highlights_section_in_band() {
    assert_eq!(active_links(&spy().scrolled(700.0, &sections())), vec![0]);
    assert_eq!(active_links(&spy().scrolled(1500.0, &sections())), vec![1]);
    assert_eq!(active_links(&spy().scrolled(1850.0, &sections())), vec![2]);
}

#[test]
fn scroll_outside_every_band_changes_nothing() {
    assert!(spy().scrolled(0.0, &sections()).is_empty());
}

#[test]
fn overlapping_bands_prefer_last_section() {
    let overlapping = vec![Section::new("about", 600.0, 1000.0), Section::new("projects", 800.0, 400.0)];
    assert_eq!(active_links(&spy().scrolled(750.0, &overlapping)), vec![1]);
}

#[test]
fn scroll_to_section_without_link_only_clears() {
    let effects = spy().scrolled(100.0, &[Section::new("hero", 0.0, 600.0)]);
    assert_eq!(effects.len(), 3);
    assert!(active_links(&effects).is_empty());
}
