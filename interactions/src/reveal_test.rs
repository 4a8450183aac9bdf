use super::*;

fn hit(index: usize) -> Intersection {
    Intersection { index, intersecting: true }
}

fn miss(index: usize) -> Intersection {
    Intersection { index, intersecting: false }
}

fn reveals(effects: &[Effect]) -> usize {
    effects.iter().filter(|e| matches!(e, Effect::AddClass { class: "revealed", .. })).count()
}

#[test]
fn new_set_is_all_pending() {
    let set = RevealSet::new(3);
    assert_eq!(set.pending_count(), 3);
    assert!(set.is_pending(0));
    assert!(!set.is_pending(3));
}

#[test]
fn first_intersection_reveals_and_unobserves() {
    let mut set = RevealSet::new(2);
    let effects = set.observe(&[hit(1)]);
    assert_eq!(
        effects,
        vec![
            Effect::AddClass { target: Target::Reveal(1), class: "revealed" },
            Effect::Unobserve(1),
        ]
    );
    assert!(!set.is_pending(1));
    assert!(set.is_pending(0));
}

#[test]
fn non_intersecting_entries_are_ignored() {
    let mut set = RevealSet::new(1);
    assert!(set.observe(&[miss(0)]).is_empty());
    assert!(set.is_pending(0));
}

#[test]
fn repeated_entries_reveal_at_most_once() {
    let mut set = RevealSet::new(1);
    let mut total = 0;
    for _ in 0..4 {
        total += reveals(&set.observe(&[hit(0), miss(0), hit(0)]));
    }
    assert_eq!(total, 1);
    assert_eq!(set.pending_count(), 0);
}

#[test]
fn unknown_index_is_ignored() {
    let mut set = RevealSet::new(1);
    assert!(set.observe(&[hit(7)]).is_empty());
}
