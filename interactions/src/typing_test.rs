use super::*;

fn phrases(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Run `n` ticks and collect (text, delay) pairs.
fn run(list: &[String], n: usize) -> Vec<(String, u32)> {
    let mut state = TypingState::default();
    let mut out = Vec::new();
    for _ in 0..n {
        let Some(next) = step(list, state) else {
            break;
        };
        state = next.state;
        out.push((next.text, next.delay_ms));
    }
    out
}

// =============================================================
// step
// =============================================================

#[test]
fn empty_phrase_list_is_noop() {
    assert_eq!(step(&[], TypingState::default()), None);
}

#[test]
fn single_char_phrase_types_then_pauses() {
    let list = phrases(&["A", "BC"]);
    let first = step(&list, TypingState::default()).expect("non-empty list");
    assert_eq!(first.text, "A");
    assert_eq!(first.state.phase, Phase::PausedAfterTyping);
    assert_eq!(first.delay_ms, 2200);
}

#[test]
fn full_cycle_over_two_phrases() {
    let list = phrases(&["A", "BC"]);
    let ticks = run(&list, 7);
    let expected = vec![
        ("A".to_owned(), 2200),
        (String::new(), 400),
        ("B".to_owned(), 65),
        ("BC".to_owned(), 2200),
        ("B".to_owned(), 35),
        (String::new(), 400),
        ("A".to_owned(), 2200),
    ];
    assert_eq!(ticks, expected);
}

#[test]
fn deleting_advances_phrase_index_when_empty() {
    let list = phrases(&["A", "BC"]);
    let state = TypingState { phrase_index: 1, char_index: 2, phase: Phase::Deleting };
    let one = step(&list, state).expect("step");
    assert_eq!(one.text, "B");
    assert_eq!(one.state.phrase_index, 1);
    let two = step(&list, one.state).expect("step");
    assert_eq!(two.text, "");
    assert_eq!(two.state.phrase_index, 0);
    assert_eq!(two.state.phase, Phase::PausedAfterDeleting);
}

#[test]
fn typing_counts_characters_not_bytes() {
    let list = phrases(&["Ünï"]);
    let ticks = run(&list, 3);
    assert_eq!(ticks[0].0, "Ü");
    assert_eq!(ticks[1].0, "Ün");
    assert_eq!(ticks[2].0, "Ünï");
}

#[test]
fn empty_phrase_does_not_stall() {
    let list = phrases(&["", "X"]);
    let ticks = run(&list, 3);
    assert_eq!(ticks[0], (String::new(), 2200));
    assert_eq!(ticks[1], (String::new(), 400));
    assert_eq!(ticks[2], ("X".to_owned(), 2200));
}

#[test]
fn out_of_range_index_wraps() {
    let list = phrases(&["AB"]);
    let state = TypingState { phrase_index: 5, char_index: 0, phase: Phase::Typing };
    let next = step(&list, state).expect("step");
    assert_eq!(next.state.phrase_index, 0);
    assert_eq!(next.text, "A");
}

// =============================================================
// Typewriter
// =============================================================

#[test]
fn start_adds_cursor_and_schedules_first_tick() {
    let writer = Typewriter::new(phrases(&["Hi"]));
    assert_eq!(
        writer.start(),
        vec![
            Effect::AddClass { target: Target::HeroRole, class: "typing-cursor" },
            Effect::Schedule { delay_ms: 800, timer: Timer::TypeTick },
        ]
    );
}

#[test]
fn empty_typewriter_is_inert() {
    let mut writer = Typewriter::new(Vec::new());
    assert!(writer.start().is_empty());
    assert!(writer.tick().is_empty());
    assert_eq!(writer.state(), TypingState::default());
}

#[test]
fn tick_sets_text_and_reschedules() {
    let mut writer = Typewriter::new(phrases(&["Hi"]));
    assert_eq!(
        writer.tick(),
        vec![
            Effect::SetText { target: Target::HeroRole, text: "H".to_owned() },
            Effect::Schedule { delay_ms: 65, timer: Timer::TypeTick },
        ]
    );
    assert_eq!(writer.state().char_index, 1);
}
