use super::*;

/// Tick until the machine settles, returning every tick seen.
fn run_to_settle(machine: &mut Typewriter) -> Vec<Tick> {
    let mut ticks = Vec::new();
    for _ in 0..10_000 {
        let tick = machine.tick();
        let settled = matches!(tick, Tick::Settle { .. });
        ticks.push(tick);
        if settled {
            return ticks;
        }
    }
    panic!("typewriter never settled");
}

#[test]
fn starts_typing_first_phrase() {
    let mut machine = Typewriter::new();
    assert_eq!(machine.phase(), Phase::Typing);
    let tick = machine.tick();
    assert_eq!(tick.text(), "H");
    assert_eq!(tick.delay_ms(), Some(TYPE_INTERVAL_MS));
}

#[test]
fn full_phrase_pauses_then_deletes_quickly() {
    static WORDS: [&str; 1] = ["abc"];
    let mut machine = Typewriter::with_phrases(&WORDS, 2);
    let delays: Vec<_> = (0..6).map(|_| machine.tick().delay_ms()).collect();
    assert_eq!(
        delays,
        vec![
            Some(TYPE_INTERVAL_MS),
            Some(TYPE_INTERVAL_MS),
            Some(TYPE_PAUSE_MS),
            Some(DELETE_INTERVAL_MS),
            Some(DELETE_INTERVAL_MS),
            Some(DELETE_INTERVAL_MS),
        ]
    );
    assert_eq!(machine.loop_count(), 1);
    assert_eq!(machine.phase(), Phase::Typing);
}

#[test]
fn renders_prefixes_up_and_down() {
    static WORDS: [&str; 2] = ["ab", "c"];
    let mut machine = Typewriter::with_phrases(&WORDS, 5);
    let texts: Vec<_> = (0..6).map(|_| machine.tick().text().to_owned()).collect();
    assert_eq!(texts, vec!["a", "ab", "a", "", "c", ""]);
    assert_eq!(machine.phrase_index(), 0);
}

#[test]
fn loop_count_only_moves_when_phrase_is_fully_deleted() {
    let mut machine = Typewriter::new();
    let len = PHRASES[0].chars().count();
    for _ in 0..(2 * len - 1) {
        machine.tick();
        assert_eq!(machine.loop_count(), 0);
    }
    machine.tick();
    assert_eq!(machine.loop_count(), 1);
    assert_eq!(machine.phrase_index(), 1);
}

#[test]
fn char_index_never_exceeds_phrase_length() {
    let mut machine = Typewriter::new();
    for _ in 0..2_000 {
        let phrase = PHRASES[machine.phrase_index()];
        assert!(machine.char_index() <= phrase.chars().count());
        if matches!(machine.tick(), Tick::Settle { .. }) {
            break;
        }
    }
}

#[test]
fn emoji_is_never_split() {
    let mut machine = Typewriter::new();
    let greeting = PHRASES[0];
    let len = greeting.chars().count();
    let mut last = String::new();
    for _ in 0..len {
        last = machine.tick().text().to_owned();
        assert!(greeting.starts_with(&last));
    }
    assert_eq!(last, greeting);
    assert!(last.ends_with('👋'));
}

#[test]
fn settles_on_first_phrase_after_six_cycles() {
    let mut machine = Typewriter::new();
    let ticks = run_to_settle(&mut machine);
    let expected: usize = PHRASES.iter().map(|p| 2 * p.chars().count()).sum();
    assert_eq!(ticks.len(), expected);
    assert_eq!(machine.loop_count(), TYPEWRITER_MAX_LOOPS);
    assert_eq!(machine.phase(), Phase::Settled);
    assert_eq!(ticks.last().map(Tick::text), Some(PHRASES[0]));
}

#[test]
fn settled_state_is_idempotent() {
    let mut machine = Typewriter::new();
    run_to_settle(&mut machine);
    for _ in 0..5 {
        let tick = machine.tick();
        assert_eq!(tick, Tick::Settle { text: PHRASES[0].to_owned() });
        assert_eq!(tick.delay_ms(), None);
    }
    assert_eq!(machine.loop_count(), TYPEWRITER_MAX_LOOPS);
}

#[test]
fn empty_phrase_list_starts_settled() {
    static NONE: [&str; 0] = [];
    let mut machine = Typewriter::with_phrases(&NONE, 3);
    assert_eq!(machine.tick(), Tick::Settle { text: String::new() });
}
