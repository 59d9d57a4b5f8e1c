use curator_classifier::{classify, MatcherTable};
use curator_core::{Action, Topic};
use proptest::prelude::*;

const KEYS: [&str; 4] = ["dpr", "fla", "fob", "tap"];
const WORDS: [&str; 8] = [
    "backup", "restore", "RAID", "SSD", "NAS", "Ceph", "tape", "LTO",
];

fn table() -> MatcherTable {
    MatcherTable::builder()
        .topic("dpr", "Data Protection", ["backup", "restore"])
        .topic("fla", "Flash", ["RAID", "SSD"])
        .topic("fob", "File and Object", ["NAS", "Ceph"])
        .topic("tap", "Tape", ["tape", "LTO"])
        .build()
        .unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::sample::select(WORDS.to_vec()).prop_map(str::to_string),
            "[a-z]{1,8}",
        ],
        0..12,
    )
    .prop_map(|words| words.join(" "))
}

fn current_strategy() -> impl Strategy<Value = Topic> {
    prop::sample::select(KEYS.to_vec()).prop_map(|k| Topic::new(k).unwrap())
}

// ── Totality: every topic ranked exactly once ─────────────────────────────

proptest! {
    #[test]
    fn ranking_is_total(
        title in text_strategy(),
        body in text_strategy(),
        current in current_strategy()
    ) {
        let table = table();
        let result = classify(&title, &body, &current, &table).unwrap();
        prop_assert_eq!(result.ranking.len(), table.len());
        for key in KEYS {
            let count = result.ranking.iter().filter(|e| e.topic == key).count();
            prop_assert_eq!(count, 1, "topic {} ranked {} times", key, count);
        }
        prop_assert_eq!(&result.ranking[0].topic, &result.top);
    }
}

// ── Determinism ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn classification_is_deterministic(
        title in text_strategy(),
        body in text_strategy(),
        current in current_strategy()
    ) {
        let table = table();
        let first = classify(&title, &body, &current, &table).unwrap();
        let second = classify(&title, &body, &current, &table).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ── Stability law and idempotence under KEEP ─────────────────────────────

proptest! {
    #[test]
    fn tie_with_current_always_keeps_current(
        title in text_strategy(),
        body in text_strategy(),
        current in current_strategy()
    ) {
        let table = table();
        let result = classify(&title, &body, &current, &table).unwrap();
        let best = result.ranking.iter().map(|e| e.score).max().unwrap();
        if result.current_score() == best {
            prop_assert_eq!(&result.top, &current);
            prop_assert_eq!(result.action, Action::Keep);
        } else {
            prop_assert!(result.action != Action::Keep);
        }
    }

    #[test]
    fn keep_is_idempotent(
        title in text_strategy(),
        body in text_strategy(),
        current in current_strategy()
    ) {
        let table = table();
        let first = classify(&title, &body, &current, &table).unwrap();
        if first.action == Action::Keep {
            let again = classify(&title, &body, &first.current, &table).unwrap();
            prop_assert_eq!(again.action, Action::Keep);
        }
    }

    #[test]
    fn move_targets_the_strict_leader(
        title in text_strategy(),
        body in text_strategy(),
        current in current_strategy()
    ) {
        let table = table();
        let result = classify(&title, &body, &current, &table).unwrap();
        if result.action == Action::Move {
            prop_assert!(result.top_score() > result.current_score());
            prop_assert!(result.ranking[1].score < result.top_score());
        }
    }
}

// ── Monotonicity ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn adding_a_match_never_lowers_its_topic_or_touches_others(
        title in text_strategy(),
        body in text_strategy(),
        word_index in 0..WORDS.len(),
        in_title in any::<bool>()
    ) {
        let table = table();
        let current = Topic::new("dpr").unwrap();
        let before = classify(&title, &body, &current, &table).unwrap();

        let word = WORDS[word_index];
        let (title2, body2) = if in_title {
            (format!("{title} {word}"), body.clone())
        } else {
            (title.clone(), format!("{body} {word}"))
        };
        let after = classify(&title2, &body2, &current, &table).unwrap();

        let owner = Topic::new(KEYS[word_index / 2]).unwrap();
        for key in KEYS {
            let t = Topic::new(key).unwrap();
            let (b, a) = (before.score_of(&t).unwrap(), after.score_of(&t).unwrap());
            if t == owner {
                prop_assert!(a >= b);
            } else {
                prop_assert_eq!(a, b, "score of {} changed", key);
            }
        }
    }
}
