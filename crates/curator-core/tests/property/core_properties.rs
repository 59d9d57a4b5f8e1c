use curator_core::constants::MAX_TOPIC_KEY_LEN;
use curator_core::{Action, Topic};
use proptest::prelude::*;

// ── Topic keys ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn well_formed_keys_are_accepted(key in "[a-z][a-z0-9]{0,15}") {
        let topic = Topic::new(key.as_str()).unwrap();
        prop_assert_eq!(topic.as_str(), key.as_str());
        let reparsed: Topic = topic.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, topic);
    }

    #[test]
    fn keys_with_foreign_characters_are_rejected(
        prefix in "[a-z]{1,4}",
        bad in "[A-Z_ .-]",
        suffix in "[a-z0-9]{0,4}"
    ) {
        let key = format!("{prefix}{bad}{suffix}");
        prop_assert!(Topic::new(key).is_err());
    }

    #[test]
    fn keys_starting_with_a_digit_are_rejected(key in "[0-9][a-z0-9]{0,10}") {
        prop_assert!(Topic::new(key).is_err());
    }

    #[test]
    fn overlong_keys_are_rejected(extra in 1usize..20) {
        let key = "a".repeat(MAX_TOPIC_KEY_LEN + extra);
        prop_assert!(Topic::new(key).is_err());
    }

    #[test]
    fn topic_serde_rejects_invalid_keys(key in "[A-Z][A-Za-z]{0,6}") {
        let json = serde_json::to_string(&key).unwrap();
        prop_assert!(serde_json::from_str::<Topic>(&json).is_err());
    }
}

// ── Actions ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn action_display_parses_back(action in prop::sample::select(Action::ALL.to_vec())) {
        let parsed: Action = action.to_string().parse().unwrap();
        prop_assert_eq!(parsed, action);
    }

    #[test]
    fn unknown_action_words_are_rejected(word in "[A-Za-z]{1,8}") {
        prop_assume!(!["KEEP", "MOVE", "EVAL"].contains(&word.as_str()));
        prop_assert!(word.parse::<Action>().is_err());
    }
}
