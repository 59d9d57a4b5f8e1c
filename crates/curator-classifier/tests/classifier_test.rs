use curator_classifier::{classify, classify_with, ClassifierEngine, MatcherTable, ScoringWeights};
use curator_core::errors::{ConfigError, CuratorError};
use curator_core::traits::IClassifier;
use curator_core::{Action, PostText, Topic};

fn topic(key: &str) -> Topic {
    Topic::new(key).unwrap()
}

fn ranking(result: &curator_core::ClassificationResult) -> Vec<(String, u32)> {
    result
        .ranking
        .iter()
        .map(|e| (e.topic.to_string(), e.score))
        .collect()
}

// ── Reference scenarios ──────────────────────────────────────────────────

#[test]
fn title_hits_outscore_current_topic_and_move() {
    let table = MatcherTable::builder()
        .topic("dpr", "Data Protection", ["backup"])
        .topic("fla", "Flash", ["SSD", "RAID"])
        .build()
        .unwrap();
    let result = classify("RAID and SSD arrays", "", &topic("dpr"), &table).unwrap();
    assert_eq!(result.score_of(&topic("fla")), Some(6));
    assert_eq!(result.score_of(&topic("dpr")), Some(0));
    assert_eq!(result.top, "fla");
    assert_eq!(result.action, Action::Move);
}

#[test]
fn single_body_hit_on_current_topic_keeps() {
    let table = MatcherTable::builder()
        .topic("dpr", "Data Protection", ["backup"])
        .topic("fla", "Flash", ["SSD", "RAID"])
        .build()
        .unwrap();
    let result = classify("", "minor mention of backup tools", &topic("dpr"), &table).unwrap();
    assert_eq!(result.score_of(&topic("dpr")), Some(1));
    assert_eq!(result.action, Action::Keep);
    assert_eq!(result.top, "dpr");
}

#[test]
fn exact_tie_with_current_topic_keeps_current_on_top() {
    let table = MatcherTable::builder()
        .topic("dpr", "Data Protection", ["Backup"])
        .topic("fla", "Flash", ["RAID"])
        .build()
        .unwrap();
    let result = classify("Backup and RAID", "", &topic("fla"), &table).unwrap();
    assert_eq!(result.top, "fla");
    assert_eq!(result.action, Action::Keep);
    assert_eq!(
        ranking(&result),
        vec![("fla".to_string(), 3), ("dpr".to_string(), 3)]
    );
}

#[test]
fn two_other_topics_tied_for_lead_need_evaluation() {
    let table = MatcherTable::builder()
        .topic("dpr", "Data Protection", ["backup"])
        .topic("fla", "Flash", ["RAID"])
        .topic("fob", "File and Object", ["NAS"])
        .build()
        .unwrap();
    let result = classify("RAID versus NAS", "", &topic("dpr"), &table).unwrap();
    assert_eq!(result.action, Action::Eval);
    assert_eq!(result.top, "fla");
    assert_eq!(result.ranking[1].topic, "fob");
    assert_eq!(result.current_score(), 0);
}

// ── Edge cases ───────────────────────────────────────────────────────────

#[test]
fn no_hits_anywhere_keeps_current() {
    let table = MatcherTable::builtin().unwrap();
    let result = classify("", "", &topic("smr"), &table).unwrap();
    assert!(result.ranking.iter().all(|e| e.score == 0));
    assert_eq!(result.top, "smr");
    assert_eq!(result.action, Action::Keep);
    assert_eq!(result.ranking.len(), table.len());
}

#[test]
fn single_topic_table_always_keeps() {
    let table = MatcherTable::builder()
        .topic("fla", "Flash", ["RAID"])
        .build()
        .unwrap();
    for (title, body) in [("RAID", "RAID"), ("", ""), ("nothing", "at all")] {
        let result = classify(title, body, &topic("fla"), &table).unwrap();
        assert_eq!(result.action, Action::Keep);
    }
}

#[test]
fn unknown_current_topic_is_a_configuration_error() {
    let table = MatcherTable::builder()
        .topic("fla", "Flash", ["RAID"])
        .build()
        .unwrap();
    let err = classify("RAID", "", &topic("tap"), &table).unwrap_err();
    assert!(matches!(
        err,
        CuratorError::Config(ConfigError::UnknownTopic { ref topic }) if topic == "tap"
    ));
}

#[test]
fn table_without_matchers_is_a_configuration_error() {
    let empty = MatcherTable::builder().build().unwrap();
    let err = classify("RAID", "", &topic("fla"), &empty).unwrap_err();
    assert!(matches!(err, CuratorError::Config(ConfigError::EmptyTable)));

    let no_patterns = MatcherTable::builder()
        .topic("fla", "Flash", Vec::<String>::new())
        .build()
        .unwrap();
    let err = classify("RAID", "", &topic("fla"), &no_patterns).unwrap_err();
    assert!(matches!(err, CuratorError::Config(ConfigError::EmptyTable)));
}

#[test]
fn topic_without_matchers_still_ranked() {
    let table = MatcherTable::builder()
        .topic("fla", "Flash", ["RAID"])
        .topic("misc", "Miscellaneous", Vec::<String>::new())
        .build()
        .unwrap();
    let result = classify("RAID", "", &topic("misc"), &table).unwrap();
    assert_eq!(ranking(&result), vec![("fla".into(), 3), ("misc".into(), 0)]);
    assert_eq!(result.action, Action::Move);
}

#[test]
fn stability_swap_leaves_other_entries_in_place() {
    let table = MatcherTable::builder()
        .topic("aaa", "A", ["alpha"])
        .topic("bbb", "B", ["beta"])
        .topic("ccc", "C", ["gamma"])
        .topic("ddd", "D", ["delta"])
        .build()
        .unwrap();
    // aaa 3, bbb 3, ccc 0, ddd 3; ddd is current and tied with the leader.
    let result = classify("alpha beta delta", "", &topic("ddd"), &table).unwrap();
    assert_eq!(
        ranking(&result),
        vec![
            ("ddd".into(), 3),
            ("bbb".into(), 3),
            ("aaa".into(), 3),
            ("ccc".into(), 0)
        ]
    );
    assert_eq!(result.action, Action::Keep);
}

#[test]
fn weights_are_configurable() {
    let table = MatcherTable::builder()
        .topic("dpr", "Data Protection", ["backup"])
        .topic("fla", "Flash", ["RAID"])
        .build()
        .unwrap();
    let post = PostText::new("RAID", "backup backup");
    let flat = ScoringWeights { title: 1, body: 1 };
    let result = classify_with(&post, &topic("dpr"), &table, flat).unwrap();
    // 1 vs 1: tie with current keeps.
    assert_eq!(result.action, Action::Keep);
    let default = classify_with(&post, &topic("dpr"), &table, ScoringWeights::default()).unwrap();
    assert_eq!(default.action, Action::Move);
}

// ── Engine ───────────────────────────────────────────────────────────────

#[test]
fn engine_matches_free_function() {
    let engine = ClassifierEngine::builtin().unwrap();
    let post = PostText::new("LTO-9 cartridges arrive", "Tape is back in fashion.");
    let via_engine = engine.classify(&post, &topic("dpr")).unwrap();
    let via_fn = classify(&post.title, &post.body, &topic("dpr"), engine.table()).unwrap();
    assert_eq!(via_engine, via_fn);
    assert_eq!(via_engine.top, "tap");
    assert_eq!(engine.topics().len(), 7);
}

#[test]
fn engine_evidence_lists_contributing_matchers() {
    let engine = ClassifierEngine::builtin().unwrap();
    let post = PostText::new("Brocade and Cisco", "");
    let (result, hits) = engine.classify_with_evidence(&post, &topic("san")).unwrap();
    assert_eq!(result.score_of(&topic("san")), Some(6));
    let patterns: Vec<&str> = hits.iter().map(|h| h.pattern.as_str()).collect();
    assert_eq!(patterns, vec!["Brocade", "Cisco"]);
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = ClassifierEngine::builtin().unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                engine
                    .classify(&PostText::new("NVMe arrays", ""), &topic("fla"))
                    .unwrap()
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}
