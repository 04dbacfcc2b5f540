use quizsolver::{find_best_match, rank_matches, score, Corpus, CorpusEntry, Threshold};

fn corpus(entries: &[(&str, bool)]) -> Corpus {
    entries
        .iter()
        .map(|(k, a)| CorpusEntry::new(*k, *a, None))
        .collect()
}

fn threshold(v: f64) -> Threshold {
    Threshold::new(v).unwrap()
}

#[test]
fn test_exact_question_is_answered_with_full_confidence() {
    let c = corpus(&[("La Tierra es redonda", true)]);
    let m = find_best_match("La Tierra es redonda", &c, threshold(80.0)).unwrap();
    assert!(m.entry.answer);
    assert_eq!(m.confidence, 100.0);
}

#[test]
fn test_loose_question_rejected_by_strict_threshold() {
    let c = corpus(&[("La Tierra es redonda", true)]);
    assert!(find_best_match("Planeta Tierra", &c, threshold(90.0)).is_none());
    assert!(find_best_match("Planeta Tierra", &c, threshold(40.0)).is_some());
}

#[test]
fn test_equal_scores_pick_first_entry() {
    let c = corpus(&[("abc", true), ("abd", false)]);
    let m = find_best_match("ab", &c, threshold(0.0)).unwrap();
    assert_eq!(m.entry.key, "abc");
    assert_eq!(m.confidence, 80.0);
}

#[test]
fn test_empty_corpus_never_matches() {
    let c = Corpus::new();
    assert!(find_best_match("cualquier cosa", &c, threshold(0.0)).is_none());
    assert!(rank_matches("cualquier cosa", &c, threshold(0.0), 5).is_empty());
}

#[test]
fn test_empty_inputs_score_zero() {
    assert_eq!(score("", ""), 0.0);
    let c = corpus(&[("primera", true), ("segunda", false)]);
    let m = find_best_match("", &c, threshold(0.0)).unwrap();
    assert_eq!(m.entry.key, "primera");
    assert_eq!(m.confidence, 0.0);
}

#[test]
fn test_ranking_agrees_with_best_match() {
    let c = corpus(&[
        ("El agua hierve a 100 grados", true),
        ("El agua se congela a 0 grados", true),
        ("El hielo es agua sólida", true),
        ("El agua es un elemento", false),
    ]);
    let query = "El agua hierve a 90 grados";
    let best = find_best_match(query, &c, threshold(50.0)).unwrap();
    let ranked = rank_matches(query, &c, threshold(50.0), 3);
    assert_eq!(ranked[0].entry.key, best.entry.key);
    assert_eq!(best.entry.key, "El agua hierve a 100 grados");
    assert!(ranked.windows(2).all(|w| w[0].ratio >= w[1].ratio));
}
