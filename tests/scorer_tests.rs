mod common;

use common::fingers;
use keyalt::scorer::{distance_penalty, ReuseMetric, SequenceScore, SequenceScorer, SfbRule};
use rstest::rstest;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

// --- SFB ---
#[rstest]
#[case("pp", "ab", SfbRule::DifferentKeys, 1)]
#[case("pp", "aa", SfbRule::DifferentKeys, 0)]
#[case("pp", "aa", SfbRule::AnyRepeat, 1)]
#[case("pr", "ab", SfbRule::DifferentKeys, 0)]
#[case("pr", "ab", SfbRule::AnyRepeat, 0)]
#[case("ppp", "abc", SfbRule::DifferentKeys, 2)]
#[case("ppp", "aab", SfbRule::DifferentKeys, 1)]
#[case("prp", "aba", SfbRule::DifferentKeys, 0)]
#[case("p", "a", SfbRule::DifferentKeys, 0)]
fn test_sfb_count(
    #[case] codes: &str,
    #[case] word: &str,
    #[case] rule: SfbRule,
    #[case] expected: u64,
) {
    let scorer = SequenceScorer::new(rule, ReuseMetric::default());
    assert_eq!(scorer.sfb_count(&fingers(codes), &chars(word)), expected);
}

// --- REUSE ---
#[rstest]
#[case("prp", "aba", ReuseMetric::SharedFingerPairs, 0)]
#[case("prp", "abc", ReuseMetric::SharedFingerPairs, 1)]
#[case("ppp", "abc", ReuseMetric::SharedFingerPairs, 3)]
#[case("prp", "aba", ReuseMetric::RepeatedFingers, 1)]
#[case("prm", "abc", ReuseMetric::RepeatedFingers, 0)]
#[case("pppp", "abcd", ReuseMetric::RepeatedFingers, 3)]
#[case("prp", "aba", ReuseMetric::DistinctFingerChars, 2)]
#[case("prp", "abc", ReuseMetric::DistinctFingerChars, 3)]
#[case("pp", "aa", ReuseMetric::DistinctFingerChars, 1)]
fn test_reuse_count(
    #[case] codes: &str,
    #[case] word: &str,
    #[case] metric: ReuseMetric,
    #[case] expected: u64,
) {
    let scorer = SequenceScorer::new(SfbRule::default(), metric);
    assert_eq!(scorer.reuse_count(&fingers(codes), &chars(word)), expected);
}

// --- DISTANCE ---
#[rstest]
#[case("p", &[0], 0)]
#[case("p", &[1], 1)]
#[case("pI", &[1, 6], 1)]
#[case("iI", &[4, 4], 3)] // LI home 3, RI home 6
#[case("P", &[10], 1)]
#[case("tT", &[4, 4], 1)]
fn test_distance(#[case] codes: &str, #[case] columns: &[i8], #[case] expected: u64) {
    assert_eq!(distance_penalty(&fingers(codes), columns), expected);
}

#[test]
fn test_score_combines_components() {
    let scorer = SequenceScorer::default();
    let score = scorer.score(&fingers("ppr"), &chars("abc"), &[0, 1, 1]);
    assert_eq!(
        score,
        SequenceScore {
            sfb: 1,
            reuse: 1,
            distance: 1
        }
    );
}

#[test]
fn test_score_order_is_lexicographic() {
    let one_sfb = SequenceScore {
        sfb: 1,
        reuse: 0,
        distance: 0,
    };
    let lots_of_reuse = SequenceScore {
        sfb: 0,
        reuse: 50,
        distance: 50,
    };
    let lots_of_travel = SequenceScore {
        sfb: 0,
        reuse: 1,
        distance: 99,
    };
    let clean = SequenceScore {
        sfb: 0,
        reuse: 1,
        distance: 0,
    };

    assert!(lots_of_reuse < one_sfb);
    assert!(lots_of_travel < lots_of_reuse);
    assert!(clean < lots_of_travel);
    assert_eq!(
        [one_sfb, lots_of_reuse, lots_of_travel, clean].iter().min(),
        Some(&clean)
    );
}

#[test]
fn test_default_scorer_is_canonical() {
    let s = SequenceScorer::default();
    assert_eq!(s.sfb_rule, SfbRule::DifferentKeys);
    assert_eq!(s.reuse_metric, ReuseMetric::SharedFingerPairs);
}
