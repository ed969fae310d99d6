mod common;

use common::layout;
use keyalt::finger::Finger;
use keyalt::resolver::{AssignmentRecord, FingerResolver};
use keyalt::stats::{summarize_ages, SameFingerBigram, StatsAggregator, StatsReport};
use rstest::rstest;

fn analyze(l: &keyalt::layout::LayoutMap, text: &str, max_age: u8) -> StatsReport {
    let mut resolver = FingerResolver::new(l, max_age).unwrap();
    let records = resolver.resolve(text);
    let mut stats = StatsAggregator::new(l);
    stats.extend(&records);
    stats.finish()
}

#[test]
fn test_unknown_only_bumps_unknown_counter() {
    let l = layout(&[('a', 0, "p")]);
    let report = analyze(&l, "a?a", 2);

    assert_eq!(report.total_chars, 3);
    assert_eq!(report.unknown_count, 1);
    assert_eq!(report.unknown_chars, vec!['?']);
    assert_eq!(report.sfb_count, 0);
    // The unknown in the middle does not break the a..a pairing.
    assert_eq!(report.repeat_count, 1);
    assert!((report.unknown_rate() - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_sfb_recorded_once_per_bigram() {
    let l = layout(&[('a', 0, "p"), ('b', 0, "p")]);
    let report = analyze(&l, "abab", 2);

    assert_eq!(report.sfb_count, 3);
    assert_eq!(
        report.sfb_bigrams,
        vec![
            SameFingerBigram {
                first: 'a',
                second: 'b',
                finger: Finger::LeftPinky
            },
            SameFingerBigram {
                first: 'b',
                second: 'a',
                finger: Finger::LeftPinky
            },
        ]
    );
    assert!((report.sfb_rate() - 0.75).abs() < 1e-9);
}

#[test]
fn test_alternate_finger_counted() {
    let l = layout(&[('a', 0, "pr"), ('b', 1, "pr")]);
    let report = analyze(&l, "ab", 2);

    assert_eq!(report.alt_count, 1);
    assert_eq!(report.sfb_count, 0);
    assert!((report.alt_rate() - 0.5).abs() < 1e-9);
}

#[test]
fn test_finger_usage_in_canonical_order() {
    let l = layout(&[('a', 0, "p"), ('j', 6, "I")]);
    let report = analyze(&l, "jaj?", 2);

    let order: Vec<Finger> = report.finger_usage.iter().map(|u| u.finger).collect();
    assert_eq!(order, Finger::ALL.to_vec());
    assert_eq!(report.finger_usage[Finger::LeftPinky.index()].count, 1);
    assert_eq!(report.finger_usage[Finger::RightIndex.index()].count, 2);
    assert!((report.finger_share(Finger::RightIndex) - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_empty_stream_has_no_ages() {
    let l = layout(&[('a', 0, "p")]);
    let report = analyze(&l, "", 2);

    assert_eq!(report.total_chars, 0);
    assert_eq!(report.ages, None);
    assert_eq!(report.sfb_rate(), 0.0);
    assert_eq!(report.finger_share(Finger::LeftPinky), 0.0);
}

#[test]
fn test_push_accepts_hand_built_records() {
    let l = layout(&[('a', 0, "pr")]);
    let mut stats = StatsAggregator::new(&l);
    stats.push(&AssignmentRecord {
        character: 'a',
        finger: Some(Finger::LeftRing),
        age: 2,
    });
    let report = stats.finish();
    assert_eq!(report.alt_count, 1);
    assert_eq!(report.ages.map(|a| a.mode), Some(2));
}

#[rstest]
#[case(&[0, 1, 1, 2], 1.0, 1.0, 1)]
#[case(&[0, 1, 2], 1.0, 1.0, 0)]
#[case(&[2, 0, 0, 2], 1.0, 1.0, 2)]
#[case(&[1], 1.0, 1.0, 1)]
#[case(&[0, 0, 0, 3], 0.75, 0.0, 0)]
fn test_summarize_ages(
    #[case] ages: &[u8],
    #[case] mean: f64,
    #[case] median: f64,
    #[case] mode: u8,
) {
    let s = summarize_ages(ages).unwrap();
    assert!((s.mean - mean).abs() < 1e-9, "mean {}", s.mean);
    assert!((s.median - median).abs() < 1e-9, "median {}", s.median);
    assert_eq!(s.mode, mode);
}

#[test]
fn test_summarize_empty() {
    assert_eq!(summarize_ages(&[]), None);
}
