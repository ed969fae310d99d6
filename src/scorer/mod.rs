pub mod types;

pub use self::types::{ReuseMetric, SequenceScore, SfbRule};
use crate::consts::FINGER_COUNT;
use crate::finger::Finger;
use itertools::Itertools;

/// Stateless scorer for a candidate finger sequence.
///
/// `fingers`, `chars` and `columns` are parallel slices: position `i` is
/// character `chars[i]`, sitting in keyboard column `columns[i]`, struck by
/// `fingers[i]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SequenceScorer {
    pub sfb_rule: SfbRule,
    pub reuse_metric: ReuseMetric,
}

impl SequenceScorer {
    pub fn new(sfb_rule: SfbRule, reuse_metric: ReuseMetric) -> Self {
        Self {
            sfb_rule,
            reuse_metric,
        }
    }

    pub fn score(&self, fingers: &[Finger], chars: &[char], columns: &[i8]) -> SequenceScore {
        debug_assert_eq!(fingers.len(), chars.len());
        debug_assert_eq!(fingers.len(), columns.len());

        SequenceScore {
            sfb: self.sfb_count(fingers, chars),
            reuse: self.reuse_count(fingers, chars),
            distance: distance_penalty(fingers, columns),
        }
    }

    pub fn sfb_count(&self, fingers: &[Finger], chars: &[char]) -> u64 {
        fingers
            .windows(2)
            .zip(chars.windows(2))
            .filter(|(f, c)| {
                f[0] == f[1]
                    && match self.sfb_rule {
                        SfbRule::DifferentKeys => c[0] != c[1],
                        SfbRule::AnyRepeat => true,
                    }
            })
            .count() as u64
    }

    pub fn reuse_count(&self, fingers: &[Finger], chars: &[char]) -> u64 {
        match self.reuse_metric {
            ReuseMetric::SharedFingerPairs => (0..fingers.len())
                .tuple_combinations::<(usize, usize)>()
                .filter(|&(i, j)| fingers[i] == fingers[j] && chars[i] != chars[j])
                .count() as u64,
            ReuseMetric::RepeatedFingers => {
                let mut used = [false; FINGER_COUNT];
                for f in fingers {
                    used[f.index()] = true;
                }
                let distinct = used.iter().filter(|&&u| u).count();
                (fingers.len() - distinct) as u64
            }
            ReuseMetric::DistinctFingerChars => fingers.iter().zip(chars).unique().count() as u64,
        }
    }
}

/// Lateral travel: how far each key sits from the striking finger's home
/// column.
pub fn distance_penalty(fingers: &[Finger], columns: &[i8]) -> u64 {
    fingers
        .iter()
        .zip(columns)
        .map(|(f, &col)| u64::from((f.home_column() as i32 - col as i32).unsigned_abs()))
        .sum()
}
