use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Cost of one finger sequence. Field order is the comparison order: a
/// same-finger bigram outweighs any amount of reuse, and reuse outweighs any
/// amount of lateral travel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SequenceScore {
    pub sfb: u64,
    pub reuse: u64,
    pub distance: u64,
}

impl fmt::Display for SequenceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sfb={} reuse={} dist={}",
            self.sfb, self.reuse, self.distance
        )
    }
}

/// Which adjacent same-finger pairs count as a same-finger bigram.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SfbRule {
    /// Same finger on two different characters. Double letters are repeats.
    #[default]
    DifferentKeys,
    /// Same finger, whatever the characters.
    AnyRepeat,
}

/// Secondary same-finger penalty.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReuseMetric {
    /// Pairs of positions (any distance apart) sharing a finger on different
    /// characters.
    #[default]
    SharedFingerPairs,
    /// Sequence length minus the number of distinct fingers used.
    RepeatedFingers,
    /// Number of distinct (finger, character) pairs.
    DistinctFingerChars,
}
