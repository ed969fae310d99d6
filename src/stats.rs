use crate::consts::FINGER_COUNT;
use crate::finger::Finger;
use crate::layout::{KeyLookup, LayoutMap};
use crate::resolver::AssignmentRecord;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SameFingerBigram {
    pub first: char,
    pub second: char,
    pub finger: Finger,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgeSummary {
    pub mean: f64,
    pub median: f64,
    pub mode: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FingerUsage {
    pub finger: Finger,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub total_chars: usize,
    pub sfb_count: usize,
    pub repeat_count: usize,
    pub alt_count: usize,
    pub unknown_count: usize,

    /// Distinct same-finger bigrams, sorted.
    pub sfb_bigrams: Vec<SameFingerBigram>,
    pub unknown_chars: Vec<char>,
    /// Canonical finger order, one entry per finger.
    pub finger_usage: Vec<FingerUsage>,
    /// `None` when no mapped character was seen.
    pub ages: Option<AgeSummary>,
}

impl StatsReport {
    fn ratio(&self, n: usize) -> f64 {
        if self.total_chars == 0 {
            0.0
        } else {
            n as f64 / self.total_chars as f64
        }
    }

    pub fn sfb_rate(&self) -> f64 {
        self.ratio(self.sfb_count)
    }

    pub fn repeat_rate(&self) -> f64 {
        self.ratio(self.repeat_count)
    }

    pub fn alt_rate(&self) -> f64 {
        self.ratio(self.alt_count)
    }

    pub fn unknown_rate(&self) -> f64 {
        self.ratio(self.unknown_count)
    }

    /// Share of mapped presses handled by each finger.
    pub fn finger_share(&self, finger: Finger) -> f64 {
        let mapped = self.total_chars - self.unknown_count;
        if mapped == 0 {
            return 0.0;
        }
        self.finger_usage[finger.index()].count as f64 / mapped as f64
    }
}

/// Folds an AssignmentRecord stream into a StatsReport.
///
/// All rates use the total character count (unknowns included) as the
/// denominator. Unknown characters are skipped when pairing a press with its
/// predecessor.
pub struct StatsAggregator<'a, L: KeyLookup + ?Sized = LayoutMap> {
    layout: &'a L,
    prev: Option<(char, Finger)>,
    total: usize,
    sfb: usize,
    repeat: usize,
    alt: usize,
    unknown: usize,
    sfb_bigrams: BTreeSet<SameFingerBigram>,
    unknown_chars: BTreeSet<char>,
    usage: [usize; FINGER_COUNT],
    ages: Vec<u8>,
}

impl<'a, L: KeyLookup + ?Sized> StatsAggregator<'a, L> {
    pub fn new(layout: &'a L) -> Self {
        Self {
            layout,
            prev: None,
            total: 0,
            sfb: 0,
            repeat: 0,
            alt: 0,
            unknown: 0,
            sfb_bigrams: BTreeSet::new(),
            unknown_chars: BTreeSet::new(),
            usage: [0; FINGER_COUNT],
            ages: Vec::new(),
        }
    }

    pub fn push(&mut self, record: &AssignmentRecord) {
        self.total += 1;
        let c = record.character;

        let finger = match record.finger {
            Some(f) => f,
            None => {
                self.unknown += 1;
                self.unknown_chars.insert(c);
                return;
            }
        };

        self.ages.push(record.age);
        self.usage[finger.index()] += 1;

        if self.layout.default_finger(c) != Some(finger) {
            self.alt += 1;
        }

        if let Some((prev_char, prev_finger)) = self.prev {
            if prev_finger == finger {
                if prev_char != c {
                    self.sfb += 1;
                    self.sfb_bigrams.insert(SameFingerBigram {
                        first: prev_char,
                        second: c,
                        finger,
                    });
                } else {
                    self.repeat += 1;
                }
            }
        }
        self.prev = Some((c, finger));
    }

    pub fn finish(self) -> StatsReport {
        let finger_usage = Finger::ALL
            .iter()
            .map(|&finger| FingerUsage {
                finger,
                count: self.usage[finger.index()],
            })
            .collect();

        StatsReport {
            total_chars: self.total,
            sfb_count: self.sfb,
            repeat_count: self.repeat,
            alt_count: self.alt,
            unknown_count: self.unknown,
            sfb_bigrams: self.sfb_bigrams.into_iter().collect(),
            unknown_chars: self.unknown_chars.into_iter().collect(),
            finger_usage,
            ages: summarize_ages(&self.ages),
        }
    }
}

impl<'a, 'r, L: KeyLookup + ?Sized> Extend<&'r AssignmentRecord> for StatsAggregator<'a, L> {
    fn extend<I: IntoIterator<Item = &'r AssignmentRecord>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}

/// Mean, median (middle pair averaged for even counts) and mode (earliest
/// value wins ties) of the observed ages.
pub fn summarize_ages(ages: &[u8]) -> Option<AgeSummary> {
    if ages.is_empty() {
        return None;
    }

    let mean = ages.iter().map(|&a| a as f64).sum::<f64>() / ages.len() as f64;

    let mut sorted = ages.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    };

    // Counts in first-seen order so ties resolve to the earliest value.
    let mut counts: Vec<(u8, usize)> = Vec::new();
    for &a in ages {
        match counts.iter_mut().find(|(v, _)| *v == a) {
            Some((_, n)) => *n += 1,
            None => counts.push((a, 1)),
        }
    }
    let mut mode = counts[0];
    for &entry in &counts[1..] {
        if entry.1 > mode.1 {
            mode = entry;
        }
    }

    Some(AgeSummary {
        mean,
        median,
        mode: mode.0,
    })
}
