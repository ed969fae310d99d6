use crate::error::AltResult;
use crate::finger::Finger;
use crate::layout::{KeyLookup, LayoutMap};
use crate::recency::RecencyTracker;
use serde::Serialize;

/// One committed press. `finger` is `None` for characters the layout does not
/// bind; those are reported with age 0 and never touch the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssignmentRecord {
    pub character: char,
    pub finger: Option<Finger>,
    pub age: u8,
}

impl AssignmentRecord {
    pub fn unknown(character: char) -> Self {
        Self {
            character,
            finger: None,
            age: 0,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.finger.is_none()
    }
}

/// Greedy, single-pass finger assignment.
///
/// For each character the first candidate that is idle (or is repeating the
/// very key it struck last) wins. If every candidate is still warm, the one
/// with the highest age, i.e. the one closest to cooling down, is taken, the
/// earliest candidate winning ties. Earlier choices are never revisited.
pub struct FingerResolver<'a, L: KeyLookup + ?Sized = LayoutMap> {
    layout: &'a L,
    tracker: RecencyTracker,
}

impl<'a, L: KeyLookup + ?Sized> FingerResolver<'a, L> {
    pub fn new(layout: &'a L, max_age: u8) -> AltResult<Self> {
        Ok(Self::with_tracker(layout, RecencyTracker::new(max_age)?))
    }

    pub fn with_tracker(layout: &'a L, tracker: RecencyTracker) -> Self {
        Self { layout, tracker }
    }

    pub fn tracker(&self) -> &RecencyTracker {
        &self.tracker
    }

    pub fn layout(&self) -> &'a L {
        self.layout
    }

    pub fn reset(&mut self) {
        self.tracker.reset();
    }

    pub fn press(&mut self, c: char) -> AssignmentRecord {
        let candidates = self.layout.fingers(c);
        if candidates.is_empty() {
            return AssignmentRecord::unknown(c);
        }

        for &finger in candidates {
            let age = self.tracker.age(finger);
            if age == 0 || self.tracker.was_last_pressed_by(finger, c) {
                return self.commit(c, finger, age);
            }
        }

        // All candidates are warm: take the stalest, first one on ties.
        let mut chosen = candidates[0];
        for &finger in &candidates[1..] {
            if self.tracker.age(finger) > self.tracker.age(chosen) {
                chosen = finger;
            }
        }
        let age = self.tracker.age(chosen);
        self.commit(c, chosen, age)
    }

    /// Presses every character of `text` in order.
    pub fn resolve(&mut self, text: &str) -> Vec<AssignmentRecord> {
        text.chars().map(|c| self.press(c)).collect()
    }

    fn commit(&mut self, c: char, finger: Finger, age: u8) -> AssignmentRecord {
        self.tracker.record(finger, c);
        AssignmentRecord {
            character: c,
            finger: Some(finger),
            age,
        }
    }
}
