use crate::consts::FINGER_COUNT;
use crate::error::{AltError, AltResult};
use crate::finger::Finger;

/// Per-finger aging state. `age == 0` means the finger is idle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FingerSlot {
    pub age: u8,
    pub last_char: Option<char>,
}

impl FingerSlot {
    const IDLE: FingerSlot = FingerSlot {
        age: 0,
        last_char: None,
    };

    pub fn is_idle(&self) -> bool {
        self.age == 0
    }
}

/// Short-term fatigue model. A finger stays warm for `max_age` presses of
/// other fingers after it was used, then cools back down to idle.
///
/// Aging is driven by presses only: every `record` ages all warm fingers
/// except the one being pressed.
#[derive(Debug, Clone)]
pub struct RecencyTracker {
    slots: [FingerSlot; FINGER_COUNT],
    max_age: u8,
}

impl RecencyTracker {
    pub fn new(max_age: u8) -> AltResult<Self> {
        if max_age == 0 {
            return Err(AltError::Config("max_age must be at least 1".to_string()));
        }
        Ok(Self {
            slots: [FingerSlot::IDLE; FINGER_COUNT],
            max_age,
        })
    }

    pub fn max_age(&self) -> u8 {
        self.max_age
    }

    #[inline]
    pub fn age(&self, finger: Finger) -> u8 {
        self.slots[finger.index()].age
    }

    pub fn slot(&self, finger: Finger) -> FingerSlot {
        self.slots[finger.index()]
    }

    /// True when `finger`'s last press was `c`: striking the same key again
    /// is a repeat, not a same-finger bigram.
    #[inline]
    pub fn was_last_pressed_by(&self, finger: Finger, c: char) -> bool {
        self.slots[finger.index()].last_char == Some(c)
    }

    pub fn record(&mut self, finger: Finger, c: char) {
        let target = finger.index();
        let max_age = self.max_age;

        for (i, slot) in self.slots.iter_mut().enumerate() {
            if i == target {
                *slot = FingerSlot {
                    age: 1,
                    last_char: Some(c),
                };
            } else if slot.age > 0 {
                if slot.age < max_age {
                    slot.age += 1;
                } else {
                    *slot = FingerSlot::IDLE;
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.slots = [FingerSlot::IDLE; FINGER_COUNT];
    }

    /// Snapshot in canonical finger order.
    pub fn slots(&self) -> &[FingerSlot; FINGER_COUNT] {
        &self.slots
    }
}
