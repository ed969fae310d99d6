use crate::consts::FINGER_COUNT;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

/// One of the ten fingers, declared in canonical order: left pinky through
/// left thumb, then right thumb through right pinky.
///
/// The declaration order is load-bearing. `index()` (and therefore
/// `home_column()` and every tie-break in the engine) is derived from it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Finger {
    #[strum(serialize = "LP")]
    #[serde(rename = "LP", alias = "lp")]
    LeftPinky,
    #[strum(serialize = "LR")]
    #[serde(rename = "LR", alias = "lr")]
    LeftRing,
    #[strum(serialize = "LM")]
    #[serde(rename = "LM", alias = "lm")]
    LeftMiddle,
    #[strum(serialize = "LI")]
    #[serde(rename = "LI", alias = "li")]
    LeftIndex,
    #[strum(serialize = "LT")]
    #[serde(rename = "LT", alias = "lt")]
    LeftThumb,
    #[strum(serialize = "RT")]
    #[serde(rename = "RT", alias = "rt")]
    RightThumb,
    #[strum(serialize = "RI")]
    #[serde(rename = "RI", alias = "ri")]
    RightIndex,
    #[strum(serialize = "RM")]
    #[serde(rename = "RM", alias = "rm")]
    RightMiddle,
    #[strum(serialize = "RR")]
    #[serde(rename = "RR", alias = "rr")]
    RightRing,
    #[strum(serialize = "RP")]
    #[serde(rename = "RP", alias = "rp")]
    RightPinky,
}

impl Finger {
    /// Canonical order. Kept as an explicit table so that tie-breaking never
    /// depends on the iteration order of a map.
    pub const ALL: [Finger; FINGER_COUNT] = [
        Finger::LeftPinky,
        Finger::LeftRing,
        Finger::LeftMiddle,
        Finger::LeftIndex,
        Finger::LeftThumb,
        Finger::RightThumb,
        Finger::RightIndex,
        Finger::RightMiddle,
        Finger::RightRing,
        Finger::RightPinky,
    ];

    /// Compact codes used by finger maps: lowercase for the left hand,
    /// uppercase for the right.
    const CODES: [char; FINGER_COUNT] = ['p', 'r', 'm', 'i', 't', 'T', 'I', 'M', 'R', 'P'];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(idx: usize) -> Option<Finger> {
        Self::ALL.get(idx).copied()
    }

    /// Column the finger rests on, counted from the left edge of the block.
    #[inline]
    pub fn home_column(self) -> i8 {
        self.index() as i8
    }

    pub fn hand(self) -> Hand {
        if self.index() < FINGER_COUNT / 2 {
            Hand::Left
        } else {
            Hand::Right
        }
    }

    pub fn is_thumb(self) -> bool {
        matches!(self, Finger::LeftThumb | Finger::RightThumb)
    }

    pub fn code(self) -> char {
        Self::CODES[self.index()]
    }

    pub fn from_code(code: char) -> Option<Finger> {
        Self::CODES
            .iter()
            .position(|&c| c == code)
            .map(|i| Self::ALL[i])
    }

    /// Parses a run of compact codes, e.g. `"IM"` -> `[RI, RM]`.
    pub fn parse_codes(codes: &str) -> Option<Vec<Finger>> {
        codes.chars().map(Self::from_code).collect()
    }
}
