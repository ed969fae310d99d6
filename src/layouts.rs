use crate::error::{AltError, AltResult};
use crate::finger::Finger;
use crate::layout::{KeyBinding, LayoutMap};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum KnownLayout {
    /// Row-staggered QWERTY where most keys can be struck by more than one
    /// finger.
    Qwerty,
    /// Classic touch-typing QWERTY: one finger per key.
    QwertyTouch,
}

const ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl;'", "zxcvbnm,./"];

// One entry per key of ROWS, in compact finger codes (default finger first).
const ALT_FINGERS: [&[&str]; 3] = [
    &["p", "rp", "mr", "im", "i", "IM", "IM", "MI", "RM", "RP"],
    &["p", "rm", "mi", "im", "i", "I", "IM", "MR", "R", "P", "P"],
    &["r", "m", "i", "i", "Ii", "I", "I", "M", "R", "P"],
];

const TOUCH_FINGERS: [&[&str]; 3] = [
    &["p", "r", "m", "i", "i", "I", "I", "M", "R", "P"],
    &["p", "r", "m", "i", "i", "I", "I", "M", "R", "P", "P"],
    &["p", "r", "m", "i", "i", "I", "I", "M", "R", "P"],
];

// Space bar: (column, codes).
const ALT_SPACE: (i8, &str) = (4, "tT");
const TOUCH_SPACE: (i8, &str) = (5, "T");

impl KnownLayout {
    fn tables(&self) -> (&'static [&'static [&'static str]; 3], (i8, &'static str)) {
        match self {
            Self::Qwerty => (&ALT_FINGERS, ALT_SPACE),
            Self::QwertyTouch => (&TOUCH_FINGERS, TOUCH_SPACE),
        }
    }

    pub fn to_layout(&self) -> AltResult<LayoutMap> {
        let (fingers, (space_col, space_codes)) = self.tables();
        let mut layout = LayoutMap::new(&self.to_string());

        for (row, (keys, codes)) in ROWS.iter().zip(fingers.iter()).enumerate() {
            if keys.chars().count() != codes.len() {
                return Err(AltError::Config(format!(
                    "Built-in layout '{}': row {} has {} keys but {} finger entries",
                    self,
                    row,
                    keys.chars().count(),
                    codes.len()
                )));
            }
            for (col, (c, code)) in keys.chars().zip(codes.iter()).enumerate() {
                layout.insert(c, binding(row as i8, col as i8, code)?)?;
            }
        }
        layout.insert(' ', binding(ROWS.len() as i8, space_col, space_codes)?)?;

        Ok(layout)
    }
}

fn binding(row: i8, col: i8, codes: &str) -> AltResult<KeyBinding> {
    let fingers = Finger::parse_codes(codes)
        .ok_or_else(|| AltError::Config(format!("Invalid finger codes '{}'", codes)))?;
    Ok(KeyBinding { row, col, fingers })
}

pub fn get_all_layouts() -> AltResult<Vec<(KnownLayout, LayoutMap)>> {
    KnownLayout::iter()
        .map(|known| known.to_layout().map(|layout| (known, layout)))
        .collect()
}
