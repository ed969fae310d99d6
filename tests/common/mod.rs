#![allow(dead_code)] // Not every test binary uses every helper

use keyalt::finger::Finger;
use keyalt::layout::{KeyBinding, LayoutMap};

/// Builds a single-row layout from `(char, column, finger codes)` entries.
///
/// Codes: `p r m i t` = left pinky..thumb, `T I M R P` = right thumb..pinky.
pub fn layout(keys: &[(char, i8, &str)]) -> LayoutMap {
    let mut map = LayoutMap::new("test");
    for &(c, col, codes) in keys {
        let fingers = Finger::parse_codes(codes).expect("valid finger codes");
        map.insert(c, KeyBinding { row: 1, col, fingers })
            .expect("non-empty finger list");
    }
    map
}

/// Home row with a mix of one, two and three candidate keys.
pub fn home_row() -> LayoutMap {
    layout(&[
        ('a', 0, "pr"),
        ('s', 1, "rm"),
        ('d', 2, "mir"),
        ('f', 3, "i"),
        ('g', 4, "iI"),
        ('h', 5, "Ii"),
        ('j', 6, "IM"),
        ('k', 7, "MIR"),
        ('l', 8, "R"),
        (';', 9, "P"),
    ])
}

pub fn fingers(codes: &str) -> Vec<Finger> {
    Finger::parse_codes(codes).expect("valid finger codes")
}
