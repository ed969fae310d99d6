use crate::error::{AltError, AltResult};
use crate::finger::Finger;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Read-only view of a layout as the engine needs it.
///
/// `fingers` returns the ordered candidate set for a character (default
/// finger first), or an empty slice when the character is not on the layout.
pub trait KeyLookup {
    fn fingers(&self, c: char) -> &[Finger];

    fn column(&self, c: char) -> Option<i8>;

    fn default_finger(&self, c: char) -> Option<Finger> {
        self.fingers(c).first().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub row: i8,
    pub col: i8,
    pub fingers: Vec<Finger>,
}

#[derive(Debug, Clone, Default)]
pub struct LayoutMap {
    pub name: String,
    keys: HashMap<char, KeyBinding>,
}

// On-disk shape. Keys and finger names are validated while converting.
#[derive(Debug, Deserialize)]
struct RawLayout {
    name: String,
    #[serde(deserialize_with = "map_entries")]
    keys: Vec<(String, RawKey)>,
}

#[derive(Debug, Deserialize)]
struct RawKey {
    row: i8,
    col: i8,
    fingers: Vec<String>,
}

// Keeps every entry of a JSON object, duplicates included, so the loader can
// reject them instead of letting the last one win.
fn map_entries<'de, D>(deserializer: D) -> Result<Vec<(String, RawKey)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct Entries;

    impl<'de> Visitor<'de> for Entries {
        type Value = Vec<(String, RawKey)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map from characters to key bindings")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(Entries)
}

impl LayoutMap {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            keys: HashMap::new(),
        }
    }

    /// Binds `c`. A binding without fingers would make the character both
    /// mapped and untypeable, so it is rejected.
    pub fn insert(&mut self, c: char, binding: KeyBinding) -> AltResult<()> {
        if binding.fingers.is_empty() {
            return Err(AltError::Config(format!(
                "Key {:?} in layout '{}' has no fingers",
                c, self.name
            )));
        }
        self.keys.insert(c, binding);
        Ok(())
    }

    pub fn binding(&self, c: char) -> Option<&KeyBinding> {
        self.keys.get(&c)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Bound characters ordered by (row, col, char).
    pub fn chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.keys.keys().copied().collect();
        chars.sort_by_key(|c| {
            let b = &self.keys[c];
            (b.row, b.col, *c)
        });
        chars
    }

    pub fn from_json_str(content: &str) -> AltResult<Self> {
        let raw: RawLayout = serde_json::from_str(content)?;
        let mut layout = LayoutMap::new(&raw.name);

        for (key, entry) in raw.keys {
            let mut it = key.chars();
            let c = match (it.next(), it.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(AltError::Config(format!(
                        "Layout key '{}' must be exactly one character",
                        key
                    )))
                }
            };
            if layout.binding(c).is_some() {
                return Err(AltError::Config(format!(
                    "Layout key {:?} is defined more than once",
                    c
                )));
            }

            let fingers = entry
                .fingers
                .iter()
                .map(|name| {
                    Finger::from_str(name.trim()).map_err(|_| {
                        AltError::Config(format!("Unknown finger '{}' on key {:?}", name, c))
                    })
                })
                .collect::<AltResult<Vec<_>>>()?;

            layout.insert(
                c,
                KeyBinding {
                    row: entry.row,
                    col: entry.col,
                    fingers,
                },
            )?;
        }

        debug!("Layout '{}': {} keys", layout.name, layout.len());
        Ok(layout)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> AltResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

impl KeyLookup for LayoutMap {
    fn fingers(&self, c: char) -> &[Finger] {
        self.keys
            .get(&c)
            .map(|b| b.fingers.as_slice())
            .unwrap_or(&[])
    }

    fn column(&self, c: char) -> Option<i8> {
        self.keys.get(&c).map(|b| b.col)
    }
}
