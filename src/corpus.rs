use crate::error::AltResult;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Monkeytype word list: `{"name": "english", "words": ["the", "be", ...]}`.
#[derive(Debug, Deserialize)]
struct WordList {
    #[serde(default)]
    name: Option<String>,
    words: Vec<String>,
}

/// Entries are normalized like plain text: lowercased, and split when an
/// entry holds more than one word.
pub fn parse_word_list_json(content: &str) -> AltResult<Vec<String>> {
    let list: WordList = serde_json::from_str(content)?;
    let words: Vec<String> = list.words.iter().flat_map(|w| split_words(w)).collect();
    info!(
        "📚 Word list '{}': {} words",
        list.name.as_deref().unwrap_or("unnamed"),
        words.len()
    );
    Ok(words)
}

/// Lowercased, whitespace-separated words.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(|w| w.to_lowercase()).collect()
}

/// Loads words from a `.json` word list, or from any other file as plain
/// whitespace-separated text.
pub fn load_words<P: AsRef<Path>>(path: P) -> AltResult<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_word_list_json(&content)
    } else {
        Ok(split_words(&content))
    }
}

/// The character stream the resolver consumes: words joined by single
/// spaces, lowercased.
pub fn to_stream<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
