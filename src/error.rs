use thiserror::Error;

#[derive(Error, Debug)]
pub enum AltError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Unmapped character {character:?} in '{word}'")]
    UnmappedCharacter { character: char, word: String },

    #[error("Empty input: nothing to optimize")]
    EmptyInput,

    #[error("'{word}' expands to {combinations} finger sequences (limit {limit})")]
    LengthExceeded {
        word: String,
        combinations: u64,
        limit: u64,
    },

    #[error("'{word}' has {length} characters (limit {limit})")]
    WordTooLong {
        word: String,
        length: usize,
        limit: usize,
    },
}

pub type AltResult<T> = Result<T, AltError>;
