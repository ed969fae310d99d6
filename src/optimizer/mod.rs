pub mod runner;

use crate::config::EngineConfig;
use crate::consts::{DEFAULT_MAX_WORD_LEN, PARALLEL_THRESHOLD};
use crate::error::{AltError, AltResult};
use crate::finger::Finger;
use crate::layout::{KeyLookup, LayoutMap};
use crate::scorer::{SequenceScore, SequenceScorer};
use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Optimized {
    pub word: String,
    pub fingers: Vec<Finger>,
    pub score: SequenceScore,
    pub combinations: u64,
}

/// Everything the search needs about one word: its characters, their columns,
/// and the candidate fingers of each position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSpace {
    pub chars: Vec<char>,
    pub columns: Vec<i8>,
    pub candidates: Vec<Vec<Finger>>,
    pub combinations: u64,
}

impl SearchSpace {
    /// All sequences in product order: the last position varies fastest.
    pub fn iter(&self) -> impl Iterator<Item = Vec<Finger>> + '_ {
        self.candidates
            .iter()
            .map(|set| set.iter().copied())
            .multi_cartesian_product()
    }

    /// The `idx`-th sequence of `iter()`, decoded as a mixed-radix number.
    pub fn sequence_at(&self, idx: u64) -> Vec<Finger> {
        let n = self.candidates.len();
        let mut seq = vec![Finger::LeftPinky; n];

        let mut rem = idx;
        for pos in (0..n).rev() {
            let set = &self.candidates[pos];
            let radix = set.len() as u64;
            seq[pos] = set[(rem % radix) as usize];
            rem /= radix;
        }
        seq
    }
}

/// Brute-force search over every finger assignment of a short word.
///
/// Cost grows with the product of the per-character branching factors, and
/// scoring itself is quadratic in the word length. Words longer than
/// `max_word_len`, or whose product exceeds `max_combinations`, are rejected
/// up front.
pub struct ExhaustiveOptimizer<'a, L: KeyLookup + ?Sized = LayoutMap> {
    layout: &'a L,
    scorer: SequenceScorer,
    max_combinations: u64,
    max_word_len: usize,
}

impl<'a, L: KeyLookup + ?Sized> ExhaustiveOptimizer<'a, L> {
    pub fn new(layout: &'a L, scorer: SequenceScorer, max_combinations: u64) -> Self {
        Self {
            layout,
            scorer,
            max_combinations,
            max_word_len: DEFAULT_MAX_WORD_LEN,
        }
    }

    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }

    pub fn from_config(layout: &'a L, config: &EngineConfig) -> Self {
        Self::new(layout, config.scorer(), config.max_combinations)
            .with_max_word_len(config.max_word_len)
    }

    pub fn scorer(&self) -> &SequenceScorer {
        &self.scorer
    }

    pub fn max_combinations(&self) -> u64 {
        self.max_combinations
    }

    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    pub fn search_space(&self, word: &str) -> AltResult<SearchSpace> {
        if word.is_empty() {
            return Err(AltError::EmptyInput);
        }

        let length = word.chars().count();
        if length > self.max_word_len {
            return Err(AltError::WordTooLong {
                word: word.to_string(),
                length,
                limit: self.max_word_len,
            });
        }

        let mut chars = Vec::new();
        let mut columns = Vec::new();
        let mut candidates = Vec::new();
        let mut combinations: Option<u64> = Some(1);

        for c in word.chars() {
            let fingers = self.layout.fingers(c);
            let column = self.layout.column(c);
            let col = match column {
                Some(col) if !fingers.is_empty() => col,
                _ => {
                    return Err(AltError::UnmappedCharacter {
                        character: c,
                        word: word.to_string(),
                    })
                }
            };

            combinations = combinations.and_then(|n| n.checked_mul(fingers.len() as u64));
            chars.push(c);
            columns.push(col);
            candidates.push(fingers.to_vec());
        }

        let combinations = match combinations {
            Some(n) if n <= self.max_combinations => n,
            other => {
                return Err(AltError::LengthExceeded {
                    word: word.to_string(),
                    combinations: other.unwrap_or(u64::MAX),
                    limit: self.max_combinations,
                })
            }
        };

        Ok(SearchSpace {
            chars,
            columns,
            candidates,
            combinations,
        })
    }

    pub fn optimize(&self, word: &str) -> AltResult<Optimized> {
        let space = self.search_space(word)?;
        let scorer = self.scorer;

        // (score, index) ordering keeps the earliest sequence on ties, so the
        // parallel and sequential paths agree.
        let best = if space.combinations >= PARALLEL_THRESHOLD {
            let space = &space;
            (0..space.combinations)
                .into_par_iter()
                .map(|idx| {
                    let seq = space.sequence_at(idx);
                    (scorer.score(&seq, &space.chars, &space.columns), idx)
                })
                .min()
        } else {
            space
                .iter()
                .enumerate()
                .map(|(idx, seq)| {
                    (
                        scorer.score(&seq, &space.chars, &space.columns),
                        idx as u64,
                    )
                })
                .min()
        };

        let (score, idx) = best.ok_or(AltError::EmptyInput)?;
        let fingers = space.sequence_at(idx);

        debug!(
            "'{}': {} sequences, best #{} ({})",
            word, space.combinations, idx, score
        );

        Ok(Optimized {
            word: word.to_string(),
            fingers,
            score,
            combinations: space.combinations,
        })
    }
}
