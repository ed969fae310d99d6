use crate::layout::KeyLookup;
use crate::optimizer::{ExhaustiveOptimizer, Optimized};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFailure {
    pub word: String,
    pub reason: String,
}

/// Per-word optimization over a whole word list.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CorpusOptimization {
    pub words: usize,
    /// Characters across the successfully optimized words.
    pub chars: usize,
    pub sfb_total: u64,
    pub reuse_total: u64,
    pub distance_total: u64,
    pub results: Vec<Optimized>,
    pub failures: Vec<WordFailure>,
}

impl CorpusOptimization {
    pub fn sfb_rate(&self) -> f64 {
        if self.chars == 0 {
            0.0
        } else {
            self.sfb_total as f64 / self.chars as f64
        }
    }
}

impl<'a, L: KeyLookup + Sync + ?Sized> ExhaustiveOptimizer<'a, L> {
    /// Optimizes each word on its own. Words that cannot be optimized are
    /// listed in `failures` and left out of the totals.
    pub fn optimize_corpus<S: AsRef<str> + Sync>(&self, words: &[S]) -> CorpusOptimization {
        let outcomes: Vec<_> = words
            .par_iter()
            .map(|w| (w.as_ref(), self.optimize(w.as_ref())))
            .collect();

        let mut report = CorpusOptimization {
            words: words.len(),
            ..Default::default()
        };

        for (word, outcome) in outcomes {
            match outcome {
                Ok(best) => {
                    report.chars += best.fingers.len();
                    report.sfb_total += best.score.sfb;
                    report.reuse_total += best.score.reuse;
                    report.distance_total += best.score.distance;
                    report.results.push(best);
                }
                Err(e) => {
                    warn!("Skipping '{}': {}", word, e);
                    report.failures.push(WordFailure {
                        word: word.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Optimized {} of {} words ({} chars)",
            report.results.len(),
            report.words,
            report.chars
        );
        report
    }
}
