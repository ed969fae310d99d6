use crate::consts::{DEFAULT_MAX_AGE, DEFAULT_MAX_COMBINATIONS, DEFAULT_MAX_WORD_LEN};
use crate::error::{AltError, AltResult};
use crate::scorer::{ReuseMetric, SequenceScorer, SfbRule};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct EngineConfig {
    /// Presses a finger stays "warm" before it can be reused for free
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_AGE)]
    pub max_age: u8,

    #[arg(long, value_enum, default_value_t = SfbRule::DifferentKeys)]
    pub sfb_rule: SfbRule,

    #[arg(long, value_enum, default_value_t = ReuseMetric::SharedFingerPairs)]
    pub reuse_metric: ReuseMetric,

    /// Largest candidate product the exhaustive optimizer will enumerate
    #[arg(long, default_value_t = DEFAULT_MAX_COMBINATIONS)]
    pub max_combinations: u64,

    /// Longest word (in characters) the exhaustive optimizer will score
    #[arg(long, default_value_t = DEFAULT_MAX_WORD_LEN)]
    pub max_word_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_age: DEFAULT_MAX_AGE,
            sfb_rule: SfbRule::default(),
            reuse_metric: ReuseMetric::default(),
            max_combinations: DEFAULT_MAX_COMBINATIONS,
            max_word_len: DEFAULT_MAX_WORD_LEN,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> AltResult<()> {
        if self.max_age == 0 {
            return Err(AltError::Config("--max-age must be at least 1".to_string()));
        }
        if self.max_combinations == 0 {
            return Err(AltError::Config(
                "--max-combinations must be at least 1".to_string(),
            ));
        }
        if self.max_word_len == 0 {
            return Err(AltError::Config(
                "--max-word-len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn scorer(&self) -> SequenceScorer {
        SequenceScorer::new(self.sfb_rule, self.reuse_metric)
    }
}
