/// Number of fingers tracked by the engine (thumbs included).
pub const FINGER_COUNT: usize = 10;

/// Default number of presses a finger stays "warm" after use.
pub const DEFAULT_MAX_AGE: u8 = 2;

/// Default ceiling on the size of the candidate product the exhaustive
/// optimizer is allowed to enumerate (2^20 sequences).
pub const DEFAULT_MAX_COMBINATIONS: u64 = 1 << 20;

/// Default ceiling on the number of characters in a word the exhaustive
/// optimizer accepts, independent of the candidate product.
pub const DEFAULT_MAX_WORD_LEN: usize = 64;

/// Products at or above this size are scored on the rayon pool.
pub const PARALLEL_THRESHOLD: u64 = 4096;
