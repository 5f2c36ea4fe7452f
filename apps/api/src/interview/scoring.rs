//! Score extraction from interview critiques.
//!
//! The critique template asks the model to finish with a line `Score: N`
//! (N in 0..=10). Only the first line starting with `Score:` is considered,
//! and it must parse exactly; anything else yields no score.

pub const MAX_SCORE: u8 = 10;

const SCORE_PREFIX: &str = "Score:";

pub fn extract_score(critique: &str) -> Option<u8> {
    let line = critique
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with(SCORE_PREFIX))?;

    let value = line[SCORE_PREFIX.len()..].trim();
    let value = match value.strip_suffix("/10") {
        Some(v) => v.trim_end(),
        None => value,
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<u8>().ok().filter(|score| *score <= MAX_SCORE)
}
