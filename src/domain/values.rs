//! Value lists for the command line and the demonstration run.

use rand::Rng;
use tracing::{debug, instrument};

use crate::domain::error::DomainError;

/// Parse integers separated by commas and/or whitespace.
///
/// `"5, 3 8,,1"` yields `[5, 3, 8, 1]`; empty input yields an empty list.
#[instrument(level = "debug")]
pub fn parse_values(input: &str) -> Result<Vec<i64>, DomainError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|e| DomainError::InvalidValue {
                    token: token.to_string(),
                    reason: e.to_string(),
                })
        })
        .collect()
}

/// `size` values drawn uniformly from `[0, max)`.
pub fn random_values<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    max: i64,
) -> Result<Vec<i64>, DomainError> {
    if max <= 0 {
        return Err(DomainError::InvalidRange(max));
    }
    let values: Vec<i64> = (0..size).map(|_| rng.gen_range(0..max)).collect();
    debug!(size, max, ?values, "generated random values");
    Ok(values)
}
