//! # Random Number Generator
//!
//! Three sampling modes behind one input enum:
//!
//! - **Basic**: uniform integers in `[min, max]`, optionally without
//!   replacement across the requested count
//! - **Lotto**: a fixed count of independent uniform digits 0-9
//! - **Weighted**: repeated trials returning a nominated favorite with a
//!   configured probability, otherwise a uniform value excluding it
//!
//! ## Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use toolpack_core::random::numbers::{sample, NumberInput};
//!
//! let input = NumberInput::Basic { min: 1, max: 49, count: 6, unique: true };
//! let result = sample(&input, &mut StdRng::seed_from_u64(21)).unwrap();
//! assert_eq!(result.values.len(), 6);
//! ```

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{ToolError, ToolResult};

/// Most values drawn in one invocation
pub const MAX_DRAWS: u32 = 100;

/// Most digits in a lotto draw
pub const MAX_LOTTO_DIGITS: u32 = 10;

/// Input parameters, one variant per mode.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mode": "Basic",
///   "min": 1,
///   "max": 49,
///   "count": 6,
///   "unique": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum NumberInput {
    /// Uniform integers in [min, max]
    Basic {
        min: i64,
        max: i64,
        /// Number of draws; clamped to [1, 100]
        count: u32,
        /// Draw without replacement
        unique: bool,
    },
    /// Independent uniform digits 0-9
    Lotto {
        /// Number of digits; clamped to [1, 10]
        digits: u32,
    },
    /// Favorite-biased draws from [min, max]
    Weighted {
        min: i64,
        max: i64,
        /// Value returned with the configured probability
        favorite: i64,
        /// Chance of the favorite per trial; clamped to [0, 1]
        probability: f64,
        /// Number of trials; clamped to [1, 100]
        count: u32,
    },
}

/// Results from a number draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberResult {
    /// Drawn values, in draw order
    pub values: Vec<i64>,
}

/// Draw according to the selected mode.
///
/// # Returns
///
/// * `Ok(NumberResult)` - Drawn values
/// * `Err(ToolError::InvalidRange)` - If min exceeds max
/// * `Err(ToolError::NotEnoughItems)` - If unique draws exceed the span
/// * `Err(ToolError::InvalidInput)` - If the weighted favorite is out of range
pub fn sample<R: Rng + ?Sized>(input: &NumberInput, rng: &mut R) -> ToolResult<NumberResult> {
    match *input {
        NumberInput::Basic {
            min,
            max,
            count,
            unique,
        } => sample_basic(min, max, count, unique, rng),
        NumberInput::Lotto { digits } => Ok(sample_lotto(digits, rng)),
        NumberInput::Weighted {
            min,
            max,
            favorite,
            probability,
            count,
        } => sample_weighted(min, max, favorite, probability, count, rng),
    }
}

fn sample_basic<R: Rng + ?Sized>(
    min: i64,
    max: i64,
    count: u32,
    unique: bool,
    rng: &mut R,
) -> ToolResult<NumberResult> {
    if min > max {
        return Err(ToolError::invalid_range(min, max));
    }
    let count = count.clamp(1, MAX_DRAWS);

    if !unique {
        let values = (0..count).map(|_| rng.gen_range(min..=max)).collect();
        return Ok(NumberResult { values });
    }

    // Span as u128: the full i64 range holds 2^64 values
    let span = (max as i128 - min as i128 + 1) as u128;
    if u128::from(count) > span {
        return Err(ToolError::not_enough_items(
            u64::from(count),
            span.min(u128::from(u64::MAX)) as u64,
        ));
    }

    // Rejection sampling; count <= 100 and count <= span keep retries short
    let mut seen = HashSet::with_capacity(count as usize);
    let mut values = Vec::with_capacity(count as usize);
    while values.len() < count as usize {
        let v = rng.gen_range(min..=max);
        if seen.insert(v) {
            values.push(v);
        }
    }
    Ok(NumberResult { values })
}

fn sample_lotto<R: Rng + ?Sized>(digits: u32, rng: &mut R) -> NumberResult {
    let digits = digits.clamp(1, MAX_LOTTO_DIGITS);
    let values = (0..digits).map(|_| rng.gen_range(0..=9)).collect();
    NumberResult { values }
}

fn sample_weighted<R: Rng + ?Sized>(
    min: i64,
    max: i64,
    favorite: i64,
    probability: f64,
    count: u32,
    rng: &mut R,
) -> ToolResult<NumberResult> {
    if min > max {
        return Err(ToolError::invalid_range(min, max));
    }
    if favorite < min || favorite > max {
        return Err(ToolError::invalid_input(
            "favorite",
            favorite.to_string(),
            format!("Favorite must lie within [{min}, {max}]"),
        ));
    }
    let probability = if probability.is_finite() {
        probability.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let count = count.clamp(1, MAX_DRAWS);

    let values = (0..count)
        .map(|_| {
            // A single-value range leaves nothing besides the favorite
            if min == max || rng.gen_bool(probability) {
                favorite
            } else {
                // Uniform over [min, max] minus the favorite: draw from the
                // span shortened by one, then skip over the favorite
                let v = rng.gen_range(min..max);
                if v >= favorite {
                    v + 1
                } else {
                    v
                }
            }
        })
        .collect();
    Ok(NumberResult { values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_basic_within_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = sample(
            &NumberInput::Basic {
                min: -5,
                max: 5,
                count: 50,
                unique: false,
            },
            &mut rng,
        )
        .unwrap();
        assert_eq!(result.values.len(), 50);
        assert!(result.values.iter().all(|&v| (-5..=5).contains(&v)));
    }

    #[test]
    fn test_basic_min_above_max_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = sample(
            &NumberInput::Basic {
                min: 10,
                max: 3,
                count: 1,
                unique: false,
            },
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_RANGE");
    }

    #[test]
    fn test_unique_draws_have_no_duplicates() {
        let mut rng = StdRng::seed_from_u64(2);
        let result = sample(
            &NumberInput::Basic {
                min: 1,
                max: 49,
                count: 49,
                unique: true,
            },
            &mut rng,
        )
        .unwrap();
        let mut sorted = result.values.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 49);
    }

    #[test]
    fn test_unique_exceeding_span_rejected() {
        let mut rng = StdRng::seed_from_u64(2);
        let err = sample(
            &NumberInput::Basic {
                min: 1,
                max: 5,
                count: 6,
                unique: true,
            },
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ToolError::NotEnoughItems {
                requested: 6,
                available: 5
            }
        );
    }

    #[test]
    fn test_lotto_digits() {
        let mut rng = StdRng::seed_from_u64(3);
        let result = sample(&NumberInput::Lotto { digits: 6 }, &mut rng).unwrap();
        assert_eq!(result.values.len(), 6);
        assert!(result.values.iter().all(|&d| (0..=9).contains(&d)));
    }

    #[test]
    fn test_lotto_digit_count_clamped() {
        let mut rng = StdRng::seed_from_u64(3);
        let result = sample(&NumberInput::Lotto { digits: 99 }, &mut rng).unwrap();
        assert_eq!(result.values.len(), MAX_LOTTO_DIGITS as usize);
    }

    #[test]
    fn test_weighted_certain_favorite() {
        let mut rng = StdRng::seed_from_u64(4);
        let result = sample(
            &NumberInput::Weighted {
                min: 1,
                max: 10,
                favorite: 7,
                probability: 1.0,
                count: 20,
            },
            &mut rng,
        )
        .unwrap();
        assert!(result.values.iter().all(|&v| v == 7));
    }

    #[test]
    fn test_weighted_never_favorite_at_zero_probability() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = sample(
            &NumberInput::Weighted {
                min: 1,
                max: 10,
                favorite: 7,
                probability: 0.0,
                count: 50,
            },
            &mut rng,
        )
        .unwrap();
        assert!(result.values.iter().all(|&v| v != 7));
        assert!(result.values.iter().all(|&v| (1..=10).contains(&v)));
    }

    #[test]
    fn test_weighted_favorite_out_of_range_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        let err = sample(
            &NumberInput::Weighted {
                min: 1,
                max: 10,
                favorite: 11,
                probability: 0.5,
                count: 5,
            },
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_weighted_single_value_range() {
        let mut rng = StdRng::seed_from_u64(6);
        let result = sample(
            &NumberInput::Weighted {
                min: 3,
                max: 3,
                favorite: 3,
                probability: 0.0,
                count: 5,
            },
            &mut rng,
        )
        .unwrap();
        assert_eq!(result.values, vec![3, 3, 3, 3, 3]);
    }

    #[test]
    fn test_seeded_reproducibility() {
        let input = NumberInput::Basic {
            min: 1,
            max: 100,
            count: 10,
            unique: true,
        };
        let a = sample(&input, &mut StdRng::seed_from_u64(77)).unwrap();
        let b = sample(&input, &mut StdRng::seed_from_u64(77)).unwrap();
        assert_eq!(a.values, b.values);
    }

    #[test]
    fn test_mode_serialization() {
        let input = NumberInput::Lotto { digits: 6 };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"mode\":\"Lotto\""));
        let roundtrip: NumberInput = serde_json::from_str(&json).unwrap();
        assert!(matches!(roundtrip, NumberInput::Lotto { digits: 6 }));
    }
}
