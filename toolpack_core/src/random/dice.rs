//! # Dice Roller
//!
//! Rolls up to ten dice of a selected kind, each die independently uniform
//! over its faces. The random source is injected so results are reproducible
//! under a seeded generator.
//!
//! ## Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use toolpack_core::random::dice::{sample, DiceInput, DieKind};
//!
//! let input = DiceInput { die: DieKind::D6, count: 3 };
//! let result = sample(&input, &mut StdRng::seed_from_u64(7));
//! assert_eq!(result.rolls.len(), 3);
//! assert!(result.rolls.iter().all(|&r| (1..=6).contains(&r)));
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Most dice rolled in one throw
pub const MAX_DICE: u32 = 10;

/// Standard polyhedral die kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieKind {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
}

impl DieKind {
    /// All die kinds for UI selection
    pub const ALL: [DieKind; 6] = [
        DieKind::D4,
        DieKind::D6,
        DieKind::D8,
        DieKind::D10,
        DieKind::D12,
        DieKind::D20,
    ];

    /// Number of faces on this die
    pub fn faces(&self) -> u32 {
        match self {
            DieKind::D4 => 4,
            DieKind::D6 => 6,
            DieKind::D8 => 8,
            DieKind::D10 => 10,
            DieKind::D12 => 12,
            DieKind::D20 => 20,
        }
    }
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.faces())
    }
}

/// Input parameters for a dice throw.
///
/// ## JSON Example
///
/// ```json
/// {
///   "die": "D6",
///   "count": 3
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiceInput {
    /// Kind of die to roll
    pub die: DieKind,

    /// Number of dice; clamped to [1, 10]
    pub count: u32,
}

impl DiceInput {
    /// Dice count clamped to [1, MAX_DICE]
    pub fn clamped_count(&self) -> u32 {
        self.count.clamp(1, MAX_DICE)
    }
}

/// Results from a dice throw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiceResult {
    /// Individual die results, in roll order
    pub rolls: Vec<u32>,

    /// Sum of all rolls
    pub total: u32,
}

/// Roll the dice. Never fails; the count is clamped before sampling.
pub fn sample<R: Rng + ?Sized>(input: &DiceInput, rng: &mut R) -> DiceResult {
    let faces = input.die.faces();
    let rolls: Vec<u32> = (0..input.clamped_count())
        .map(|_| rng.gen_range(1..=faces))
        .collect();
    let total = rolls.iter().sum();
    DiceResult { rolls, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rolls_within_faces() {
        let mut rng = StdRng::seed_from_u64(42);
        for die in DieKind::ALL {
            let result = sample(&DiceInput { die, count: 10 }, &mut rng);
            assert!(result.rolls.iter().all(|&r| r >= 1 && r <= die.faces()));
        }
    }

    #[test]
    fn test_zero_count_rolls_one_die() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = sample(
            &DiceInput {
                die: DieKind::D20,
                count: 0,
            },
            &mut rng,
        );
        assert_eq!(result.rolls.len(), 1);
    }

    #[test]
    fn test_count_capped() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = sample(
            &DiceInput {
                die: DieKind::D6,
                count: 500,
            },
            &mut rng,
        );
        assert_eq!(result.rolls.len(), MAX_DICE as usize);
    }

    #[test]
    fn test_total_matches_rolls() {
        let mut rng = StdRng::seed_from_u64(9);
        let result = sample(
            &DiceInput {
                die: DieKind::D12,
                count: 5,
            },
            &mut rng,
        );
        assert_eq!(result.total, result.rolls.iter().sum::<u32>());
    }

    #[test]
    fn test_seeded_reproducibility() {
        let input = DiceInput {
            die: DieKind::D6,
            count: 4,
        };
        let a = sample(&input, &mut StdRng::seed_from_u64(123));
        let b = sample(&input, &mut StdRng::seed_from_u64(123));
        assert_eq!(a.rolls, b.rolls);
    }

    #[test]
    fn test_every_face_reachable() {
        // 600 d6 rolls under a fixed seed should land on each face at least once
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 6];
        for _ in 0..60 {
            let result = sample(
                &DiceInput {
                    die: DieKind::D6,
                    count: 10,
                },
                &mut rng,
            );
            for roll in result.rolls {
                seen[(roll - 1) as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
