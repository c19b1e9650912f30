use crate::error::{CalcError, Result};
use crate::models::{Constraints, Supplement};

/// Upper bound on how many units of one supplement can ever fit.
///
/// For each ingredient with a finite max, `floor(max / amount)`; the
/// minimum over those ingredients, clamped to `ceiling`. Supplements that
/// touch no capped ingredient get `ceiling`.
pub fn max_count(supplement: &Supplement, constraints: &Constraints, ceiling: u32) -> u32 {
    let mut best = f64::INFINITY;

    for ingredient in &supplement.ingredients {
        if ingredient.amount <= 0.0 {
            continue;
        }
        let Some(max) = constraints.get(&ingredient.name).and_then(|c| c.finite_max()) else {
            continue;
        };
        best = best.min((max / ingredient.amount).floor());
    }

    if best >= f64::from(ceiling) {
        ceiling
    } else if best <= 0.0 {
        0
    } else {
        best as u32
    }
}

/// Per-supplement caps, in the order of `supplements`.
pub fn max_counts(supplements: &[&Supplement], constraints: &Constraints, ceiling: u32) -> Vec<u32> {
    supplements
        .iter()
        .map(|s| max_count(s, constraints, ceiling))
        .collect()
}

/// Size of the search space: product of `(cap + 1)`.
///
/// Saturates at `u64::MAX`; an empty cap list spans no combinations.
pub fn total_combinations(max_counts: &[u32]) -> u64 {
    if max_counts.is_empty() {
        return 0;
    }
    max_counts
        .iter()
        .fold(1u64, |acc, c| acc.saturating_mul(u64::from(*c) + 1))
}

/// Fail fast when the search space is larger than `limit`.
pub fn check_combination_limit(max_counts: &[u32], limit: u64) -> Result<u64> {
    let count = total_combinations(max_counts);
    if count > limit {
        return Err(CalcError::TooManyCombinations { count, limit });
    }
    Ok(count)
}

/// Eagerly collect every combination, guarded by `limit`.
pub fn generate_all_combinations(max_counts: &[u32], limit: u64) -> Result<Vec<Vec<u32>>> {
    check_combination_limit(max_counts, limit)?;
    Ok(Combinations::new(max_counts.to_vec()).collect())
}

/// Odometer over every count vector bounded by `max_counts`.
///
/// Index 0 is the outermost digit, so the last index turns fastest.
/// Starts at all zeros and ends at `max_counts`.
#[derive(Debug, Clone)]
pub struct Combinations {
    max_counts: Vec<u32>,
    current: Option<Vec<u32>>,
}

impl Combinations {
    pub fn new(max_counts: Vec<u32>) -> Self {
        let current = if max_counts.is_empty() {
            None
        } else {
            Some(vec![0; max_counts.len()])
        };
        Self {
            max_counts,
            current,
        }
    }

    /// Advance `digits` in place; false once every digit has wrapped.
    fn advance(digits: &mut [u32], max_counts: &[u32]) -> bool {
        for idx in (0..digits.len()).rev() {
            if digits[idx] < max_counts[idx] {
                digits[idx] += 1;
                return true;
            }
            digits[idx] = 0;
        }
        false
    }
}

impl Iterator for Combinations {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let mut successor = current.clone();
        if Self::advance(&mut successor, &self.max_counts) {
            self.current = Some(successor);
        }
        Some(current)
    }
}
