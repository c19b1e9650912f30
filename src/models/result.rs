use std::collections::BTreeMap;

use crate::models::{Constraints, Supplement};
use crate::solver::calculations::calculate_amounts;

/// One ranked candidate combination.
///
/// Borrows the supplements and constraints of the solve call that produced it.
#[derive(Debug, Clone)]
pub struct SolverResult<'a> {
    /// Count per enabled supplement, in enabled order.
    pub supplements: Vec<(u32, &'a Supplement)>,

    /// Summed relative deviation from targets (0 = perfect).
    pub distance: f64,

    /// Total pill count.
    pub number_of_supplements: u32,

    pub constraints: &'a Constraints,
}

impl<'a> SolverResult<'a> {
    /// True for the "take nothing" combination.
    pub fn is_empty(&self) -> bool {
        self.number_of_supplements == 0
    }

    /// Aggregated ingredient totals for this combination.
    pub fn amounts(&self) -> BTreeMap<String, f64> {
        calculate_amounts(&self.supplements)
    }

    /// Only the supplements taken at least once.
    pub fn chosen(&self) -> impl Iterator<Item = (u32, &'a Supplement)> + '_ {
        self.supplements.iter().copied().filter(|(count, _)| *count > 0)
    }

    /// Human-readable `2× Name` list.
    pub fn describe(&self) -> String {
        let parts: Vec<String> = self
            .chosen()
            .map(|(count, s)| format!("{}× {}", count, s.name))
            .collect();
        if parts.is_empty() {
            "(nothing)".to_string()
        } else {
            parts.join(", ")
        }
    }
}
