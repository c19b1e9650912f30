//! Brute-force supplement combination search.
//!
//! Enumerate every count vector, drop the ones missing a required
//! supplement or going over a max, score the rest and rank them.

pub mod calculations;
pub mod constants;
pub mod enumeration;
pub mod ranking;

use tracing::{debug, info};

use crate::models::{Constraints, RequiredSupplement, SolverResult, Supplement};

pub use calculations::{
    amounts_exceed_constraints, calculate_amounts, calculate_distance, meets_required_supplements,
    number_of_supplements,
};
pub use constants::*;
pub use enumeration::{
    check_combination_limit, generate_all_combinations, max_count, max_counts,
    total_combinations, Combinations,
};
pub use ranking::{has_max_only_constraint, sort_results};

/// Tunable safety valves for the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Ceiling on units of a single supplement.
    pub max_per_supplement: u32,
    /// Largest search space accepted by the combination guard.
    pub combination_limit: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_per_supplement: MAX_SUPPLEMENT_COUNT,
            combination_limit: COMBINATION_LIMIT,
        }
    }
}

/// Supplements that take part in the search.
pub fn enabled_supplements(options: &[Supplement]) -> Vec<&Supplement> {
    options.iter().filter(|s| !s.disabled).collect()
}

/// Caps for the enabled subset of `options`.
pub fn enabled_max_counts(
    options: &[Supplement],
    constraints: &Constraints,
    config: &SolverConfig,
) -> Vec<u32> {
    max_counts(
        &enabled_supplements(options),
        constraints,
        config.max_per_supplement,
    )
}

/// Solve with the default configuration.
pub fn solve<'a>(
    constraints: &'a Constraints,
    options: &'a [Supplement],
    required: &[RequiredSupplement],
) -> Vec<SolverResult<'a>> {
    solve_with_config(constraints, options, required, &SolverConfig::default())
}

/// Return every feasible combination, best first.
///
/// Never fails: no options or no feasible combination yields an empty list.
/// The combination limit is not enforced here; see `check_combination_limit`.
pub fn solve_with_config<'a>(
    constraints: &'a Constraints,
    options: &'a [Supplement],
    required: &[RequiredSupplement],
    config: &SolverConfig,
) -> Vec<SolverResult<'a>> {
    info!(
        constraints = constraints.len(),
        options = options.len(),
        required = required.len(),
        "solve: start"
    );

    let enabled = enabled_supplements(options);
    let caps = max_counts(&enabled, constraints, config.max_per_supplement);
    debug!(
        enabled = enabled.len(),
        ?caps,
        estimated = total_combinations(&caps),
        "solve: enumerating"
    );

    let results: Vec<SolverResult<'a>> = Combinations::new(caps)
        .filter(|combination| meets_required_supplements(combination, &enabled, required))
        .filter_map(|combination| {
            let supplements: Vec<(u32, &'a Supplement)> =
                combination.iter().copied().zip(enabled.iter().copied()).collect();
            let amounts = calculate_amounts(&supplements);
            if amounts_exceed_constraints(&amounts, constraints) {
                return None;
            }
            Some(SolverResult {
                supplements,
                distance: calculate_distance(&amounts, constraints),
                number_of_supplements: number_of_supplements(&combination),
                constraints,
            })
        })
        .collect();

    let ranked = sort_results(results);
    info!(
        results = ranked.len(),
        best_distance = ranked.first().map(|r| r.distance),
        "solve: done"
    );

    ranked
}
