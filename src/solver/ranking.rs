use std::cmp::Ordering;

use crate::models::{Constraints, SolverResult};

/// True when at least one constraint has no target (max-only).
pub fn has_max_only_constraint(constraints: &Constraints) -> bool {
    constraints.values().any(|c| c.is_max_only())
}

fn by_distance(a: &SolverResult, b: &SolverResult) -> Ordering {
    a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal)
}

fn by_count(a: &SolverResult, b: &SolverResult) -> Ordering {
    a.number_of_supplements.cmp(&b.number_of_supplements)
}

/// Order results best-first.
///
/// Default: distance, then fewer pills. With any max-only constraint the
/// empty combination trivially scores 0, so it goes last and the rest sort
/// by fewer pills, then distance. The sort is stable.
pub fn sort_results(mut results: Vec<SolverResult<'_>>) -> Vec<SolverResult<'_>> {
    let Some(first) = results.first() else {
        return results;
    };

    if has_max_only_constraint(first.constraints) {
        results.sort_by(|a, b| match (a.is_empty(), b.is_empty()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => by_count(a, b).then_with(|| by_distance(a, b)),
        });
    } else {
        results.sort_by(|a, b| by_distance(a, b).then_with(|| by_count(a, b)));
    }

    results
}
