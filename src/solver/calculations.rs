use std::collections::BTreeMap;

use crate::models::{Constraints, RequiredSupplement, Supplement};

/// Sum ingredient contributions across a combination.
///
/// Each entry is `(count, supplement)`; zero counts contribute nothing.
pub fn calculate_amounts(supplements: &[(u32, &Supplement)]) -> BTreeMap<String, f64> {
    let mut amounts = BTreeMap::new();

    for (count, supplement) in supplements {
        if *count == 0 {
            continue;
        }
        for ingredient in &supplement.ingredients {
            *amounts.entry(ingredient.name.clone()).or_insert(0.0) +=
                ingredient.amount * f64::from(*count);
        }
    }

    amounts
}

/// Check whether any aggregated amount goes over its declared maximum.
///
/// Ingredients without a constraint (or without a max) never reject.
pub fn amounts_exceed_constraints(
    amounts: &BTreeMap<String, f64>,
    constraints: &Constraints,
) -> bool {
    amounts.iter().any(|(name, amount)| {
        constraints
            .get(name)
            .and_then(|c| c.max)
            .is_some_and(|max| *amount > max)
    })
}

/// Check that a combination holds at least the required count of each
/// required supplement.
///
/// A required supplement that is not among the enabled ones fails every
/// combination.
pub fn meets_required_supplements(
    combination: &[u32],
    enabled: &[&Supplement],
    required: &[RequiredSupplement],
) -> bool {
    required.iter().all(|req| {
        enabled
            .iter()
            .position(|s| s.id == req.supplement_id)
            .and_then(|idx| combination.get(idx))
            .is_some_and(|count| *count >= req.amount)
    })
}

/// Relative deviation from targets, summed over scored ingredients.
///
/// Formula: sum of |amount - target| / target for every constraint with a
/// positive target. Missing amounts count as 0. Lower is better.
pub fn calculate_distance(amounts: &BTreeMap<String, f64>, constraints: &Constraints) -> f64 {
    constraints
        .iter()
        .filter(|(_, c)| c.has_target())
        .map(|(name, c)| {
            let amount = amounts.get(name).copied().unwrap_or(0.0);
            (amount - c.target).abs() / c.target
        })
        .sum()
}

/// Total pill count of a combination.
pub fn number_of_supplements(combination: &[u32]) -> u32 {
    combination.iter().sum()
}
