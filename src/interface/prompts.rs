use dialoguer::{Confirm, Select};
use strsim::jaro_winkler;

use crate::error::{CalcError, Result};
use crate::models::{Ingredient, Supplement};
use crate::state::WorkspaceManager;

/// Minimum Jaro-Winkler similarity for a fuzzy name suggestion.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Parse an ingredient given as `name=amount`.
pub fn parse_ingredient(input: &str) -> Result<Ingredient> {
    let (name, amount) = input
        .split_once('=')
        .ok_or_else(|| CalcError::InvalidInput(format!("expected name=amount, got '{}'", input)))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(CalcError::InvalidInput(format!(
            "missing ingredient name in '{}'",
            input
        )));
    }

    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|_| CalcError::InvalidInput(format!("invalid amount in '{}'", input)))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(CalcError::InvalidInput(format!(
            "amount must be a non-negative number in '{}'",
            input
        )));
    }

    Ok(Ingredient::new(name, amount))
}

/// Supplements whose names resemble `query`, most similar first.
pub fn fuzzy_candidates<'a>(supplements: &'a [Supplement], query: &str) -> Vec<(&'a Supplement, f64)> {
    let query = query.to_lowercase();
    let mut candidates: Vec<(&Supplement, f64)> = supplements
        .iter()
        .map(|s| (s, jaro_winkler(&s.name.to_lowercase(), &query)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Find a supplement by id, exact name, or (interactively) fuzzy name.
///
/// Returns the supplement id.
pub fn resolve_supplement(manager: &WorkspaceManager, query: &str) -> Result<u32> {
    let query = query.trim();

    if let Ok(id) = query.trim_start_matches('#').parse::<u32>() {
        if manager.get_supplement(id).is_some() {
            return Ok(id);
        }
    }

    if let Some(supplement) = manager.find_by_name(query) {
        return Ok(supplement.id);
    }

    let candidates = fuzzy_candidates(manager.all_supplements(), query);

    match candidates.as_slice() {
        [] => Err(CalcError::SupplementNotFound(query.to_string())),
        [(supplement, _)] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", supplement.name))
                .default(true)
                .interact()?;

            if confirm {
                Ok(supplement.id)
            } else {
                Err(CalcError::SupplementNotFound(query.to_string()))
            }
        }
        _ => {
            let options: Vec<&Supplement> = candidates.iter().take(5).map(|(s, _)| *s).collect();
            let mut labels: Vec<String> = options.iter().map(|s| s.summary()).collect();
            labels.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&labels)
                .default(0)
                .interact()?;

            options
                .get(selection)
                .map(|s| s.id)
                .ok_or_else(|| CalcError::SupplementNotFound(query.to_string()))
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
