use assert_float_eq::assert_float_absolute_eq;

use vitamin_calc_rs::models::{Constraint, Constraints, RequiredSupplement, Supplement};
use vitamin_calc_rs::solver::{
    calculate_amounts, check_combination_limit, enabled_max_counts, solve, SolverConfig,
};
use vitamin_calc_rs::CalcError;

fn make_supplement(id: u32, name: &str, ingredients: &[(&str, f64)]) -> Supplement {
    ingredients
        .iter()
        .fold(Supplement::new(id, name, "Acme"), |s, (n, a)| {
            s.with_ingredient(*n, *a)
        })
}

fn make_constraints(entries: &[(&str, f64, f64)]) -> Constraints {
    entries
        .iter()
        .map(|(name, target, max)| (name.to_string(), Constraint::new(*target, *max)))
        .collect()
}

fn sample_options() -> Vec<Supplement> {
    vec![
        make_supplement(1, "Multi", &[("vitaminC", 100.0), ("vitaminD", 10.0), ("zinc", 5.0)]),
        make_supplement(2, "D3", &[("vitaminD", 25.0)]),
        make_supplement(3, "C 500", &[("vitaminC", 500.0)]),
        make_supplement(4, "Zinc", &[("zinc", 15.0)]),
    ]
}

fn sample_constraints() -> Constraints {
    make_constraints(&[
        ("vitaminC", 500.0, 1000.0),
        ("vitaminD", 50.0, 100.0),
        ("zinc", 15.0, 40.0),
    ])
}

fn counts_of(result: &vitamin_calc_rs::SolverResult) -> Vec<u32> {
    result.supplements.iter().map(|(c, _)| *c).collect()
}

#[test]
fn test_simple_target_match_ranks_first() {
    let options = vec![make_supplement(1, "D3", &[("vitaminD", 25.0)])];
    let constraints = make_constraints(&[("vitaminD", 50.0, 150.0)]);

    let results = solve(&constraints, &options, &[]);

    // Counts 0..=6 are all within max.
    assert_eq!(results.len(), 7);
    assert_eq!(results[0].number_of_supplements, 2);
    assert_eq!(results[0].distance, 0.0);
}

#[test]
fn test_max_only_ranking_demotes_empty() {
    let options = vec![make_supplement(1, "C", &[("vitaminC", 100.0)])];
    let mut constraints = Constraints::new();
    constraints.insert("vitaminC".to_string(), Constraint::max_only(200.0));

    let results = solve(&constraints, &options, &[]);
    let counts: Vec<u32> = results.iter().map(|r| r.number_of_supplements).collect();

    assert_eq!(counts, vec![1, 2, 0]);
}

#[test]
fn test_mixed_max_only_and_target() {
    let options = vec![make_supplement(
        1,
        "Combo",
        &[("vitaminC", 100.0), ("vitaminD", 25.0)],
    )];
    let mut constraints = Constraints::new();
    constraints.insert("vitaminC".to_string(), Constraint::max_only(200.0));
    constraints.insert("vitaminD".to_string(), Constraint::new(50.0, 150.0));

    let results = solve(&constraints, &options, &[]);
    let order: Vec<u32> = results.iter().map(|r| r.number_of_supplements).collect();

    // vitaminC caps the count at 2; fewer pills win in max-only mode.
    assert_eq!(order, vec![1, 2, 0]);
    assert_float_absolute_eq!(results[0].distance, 0.5, 1e-9);
    assert_float_absolute_eq!(results[1].distance, 0.0, 1e-9);
}

#[test]
fn test_disabled_supplement_excluded() {
    let mut options = sample_options();
    options[2].disabled = true;

    let constraints = sample_constraints();
    let results = solve(&constraints, &options, &[]);
    assert!(!results.is_empty());
    for result in &results {
        assert_eq!(result.supplements.len(), 3);
        assert!(result.supplements.iter().all(|(_, s)| s.id != 3));
    }

    let caps = enabled_max_counts(&options, &sample_constraints(), &SolverConfig::default());
    assert_eq!(caps.len(), 3);
}

#[test]
fn test_results_never_exceed_max() {
    let constraints = sample_constraints();
    let options = sample_options();
    let results = solve(&constraints, &options, &[]);

    assert!(!results.is_empty());
    for result in &results {
        let amounts = result.amounts();
        for (name, constraint) in &constraints {
            let amount = amounts.get(name).copied().unwrap_or(0.0);
            assert!(amount <= constraint.max.unwrap(), "{} over max: {}", name, amount);
        }
    }
}

#[test]
fn test_default_ranking_order() {
    let constraints = sample_constraints();
    let options = sample_options();
    let results = solve(&constraints, &options, &[]);

    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.distance < b.distance
                || (a.distance == b.distance && a.number_of_supplements <= b.number_of_supplements),
            "out of order: {:?} before {:?}",
            (a.distance, a.number_of_supplements),
            (b.distance, b.number_of_supplements)
        );
    }
}

#[test]
fn test_best_result_for_sample() {
    let constraints = sample_constraints();
    let options = sample_options();
    let results = solve(&constraints, &options, &[]);
    // 1x C 500 + 2x D3 + 1x Zinc hits every target exactly.
    assert_eq!(counts_of(&results[0]), vec![0, 2, 1, 1]);
    assert_eq!(results[0].distance, 0.0);
}

#[test]
fn test_required_supplements_satisfied() {
    let required = vec![RequiredSupplement::new(1, 1)];
    let constraints = sample_constraints();
    let options = sample_options();
    let results = solve(&constraints, &options, &required);

    assert!(!results.is_empty());
    for result in &results {
        assert!(result.supplements[0].0 >= 1);
    }
}

#[test]
fn test_required_disabled_supplement_yields_nothing() {
    let mut options = sample_options();
    options[3].disabled = true;
    let required = vec![RequiredSupplement::new(4, 1)];

    assert!(solve(&sample_constraints(), &options, &required).is_empty());
}

#[test]
fn test_required_amount_above_cap_yields_nothing() {
    let required = vec![RequiredSupplement::new(2, 5)];
    assert!(solve(&sample_constraints(), &sample_options(), &required).is_empty());
}

#[test]
fn test_solve_is_deterministic() {
    let constraints = sample_constraints();
    let options = sample_options();

    let first: Vec<(Vec<u32>, f64)> = solve(&constraints, &options, &[])
        .iter()
        .map(|r| (counts_of(r), r.distance))
        .collect();
    let second: Vec<(Vec<u32>, f64)> = solve(&constraints, &options, &[])
        .iter()
        .map(|r| (counts_of(r), r.distance))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_amounts_aggregation() {
    let a = make_supplement(1, "A", &[("a", 10.0)]);
    let b = make_supplement(2, "B", &[("a", 5.0)]);
    let amounts = calculate_amounts(&[(2, &a), (3, &b)]);
    assert_eq!(amounts.len(), 1);
    assert_float_absolute_eq!(amounts["a"], 35.0, 1e-9);
}

#[test]
fn test_combination_guard_on_loose_constraints() {
    let options: Vec<Supplement> = (1..=4)
        .map(|id| make_supplement(id, &format!("S{}", id), &[("unconstrained", 1.0)]))
        .collect();
    let caps = enabled_max_counts(&options, &Constraints::new(), &SolverConfig::default());
    assert_eq!(caps, vec![100, 100, 100, 100]);

    let err = check_combination_limit(&caps, SolverConfig::default().combination_limit).unwrap_err();
    assert!(matches!(err, CalcError::TooManyCombinations { .. }));
}

#[test]
fn test_empty_options_yield_empty_results() {
    assert!(solve(&sample_constraints(), &[], &[]).is_empty());

    let mut off = make_supplement(1, "Off", &[("zinc", 15.0)]);
    off.disabled = true;
    assert!(solve(&sample_constraints(), &[off], &[]).is_empty());
}
