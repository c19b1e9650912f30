use crate::models::SolverResult;
use crate::state::WorkspaceManager;

/// Display the top `top_n` results.
pub fn display_results(results: &[SolverResult], top_n: usize) {
    if results.is_empty() {
        println!("No combination satisfies the constraints and requirements.");
        return;
    }

    println!();
    if results.len() > top_n {
        println!(
            "=== Found {} results, showing top {} ===",
            results.len(),
            top_n
        );
    } else {
        println!(
            "=== Found {} result{} ===",
            results.len(),
            if results.len() == 1 { "" } else { "s" }
        );
    }
    println!();

    for (i, result) in results.iter().take(top_n).enumerate() {
        println!(
            "{:>3}. distance {:.3} | {} pill{} | {}",
            i + 1,
            result.distance,
            result.number_of_supplements,
            if result.number_of_supplements == 1 { "" } else { "s" },
            result.describe()
        );

        let amounts = result.amounts();
        for (name, constraint) in result.constraints {
            let amount = amounts.get(name).copied().unwrap_or(0.0);
            let target = if constraint.has_target() {
                format!("target {}", constraint.target)
            } else {
                "no target".to_string()
            };
            let max = constraint
                .max
                .map(|m| format!("max {}", m))
                .unwrap_or_else(|| "no max".to_string());
            println!("       {:<16} {:>9.2} mg  ({}, {})", name, amount, target, max);
        }
    }

    println!();
}

/// Display supplements, constraints and requirements.
pub fn display_workspace(manager: &WorkspaceManager) {
    println!();
    println!("=== Supplements ({}) ===", manager.len());
    if manager.is_empty() {
        println!("  (none)");
    }
    for supplement in manager.all_supplements() {
        let tag = if supplement.disabled { " [disabled]" } else { "" };
        println!("  {}{}", supplement.summary(), tag);
    }

    println!();
    println!("=== Constraints ({}) ===", manager.constraints().len());
    if manager.constraints().is_empty() {
        println!("  (none)");
    }
    for (name, constraint) in manager.constraints() {
        let target = if constraint.is_max_only() {
            "-".to_string()
        } else {
            constraint.target.to_string()
        };
        let max = constraint
            .max
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("  {:<16} target {:>8}  max {:>8}", name, target, max);
    }

    println!();
    println!("=== Requirements ({}) ===", manager.requirements().len());
    if manager.requirements().is_empty() {
        println!("  (none)");
    }
    for requirement in manager.requirements() {
        let name = manager
            .get_supplement(requirement.supplement_id)
            .map(|s| s.name.as_str())
            .unwrap_or("<missing>");
        println!(
            "  at least {} × {} (#{})",
            requirement.amount, name, requirement.supplement_id
        );
    }
    println!();
}
