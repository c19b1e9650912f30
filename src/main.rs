use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vitamin_calc_rs::cli::{Cli, Command};
use vitamin_calc_rs::error::{CalcError, Result};
use vitamin_calc_rs::interface::{
    display_results, display_workspace, parse_ingredient, prompt_yes_no, resolve_supplement,
    write_results_csv,
};
use vitamin_calc_rs::models::{Constraint, Ingredient, Supplement};
use vitamin_calc_rs::solver::{
    check_combination_limit, enabled_max_counts, solve_with_config, total_combinations,
    SolverConfig,
};
use vitamin_calc_rs::state::{
    export_workspace, load_workspace_or_default, save_workspace, SupplementEdit, WorkspaceManager,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let directive = if verbose {
        "vitamin_calc_rs=info"
    } else {
        "vitamin_calc_rs=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let path = Path::new(&cli.file);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Solve {
            top,
            max_per_supplement,
            guard,
            limit,
            csv,
        } => {
            let config = SolverConfig {
                max_per_supplement,
                combination_limit: limit,
            };
            cmd_solve(path, top, &config, guard, csv.as_deref())
        }
        Command::Estimate {
            max_per_supplement,
            limit,
        } => cmd_estimate(
            path,
            &SolverConfig {
                max_per_supplement,
                combination_limit: limit,
            },
        ),
        Command::List => {
            let manager = open(path)?;
            display_workspace(&manager);
            Ok(())
        }
        Command::AddSupplement {
            name,
            maker,
            ingredients,
        } => cmd_add_supplement(path, name, maker, &ingredients),
        Command::EditSupplement {
            query,
            name,
            maker,
            ingredients,
        } => {
            let ingredients = parse_ingredients(&ingredients)?;
            let edit = SupplementEdit {
                name,
                maker,
                ingredients: (!ingredients.is_empty()).then_some(ingredients),
            };
            modify(path, |manager| {
                let id = resolve_supplement(manager, &query)?;
                manager.edit_supplement(id, edit)?;
                println!("Updated supplement #{}.", id);
                Ok(())
            })
        }
        Command::Export { path: target } => {
            let manager = open(path)?;
            export_workspace(&target, &manager.to_workspace(), chrono::Utc::now())?;
            println!("Exported {} supplements to {}.", manager.len(), target);
            Ok(())
        }
        Command::RemoveSupplement { query, yes } => modify(path, |manager| {
            let id = resolve_supplement(manager, &query)?;
            let name = manager
                .get_supplement(id)
                .map(|s| s.name.clone())
                .unwrap_or_default();
            if !yes && !prompt_yes_no(&format!("Remove '{}' and its requirements?", name), false)? {
                println!("Nothing removed.");
                return Ok(());
            }
            manager.remove_supplement(id);
            println!("Removed supplement #{}.", id);
            Ok(())
        }),
        Command::Disable { query } => set_disabled(path, &query, true),
        Command::Enable { query } => set_disabled(path, &query, false),
        Command::Constrain {
            ingredient,
            target,
            max,
        } => modify(path, |manager| {
            let constraint = Constraint::checked(target, max)?;
            manager.set_constraint(ingredient.clone(), constraint);
            println!("Constraint set for {}.", ingredient);
            Ok(())
        }),
        Command::Unconstrain { ingredient } => modify(path, |manager| {
            if manager.remove_constraint(&ingredient) {
                println!("Constraint removed for {}.", ingredient);
            } else {
                println!("No constraint for {}.", ingredient);
            }
            Ok(())
        }),
        Command::Require { query, amount } => modify(path, |manager| {
            let id = resolve_supplement(manager, &query)?;
            manager.set_requirement(id, amount)?;
            println!("Requiring at least {} of supplement #{}.", amount, id);
            Ok(())
        }),
        Command::Unrequire { query } => modify(path, |manager| {
            let id = resolve_supplement(manager, &query)?;
            if manager.remove_requirement(id) {
                println!("Requirement removed for supplement #{}.", id);
            } else {
                println!("Supplement #{} was not required.", id);
            }
            Ok(())
        }),
    }
}

fn open(path: &Path) -> Result<WorkspaceManager> {
    Ok(WorkspaceManager::new(load_workspace_or_default(path)?))
}

/// Load, apply a change, and save the workspace.
fn modify<F>(path: &Path, change: F) -> Result<()>
where
    F: FnOnce(&mut WorkspaceManager) -> Result<()>,
{
    let mut manager = open(path)?;
    change(&mut manager)?;
    save_workspace(path, &manager.to_workspace())?;
    Ok(())
}

fn set_disabled(path: &Path, query: &str, disabled: bool) -> Result<()> {
    modify(path, |manager| {
        let id = resolve_supplement(manager, query)?;
        manager.set_supplement_disabled(id, disabled);
        println!(
            "Supplement #{} {}.",
            id,
            if disabled { "disabled" } else { "enabled" }
        );
        Ok(())
    })
}

/// Rank all feasible combinations and print the best ones.
fn cmd_solve(
    path: &Path,
    top: usize,
    config: &SolverConfig,
    guard: bool,
    csv: Option<&str>,
) -> Result<()> {
    let manager = open(path)?;

    if manager.is_empty() {
        println!("No supplements yet. Use 'add-supplement' to add some.");
        return Ok(());
    }

    for requirement in manager.unsatisfiable_requirements() {
        eprintln!(
            "Warning: required supplement #{} is missing or disabled; no combination can satisfy it.",
            requirement.supplement_id
        );
    }

    let options = manager.all_supplements();
    let constraints = manager.constraints();

    if guard {
        let caps = enabled_max_counts(options, constraints, config);
        let count = check_combination_limit(&caps, config.combination_limit)?;
        println!("Searching {} combinations...", count);
    }

    let results = solve_with_config(constraints, options, manager.requirements(), config);
    display_results(&results, top);

    if let Some(csv_path) = csv {
        write_results_csv(csv_path, &results)?;
        println!("Wrote {} results to {}.", results.len(), csv_path);
    }

    Ok(())
}

/// Report how many combinations a solve would visit.
fn cmd_estimate(path: &Path, config: &SolverConfig) -> Result<()> {
    let manager = open(path)?;
    let options = manager.all_supplements();
    let caps = enabled_max_counts(options, manager.constraints(), config);

    for (supplement, cap) in options.iter().filter(|s| !s.disabled).zip(&caps) {
        println!("  {:<24} up to {}", supplement.name, cap);
    }

    let total = total_combinations(&caps);
    println!("Total combinations: {}", total);
    if total > config.combination_limit {
        println!(
            "Exceeds the limit of {}; tighten max constraints or disable supplements.",
            config.combination_limit
        );
    }
    Ok(())
}

fn parse_ingredients(raw: &[String]) -> Result<Vec<Ingredient>> {
    raw.iter().map(|i| parse_ingredient(i)).collect()
}

fn cmd_add_supplement(path: &Path, name: String, maker: String, ingredients: &[String]) -> Result<()> {
    let ingredients = parse_ingredients(ingredients)?;

    if ingredients.is_empty() {
        return Err(CalcError::InvalidInput(
            "a supplement needs at least one --ingredient name=amount".to_string(),
        ));
    }

    modify(path, |manager| {
        let mut supplement = Supplement::new(0, name, maker);
        supplement.ingredients = ingredients;
        let id = manager.add_supplement(supplement);
        println!("Added supplement #{}.", id);
        Ok(())
    })
}
