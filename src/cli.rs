use clap::{Parser, Subcommand};

use crate::solver::{COMBINATION_LIMIT, DEFAULT_TOP_N, MAX_SUPPLEMENT_COUNT, NO_TARGET};

/// VitaminCalc — find the supplement counts that best hit your ingredient targets.
#[derive(Parser, Debug)]
#[command(name = "vitamin_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the workspace JSON file.
    #[arg(short, long, default_value = "vitamins.json")]
    pub file: String,

    /// Log solver progress to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank every feasible supplement combination.
    Solve {
        /// Number of results to display.
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Ceiling on units of a single supplement.
        #[arg(long, default_value_t = MAX_SUPPLEMENT_COUNT)]
        max_per_supplement: u32,

        /// Refuse to search when the combination count exceeds --limit.
        #[arg(long)]
        guard: bool,

        /// Combination limit used by --guard.
        #[arg(long, default_value_t = COMBINATION_LIMIT)]
        limit: u64,

        /// Also write all ranked results to this CSV file.
        #[arg(long)]
        csv: Option<String>,
    },

    /// Print the size of the search space.
    Estimate {
        /// Ceiling on units of a single supplement.
        #[arg(long, default_value_t = MAX_SUPPLEMENT_COUNT)]
        max_per_supplement: u32,

        /// Combination limit to compare against.
        #[arg(long, default_value_t = COMBINATION_LIMIT)]
        limit: u64,
    },

    /// Show supplements, constraints and requirements.
    List,

    /// Add a supplement.
    AddSupplement {
        /// Product name.
        #[arg(long)]
        name: String,

        /// Manufacturer.
        #[arg(long, default_value = "")]
        maker: String,

        /// Ingredient per unit as name=amount (mg). Repeatable.
        #[arg(long = "ingredient", short = 'i')]
        ingredients: Vec<String>,
    },

    /// Change the name, maker or ingredients of a supplement.
    EditSupplement {
        query: String,

        /// New product name.
        #[arg(long)]
        name: Option<String>,

        /// New manufacturer.
        #[arg(long)]
        maker: Option<String>,

        /// Replace all ingredients; name=amount (mg). Repeatable.
        #[arg(long = "ingredient", short = 'i')]
        ingredients: Vec<String>,
    },

    /// Write a timestamped JSON snapshot of the workspace.
    Export { path: String },

    /// Remove a supplement (by id or name).
    RemoveSupplement {
        query: String,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Exclude a supplement from calculations.
    Disable { query: String },

    /// Include a previously disabled supplement again.
    Enable { query: String },

    /// Set the target and/or max for an ingredient.
    Constrain {
        ingredient: String,

        /// Desired total in mg; omit (or -1) for a max-only constraint.
        #[arg(long, default_value_t = NO_TARGET, allow_hyphen_values = true)]
        target: f64,

        /// Hard ceiling in mg; omit for no ceiling.
        #[arg(long)]
        max: Option<f64>,
    },

    /// Remove the constraint for an ingredient.
    Unconstrain { ingredient: String },

    /// Require at least N units of a supplement in every result.
    Require {
        query: String,

        #[arg(long, default_value_t = 1)]
        amount: u32,
    },

    /// Drop a supplement requirement.
    Unrequire { query: String },
}

impl Default for Command {
    fn default() -> Self {
        Command::Solve {
            top: DEFAULT_TOP_N,
            max_per_supplement: MAX_SUPPLEMENT_COUNT,
            guard: false,
            limit: COMBINATION_LIMIT,
            csv: None,
        }
    }
}
