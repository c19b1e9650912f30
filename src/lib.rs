pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod solver;
pub mod state;

pub use error::{CalcError, Result};
pub use models::{Constraint, Constraints, Ingredient, RequiredSupplement, SolverResult, Supplement};
pub use solver::{solve, solve_with_config, SolverConfig};
