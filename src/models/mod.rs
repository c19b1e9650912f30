mod constraint;
mod result;
mod supplement;

pub use constraint::{Constraint, Constraints, RequiredSupplement};
pub use result::SolverResult;
pub use supplement::{Ingredient, Supplement};
