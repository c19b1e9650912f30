pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_results_csv;
pub use prompts::{fuzzy_candidates, parse_ingredient, prompt_yes_no, resolve_supplement};
pub use render::{display_results, display_workspace};
