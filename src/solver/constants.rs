/// Sentinel target meaning "no target, cap only".
pub const NO_TARGET: f64 = -1.0;

/// Hard ceiling on units of one supplement considered during enumeration.
///
/// Unconstrained supplements would otherwise be unbounded.
pub const MAX_SUPPLEMENT_COUNT: u32 = 100;

/// Largest search space the combination guard accepts.
pub const COMBINATION_LIMIT: u64 = 1_000_000;

/// Number of results shown by default.
pub const DEFAULT_TOP_N: usize = 10;
