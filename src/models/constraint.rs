use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};
use crate::solver::constants::NO_TARGET;

/// Per-ingredient goal: a desired total and a hard ceiling.
///
/// `target == NO_TARGET` marks a max-only constraint. Any other
/// non-positive target is ignored when scoring. `max: None` means no cap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub target: f64,

    #[serde(default)]
    pub max: Option<f64>,
}

impl Constraint {
    pub fn new(target: f64, max: f64) -> Self {
        Self {
            target,
            max: Some(max),
        }
    }

    /// Build a constraint from user input.
    ///
    /// The target must be finite (`NO_TARGET` included); the max, when
    /// given, must be finite and non-negative. Non-finite values would not
    /// survive a JSON round trip.
    pub fn checked(target: f64, max: Option<f64>) -> Result<Self> {
        if !target.is_finite() {
            return Err(CalcError::InvalidInput(format!(
                "target must be a finite number, got {}",
                target
            )));
        }
        if max.is_some_and(|m| !m.is_finite() || m < 0.0) {
            return Err(CalcError::InvalidInput(
                "max must be a non-negative number".to_string(),
            ));
        }
        Ok(Self { target, max })
    }

    /// Constraint that only caps the total.
    pub fn max_only(max: f64) -> Self {
        Self::new(NO_TARGET, max)
    }

    pub fn is_max_only(&self) -> bool {
        self.target == NO_TARGET
    }

    /// Whether this constraint contributes to the distance score.
    pub fn has_target(&self) -> bool {
        !self.is_max_only() && self.target > 0.0
    }

    /// The ceiling, if it is a finite number.
    pub fn finite_max(&self) -> Option<f64> {
        self.max.filter(|m| m.is_finite())
    }
}

/// Constraints keyed by ingredient name.
pub type Constraints = BTreeMap<String, Constraint>;

/// Lower bound on how many units of a given supplement every solution holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredSupplement {
    #[serde(rename = "supplementId")]
    pub supplement_id: u32,
    pub amount: u32,
}

impl RequiredSupplement {
    pub fn new(supplement_id: u32, amount: u32) -> Self {
        Self {
            supplement_id,
            amount,
        }
    }
}
