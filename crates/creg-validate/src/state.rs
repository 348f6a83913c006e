//! Credit state classification.

use serde::{Deserialize, Serialize};

use creg_model::{BelowMinimumSeverity, CreditBand, ValidationOptions};

/// Classification of a credit total against a band.
///
/// Derived from the current total alone; there is no history or hysteresis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditState {
    /// Nothing selected.
    None,
    /// Total within `[min, max]`.
    Success,
    /// Total above zero but below the minimum.
    Warning,
    /// Total above the maximum (or below the minimum at error severity).
    Error,
}

impl CreditState {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// Classify a credit total.
pub fn classify(total: u32, band: CreditBand, options: &ValidationOptions) -> CreditState {
    if total == 0 {
        CreditState::None
    } else if band.is_below(total) {
        match options.below_minimum {
            BelowMinimumSeverity::Warning => CreditState::Warning,
            BelowMinimumSeverity::Error => CreditState::Error,
        }
    } else if band.is_above(total) {
        CreditState::Error
    } else {
        CreditState::Success
    }
}
