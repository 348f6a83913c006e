use serde::{Deserialize, Serialize};

use creg_model::{CreditBand, ValidationOptions};

use crate::state::{CreditState, classify};

/// Outcome of validating a selection.
///
/// Always derived from the current selection; never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub total_credits: u32,
    /// Number of selected courses that resolved to a catalog entry.
    pub selected_count: usize,
    pub state: CreditState,
    /// Alert text; empty when the total is within the band or zero.
    pub message: String,
    /// Summary such as `7 / 21 Credits (Minimum 9)`.
    pub status_text: String,
    pub can_register: bool,
}

impl ValidationResult {
    /// Build a result from an already computed total and count.
    pub fn from_totals(
        total_credits: u32,
        selected_count: usize,
        band: CreditBand,
        options: &ValidationOptions,
    ) -> Self {
        let state = classify(total_credits, band, options);
        Self {
            total_credits,
            selected_count,
            state,
            message: alert_message(total_credits, band),
            status_text: status_text(total_credits, band),
            can_register: selected_count > 0 && band.contains(total_credits),
        }
    }

    /// Result for an empty selection.
    pub fn empty(band: CreditBand, options: &ValidationOptions) -> Self {
        Self::from_totals(0, 0, band, options)
    }

    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }
}

fn alert_message(total: u32, band: CreditBand) -> String {
    if total == 0 {
        String::new()
    } else if band.is_below(total) {
        format!("You must register at least {} credit hours.", band.min())
    } else if band.is_above(total) {
        format!(
            "Total credit hours exceeded the maximum of {}.",
            band.max()
        )
    } else {
        String::new()
    }
}

fn status_text(total: u32, band: CreditBand) -> String {
    let base = format!("{total} / {} Credits", band.max());
    if band.is_below(total) {
        format!("{base} (Minimum {})", band.min())
    } else if band.is_above(total) {
        format!("{base} (Exceeded Maximum)")
    } else {
        base
    }
}
