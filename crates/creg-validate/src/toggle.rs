use creg_model::{Course, CreditBand, OverflowPolicy, SelectionSet};

use crate::engine::total_credits;

/// Result of toggling one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Selection after the toggle. Equal to the input when `rejected`.
    pub selection: SelectionSet,
    /// The addition was refused because it would exceed the maximum.
    pub rejected: bool,
}

/// Toggle a course in or out of the selection.
///
/// Removal always succeeds. Under [`OverflowPolicy::Block`] an addition that
/// would take the total above `band.max()` is refused and the selection is
/// returned unchanged; under [`OverflowPolicy::Flag`] it is always accepted.
pub fn toggle(
    catalog: &[Course],
    selection: &SelectionSet,
    course: &Course,
    band: CreditBand,
    policy: OverflowPolicy,
) -> ToggleOutcome {
    let mut next = selection.clone();

    if next.remove(&course.code) {
        tracing::debug!(code = %course.code, "Deselected course");
        return ToggleOutcome {
            selection: next,
            rejected: false,
        };
    }

    if policy == OverflowPolicy::Block {
        let prospective = total_credits(catalog, selection).saturating_add(course.credits);
        if band.is_above(prospective) {
            tracing::warn!(
                code = %course.code,
                prospective,
                max = band.max(),
                "Rejected selection above maximum credits"
            );
            return ToggleOutcome {
                selection: next,
                rejected: true,
            };
        }
    }

    next.insert(course.code.clone());
    tracing::debug!(code = %course.code, policy = policy.label(), "Selected course");
    ToggleOutcome {
        selection: next,
        rejected: false,
    }
}
