//! Selection validation.
//!
//! Every function here is pure: the same catalog, selection and band always
//! produce the same result, so callers recompute after each mutation.

use creg_model::{Course, CreditBand, SelectionSet, ValidationOptions};

use crate::result::ValidationResult;

/// Catalog courses whose code is in the selection, in catalog order.
///
/// Selected codes with no catalog entry are skipped.
pub fn selected_courses<'a>(
    catalog: &'a [Course],
    selection: &'a SelectionSet,
) -> impl Iterator<Item = &'a Course> + 'a {
    catalog
        .iter()
        .filter(move |course| selection.contains(&course.code))
}

/// Sum of credits over the selected catalog courses.
pub fn total_credits(catalog: &[Course], selection: &SelectionSet) -> u32 {
    selected_courses(catalog, selection).fold(0u32, |sum, course| {
        sum.saturating_add(course.credits)
    })
}

/// Validate a selection against a catalog.
pub fn validate(
    catalog: &[Course],
    selection: &SelectionSet,
    band: CreditBand,
    options: &ValidationOptions,
) -> ValidationResult {
    let (total, count) = selected_courses(catalog, selection).fold(
        (0u32, 0usize),
        |(total, count), course| (total.saturating_add(course.credits), count + 1),
    );

    let unknown = selection.len().saturating_sub(count);
    if unknown > 0 {
        tracing::debug!(unknown, "Ignoring selected codes missing from catalog");
    }

    let result = ValidationResult::from_totals(total, count, band, options);
    tracing::debug!(
        total = result.total_credits,
        selected = result.selected_count,
        state = result.state.label(),
        can_register = result.can_register,
        "Recomputed credit validation"
    );
    result
}

/// Validate a registered list (list-based variant).
///
/// The total is computed strictly from the entries present in `registered`.
pub fn validate_registered(
    registered: &[Course],
    band: CreditBand,
    options: &ValidationOptions,
) -> ValidationResult {
    let total = registered
        .iter()
        .fold(0u32, |sum, course| sum.saturating_add(course.credits));
    ValidationResult::from_totals(total, registered.len(), band, options)
}
