//! Registered-list operations (list-based variant).
//!
//! The list keeps insertion order and never holds two courses with the same
//! code. Over-maximum additions are accepted here and surface as an error
//! state when the list is validated.

use creg_model::Course;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub registered: Vec<Course>,
    /// The course code was already present; `registered` is unchanged.
    pub already_added: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveOutcome {
    pub registered: Vec<Course>,
    /// The removed course, or `None` when the index was out of range.
    pub removed: Option<Course>,
}

/// Append a course unless its code is already registered.
pub fn add_course(registered: &[Course], course: &Course) -> AddOutcome {
    if registered.iter().any(|existing| existing.code == course.code) {
        tracing::warn!(code = %course.code, "Course already added");
        return AddOutcome {
            registered: registered.to_vec(),
            already_added: true,
        };
    }

    let mut next = Vec::with_capacity(registered.len() + 1);
    next.extend_from_slice(registered);
    next.push(course.clone());
    AddOutcome {
        registered: next,
        already_added: false,
    }
}

/// Remove the course at `index`. Out-of-range indices leave the list as is.
pub fn remove_course(registered: &[Course], index: usize) -> RemoveOutcome {
    let mut next = registered.to_vec();
    if index >= next.len() {
        tracing::warn!(index, len = next.len(), "Remove index out of range");
        return RemoveOutcome {
            registered: next,
            removed: None,
        };
    }

    let removed = next.remove(index);
    tracing::debug!(code = %removed.code, index, "Removed registered course");
    RemoveOutcome {
        registered: next,
        removed: Some(removed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_in_order() {
        let a = Course::new("A", "Algorithms", 3);
        let b = Course::new("B", "Biology", 4);
        let outcome = add_course(&[a.clone()], &b);
        assert!(!outcome.already_added);
        assert_eq!(outcome.registered, vec![a, b]);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let a = Course::new("A", "Algorithms", 3);
        let outcome = remove_course(&[a.clone()], 5);
        assert!(outcome.removed.is_none());
        assert_eq!(outcome.registered, vec![a]);
    }
}
