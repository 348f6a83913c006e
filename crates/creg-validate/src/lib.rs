//! Credit-hour validation for course registration.
//!
//! Given a catalog, a selection and a credit band, computes the total,
//! the selection count, a [`CreditState`] and whether registration may be
//! submitted. Mutations are pure functions that return the next selection:
//!
//! - [`toggle`]: set-based selection with a configurable overflow policy
//! - [`add_course`] / [`remove_course`]: ordered registered list
//!
//! # Example
//!
//! ```
//! use creg_model::{Course, CreditBand, OverflowPolicy, SelectionSet, ValidationOptions};
//! use creg_validate::{CreditState, toggle, validate};
//!
//! let catalog = vec![Course::new("A", "Algorithms", 3), Course::new("B", "Biology", 4)];
//! let band = CreditBand::new(9, 21).unwrap();
//! let options = ValidationOptions::default();
//!
//! let mut selection = SelectionSet::new();
//! for course in &catalog {
//!     selection = toggle(&catalog, &selection, course, band, OverflowPolicy::Block).selection;
//! }
//!
//! let result = validate(&catalog, &selection, band, &options);
//! assert_eq!(result.total_credits, 7);
//! assert_eq!(result.state, CreditState::Warning);
//! assert!(!result.can_register);
//! ```

mod engine;
mod registered;
mod result;
mod state;
mod toggle;

pub use engine::{selected_courses, total_credits, validate, validate_registered};
pub use registered::{AddOutcome, RemoveOutcome, add_course, remove_course};
pub use result::ValidationResult;
pub use state::{CreditState, classify};
pub use toggle::{ToggleOutcome, toggle};
