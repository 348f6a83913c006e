//! Data model for course registration.
//!
//! - [`Course`] and [`Catalog`]: immutable reference data loaded once
//! - [`CreditBand`]: the inclusive credit range a registration must fall in
//! - [`SelectionSet`]: the codes a student has chosen
//! - [`ValidationOptions`]: overflow policy and below-minimum severity

pub mod band;
pub mod catalog;
pub mod course;
pub mod error;
pub mod options;
pub mod selection;

pub use band::{CreditBand, DEFAULT_MAX_CREDITS, DEFAULT_MIN_CREDITS};
pub use catalog::{Catalog, StudentProfile};
pub use course::Course;
pub use error::{ModelError, Result};
pub use options::{BelowMinimumSeverity, OverflowPolicy, ValidationOptions};
pub use selection::SelectionSet;
