//! Course catalog ingestion.
//!
//! Loads the catalog document consumed by the registration validator:
//!
//! ```text
//! { "student": { "name", "role", "minCredits", "maxCredits" },
//!   "availableCourses": [ { "code", "name", "credits", ... } ] }
//! ```
//!
//! Load-time checks reject inverted credit bands and duplicate course codes,
//! so downstream validation never sees contradictory configuration.

mod error;
mod loader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Catalog Loading ===
pub use loader::{load_catalog, parse_catalog, read_catalog};
