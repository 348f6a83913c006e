//! Registration state.
//!
//! `AppState` is the single owned state object. Handlers mutate it and then
//! call [`AppState::revalidate`], so the cached [`ValidationResult`] always
//! reflects the current selection.

use creg_model::{Catalog, Course, CreditBand, SelectionSet, ValidationOptions};
use creg_validate::{ValidationResult, selected_courses, validate, validate_registered};

use crate::notice::Notice;
use crate::settings::{SelectionMode, Settings};
use crate::submit::RegistrationPayload;

/// Lifecycle of the one-time catalog load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

impl CatalogStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, CatalogStatus::Loaded)
    }
}

/// Root state for a registration session.
#[derive(Debug, Clone)]
pub struct AppState {
    pub status: CatalogStatus,
    pub catalog: Catalog,
    pub settings: Settings,
    pub band: CreditBand,
    /// Codes chosen in [`SelectionMode::Toggle`].
    pub selection: SelectionSet,
    /// Courses added in [`SelectionMode::List`], in insertion order.
    pub registered: Vec<Course>,
    /// Free-text course filter.
    pub query: String,
    pub notices: Vec<Notice>,
    validation: ValidationResult,
}

impl AppState {
    /// Fresh state waiting for the catalog.
    pub fn new(settings: Settings) -> Self {
        let band = settings.band.unwrap_or_default();
        let validation = ValidationResult::empty(band, &settings.options());
        Self {
            status: CatalogStatus::Loading,
            catalog: Catalog::default(),
            settings,
            band,
            selection: SelectionSet::new(),
            registered: Vec::new(),
            query: String::new(),
            notices: Vec::new(),
            validation,
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.settings.mode()
    }

    pub fn options(&self) -> ValidationOptions {
        self.settings.options()
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    /// Recompute the validation result from the current selection.
    pub fn revalidate(&mut self) {
        let options = self.options();
        self.validation = match self.mode() {
            SelectionMode::Toggle => {
                validate(self.catalog.courses(), &self.selection, self.band, &options)
            }
            SelectionMode::List => validate_registered(&self.registered, self.band, &options),
        };
    }

    /// Whether the course is part of the current registration.
    pub fn is_selected(&self, code: &str) -> bool {
        match self.mode() {
            SelectionMode::Toggle => self.selection.contains(code),
            SelectionMode::List => self.registered.iter().any(|course| course.code == code),
        }
    }

    /// Courses in the current registration.
    pub fn current_courses(&self) -> Vec<Course> {
        match self.mode() {
            SelectionMode::Toggle => selected_courses(self.catalog.courses(), &self.selection)
                .cloned()
                .collect(),
            SelectionMode::List => self.registered.clone(),
        }
    }

    /// Catalog courses matching the current query.
    pub fn visible_courses(&self) -> Vec<&Course> {
        self.catalog.search(&self.query)
    }

    pub fn student_name(&self) -> Option<&str> {
        self.catalog
            .student
            .as_ref()
            .map(|student| student.name.as_str())
    }

    /// Payload for the current registration.
    pub fn payload(&self) -> RegistrationPayload {
        RegistrationPayload {
            student_name: self.student_name().map(str::to_string),
            selected_courses: self.current_courses(),
            total_credits: self.validation.total_credits,
        }
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
