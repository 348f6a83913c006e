//! Message hierarchy.
//!
//! Every user action and external event is a [`Message`]; [`crate::App::update`]
//! handles one message to completion before the next is accepted.

use creg_model::Catalog;

/// Root message enum.
#[derive(Debug, Clone)]
pub enum Message {
    /// Catalog load finished (success or a human-readable failure).
    CatalogLoaded(Result<Catalog, String>),

    /// Course selection actions.
    Course(CourseMessage),

    /// Search box contents changed.
    SearchChanged(String),

    /// "Register for Courses" pressed.
    RegisterClicked,

    /// Clear all pending notices.
    DismissNotices,
}

/// Messages that change the registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseMessage {
    /// Toggle a course in or out by code.
    Toggle(String),
    /// Add a course by code.
    Add(String),
    /// Remove the registered course at a position.
    Remove(usize),
}

impl Message {
    pub fn toggle(code: impl Into<String>) -> Self {
        Self::Course(CourseMessage::Toggle(code.into()))
    }

    pub fn add(code: impl Into<String>) -> Self {
        Self::Course(CourseMessage::Add(code.into()))
    }

    pub fn remove(index: usize) -> Self {
        Self::Course(CourseMessage::Remove(index))
    }
}
