//! User-visible notices (toasts and alerts).

use serde::Serialize;

/// Notice level, used by renderers to pick a treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A one-off message raised by an operation that did not change state
/// as the user asked, or that finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Notice {
    /// The course is already in the registration.
    AlreadyAdded { code: String },
    /// Adding the course would exceed the maximum credit hours.
    MaximumExceeded { code: String, max: u32 },
    /// No catalog course has this code.
    UnknownCourse { code: String },
    /// The registration was handed to the submission sink.
    Submitted { total_credits: u32 },
    /// Register was requested while the selection is empty or out of band.
    NotRegistrable,
    /// The sink refused the submission.
    SubmissionFailed { reason: String },
    /// The catalog could not be loaded.
    LoadFailed { reason: String },
}

impl Notice {
    pub fn level(&self) -> NoticeLevel {
        match self {
            Notice::Submitted { .. } => NoticeLevel::Info,
            Notice::AlreadyAdded { .. }
            | Notice::MaximumExceeded { .. }
            | Notice::UnknownCourse { .. }
            | Notice::NotRegistrable => NoticeLevel::Warning,
            Notice::SubmissionFailed { .. } | Notice::LoadFailed { .. } => NoticeLevel::Error,
        }
    }

    /// Text shown to the student.
    pub fn text(&self) -> String {
        match self {
            Notice::AlreadyAdded { .. } => "Course already added!".to_string(),
            Notice::MaximumExceeded { max, .. } => format!("Maximum {max} credit hours only."),
            Notice::UnknownCourse { code } => format!("Course {code} is not in the catalog."),
            Notice::Submitted { .. } => "Registration submitted.".to_string(),
            Notice::NotRegistrable => "Registration is not available".to_string(),
            Notice::SubmissionFailed { reason } => format!("Registration failed: {reason}"),
            Notice::LoadFailed { reason } => format!("Error: {reason}"),
        }
    }
}
