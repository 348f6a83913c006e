use serde::{Deserialize, Serialize};

/// A course offered in the catalog.
///
/// Courses are immutable reference data keyed by [`Course::code`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code (e.g., "BIT20303").
    pub code: String,
    /// Course title.
    pub name: String,
    /// Credit hours. Missing values in source data count as zero.
    #[serde(default)]
    pub credits: u32,
    #[serde(default)]
    pub lecturer: String,
    #[serde(default)]
    pub schedule: String,
    /// Course type label (e.g., "Core", "Elective").
    #[serde(rename = "type", default)]
    pub course_type: String,
    #[serde(default)]
    pub section: String,
}

impl Course {
    /// Create a course with only code, name and credits set.
    pub fn new(code: impl Into<String>, name: impl Into<String>, credits: u32) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credits,
            lecturer: String::new(),
            schedule: String::new(),
            course_type: String::new(),
            section: String::new(),
        }
    }

    #[must_use]
    pub fn with_lecturer(mut self, lecturer: impl Into<String>) -> Self {
        self.lecturer = lecturer.into();
        self
    }

    #[must_use]
    pub fn with_schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = schedule.into();
        self
    }

    #[must_use]
    pub fn with_type(mut self, course_type: impl Into<String>) -> Self {
        self.course_type = course_type.into();
        self
    }

    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    /// Case-insensitive match against code, name and lecturer.
    ///
    /// An empty (or whitespace-only) query matches every course.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.code, &self.name, &self.lecturer]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
