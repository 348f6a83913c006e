//! Course catalog and student profile.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::band::{CreditBand, DEFAULT_MAX_CREDITS, DEFAULT_MIN_CREDITS};
use crate::course::Course;
use crate::error::{ModelError, Result};

/// The student the catalog was issued for, including their credit limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default = "default_min_credits")]
    pub min_credits: u32,
    #[serde(default = "default_max_credits")]
    pub max_credits: u32,
}

fn default_min_credits() -> u32 {
    DEFAULT_MIN_CREDITS
}

fn default_max_credits() -> u32 {
    DEFAULT_MAX_CREDITS
}

impl StudentProfile {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            min_credits: DEFAULT_MIN_CREDITS,
            max_credits: DEFAULT_MAX_CREDITS,
        }
    }

    /// Credit band declared for this student.
    pub fn band(&self) -> Result<CreditBand> {
        CreditBand::new(self.min_credits, self.max_credits)
    }
}

/// Read-only list of offerable courses for a term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub student: Option<StudentProfile>,
    #[serde(default)]
    pub available_courses: Vec<Course>,
}

impl Catalog {
    pub fn new(student: Option<StudentProfile>, available_courses: Vec<Course>) -> Self {
        Self {
            student,
            available_courses,
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.available_courses
    }

    pub fn len(&self) -> usize {
        self.available_courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.available_courses.is_empty()
    }

    /// Look up a course by its code.
    pub fn find(&self, code: &str) -> Option<&Course> {
        self.available_courses.iter().find(|course| course.code == code)
    }

    /// Courses matching a free-text query, in catalog order.
    pub fn search(&self, query: &str) -> Vec<&Course> {
        self.available_courses
            .iter()
            .filter(|course| course.matches_query(query))
            .collect()
    }

    /// Band declared by the student profile, or the default band when absent.
    pub fn band(&self) -> Result<CreditBand> {
        match &self.student {
            Some(student) => student.band(),
            None => Ok(CreditBand::default()),
        }
    }

    /// Check catalog-level invariants: unique codes and a well-formed band.
    pub fn check(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for course in &self.available_courses {
            if !seen.insert(course.code.as_str()) {
                return Err(ModelError::DuplicateCourse {
                    code: course.code.clone(),
                });
            }
        }
        self.band().map(|_| ())
    }
}
