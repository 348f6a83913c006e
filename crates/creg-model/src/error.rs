use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Credit band whose minimum is above its maximum.
    #[error("invalid credit band: minimum {min} is greater than maximum {max}")]
    InvalidBand { min: u32, max: u32 },

    /// The same course code appears more than once in a catalog.
    #[error("duplicate course code in catalog: {code}")]
    DuplicateCourse { code: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
