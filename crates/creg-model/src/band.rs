//! Credit band limits.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Default minimum credit hours per term.
pub const DEFAULT_MIN_CREDITS: u32 = 9;

/// Default maximum credit hours per term.
pub const DEFAULT_MAX_CREDITS: u32 = 21;

/// Inclusive `[min, max]` range of credit hours a registration must fall in.
///
/// Construction through [`CreditBand::new`] guarantees `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBand")]
pub struct CreditBand {
    min: u32,
    max: u32,
}

#[derive(Deserialize)]
struct RawBand {
    min: u32,
    max: u32,
}

impl TryFrom<RawBand> for CreditBand {
    type Error = ModelError;

    fn try_from(raw: RawBand) -> Result<Self> {
        Self::new(raw.min, raw.max)
    }
}

impl Default for CreditBand {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_CREDITS,
            max: DEFAULT_MAX_CREDITS,
        }
    }
}

impl CreditBand {
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(ModelError::InvalidBand { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, total: u32) -> bool {
        (self.min..=self.max).contains(&total)
    }

    pub fn is_below(&self, total: u32) -> bool {
        total < self.min
    }

    pub fn is_above(&self, total: u32) -> bool {
        total > self.max
    }
}
