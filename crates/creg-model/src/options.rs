//! Configuration options for credit validation.

use serde::{Deserialize, Serialize};

/// How an addition that would push the total above the maximum is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Refuse the addition up front; the selection never exceeds the maximum.
    #[default]
    Block,
    /// Accept the addition and report the overflow as an error state.
    Flag,
}

impl OverflowPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Flag => "flag",
        }
    }
}

/// Severity reported for a non-zero total below the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BelowMinimumSeverity {
    #[default]
    Warning,
    Error,
}

/// Options controlling how selections are validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    pub overflow: OverflowPolicy,
    pub below_minimum: BelowMinimumSeverity,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    #[must_use]
    pub fn with_below_minimum(mut self, severity: BelowMinimumSeverity) -> Self {
        self.below_minimum = severity;
        self
    }
}
