//! Registration settings.
//!
//! Read from an optional TOML file:
//!
//! ```toml
//! [registration]
//! mode = "toggle"           # or "list"
//! overflow = "block"        # or "flag"
//! below_minimum = "warning" # or "error"
//!
//! [band]
//! min = 9
//! max = 21
//! ```

use std::path::Path;

use creg_model::{Catalog, CreditBand, ValidationOptions};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// How the student builds up their registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// A set of codes toggled on and off from the course table.
    #[default]
    Toggle,
    /// An ordered list of added courses, removed by position.
    List,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationSettings {
    pub mode: SelectionMode,
    #[serde(flatten)]
    pub validation: ValidationOptions,
}

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub registration: RegistrationSettings,
    /// Overrides the band declared in the catalog's student profile.
    pub band: Option<CreditBand>,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::parse(&content, path)?;
        tracing::debug!(path = %path.display(), ?settings, "Loaded settings");
        Ok(settings)
    }

    /// Load settings when a path is given and the file exists; defaults otherwise.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load_from(path),
            Some(path) => {
                tracing::debug!(path = %path.display(), "Settings file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|err| AppError::Settings {
            path: path.to_path_buf(),
            reason: err.message().to_string(),
        })
    }

    pub fn options(&self) -> ValidationOptions {
        self.registration.validation
    }

    pub fn mode(&self) -> SelectionMode {
        self.registration.mode
    }

    /// Band in effect for a catalog: the override when present, else the catalog's.
    pub fn effective_band(&self, catalog: &Catalog) -> Result<CreditBand> {
        match self.band {
            Some(band) => Ok(band),
            None => Ok(catalog.band()?),
        }
    }
}
