//! Catalog file loading.
//!
//! Reads the catalog JSON document (student profile plus available courses)
//! and applies the load-time checks that the validator relies on.

use std::io::Read;
use std::path::{Path, PathBuf};

use creg_model::Catalog;

use crate::error::{IngestError, Result};

/// Loads a catalog from a JSON file on disk.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use creg_ingest::load_catalog;
///
/// let catalog = load_catalog(Path::new("model/data.json"))?;
/// println!("{} courses", catalog.len());
/// ```
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_catalog(&content, path)
}

/// Loads a catalog from any reader. `origin` is used for error context only.
pub fn read_catalog<R: Read>(mut reader: R, origin: &Path) -> Result<Catalog> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| IngestError::FileRead {
            path: origin.to_path_buf(),
            source,
        })?;
    parse_catalog(&content, origin)
}

/// Parses and checks a catalog document.
pub fn parse_catalog(content: &str, origin: &Path) -> Result<Catalog> {
    let catalog: Catalog =
        serde_json::from_str(content).map_err(|source| IngestError::JsonParse {
            path: origin.to_path_buf(),
            source,
        })?;

    catalog
        .check()
        .map_err(|err| IngestError::from_model(PathBuf::from(origin), err))?;

    tracing::info!(
        path = %origin.display(),
        courses = catalog.len(),
        student = ?catalog.student.as_ref().map(|s| s.name.as_str()),
        "Loaded course catalog"
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_malformed_json() {
        let err = parse_catalog("{ not json", Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, IngestError::JsonParse { .. }));
        assert!(err.to_string().starts_with("failed to parse catalog bad.json"));
    }

    #[test]
    fn parse_rejects_inverted_band() {
        let json = r#"{"student":{"name":"X","minCredits":22,"maxCredits":21},"availableCourses":[]}"#;
        let err = parse_catalog(json, Path::new("data.json")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::InvalidCreditBand {
                min: 22,
                max: 21,
                ..
            }
        ));
    }

    #[test]
    fn read_from_reader() {
        let json = br#"{"availableCourses":[{"code":"A","name":"Art","credits":3}]}"#;
        let catalog = read_catalog(&json[..], Path::new("<memory>")).expect("catalog");
        assert_eq!(catalog.len(), 1);
        assert!(catalog.student.is_none());
    }
}
