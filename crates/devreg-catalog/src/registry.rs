//! Registry Facade
//!
//! Resolves loose identifiers, loads the matching source document, and
//! validates it into a [`DeveloperRecord`].

use crate::catalog::{Catalog, SOURCE_EXTENSION};
use devreg_core::{validate, DeveloperRecord, RawSource, RegistryError};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Stateless facade over a [`Catalog`]. Every call re-reads the catalog
/// from the current filesystem snapshot.
#[derive(Debug, Clone)]
pub struct Registry {
    catalog: Catalog,
}

impl Registry {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog: Catalog::new(dir),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Load the source document for a canonical identifier.
    ///
    /// Fails with [`RegistryError::NotFound`] when the identifier is not a
    /// catalog member, [`RegistryError::Parse`] on a malformed document.
    pub fn load(&self, identifier: &str) -> Result<RawSource, RegistryError> {
        let members = self.catalog.list_identifiers()?;
        if !members.iter().any(|id| id == identifier) {
            return Err(RegistryError::NotFound(identifier.to_string()));
        }

        let path = self
            .catalog
            .dir()
            .join(format!("{}.{}", identifier, SOURCE_EXTENSION));
        debug!(path = %path.display(), "loading developer source");

        let content = fs::read_to_string(&path)?;
        let mut source: RawSource =
            serde_yaml::from_str(&content).map_err(|e| RegistryError::Parse {
                origin: identifier.to_string(),
                reason: e.to_string(),
            })?;
        source.origin = identifier.to_string();

        Ok(source)
    }

    /// Resolve a user name or canonical identifier and validate its record.
    ///
    /// Fails with [`RegistryError::InvalidDeveloper`] when the query does
    /// not resolve to any catalog member.
    pub fn get(&self, query: &str) -> Result<DeveloperRecord, RegistryError> {
        let canonical = self
            .catalog
            .resolve(query)?
            .ok_or_else(|| RegistryError::InvalidDeveloper(query.to_string()))?;

        let source = self.load(&canonical)?;
        validate(&source)
    }

    /// Validate an already-loaded source document directly.
    pub fn get_source(&self, source: &RawSource) -> Result<DeveloperRecord, RegistryError> {
        validate(source)
    }

    /// Load and validate every catalog member.
    ///
    /// Fail-fast: a single invalid source aborts the whole listing.
    pub fn list_all(&self) -> Result<Vec<DeveloperRecord>, RegistryError> {
        let mut records = Vec::new();

        for identifier in self.catalog.list_identifiers()? {
            let source = self.load(&identifier)?;
            records.push(validate(&source)?);
        }

        Ok(records)
    }
}
