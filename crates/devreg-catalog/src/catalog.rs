//! Module Discovery
//!
//! Enumerates candidate developer sources in a catalog directory and
//! normalizes loose identifiers to their canonical form.

use devreg_core::RegistryError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Suffix of every canonical source identifier (e.g. `sonerLib`).
pub const LIB_SUFFIX: &str = "Lib";

/// Stems ending with this suffix are test entries and never listed.
pub const TEST_SUFFIX: &str = "Test";

/// File extension of source documents.
pub const SOURCE_EXTENSION: &str = "yaml";

/// The initializer entry a catalog directory may carry; never listed.
const INDEX_ENTRY: &str = "index";

/// A catalog of developer sources rooted at an explicit directory.
///
/// The directory is recomputed on every call; nothing is cached.
#[derive(Debug, Clone)]
pub struct Catalog {
    dir: PathBuf,
}

impl Catalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List the canonical identifiers of every discoverable source, sorted.
    ///
    /// Skips the `index` entry, test-suffixed entries, subdirectories, and
    /// anything that is not a `.yaml` document.
    pub fn list_identifiers(&self) -> Result<Vec<String>, RegistryError> {
        let mut identifiers = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if stem == INDEX_ENTRY || stem.ends_with(TEST_SUFFIX) {
                continue;
            }
            identifiers.push(stem.to_string());
        }

        identifiers.sort();
        debug!(dir = %self.dir.display(), count = identifiers.len(), "enumerated catalog");

        Ok(identifiers)
    }

    /// Resolve a loose identifier to its canonical catalog member.
    ///
    /// Accepts a raw user name (an `@domain` suffix is stripped) or an
    /// already-suffixed canonical identifier. Returns `None` when the
    /// normalized identifier is not a catalog member.
    pub fn resolve(&self, candidate: &str) -> Result<Option<String>, RegistryError> {
        let canonical = canonicalize(candidate);

        if self.list_identifiers()?.iter().any(|id| id == &canonical) {
            Ok(Some(canonical))
        } else {
            Ok(None)
        }
    }
}

/// Normalize a loose identifier to the canonical suffixed form.
pub fn canonicalize(candidate: &str) -> String {
    if candidate.ends_with(LIB_SUFFIX) {
        return candidate.to_string();
    }

    let user = candidate.split('@').next().unwrap_or(candidate);
    format!("{}{}", user, LIB_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_raw_username() {
        assert_eq!(canonicalize("soner"), "sonerLib");
    }

    #[test]
    fn test_canonicalize_strips_domain() {
        assert_eq!(canonicalize("alice@example.com"), "aliceLib");
        assert_eq!(canonicalize("alice"), canonicalize("alice@example.com"));
    }

    #[test]
    fn test_canonicalize_keeps_suffixed_form() {
        assert_eq!(canonicalize("sonerLib"), "sonerLib");
    }
}
