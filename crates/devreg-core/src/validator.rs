//! Record Validator
//!
//! Checks presence and shape of every source attribute and produces a
//! validated record.

use crate::attribute::Attribute;
use crate::error::RegistryError;
use crate::record::DeveloperRecord;
use crate::source::RawSource;

/// The exact key set the INFO summary map must carry, sorted.
/// SITE is a required attribute but never appears in the summary.
pub const SUMMARY_KEYS: [&str; 5] = ["email", "name", "position", "url", "userName"];

/// Validate a loose source document and build a record from it.
///
/// Fails with [`RegistryError::MissingAttribute`] when a required attribute
/// is absent, [`RegistryError::EmptyAttribute`] when one is present but
/// empty (URL excepted), and [`RegistryError::InconsistentSummary`] when a
/// declared INFO map does not carry exactly [`SUMMARY_KEYS`].
pub fn validate(source: &RawSource) -> Result<DeveloperRecord, RegistryError> {
    for attribute in Attribute::ALL {
        let value = source.attribute(attribute).ok_or_else(|| {
            RegistryError::MissingAttribute {
                attribute,
                origin: source.origin.clone(),
            }
        })?;

        if value.is_empty() && attribute.is_required() {
            return Err(RegistryError::EmptyAttribute {
                attribute,
                origin: source.origin.clone(),
            });
        }
    }

    if let Some(info) = &source.info {
        let found: Vec<&str> = info.keys().map(String::as_str).collect();
        if found != SUMMARY_KEYS {
            return Err(RegistryError::InconsistentSummary {
                origin: source.origin.clone(),
                found: found.into_iter().map(str::to_string).collect(),
            });
        }
    }

    Ok(DeveloperRecord {
        user_name: source.user_name.clone().unwrap_or_default(),
        name: source.name.clone().unwrap_or_default(),
        position: source.position.clone().unwrap_or_default(),
        email: source.email.clone().unwrap_or_default(),
        site: source.site.clone().unwrap_or_default(),
        url: source.url.clone().unwrap_or_default(),
    })
}
