//! Unified Error Model
use crate::attribute::Attribute;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    /// The query could not be resolved to any catalog member.
    #[error("{0} is not a valid developer")]
    InvalidDeveloper(String),

    /// A canonical identifier is not a member of the catalog.
    #[error("developer source {0} is not in the catalog")]
    NotFound(String),

    /// A required attribute is absent from the source document.
    #[error("attribute {attribute} doesn't exist in the developer source: {origin}")]
    MissingAttribute { attribute: Attribute, origin: String },

    /// A required attribute is present but empty.
    #[error("attribute {attribute} cannot be empty in the source: {origin}")]
    EmptyAttribute { attribute: Attribute, origin: String },

    /// The INFO summary map does not mirror the source attributes.
    #[error("INFO should contain all the other attributes in the developer source: {origin}")]
    InconsistentSummary { origin: String, found: Vec<String> },

    /// The source document could not be parsed.
    #[error("failed to parse developer source {origin}: {reason}")]
    Parse { origin: String, reason: String },

    #[error("catalog I/O failure")]
    Io(#[from] std::io::Error),
}
