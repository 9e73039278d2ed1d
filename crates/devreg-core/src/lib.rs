//! Devreg Core: record model, attribute enumeration, and validation
//!
//! Turns a loosely-typed developer source document into a validated,
//! immutable `DeveloperRecord`.

pub mod attribute;
pub mod error;
pub mod record;
pub mod source;
pub mod validator;

pub use attribute::Attribute;
pub use error::RegistryError;
pub use record::DeveloperRecord;
pub use source::RawSource;
pub use validator::validate;

/// Version of the devreg engine
pub const DEVREG_VERSION: &str = "1.0.0";
