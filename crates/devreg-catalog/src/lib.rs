//! Devreg Catalog: source discovery and the registry facade
//!
//! [`Catalog`] enumerates the developer sources declared in a configured
//! directory; [`Registry`] resolves loose identifiers against it, loads the
//! matching document, and validates it into a record.

pub mod catalog;
pub mod registry;

pub use catalog::{Catalog, LIB_SUFFIX, SOURCE_EXTENSION, TEST_SUFFIX};
pub use registry::Registry;
