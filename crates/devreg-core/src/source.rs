//! Loose developer source document
use crate::attribute::Attribute;
use serde::Deserialize;
use std::collections::BTreeMap;

/// A developer source as declared on disk, before validation.
///
/// Every field is optional so absence and emptiness stay distinguishable
/// for the validator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSource {
    /// Canonical identifier of the document this source was loaded from.
    /// Filled by the loader; not part of the on-disk format.
    #[serde(skip)]
    pub origin: String,

    #[serde(rename = "USERNAME")]
    pub user_name: Option<String>,

    #[serde(rename = "NAME")]
    pub name: Option<String>,

    #[serde(rename = "POSITION")]
    pub position: Option<String>,

    #[serde(rename = "EMAIL")]
    pub email: Option<String>,

    #[serde(rename = "SITE")]
    pub site: Option<String>,

    #[serde(rename = "URL")]
    pub url: Option<String>,

    /// Redundant summary map mirroring five of the six attributes.
    /// SITE is intentionally excluded from the expected key set.
    #[serde(rename = "INFO")]
    pub info: Option<BTreeMap<String, String>>,
}

impl RawSource {
    /// Look up an attribute value by its typed name.
    pub fn attribute(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::UserName => self.user_name.as_deref(),
            Attribute::Name => self.name.as_deref(),
            Attribute::Position => self.position.as_deref(),
            Attribute::Email => self.email.as_deref(),
            Attribute::Site => self.site.as_deref(),
            Attribute::Url => self.url.as_deref(),
        }
    }
}
