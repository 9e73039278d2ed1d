//! Validated developer record
use serde::Serialize;
use std::fmt;

/// A validated, immutable developer record.
///
/// Constructed only by [`crate::validate`]; fields are read through the
/// accessors and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeveloperRecord {
    pub(crate) user_name: String,
    pub(crate) name: String,
    pub(crate) position: String,
    pub(crate) email: String,
    pub(crate) site: String,
    pub(crate) url: String,
}

impl DeveloperRecord {
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    /// Personal web page. May be empty.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Case-insensitive substring match against user name and name.
    pub fn matches(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.user_name.to_lowercase().contains(&keyword)
            || self.name.to_lowercase().contains(&keyword)
    }
}

impl fmt::Display for DeveloperRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User Name: {}", self.user_name)?;
        writeln!(f, "Name     : {}", self.name)?;
        writeln!(f, "Position : {}", self.position)?;
        writeln!(f, "E-mail   : {}", self.email)?;
        writeln!(f, "Site     : {}", self.site)?;
        write!(f, "URL      : {}", self.url)
    }
}
