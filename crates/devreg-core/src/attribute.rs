//! Developer source attributes
use std::fmt;

/// The named attributes a developer source declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    UserName,
    Name,
    Position,
    Email,
    Site,
    Url,
}

impl Attribute {
    /// All attributes, in declaration order.
    pub const ALL: [Attribute; 6] = [
        Attribute::UserName,
        Attribute::Name,
        Attribute::Position,
        Attribute::Email,
        Attribute::Site,
        Attribute::Url,
    ];

    /// The on-disk key of this attribute in a source document.
    pub fn key(self) -> &'static str {
        match self {
            Attribute::UserName => "USERNAME",
            Attribute::Name => "NAME",
            Attribute::Position => "POSITION",
            Attribute::Email => "EMAIL",
            Attribute::Site => "SITE",
            Attribute::Url => "URL",
        }
    }

    /// Whether the attribute must be non-empty. Only URL may be empty.
    pub fn is_required(self) -> bool {
        !matches!(self, Attribute::Url)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_keys() {
        assert_eq!(Attribute::UserName.key(), "USERNAME");
        assert_eq!(Attribute::Url.key(), "URL");
        assert_eq!(Attribute::ALL.len(), 6);
    }

    #[test]
    fn test_only_url_is_optional() {
        for attribute in Attribute::ALL {
            assert_eq!(attribute.is_required(), attribute != Attribute::Url);
        }
    }
}
