use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

lazy_static! {
    static ref VIEW_ID: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").unwrap();
}

/// Identifier of a view, usable as a location anchor (`#about`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ViewId(String);

impl ViewId {
    pub fn parse(id: &str) -> Result<Self> {
        if VIEW_ID.is_match(id) {
            Ok(ViewId(id.to_string()))
        } else {
            Err(Error::InvalidViewId(id.to_string()))
        }
    }

    /// Strips a leading `#` from a location anchor
    pub fn from_anchor(anchor: &str) -> Result<Self> {
        Self::parse(anchor.strip_prefix('#').unwrap_or(anchor))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn anchor(&self) -> String {
        format!("#{}", self.0)
    }
}

impl TryFrom<String> for ViewId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        ViewId::parse(&value)
    }
}

impl From<ViewId> for String {
    fn from(val: ViewId) -> Self {
        val.0
    }
}

impl PartialEq<str> for ViewId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ViewId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub id: ViewId,
    pub title: String,
    pub ordinal: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_anchor_like_ids() {
        assert!(ViewId::parse("home").is_ok());
        assert!(ViewId::parse("about-me").is_ok());
        assert!(ViewId::parse("Section_2").is_ok());
    }

    #[test]
    fn parse_rejects_malformed_ids() {
        for id in ["", "2fast", "#home", "about me", "skills!"] {
            assert!(
                matches!(ViewId::parse(id), Err(Error::InvalidViewId(_))),
                "{id} should be rejected"
            );
        }
    }

    #[test]
    fn anchor_prefix_is_stripped() {
        let id = ViewId::from_anchor("#skills").unwrap();

        assert_eq!(id, "skills");
        assert_eq!(id.anchor(), "#skills");
    }

    #[test]
    fn deserialize_validates() {
        let ok: std::result::Result<ViewId, _> = serde_json::from_str("\"contact\"");
        let bad: std::result::Result<ViewId, _> = serde_json::from_str("\"no spaces\"");

        assert_eq!(ok.unwrap(), "contact");
        assert!(bad.is_err());
    }
}
